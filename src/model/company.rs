//! Company messages: `ListCompanies`

use super::ResponseMetadata;
use serde::{Deserialize, Serialize};

/// An employer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: String,
    pub display_name: String,
    pub external_id: String,
    pub size: CompanySize,
    pub headquarters_address: String,
    pub website_uri: String,
    pub suspended: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    #[default]
    CompanySizeUnspecified,
    Mini,
    Small,
    Smedium,
    Medium,
    Big,
    Bigger,
    Giant,
}

/// Request for `ListCompanies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCompaniesRequest {
    /// Tenant resource name
    pub parent: String,
    pub page_token: String,
    pub page_size: i32,
    pub require_open_jobs: bool,
}

impl ListCompaniesRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }
}

/// Response for `ListCompanies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCompaniesResponse {
    pub companies: Vec<Company>,
    pub next_page_token: String,
    pub metadata: Option<ResponseMetadata>,
}

paged!(ListCompaniesRequest, ListCompaniesResponse, companies, Company);
