//! Tenant messages: `ListTenants`

use super::ResponseMetadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tenant {
    pub name: String,
    pub external_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTenantsRequest {
    /// Project resource name, `projects/{project}`
    pub parent: String,
    pub page_token: String,
    pub page_size: i32,
}

impl ListTenantsRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTenantsResponse {
    pub tenants: Vec<Tenant>,
    pub next_page_token: String,
    pub metadata: Option<ResponseMetadata>,
}

paged!(ListTenantsRequest, ListTenantsResponse, tenants, Tenant);
