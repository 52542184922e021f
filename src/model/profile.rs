//! Profile messages: `ListProfiles`, `SearchProfiles` (v4beta1 only)

use super::{FieldMask, RequestMetadata, ResponseMetadata, SpellingCorrection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub external_id: String,
    pub source: String,
    pub uri: String,
    pub group_id: String,
    pub person_names: Vec<PersonName>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonName {
    pub formatted_name: String,
    pub preferred_name: String,
}

// ============================================================================
// ListProfiles
// ============================================================================

/// Request for `ListProfiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProfilesRequest {
    /// Tenant resource name
    pub parent: String,
    pub filter: String,
    pub page_token: String,
    pub page_size: i32,
    /// Fields to populate on returned profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_mask: Option<FieldMask>,
}

impl ListProfilesRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Restrict the populated fields
    #[must_use]
    pub fn with_read_mask(mut self, mask: FieldMask) -> Self {
        self.read_mask = Some(mask);
        self
    }
}

/// Response for `ListProfiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProfilesResponse {
    pub profiles: Vec<Profile>,
    pub next_page_token: String,
}

paged!(ListProfilesRequest, ListProfilesResponse, profiles, Profile);

// ============================================================================
// SearchProfiles
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileQuery {
    pub query: String,
    pub application_job_filters: Vec<String>,
    pub custom_attribute_filter: String,
}

/// Request for `SearchProfiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchProfilesRequest {
    pub parent: String,
    pub request_metadata: RequestMetadata,
    pub profile_query: ProfileQuery,
    pub page_size: i32,
    pub page_token: String,
    pub offset: i32,
    pub disable_spell_check: bool,
    pub order_by: String,
    pub case_sensitive_sort: bool,
    pub result_set_id: String,
    pub strict_keywords_search: bool,
}

impl SearchProfilesRequest {
    pub fn new(parent: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            profile_query: ProfileQuery {
                query: query.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Profiles of one candidate grouped under a summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizedProfile {
    pub profiles: Vec<Profile>,
    pub summary: Option<Profile>,
}

/// Response for `SearchProfiles`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchProfilesResponse {
    /// Int64 values travel as JSON strings
    #[serde(with = "int64_string")]
    pub estimated_total_size: i64,
    pub spell_correction: Option<SpellingCorrection>,
    pub metadata: Option<ResponseMetadata>,
    pub next_page_token: String,
    pub summarized_profiles: Vec<SummarizedProfile>,
    pub result_set_id: String,
}

paged!(
    SearchProfilesRequest,
    SearchProfilesResponse,
    summarized_profiles,
    SummarizedProfile
);

mod int64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
