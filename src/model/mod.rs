//! Talent API message types
//!
//! Request and response value objects for the paged RPCs and the
//! single-resource job and application calls.
//! Every message uses the proto3 JSON mapping: `camelCase` field names,
//! absent fields take their default value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Implement the pagination traits for one `(request, response, item)` family
macro_rules! paged {
    ($request:ty, $response:ty, $field:ident, $item:ty) => {
        impl $crate::pagination::PageRequest for $request {
            fn page_token(&self) -> &str {
                &self.page_token
            }

            fn set_page_token(&mut self, token: String) {
                self.page_token = token;
            }
        }

        impl $crate::pagination::PageResponse for $response {
            type Item = $item;

            fn items(&self) -> &[$item] {
                &self.$field
            }

            fn next_page_token(&self) -> &str {
                &self.next_page_token
            }
        }
    };
}

mod application;
mod company;
mod job;
mod profile;
mod tenant;

pub use application::{
    application_path, parse_application_path, Application, ApplicationName, ApplicationState,
    CreateApplicationRequest, DeleteApplicationRequest, GetApplicationRequest,
    ListApplicationsRequest, ListApplicationsResponse, UpdateApplicationRequest,
};
pub use company::{Company, CompanySize, ListCompaniesRequest, ListCompaniesResponse};
pub use job::{
    CreateJobRequest, DeleteJobRequest, EmploymentType, GetJobRequest, Job, JobQuery, JobView, ListJobsRequest, ListJobsResponse,
    MatchingJob, SearchJobsRequest, SearchJobsResponse, SearchMode, UpdateJobRequest,
};
pub use profile::{
    ListProfilesRequest, ListProfilesResponse, PersonName, Profile, ProfileQuery,
    SearchProfilesRequest, SearchProfilesResponse, SummarizedProfile,
};
pub use tenant::{ListTenantsRequest, ListTenantsResponse, Tenant};

// ============================================================================
// Shared Messages
// ============================================================================

/// Reply of calls that return nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Caller identification sent with search requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestMetadata {
    pub domain: String,
    pub session_id: String,
    pub user_id: String,
    pub allow_missing_ids: bool,
}

/// Server side diagnostics attached to responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseMetadata {
    pub request_id: String,
}

/// Spell check result for a search query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellingCorrection {
    pub corrected: bool,
    pub corrected_text: String,
    pub corrected_html: String,
}

/// Set of field paths, encoded in JSON as a comma separated string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Create a mask from field paths
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the mask lists no paths
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Serialize for FieldMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.paths.join(","))
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(Self::new(
            joined
                .split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty()),
        ))
    }
}
