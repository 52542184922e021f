//! Job messages: `ListJobs`, `SearchJobs`, `SearchJobsForAlert`, `GetJob`,
//! and the single-job mutations

use super::{FieldMask, RequestMetadata, ResponseMetadata, SpellingCorrection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    /// Resource name, `projects/{project}/tenants/{tenant}/jobs/{job}`
    pub name: String,
    pub company: String,
    pub requisition_id: String,
    pub title: String,
    pub description: String,
    pub addresses: Vec<String>,
    pub employment_types: Vec<EmploymentType>,
    pub language_code: String,
    pub department: String,
    pub company_display_name: String,
    pub posting_publish_time: Option<DateTime<Utc>>,
    pub posting_expire_time: Option<DateTime<Utc>>,
}

/// Employment type of a job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    #[default]
    EmploymentTypeUnspecified,
    FullTime,
    PartTime,
    Contractor,
    ContractToHire,
    Temporary,
    Intern,
    Volunteer,
    PerDiem,
    FlyInFlyOut,
    OtherEmploymentType,
}

/// How much of each job the server returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobView {
    #[default]
    JobViewUnspecified,
    JobViewIdOnly,
    JobViewMinimal,
    JobViewSmall,
    JobViewFull,
}

// ============================================================================
// GetJob
// ============================================================================

/// Request for `GetJob`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetJobRequest {
    pub name: String,
}

impl GetJobRequest {
    /// Request for the job with this resource name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// CreateJob / UpdateJob / DeleteJob
// ============================================================================

/// Request for `CreateJob`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateJobRequest {
    /// Tenant resource name
    pub parent: String,
    pub job: Job,
}

impl CreateJobRequest {
    pub fn new(parent: impl Into<String>, job: Job) -> Self {
        Self {
            parent: parent.into(),
            job,
        }
    }
}

/// Request for `UpdateJob`
///
/// Without a mask the server replaces every field of `job`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateJobRequest {
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateJobRequest {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            update_mask: None,
        }
    }

    /// Only update the listed fields
    #[must_use]
    pub fn with_update_mask(mut self, mask: FieldMask) -> Self {
        self.update_mask = Some(mask);
        self
    }
}

/// Request for `DeleteJob`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteJobRequest {
    pub name: String,
}

impl DeleteJobRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// ListJobs
// ============================================================================

/// Request for `ListJobs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListJobsRequest {
    /// Tenant resource name
    pub parent: String,
    /// Filter expression, e.g. `companyName = "projects/p/companies/c"`
    pub filter: String,
    pub page_token: String,
    pub page_size: i32,
    pub job_view: JobView,
}

impl ListJobsRequest {
    /// List jobs under `parent` matching `filter`
    pub fn new(parent: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            filter: filter.into(),
            ..Default::default()
        }
    }

    /// Set the page size hint
    #[must_use]
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Response for `ListJobs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub next_page_token: String,
    pub metadata: Option<ResponseMetadata>,
}

paged!(ListJobsRequest, ListJobsResponse, jobs, Job);

// ============================================================================
// SearchJobs / SearchJobsForAlert
// ============================================================================

/// Search flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
    #[default]
    SearchModeUnspecified,
    JobSearch,
    FeaturedJobSearch,
}

/// Query constraints for a job search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobQuery {
    pub query: String,
    pub query_language_code: String,
    pub companies: Vec<String>,
    pub employment_types: Vec<EmploymentType>,
    pub language_codes: Vec<String>,
    pub excluded_jobs: Vec<String>,
    pub disable_spell_check: bool,
}

/// Request for `SearchJobs` and `SearchJobsForAlert`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchJobsRequest {
    pub parent: String,
    pub search_mode: SearchMode,
    pub request_metadata: RequestMetadata,
    pub job_query: JobQuery,
    pub enable_broadening: bool,
    pub job_view: JobView,
    pub offset: i32,
    pub max_page_size: i32,
    pub page_token: String,
    pub order_by: String,
    pub disable_keyword_match: bool,
}

impl SearchJobsRequest {
    /// Search jobs under `parent` with a free text query
    pub fn new(parent: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            search_mode: SearchMode::JobSearch,
            job_query: JobQuery {
                query: query.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Set caller identification
    #[must_use]
    pub fn with_request_metadata(mut self, metadata: RequestMetadata) -> Self {
        self.request_metadata = metadata;
        self
    }
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingJob {
    pub job: Option<Job>,
    pub job_summary: String,
    pub job_title_snippet: String,
    pub search_text_snippet: String,
}

/// Response for `SearchJobs` and `SearchJobsForAlert`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchJobsResponse {
    pub matching_jobs: Vec<MatchingJob>,
    pub next_page_token: String,
    pub estimated_total_size: i32,
    pub total_size: i32,
    pub broadened_query_jobs_count: i32,
    pub spell_correction: Option<SpellingCorrection>,
    pub metadata: Option<ResponseMetadata>,
}

paged!(SearchJobsRequest, SearchJobsResponse, matching_jobs, MatchingJob);
