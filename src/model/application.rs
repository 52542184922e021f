//! Application messages and resource names (v4beta1 only)

use super::{FieldMask, ResponseMetadata};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Regex for application resource names
static APPLICATION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^projects/(?P<project>.+?)/tenants/(?P<tenant>.+?)/profiles/(?P<profile>.+?)/applications/(?P<application>.+?)$",
    )
    .unwrap()
});

/// Segments of `projects/{project}/tenants/{tenant}/profiles/{profile}/applications/{application}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationName {
    pub project: String,
    pub tenant: String,
    pub profile: String,
    pub application: String,
}

impl ApplicationName {
    pub fn new(
        project: impl Into<String>,
        tenant: impl Into<String>,
        profile: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            tenant: tenant.into(),
            profile: profile.into(),
            application: application.into(),
        }
    }

    /// Split a resource name into its segments
    ///
    /// Returns `None` if `path` is not an application resource name.
    pub fn parse(path: &str) -> Option<Self> {
        let captures = APPLICATION_NAME_REGEX.captures(path)?;
        Some(Self::new(
            &captures["project"],
            &captures["tenant"],
            &captures["profile"],
            &captures["application"],
        ))
    }
}

impl fmt::Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/tenants/{}/profiles/{}/applications/{}",
            self.project, self.tenant, self.profile, self.application
        )
    }
}

/// Fully qualified application resource name
pub fn application_path(project: &str, tenant: &str, profile: &str, application: &str) -> String {
    ApplicationName::new(project, tenant, profile, application).to_string()
}

/// Segments of an application resource name, if `path` is one
pub fn parse_application_path(path: &str) -> Option<ApplicationName> {
    ApplicationName::parse(path)
}

/// A candidate's application to a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub name: String,
    pub external_id: String,
    pub profile: String,
    pub job: String,
    pub company: String,
    pub state: ApplicationState,
    pub outcome_notes: String,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

/// Stage of an application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    #[default]
    ApplicationStateUnspecified,
    InProgress,
    CandidateWithdrew,
    EmployerWithdrew,
    Completed,
    Closed,
}

/// Request for `CreateApplication`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApplicationRequest {
    /// Profile resource name
    pub parent: String,
    pub application: Application,
}

impl CreateApplicationRequest {
    pub fn new(parent: impl Into<String>, application: Application) -> Self {
        Self {
            parent: parent.into(),
            application,
        }
    }
}

/// Request for `GetApplication`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetApplicationRequest {
    pub name: String,
}

impl GetApplicationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request for `UpdateApplication`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateApplicationRequest {
    pub application: Application,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateApplicationRequest {
    pub fn new(application: Application) -> Self {
        Self {
            application,
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

/// Request for `DeleteApplication`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteApplicationRequest {
    pub name: String,
}

impl DeleteApplicationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request for `ListApplications`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListApplicationsRequest {
    /// Profile resource name
    pub parent: String,
    pub page_token: String,
    pub page_size: i32,
}

impl ListApplicationsRequest {
    /// List applications of the profile `parent`
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }
}

/// Response for `ListApplications`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListApplicationsResponse {
    pub applications: Vec<Application>,
    pub next_page_token: String,
    pub metadata: Option<ResponseMetadata>,
}

paged!(
    ListApplicationsRequest,
    ListApplicationsResponse,
    applications,
    Application
);
