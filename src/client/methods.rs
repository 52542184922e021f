//! Method descriptors
//!
//! Static facts about every RPC: which service owns it, which request
//! field routes it, and its default retry/timeout settings.

use crate::retry::RetryPolicy;
use crate::types::ApiVersion;
use std::fmt;
use std::time::Duration;

/// Default per-attempt timeout for every method
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Talent services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    JobService,
    ApplicationService,
    CompanyService,
    TenantService,
    ProfileService,
}

impl Service {
    /// Service name as it appears in method paths
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobService => "JobService",
            Self::ApplicationService => "ApplicationService",
            Self::CompanyService => "CompanyService",
            Self::TenantService => "TenantService",
            Self::ProfileService => "ProfileService",
        }
    }

    /// Check if the service exists in `version`
    pub fn available_in(self, version: ApiVersion) -> bool {
        match self {
            Self::ApplicationService | Self::ProfileService => version == ApiVersion::V4beta1,
            Self::JobService | Self::CompanyService | Self::TenantService => true,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one RPC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub service: Service,
    /// RPC name, also the key for per-method config overrides
    pub name: &'static str,
    /// Request field copied into the routing header
    pub routing_field: &'static str,
    /// Idempotent methods retry transient failures by default
    pub idempotent: bool,
}

impl MethodDescriptor {
    /// Fully qualified path, e.g. `/google.cloud.talent.v4.JobService/ListJobs`
    pub fn path(&self, version: ApiVersion) -> String {
        format!("/{}.{}/{}", version.package(), self.service, self.name)
    }

    /// Retry schedule used when nothing overrides it
    pub fn default_retry(&self) -> Option<RetryPolicy> {
        self.idempotent.then(RetryPolicy::default)
    }

    /// Per-attempt timeout used when nothing overrides it
    pub fn default_timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }
}

pub const LIST_JOBS: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "ListJobs",
    routing_field: "parent",
    idempotent: true,
};

pub const GET_JOB: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "GetJob",
    routing_field: "name",
    idempotent: true,
};

pub const CREATE_JOB: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "CreateJob",
    routing_field: "parent",
    idempotent: false,
};

pub const UPDATE_JOB: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "UpdateJob",
    routing_field: "job.name",
    idempotent: false,
};

pub const DELETE_JOB: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "DeleteJob",
    routing_field: "name",
    idempotent: true,
};

pub const SEARCH_JOBS: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "SearchJobs",
    routing_field: "parent",
    idempotent: false,
};

pub const SEARCH_JOBS_FOR_ALERT: MethodDescriptor = MethodDescriptor {
    service: Service::JobService,
    name: "SearchJobsForAlert",
    routing_field: "parent",
    idempotent: false,
};

pub const LIST_APPLICATIONS: MethodDescriptor = MethodDescriptor {
    service: Service::ApplicationService,
    name: "ListApplications",
    routing_field: "parent",
    idempotent: true,
};

pub const CREATE_APPLICATION: MethodDescriptor = MethodDescriptor {
    service: Service::ApplicationService,
    name: "CreateApplication",
    routing_field: "parent",
    idempotent: false,
};

pub const GET_APPLICATION: MethodDescriptor = MethodDescriptor {
    service: Service::ApplicationService,
    name: "GetApplication",
    routing_field: "name",
    idempotent: true,
};

pub const UPDATE_APPLICATION: MethodDescriptor = MethodDescriptor {
    service: Service::ApplicationService,
    name: "UpdateApplication",
    routing_field: "application.name",
    idempotent: false,
};

pub const DELETE_APPLICATION: MethodDescriptor = MethodDescriptor {
    service: Service::ApplicationService,
    name: "DeleteApplication",
    routing_field: "name",
    idempotent: true,
};

pub const LIST_COMPANIES: MethodDescriptor = MethodDescriptor {
    service: Service::CompanyService,
    name: "ListCompanies",
    routing_field: "parent",
    idempotent: true,
};

pub const LIST_TENANTS: MethodDescriptor = MethodDescriptor {
    service: Service::TenantService,
    name: "ListTenants",
    routing_field: "parent",
    idempotent: true,
};

pub const LIST_PROFILES: MethodDescriptor = MethodDescriptor {
    service: Service::ProfileService,
    name: "ListProfiles",
    routing_field: "parent",
    idempotent: true,
};

pub const SEARCH_PROFILES: MethodDescriptor = MethodDescriptor {
    service: Service::ProfileService,
    name: "SearchProfiles",
    routing_field: "parent",
    idempotent: false,
};
