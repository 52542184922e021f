//! Blocking service clients

use super::BlockingCore;
use crate::client::methods::{
    CREATE_APPLICATION, CREATE_JOB, DELETE_APPLICATION, DELETE_JOB, GET_APPLICATION, GET_JOB,
    LIST_APPLICATIONS, LIST_COMPANIES, LIST_JOBS, LIST_PROFILES, LIST_TENANTS, SEARCH_JOBS,
    SEARCH_JOBS_FOR_ALERT, SEARCH_PROFILES, UPDATE_APPLICATION, UPDATE_JOB,
};
use crate::client::{CallOptions, Service, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    Application, CreateApplicationRequest, CreateJobRequest, DeleteApplicationRequest,
    DeleteJobRequest, Empty, GetApplicationRequest, GetJobRequest, Job, ListApplicationsRequest, ListApplicationsResponse, ListCompaniesRequest,
    ListCompaniesResponse, ListJobsRequest, ListJobsResponse, ListProfilesRequest,
    ListProfilesResponse, ListTenantsRequest, ListTenantsResponse, SearchJobsRequest,
    SearchJobsResponse, SearchProfilesRequest, SearchProfilesResponse, UpdateApplicationRequest,
    UpdateJobRequest,
};
use crate::pagination::Pager;
use std::sync::Arc;

// ============================================================================
// JobService
// ============================================================================

/// Blocking client for job listing, lookup, search and mutation
///
/// ```ignore
/// let client = BlockingJobServiceClient::new(transport, ClientConfig::default())?;
/// for job in client.list_jobs_in("projects/p/tenants/t", "", CallOptions::default())? {
///     println!("{}", job?.name);
/// }
/// ```
#[derive(Debug)]
pub struct BlockingJobServiceClient {
    core: BlockingCore,
}

impl BlockingJobServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: BlockingCore::new(Service::JobService, transport, config)?,
        })
    }

    pub fn list_jobs(
        &self,
        request: ListJobsRequest,
        options: CallOptions,
    ) -> Result<Pager<ListJobsRequest, ListJobsResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&LIST_JOBS, request, &parent, options)
    }

    pub fn list_jobs_in(
        &self,
        parent: impl Into<String>,
        filter: impl Into<String>,
        options: CallOptions,
    ) -> Result<Pager<ListJobsRequest, ListJobsResponse>> {
        self.list_jobs(ListJobsRequest::new(parent, filter), options)
    }

    pub fn search_jobs(
        &self,
        request: SearchJobsRequest,
        options: CallOptions,
    ) -> Result<Pager<SearchJobsRequest, SearchJobsResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&SEARCH_JOBS, request, &parent, options)
    }

    pub fn search_jobs_for_alert(
        &self,
        request: SearchJobsRequest,
        options: CallOptions,
    ) -> Result<Pager<SearchJobsRequest, SearchJobsResponse>> {
        let parent = request.parent.clone();
        self.core
            .paged(&SEARCH_JOBS_FOR_ALERT, request, &parent, options)
    }

    pub fn get_job(&self, request: GetJobRequest, options: CallOptions) -> Result<Job> {
        let name = request.name.clone();
        self.core.unary(&GET_JOB, request, &name, options)
    }

    pub fn create_job(&self, request: CreateJobRequest, options: CallOptions) -> Result<Job> {
        let parent = request.parent.clone();
        self.core.unary(&CREATE_JOB, request, &parent, options)
    }

    pub fn update_job(&self, request: UpdateJobRequest, options: CallOptions) -> Result<Job> {
        let name = request.job.name.clone();
        self.core.unary(&UPDATE_JOB, request, &name, options)
    }

    pub fn delete_job(&self, request: DeleteJobRequest, options: CallOptions) -> Result<()> {
        let name = request.name.clone();
        let Empty {} = self.core.unary(&DELETE_JOB, request, &name, options)?;
        Ok(())
    }
}

// ============================================================================
// ApplicationService
// ============================================================================

/// Blocking client for applications (v4beta1 only)
#[derive(Debug)]
pub struct BlockingApplicationServiceClient {
    core: BlockingCore,
}

impl BlockingApplicationServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: BlockingCore::new(Service::ApplicationService, transport, config)?,
        })
    }

    pub fn list_applications(
        &self,
        request: ListApplicationsRequest,
        options: CallOptions,
    ) -> Result<Pager<ListApplicationsRequest, ListApplicationsResponse>> {
        let parent = request.parent.clone();
        self.core
            .paged(&LIST_APPLICATIONS, request, &parent, options)
    }

    pub fn list_applications_in(
        &self,
        parent: impl Into<String>,
        options: CallOptions,
    ) -> Result<Pager<ListApplicationsRequest, ListApplicationsResponse>> {
        self.list_applications(ListApplicationsRequest::new(parent), options)
    }

    pub fn create_application(
        &self,
        request: CreateApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let parent = request.parent.clone();
        self.core
            .unary(&CREATE_APPLICATION, request, &parent, options)
    }

    pub fn get_application(
        &self,
        request: GetApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let name = request.name.clone();
        self.core.unary(&GET_APPLICATION, request, &name, options)
    }

    pub fn update_application(
        &self,
        request: UpdateApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let name = request.application.name.clone();
        self.core
            .unary(&UPDATE_APPLICATION, request, &name, options)
    }

    pub fn delete_application(
        &self,
        request: DeleteApplicationRequest,
        options: CallOptions,
    ) -> Result<()> {
        let name = request.name.clone();
        let Empty {} = self
            .core
            .unary(&DELETE_APPLICATION, request, &name, options)?;
        Ok(())
    }
}

// ============================================================================
// CompanyService / TenantService
// ============================================================================

#[derive(Debug)]
pub struct BlockingCompanyServiceClient {
    core: BlockingCore,
}

impl BlockingCompanyServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: BlockingCore::new(Service::CompanyService, transport, config)?,
        })
    }

    pub fn list_companies(
        &self,
        request: ListCompaniesRequest,
        options: CallOptions,
    ) -> Result<Pager<ListCompaniesRequest, ListCompaniesResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&LIST_COMPANIES, request, &parent, options)
    }
}

#[derive(Debug)]
pub struct BlockingTenantServiceClient {
    core: BlockingCore,
}

impl BlockingTenantServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: BlockingCore::new(Service::TenantService, transport, config)?,
        })
    }

    pub fn list_tenants(
        &self,
        request: ListTenantsRequest,
        options: CallOptions,
    ) -> Result<Pager<ListTenantsRequest, ListTenantsResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&LIST_TENANTS, request, &parent, options)
    }
}

// ============================================================================
// ProfileService
// ============================================================================

/// Blocking client for profiles (v4beta1 only)
#[derive(Debug)]
pub struct BlockingProfileServiceClient {
    core: BlockingCore,
}

impl BlockingProfileServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: BlockingCore::new(Service::ProfileService, transport, config)?,
        })
    }

    pub fn list_profiles(
        &self,
        request: ListProfilesRequest,
        options: CallOptions,
    ) -> Result<Pager<ListProfilesRequest, ListProfilesResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&LIST_PROFILES, request, &parent, options)
    }

    pub fn search_profiles(
        &self,
        request: SearchProfilesRequest,
        options: CallOptions,
    ) -> Result<Pager<SearchProfilesRequest, SearchProfilesResponse>> {
        let parent = request.parent.clone();
        self.core.paged(&SEARCH_PROFILES, request, &parent, options)
    }
}
