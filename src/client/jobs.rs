//! `JobService` client

use super::methods::{
    CREATE_JOB, DELETE_JOB, GET_JOB, LIST_JOBS, SEARCH_JOBS, SEARCH_JOBS_FOR_ALERT, UPDATE_JOB,
};
use super::{CallOptions, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    CreateJobRequest, DeleteJobRequest, Empty, GetJobRequest, Job, ListJobsRequest,
    ListJobsResponse, SearchJobsRequest, SearchJobsResponse, UpdateJobRequest,
};
use crate::pagination::AsyncPager;
use crate::types::ApiVersion;
use std::sync::Arc;

/// Client for job listing, lookup, search and mutation
///
/// ```ignore
/// let client = JobServiceClient::new(transport, ClientConfig::default())?;
/// let mut jobs = client
///     .list_jobs_in("projects/p/tenants/t", "status = \"OPEN\"", CallOptions::default())
///     .await?;
/// while let Some(job) = jobs.next_item().await {
///     println!("{}", job?.title);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JobServiceClient {
    inner: Arc<ServiceClient>,
}

impl JobServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let inner = ServiceClient::new(Service::JobService, transport, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    pub fn api_version(&self) -> ApiVersion {
        self.inner.api_version()
    }

    /// List jobs, fetching further pages on demand
    pub async fn list_jobs(
        &self,
        request: ListJobsRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<ListJobsRequest, ListJobsResponse>> {
        let parent = request.parent.clone();
        self.inner.paged(&LIST_JOBS, request, &parent, options).await
    }

    /// List jobs under `parent` matching `filter`
    pub async fn list_jobs_in(
        &self,
        parent: impl Into<String>,
        filter: impl Into<String>,
        options: CallOptions,
    ) -> Result<AsyncPager<ListJobsRequest, ListJobsResponse>> {
        self.list_jobs(ListJobsRequest::new(parent, filter), options)
            .await
    }

    /// Search jobs; pages carry matching jobs plus search metadata
    pub async fn search_jobs(
        &self,
        request: SearchJobsRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<SearchJobsRequest, SearchJobsResponse>> {
        let parent = request.parent.clone();
        self.inner.paged(&SEARCH_JOBS, request, &parent, options).await
    }

    /// Search jobs on behalf of a job alert
    pub async fn search_jobs_for_alert(
        &self,
        request: SearchJobsRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<SearchJobsRequest, SearchJobsResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&SEARCH_JOBS_FOR_ALERT, request, &parent, options)
            .await
    }

    /// Fetch one job
    pub async fn get_job(&self, request: GetJobRequest, options: CallOptions) -> Result<Job> {
        let name = request.name.clone();
        self.inner.unary(&GET_JOB, request, &name, options).await
    }

    /// Fetch one job by resource name
    pub async fn get_job_by_name(
        &self,
        name: impl Into<String>,
        options: CallOptions,
    ) -> Result<Job> {
        self.get_job(GetJobRequest::new(name), options).await
    }

    /// Create a job under the tenant named by `request.parent`
    pub async fn create_job(&self, request: CreateJobRequest, options: CallOptions) -> Result<Job> {
        let parent = request.parent.clone();
        self.inner.unary(&CREATE_JOB, request, &parent, options).await
    }

    /// Create `job` under the tenant `parent`
    pub async fn create_job_in(
        &self,
        parent: impl Into<String>,
        job: Job,
        options: CallOptions,
    ) -> Result<Job> {
        self.create_job(CreateJobRequest::new(parent, job), options)
            .await
    }

    /// Update the job named by `request.job.name`
    pub async fn update_job(&self, request: UpdateJobRequest, options: CallOptions) -> Result<Job> {
        let name = request.job.name.clone();
        self.inner.unary(&UPDATE_JOB, request, &name, options).await
    }

    /// Delete one job
    pub async fn delete_job(&self, request: DeleteJobRequest, options: CallOptions) -> Result<()> {
        let name = request.name.clone();
        let Empty {} = self.inner.unary(&DELETE_JOB, request, &name, options).await?;
        Ok(())
    }

    /// Delete one job by resource name
    pub async fn delete_job_by_name(
        &self,
        name: impl Into<String>,
        options: CallOptions,
    ) -> Result<()> {
        self.delete_job(DeleteJobRequest::new(name), options).await
    }
}
