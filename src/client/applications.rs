//! `ApplicationService` client (v4beta1 only)

use super::methods::{
    CREATE_APPLICATION, DELETE_APPLICATION, GET_APPLICATION, LIST_APPLICATIONS,
    UPDATE_APPLICATION,
};
use super::{CallOptions, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    Application, ApplicationName, CreateApplicationRequest, DeleteApplicationRequest, Empty,
    GetApplicationRequest, ListApplicationsRequest, ListApplicationsResponse,
    UpdateApplicationRequest,
};
use crate::pagination::AsyncPager;
use std::sync::Arc;

/// Client for the applications of a profile
///
/// Construction fails unless the config targets `v4beta1`.
#[derive(Debug, Clone)]
pub struct ApplicationServiceClient {
    inner: Arc<ServiceClient>,
}

impl ApplicationServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let inner = ServiceClient::new(Service::ApplicationService, transport, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Fully qualified application resource name
    pub fn application_path(
        project: &str,
        tenant: &str,
        profile: &str,
        application: &str,
    ) -> String {
        crate::model::application_path(project, tenant, profile, application)
    }

    /// Split an application resource name into its segments
    pub fn parse_application_path(path: &str) -> Option<ApplicationName> {
        ApplicationName::parse(path)
    }

    /// Create an application under the profile named by `request.parent`
    pub async fn create_application(
        &self,
        request: CreateApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let parent = request.parent.clone();
        self.inner
            .unary(&CREATE_APPLICATION, request, &parent, options)
            .await
    }

    /// Create `application` under the profile `parent`
    pub async fn create_application_in(
        &self,
        parent: impl Into<String>,
        application: Application,
        options: CallOptions,
    ) -> Result<Application> {
        self.create_application(CreateApplicationRequest::new(parent, application), options)
            .await
    }

    /// Fetch one application
    pub async fn get_application(
        &self,
        request: GetApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let name = request.name.clone();
        self.inner
            .unary(&GET_APPLICATION, request, &name, options)
            .await
    }

    /// Fetch one application by resource name
    pub async fn get_application_by_name(
        &self,
        name: impl Into<String>,
        options: CallOptions,
    ) -> Result<Application> {
        self.get_application(GetApplicationRequest::new(name), options)
            .await
    }

    /// Update the application named by `request.application.name`
    pub async fn update_application(
        &self,
        request: UpdateApplicationRequest,
        options: CallOptions,
    ) -> Result<Application> {
        let name = request.application.name.clone();
        self.inner
            .unary(&UPDATE_APPLICATION, request, &name, options)
            .await
    }

    /// Delete one application
    pub async fn delete_application(
        &self,
        request: DeleteApplicationRequest,
        options: CallOptions,
    ) -> Result<()> {
        let name = request.name.clone();
        let Empty {} = self
            .inner
            .unary(&DELETE_APPLICATION, request, &name, options)
            .await?;
        Ok(())
    }

    /// Delete one application by resource name
    pub async fn delete_application_by_name(
        &self,
        name: impl Into<String>,
        options: CallOptions,
    ) -> Result<()> {
        self.delete_application(DeleteApplicationRequest::new(name), options)
            .await
    }

    /// List applications, fetching further pages on demand
    pub async fn list_applications(
        &self,
        request: ListApplicationsRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<ListApplicationsRequest, ListApplicationsResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&LIST_APPLICATIONS, request, &parent, options)
            .await
    }

    /// List applications of the profile `parent`
    pub async fn list_applications_in(
        &self,
        parent: impl Into<String>,
        options: CallOptions,
    ) -> Result<AsyncPager<ListApplicationsRequest, ListApplicationsResponse>> {
        self.list_applications(ListApplicationsRequest::new(parent), options)
            .await
    }
}
