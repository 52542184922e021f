//! `TenantService` client

use super::methods::LIST_TENANTS;
use super::{CallOptions, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{ListTenantsRequest, ListTenantsResponse};
use crate::pagination::AsyncPager;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TenantServiceClient {
    inner: Arc<ServiceClient>,
}

impl TenantServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let inner = ServiceClient::new(Service::TenantService, transport, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// List tenants of a project
    pub async fn list_tenants(
        &self,
        request: ListTenantsRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<ListTenantsRequest, ListTenantsResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&LIST_TENANTS, request, &parent, options)
            .await
    }

    /// List tenants of the project `parent` (`projects/{project}`)
    pub async fn list_tenants_in(
        &self,
        parent: impl Into<String>,
        options: CallOptions,
    ) -> Result<AsyncPager<ListTenantsRequest, ListTenantsResponse>> {
        self.list_tenants(ListTenantsRequest::new(parent), options)
            .await
    }
}
