//! `CompanyService` client

use super::methods::LIST_COMPANIES;
use super::{CallOptions, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{ListCompaniesRequest, ListCompaniesResponse};
use crate::pagination::AsyncPager;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CompanyServiceClient {
    inner: Arc<ServiceClient>,
}

impl CompanyServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let inner = ServiceClient::new(Service::CompanyService, transport, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// List companies, fetching further pages on demand
    pub async fn list_companies(
        &self,
        request: ListCompaniesRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<ListCompaniesRequest, ListCompaniesResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&LIST_COMPANIES, request, &parent, options)
            .await
    }

    pub async fn list_companies_in(
        &self,
        parent: impl Into<String>,
        options: CallOptions,
    ) -> Result<AsyncPager<ListCompaniesRequest, ListCompaniesResponse>> {
        self.list_companies(ListCompaniesRequest::new(parent), options)
            .await
    }
}
