//! `ProfileService` client (v4beta1 only)

use super::methods::{LIST_PROFILES, SEARCH_PROFILES};
use super::{CallOptions, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    ListProfilesRequest, ListProfilesResponse, SearchProfilesRequest, SearchProfilesResponse,
};
use crate::pagination::AsyncPager;
use std::sync::Arc;

/// Client for candidate profiles
///
/// Construction fails unless the config targets `v4beta1`.
#[derive(Debug, Clone)]
pub struct ProfileServiceClient {
    inner: Arc<ServiceClient>,
}

impl ProfileServiceClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let inner = ServiceClient::new(Service::ProfileService, transport, config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// List profiles, fetching further pages on demand
    pub async fn list_profiles(
        &self,
        request: ListProfilesRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<ListProfilesRequest, ListProfilesResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&LIST_PROFILES, request, &parent, options)
            .await
    }

    /// List profiles of the tenant `parent` matching `filter`
    pub async fn list_profiles_in(
        &self,
        parent: impl Into<String>,
        filter: impl Into<String>,
        options: CallOptions,
    ) -> Result<AsyncPager<ListProfilesRequest, ListProfilesResponse>> {
        let request = ListProfilesRequest {
            filter: filter.into(),
            ..ListProfilesRequest::new(parent)
        };
        self.list_profiles(request, options).await
    }

    /// Search profiles; items are summarized profile groups
    pub async fn search_profiles(
        &self,
        request: SearchProfilesRequest,
        options: CallOptions,
    ) -> Result<AsyncPager<SearchProfilesRequest, SearchProfilesResponse>> {
        let parent = request.parent.clone();
        self.inner
            .paged(&SEARCH_PROFILES, request, &parent, options)
            .await
    }
}
