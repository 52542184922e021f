//! Service clients
//!
//! Each client turns a typed request into a wrapped transport call and,
//! for list/search methods, hands back an [`AsyncPager`] that keeps issuing
//! continuation calls through the same wrapping.
//!
//! # Call pipeline
//!
//! 1. Resolve retry/timeout: [`CallOptions`], then [`ClientConfig`]
//!    per-method overrides, then the method's built-in defaults
//! 2. Build metadata: configured entries, caller entries, routing header,
//!    client info header, user agent
//! 3. Wrap a [`TypedRpc`] in a [`WrappedMethod`]
//! 4. Issue the first call; paged methods return a pager holding the
//!    wrapped method, request, first response, and metadata

mod applications;
mod companies;
mod jobs;
pub mod methods;
mod options;
mod profiles;
mod tenants;
mod transport;

pub use applications::ApplicationServiceClient;
pub use companies::CompanyServiceClient;
pub use jobs::JobServiceClient;
pub use methods::{MethodDescriptor, Service};
pub use options::{CallOptions, RetrySetting};
pub use profiles::ProfileServiceClient;
pub use tenants::TenantServiceClient;
pub use transport::{Transport, TypedRpc};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::metadata::{api_client_header_value, CallMetadata, API_CLIENT_HEADER, USER_AGENT_HEADER};
use crate::pagination::{AsyncPager, PageRequest, PageResponse};
use crate::retry::WrappedMethod;
use crate::types::ApiVersion;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Machinery shared by every service client
pub struct ServiceClient {
    service: Service,
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    static_metadata: CallMetadata,
}

impl ServiceClient {
    /// Validate `config` and bind `service` to `transport`
    pub fn new(service: Service, transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        if !service.available_in(config.api_version) {
            return Err(Error::unsupported(service.as_str(), config.api_version));
        }
        let static_metadata = config.static_metadata()?;

        Ok(Self {
            service,
            transport,
            config,
            static_metadata,
        })
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn api_version(&self) -> ApiVersion {
        self.config.api_version
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Metadata for one call routed by `routing_value`
    pub(crate) fn call_metadata(
        &self,
        method: &MethodDescriptor,
        routing_value: &str,
        options: &CallOptions,
    ) -> Result<CallMetadata> {
        if routing_value.is_empty() {
            return Err(Error::invalid_argument(format!(
                "{}: `{}` must not be empty",
                method.name, method.routing_field
            )));
        }

        let mut metadata = self.static_metadata.clone();
        metadata.extend(&options.metadata);
        metadata.push_routing(&[(method.routing_field, routing_value)])?;
        metadata.push(API_CLIENT_HEADER, api_client_header_value())?;
        if let Some(agent) = &self.config.user_agent {
            metadata.push(USER_AGENT_HEADER, agent.as_str())?;
        }
        Ok(metadata)
    }

    /// Transport call for `method` with retry and timeout applied
    pub(crate) fn wrap<Req, Resp>(
        &self,
        method: &MethodDescriptor,
        options: &CallOptions,
    ) -> WrappedMethod<Req, Resp>
    where
        Req: Serialize + Clone + Send + 'static,
        Resp: DeserializeOwned + Send + 'static,
    {
        let rpc = TypedRpc::<Req, Resp>::new(
            Arc::clone(&self.transport),
            method.path(self.config.api_version),
        );
        WrappedMethod::new(rpc.path().to_string(), Arc::new(rpc))
            .with_retry(options.resolve_retry(method, &self.config))
            .with_timeout(Some(options.resolve_timeout(method, &self.config)))
    }

    /// Single wrapped call
    pub(crate) async fn unary<Req, Resp>(
        &self,
        method: &MethodDescriptor,
        request: Req,
        routing_value: &str,
        options: CallOptions,
    ) -> Result<Resp>
    where
        Req: Serialize + Clone + Send + 'static,
        Resp: DeserializeOwned + Send + 'static,
    {
        let metadata = self.call_metadata(method, routing_value, &options)?;
        self.wrap::<Req, Resp>(method, &options)
            .call(request, metadata)
            .await
    }

    /// First wrapped call, returned as a pager over the remaining pages
    pub(crate) async fn paged<Req, Resp>(
        &self,
        method: &MethodDescriptor,
        request: Req,
        routing_value: &str,
        options: CallOptions,
    ) -> Result<AsyncPager<Req, Resp>>
    where
        Req: PageRequest + Serialize + Send + 'static,
        Resp: PageResponse + DeserializeOwned + Send + 'static,
    {
        let metadata = self.call_metadata(method, routing_value, &options)?;
        let wrapped = Arc::new(self.wrap::<Req, Resp>(method, &options));

        let response = wrapped.call(request.clone(), metadata.clone()).await?;
        debug!(
            method = method.name,
            items = response.items().len(),
            more = !response.next_page_token().is_empty(),
            "Fetched first page"
        );

        Ok(AsyncPager::new(wrapped, request, response, metadata))
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.service)
            .field("api_version", &self.config.api_version)
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}
