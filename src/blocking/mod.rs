//! Blocking clients
//!
//! Same calls as [`crate::client`], for callers without an async runtime.
//! Each client owns a current-thread tokio runtime and drives the wrapped
//! method on it, so retry and timeout behave exactly as in the async
//! clients. Pagers returned here block the calling thread on continuation
//! calls.
//!
//! Blocking clients must not be used from inside an async context.

mod clients;

pub use clients::{
    BlockingApplicationServiceClient, BlockingCompanyServiceClient, BlockingJobServiceClient,
    BlockingProfileServiceClient, BlockingTenantServiceClient,
};

use crate::client::{CallOptions, MethodDescriptor, Service, ServiceClient, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::metadata::CallMetadata;
use crate::pagination::{PageRequest, PageResponse, Pager};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Service client plus the runtime that drives it
struct BlockingCore {
    service: ServiceClient,
    runtime: Arc<Runtime>,
}

impl BlockingCore {
    fn new(service: Service, transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let service = ServiceClient::new(service, transport, config)?;
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            service,
            runtime: Arc::new(runtime),
        })
    }

    fn unary<Req, Resp>(
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
        self.runtime
            .block_on(self.service.unary(method, request, routing_value, options))
    }

    fn paged<Req, Resp>(
        &self,
        method: &MethodDescriptor,
        request: Req,
        routing_value: &str,
        options: CallOptions,
    ) -> Result<Pager<Req, Resp>>
    where
        Req: PageRequest + Serialize + Send + 'static,
        Resp: PageResponse + DeserializeOwned + Send + 'static,
    {
        let metadata = self.service.call_metadata(method, routing_value, &options)?;
        let wrapped = Arc::new(self.service.wrap::<Req, Resp>(method, &options));
        let response = self
            .runtime
            .block_on(wrapped.call(request.clone(), metadata.clone()))?;

        let runtime = Arc::clone(&self.runtime);
        let invoke = move |request: &Req, metadata: &CallMetadata| {
            runtime.block_on(wrapped.call(request.clone(), metadata.clone()))
        };
        Ok(Pager::from_fn(invoke, request, response, metadata))
    }
}

impl fmt::Debug for BlockingCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingCore")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
