//! Retry and timeout wrapping for one RPC method
//!
//! A [`WrappedMethod`] is the invocation capability handed to pagers: the
//! first call and every continuation call go through the same retry and
//! timeout settings.

use super::policy::RetryPolicy;
use crate::error::{Error, Result};
use crate::metadata::CallMetadata;
use crate::pagination::AsyncInvoke;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// An RPC invocation with retry and per-attempt timeout applied
pub struct WrappedMethod<Req, Resp> {
    name: String,
    inner: Arc<dyn AsyncInvoke<Req, Resp>>,
    retry: Option<RetryPolicy>,
    timeout: Option<Duration>,
}

impl<Req, Resp> WrappedMethod<Req, Resp>
where
    Req: Clone + Send + 'static,
    Resp: Send + 'static,
{
    /// Wrap an invocation with no retry and no timeout
    pub fn new(name: impl Into<String>, inner: Arc<dyn AsyncInvoke<Req, Resp>>) -> Self {
        Self {
            name: name.into(),
            inner,
            retry: None,
            timeout: None,
        }
    }

    /// Set the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: Option<RetryPolicy>) -> Self {
        self.retry = retry;
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry policy in effect
    pub fn retry(&self) -> Option<&RetryPolicy> {
        self.retry.as_ref()
    }

    /// Per-attempt timeout in effect
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Call the method, retrying transient failures per the policy
    pub async fn call(&self, request: Req, metadata: CallMetadata) -> Result<Resp> {
        let Some(policy) = &self.retry else {
            return self.attempt(request, metadata).await;
        };

        let start = Instant::now();
        let mut attempt = 0u32;

        loop {
            let error = match self.attempt(request.clone(), metadata.clone()).await {
                Ok(response) => {
                    debug!(method = %self.name, attempts = attempt + 1, "RPC succeeded");
                    return Ok(response);
                }
                Err(e) if policy.should_retry(&e) => e,
                Err(e) => return Err(e),
            };

            let delay = policy.delay_for(attempt);
            if start.elapsed() + delay >= policy.deadline {
                return Err(Error::RetryExhausted {
                    attempts: attempt + 1,
                    deadline_ms: policy.deadline.as_millis() as u64,
                    source: Box::new(error),
                });
            }

            warn!(
                method = %self.name,
                attempt = attempt + 1,
                error = %error,
                "RPC failed, retrying in {:?}",
                delay
            );
            drop(error);
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn attempt(&self, request: Req, metadata: CallMetadata) -> Result<Resp> {
        let call = self.inner.invoke(request, metadata);
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or_else(|_| {
                    Err(Error::Timeout {
                        timeout_ms: timeout.as_millis() as u64,
                    })
                }),
            None => call.await,
        }
    }
}

impl<Req, Resp> AsyncInvoke<Req, Resp> for WrappedMethod<Req, Resp>
where
    Req: Clone + Send + 'static,
    Resp: Send + 'static,
{
    fn invoke(&self, request: Req, metadata: CallMetadata) -> BoxFuture<'_, Result<Resp>> {
        Box::pin(self.call(request, metadata))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<Req, Resp> std::fmt::Debug for WrappedMethod<Req, Resp> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrappedMethod")
            .field("name", &self.name)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
