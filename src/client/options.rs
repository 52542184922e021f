//! Per-call options

use super::methods::MethodDescriptor;
use crate::config::ClientConfig;
use crate::metadata::CallMetadata;
use crate::retry::RetryPolicy;
use std::time::Duration;

/// Retry choice for a single call
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RetrySetting {
    /// Use the configured or built-in default for the method
    #[default]
    Default,
    /// Make exactly one attempt
    Disabled,
    /// Use this schedule
    Policy(RetryPolicy),
}

/// Options for one client call
///
/// Applied to the first request and, unchanged, to every continuation call
/// of the returned pager.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub retry: RetrySetting,
    /// Per-attempt timeout; `None` falls back to the method's setting
    pub timeout: Option<Duration>,
    /// Extra metadata sent ahead of the routing header
    pub metadata: CallMetadata,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retry with this schedule
    #[must_use]
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = RetrySetting::Policy(policy);
        self
    }

    /// Make a single attempt
    #[must_use]
    pub fn without_retry(mut self) -> Self {
        self.retry = RetrySetting::Disabled;
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add caller metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: CallMetadata) -> Self {
        self.metadata.extend(&metadata);
        self
    }

    /// Effective retry schedule: call options, then config, then method default
    pub(crate) fn resolve_retry(
        &self,
        method: &MethodDescriptor,
        config: &ClientConfig,
    ) -> Option<RetryPolicy> {
        match &self.retry {
            RetrySetting::Disabled => None,
            RetrySetting::Policy(policy) => Some(policy.clone()),
            RetrySetting::Default => match config.method(method.name) {
                Some(overrides) if overrides.disable_retry => None,
                Some(overrides) => overrides
                    .retry
                    .as_ref()
                    .map(RetryPolicy::from)
                    .or_else(|| method.default_retry()),
                None => method.default_retry(),
            },
        }
    }

    /// Effective per-attempt timeout, resolved in the same order
    pub(crate) fn resolve_timeout(
        &self,
        method: &MethodDescriptor,
        config: &ClientConfig,
    ) -> Duration {
        self.timeout
            .or_else(|| config.method(method.name).and_then(|m| m.timeout_duration()))
            .unwrap_or_else(|| method.default_timeout())
    }
}
