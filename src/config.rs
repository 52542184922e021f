//! Client configuration
//!
//! Settings shared by every service client: API version, endpoint, static
//! metadata, and per-method retry/timeout overrides. Usually loaded from
//! YAML:
//!
//! ```yaml
//! api_version: v4beta1
//! endpoint: jobs.googleapis.com:443
//! user_agent: my-app/1.2
//! metadata:
//!   x-goog-user-project: billing-project
//! methods:
//!   ListJobs:
//!     timeout_ms: 10000
//!     retry:
//!       initial_ms: 250
//!       codes: [UNAVAILABLE]
//!   SearchJobs:
//!     disable_retry: true
//! ```

use crate::error::{Code, Error, Result, ResultExt};
use crate::metadata::CallMetadata;
use crate::retry::RetryPolicy;
use crate::types::ApiVersion;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "jobs.googleapis.com:443";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration shared by all service clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API version to target
    pub api_version: ApiVersion,

    /// Service endpoint, `host:port`
    pub endpoint: String,

    /// Optional user agent sent with every call
    pub user_agent: Option<String>,

    /// Metadata sent with every call
    pub metadata: BTreeMap<String, String>,

    /// Per-method overrides keyed by RPC name (e.g. `ListJobs`)
    pub methods: HashMap<String, MethodConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: None,
            metadata: BTreeMap::new(),
            methods: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::invalid_config("endpoint", "must not be empty"));
        }
        self.static_metadata()?;
        for (name, method) in &self.methods {
            method.validate(name)?;
        }
        Ok(())
    }

    /// Override for a method, if configured
    pub fn method(&self, name: &str) -> Option<&MethodConfig> {
        self.methods.get(name)
    }

    /// Configured metadata as call metadata
    pub fn static_metadata(&self) -> Result<CallMetadata> {
        let mut metadata = CallMetadata::new();
        for (key, value) in &self.metadata {
            metadata.push(key.as_str(), value.as_str())?;
        }
        Ok(metadata)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API version
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.config.api_version = version;
        self
    }

    /// Set the endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Add a metadata entry sent with every call
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.metadata.insert(key.into(), value.into());
        self
    }

    /// Override settings for one method
    pub fn method(mut self, name: impl Into<String>, config: MethodConfig) -> Self {
        self.config.methods.insert(name.into(), config);
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ============================================================================
// Method Config
// ============================================================================

/// Retry/timeout override for one RPC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodConfig {
    /// Per-attempt timeout in milliseconds
    pub timeout_ms: Option<u64>,

    /// Turn retries off for this method
    pub disable_retry: bool,

    /// Replace the method's default retry schedule
    pub retry: Option<RetryConfig>,
}

impl MethodConfig {
    /// Override only the timeout
    pub fn timeout(timeout: Duration) -> Self {
        Self {
            timeout_ms: Some(timeout.as_millis() as u64),
            ..Default::default()
        }
    }

    /// Disable retries
    pub fn no_retry() -> Self {
        Self {
            disable_retry: true,
            ..Default::default()
        }
    }

    /// Override the retry schedule
    pub fn retry(retry: RetryConfig) -> Self {
        Self {
            retry: Some(retry),
            ..Default::default()
        }
    }

    /// Configured timeout, if any
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.timeout_ms == Some(0) {
            return Err(Error::invalid_config(
                format!("methods.{name}.timeout_ms"),
                "must be greater than zero",
            ));
        }
        if self.disable_retry && self.retry.is_some() {
            return Err(Error::invalid_config(
                format!("methods.{name}"),
                "disable_retry and retry are mutually exclusive",
            ));
        }
        if let Some(retry) = &self.retry {
            retry.validate(name)?;
        }
        Ok(())
    }
}

/// Serializable retry schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub initial_ms: u64,
    pub max_ms: u64,
    pub multiplier: f64,
    pub deadline_ms: u64,
    pub codes: Vec<Code>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&RetryPolicy::default())
    }
}

impl RetryConfig {
    fn validate(&self, name: &str) -> Result<()> {
        if !(self.multiplier >= 1.0 && self.multiplier.is_finite()) {
            return Err(Error::invalid_config(
                format!("methods.{name}.retry.multiplier"),
                format!("must be a finite number >= 1.0, got {}", self.multiplier),
            ));
        }
        if self.initial_ms > self.max_ms {
            return Err(Error::invalid_config(
                format!("methods.{name}.retry.initial_ms"),
                format!(
                    "initial delay {}ms exceeds maximum {}ms",
                    self.initial_ms, self.max_ms
                ),
            ));
        }
        Ok(())
    }
}

impl From<&RetryPolicy> for RetryConfig {
    fn from(policy: &RetryPolicy) -> Self {
        Self {
            initial_ms: policy.initial.as_millis() as u64,
            max_ms: policy.maximum.as_millis() as u64,
            multiplier: policy.multiplier,
            deadline_ms: policy.deadline.as_millis() as u64,
            codes: policy.retry_on.clone(),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        RetryPolicy::new(config.codes.iter().copied())
            .with_initial(Duration::from_millis(config.initial_ms))
            .with_maximum(Duration::from_millis(config.max_ms))
            .with_multiplier(config.multiplier)
            .with_deadline(Duration::from_millis(config.deadline_ms))
    }
}
