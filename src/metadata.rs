//! Per-call request metadata
//!
//! Metadata is an ordered list of ASCII `(key, value)` pairs sent alongside
//! each RPC. Two headers are generated by the client itself: the routing
//! header (`x-goog-request-params`) that lets the frontend route by resource
//! name, and the client info header (`x-goog-api-client`).

use crate::error::{Error, Result};
use url::form_urlencoded;

/// Header carrying URL-encoded routing parameters
pub const ROUTING_HEADER: &str = "x-goog-request-params";

/// Header carrying client library identification
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Header carrying a caller supplied user agent
pub const USER_AGENT_HEADER: &str = "user-agent";

/// Ordered metadata attached to an RPC
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallMetadata {
    entries: Vec<(String, String)>,
}

impl CallMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after validating it
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        validate_key(&key)?;
        validate_value(&key, &value)?;
        self.entries.push((key, value));
        Ok(())
    }

    /// Builder form of [`CallMetadata::push`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.push(key, value)?;
        Ok(self)
    }

    /// Append every entry of `other`, keeping order
    pub fn extend(&mut self, other: &CallMetadata) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Append the routing header for the given fields
    ///
    /// Fields with an empty value are still encoded, matching what the
    /// frontend expects for an unset resource name.
    pub fn push_routing(&mut self, params: &[(&str, &str)]) -> Result<()> {
        if params.is_empty() {
            return Ok(());
        }
        self.push(ROUTING_HEADER, routing_header_value(params))
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in insertion order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<(String, String)>> for CallMetadata {
    type Error = Error;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut metadata = Self::new();
        for (key, value) in pairs {
            metadata.push(key, value)?;
        }
        Ok(metadata)
    }
}

/// Encode routing fields as `application/x-www-form-urlencoded`
pub fn routing_header_value(params: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Value of the client info header for this crate
pub fn api_client_header_value() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("gl-rust/{version} gapic/{version}")
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::invalid_metadata(key, "key must not be empty"));
    }
    let valid = key
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'.'));
    if !valid {
        return Err(Error::invalid_metadata(
            key,
            "key must be lowercase ASCII letters, digits, '-', '_' or '.'",
        ));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<()> {
    // Binary headers carry base64 and are left alone.
    if key.ends_with("-bin") {
        return Ok(());
    }
    if value.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        Ok(())
    } else {
        Err(Error::invalid_metadata(
            key,
            "value must be printable ASCII",
        ))
    }
}
