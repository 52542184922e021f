//! Common types used throughout the Talent client
//!
//! Shared type definitions and type aliases used across modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// API Version
// ============================================================================

/// Talent API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Stable API
    #[default]
    V4,
    /// Beta API (adds applications and profiles)
    V4beta1,
}

impl ApiVersion {
    /// Version segment used in fully qualified service names
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V4 => "v4",
            ApiVersion::V4beta1 => "v4beta1",
        }
    }

    /// Fully qualified proto package for this version
    pub fn package(self) -> String {
        format!("google.cloud.talent.{}", self.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
