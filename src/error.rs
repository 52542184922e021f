//! Error types for the Talent client
//!
//! Every public API returns `Result<T, Error>`. RPC failures carry a
//! canonical gRPC status [`Code`] so retry predicates can classify them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Status Codes
// ============================================================================

/// Canonical gRPC status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl Code {
    /// Numeric value used on the wire
    pub fn as_i32(self) -> i32 {
        match self {
            Code::Ok => 0,
            Code::Cancelled => 1,
            Code::Unknown => 2,
            Code::InvalidArgument => 3,
            Code::DeadlineExceeded => 4,
            Code::NotFound => 5,
            Code::AlreadyExists => 6,
            Code::PermissionDenied => 7,
            Code::ResourceExhausted => 8,
            Code::FailedPrecondition => 9,
            Code::Aborted => 10,
            Code::OutOfRange => 11,
            Code::Unimplemented => 12,
            Code::Internal => 13,
            Code::Unavailable => 14,
            Code::DataLoss => 15,
            Code::Unauthenticated => 16,
        }
    }

    /// Map a wire value back to a code; unrecognised values become `Unknown`
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::Unknown,
        }
    }

    /// Upper snake case name, as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error
// ============================================================================

/// The main error type for the Talent client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // RPC Errors
    // ============================================================================
    #[error("RPC failed with {code}: {message}")]
    Rpc { code: Code, message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Retry deadline of {deadline_ms}ms exceeded after {attempts} attempts: {source}")]
    RetryExhausted {
        attempts: u32,
        deadline_ms: u64,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid metadata entry '{key}': {message}")]
    InvalidMetadata { key: String, message: String },

    #[error("Failed to encode or decode message: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("{feature} is not available in API version {version}")]
    Unsupported { feature: String, version: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an RPC status error
    pub fn rpc(code: Code, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid metadata error
    pub fn invalid_metadata(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported feature error
    pub fn unsupported(feature: impl Into<String>, version: impl fmt::Display) -> Self {
        Self::Unsupported {
            feature: feature.into(),
            version: version.to_string(),
        }
    }

    /// Status code this error corresponds to, if any
    pub fn code(&self) -> Option<Code> {
        match self {
            Error::Rpc { code, .. } => Some(*code),
            Error::Timeout { .. } | Error::RetryExhausted { .. } => Some(Code::DeadlineExceeded),
            Error::InvalidArgument { .. } | Error::InvalidMetadata { .. } => {
                Some(Code::InvalidArgument)
            }
            Error::Unsupported { .. } => Some(Code::Unimplemented),
            Error::JsonParse(_) => Some(Code::Internal),
            Error::Transport(_) => Some(Code::Unknown),
            _ => None,
        }
    }
}

/// Result type alias for the Talent client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = Error::rpc(Code::NotFound, "job missing");
        assert_eq!(err.to_string(), "RPC failed with NOT_FOUND: job missing");

        let err = Error::config("bad endpoint");
        assert_eq!(err.to_string(), "Configuration error: bad endpoint");

        let err = Error::Timeout { timeout_ms: 30000 };
        assert_eq!(err.to_string(), "Request timeout after 30000ms");
    }

    #[test_case(Code::Ok, 0)]
    #[test_case(Code::InvalidArgument, 3)]
    #[test_case(Code::DeadlineExceeded, 4)]
    #[test_case(Code::Unavailable, 14)]
    #[test_case(Code::Unauthenticated, 16)]
    fn test_code_wire_values(code: Code, value: i32) {
        assert_eq!(code.as_i32(), value);
        assert_eq!(Code::from_i32(value), code);
    }

    #[test]
    fn test_unknown_wire_value() {
        assert_eq!(Code::from_i32(99), Code::Unknown);
        assert_eq!(Code::from_i32(-1), Code::Unknown);
    }

    #[test]
    fn test_code_serde_names() {
        let code: Code = serde_json::from_str("\"DEADLINE_EXCEEDED\"").unwrap();
        assert_eq!(code, Code::DeadlineExceeded);
        assert_eq!(
            serde_json::to_string(&Code::PermissionDenied).unwrap(),
            "\"PERMISSION_DENIED\""
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::rpc(Code::Unavailable, "").code(),
            Some(Code::Unavailable)
        );
        assert_eq!(
            Error::Timeout { timeout_ms: 1 }.code(),
            Some(Code::DeadlineExceeded)
        );
        assert_eq!(
            Error::invalid_argument("x").code(),
            Some(Code::InvalidArgument)
        );
        assert_eq!(Error::config("x").code(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
