// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Talent Client
//!
//! Rust client for the Cloud Talent Solution (Job Search) API, built around
//! one generic auto-paging abstraction.
//!
//! ## Features
//!
//! - **Auto-paging**: every list/search RPC returns a pager that yields
//!   items across pages, fetching continuation pages on demand
//! - **Blocking and async**: `Iterator` pagers for threads, pull futures and
//!   `futures::Stream` adapters for async callers
//! - **Retry and timeout**: per-method defaults, overridable from YAML
//!   config or per call
//! - **Single-resource calls**: get, create, update and delete for jobs and
//!   applications, plus application resource name helpers
//! - **Request routing**: routing and client info metadata on every call
//! - **API versions**: `v4` and `v4beta1` (applications and profiles)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use talent_client::{CallOptions, ClientConfig, JobServiceClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_file("talent.yaml")?;
//!     let client = JobServiceClient::new(transport, config)?;
//!
//!     let mut jobs = client
//!         .list_jobs_in("projects/p/tenants/t", "status = \"OPEN\"", CallOptions::default())
//!         .await?;
//!     while let Some(job) = jobs.next_item().await {
//!         println!("{}", job?.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │           Service clients (async / blocking)                 │
//! │  list_jobs  search_jobs  list_tenants  search_profiles  ...  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──┬──────────────┬──────────────┐
//! │  Pagination  │     Retry       │   Metadata   │  Transport   │
//! ├──────────────┼─────────────────┼──────────────┼──────────────┤
//! │ Pager        │ RetryPolicy     │ Routing      │ JSON unary   │
//! │ AsyncPager   │ WrappedMethod   │ Client info  │ TypedRpc     │
//! │ PageCursor   │ Timeout         │ User agent   │              │
//! └──────────────┴─────────────────┴──────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and status codes
pub mod error;

/// Common types and type aliases
pub mod types;

/// Call metadata and standard headers
pub mod metadata;

/// Generic pagers
pub mod pagination;

/// Retry policy and wrapped methods
pub mod retry;

/// Request and response messages
pub mod model;

/// Async service clients and transport seam
pub mod client;

/// Blocking service clients
pub mod blocking;

/// Client configuration
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Code, Error, Result, ResultExt};
pub use types::*;

pub use client::{
    ApplicationServiceClient, CallOptions, CompanyServiceClient, JobServiceClient,
    ProfileServiceClient, RetrySetting, TenantServiceClient, Transport,
};
pub use config::{ClientConfig, MethodConfig, RetryConfig};
pub use metadata::CallMetadata;
pub use pagination::{AsyncPager, PageRequest, PageResponse, Pager};
pub use retry::RetryPolicy;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
