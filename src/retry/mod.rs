//! Retry module
//!
//! Wraps RPC invocations with retry and timeout handling.
//!
//! # Features
//!
//! - **Exponential Backoff**: initial delay, multiplier, and ceiling
//! - **Overall Deadline**: retries stop once the time budget would be exceeded
//! - **Code Predicate**: only configured status codes are retried
//! - **Per-Attempt Timeout**: each attempt is cut off independently

mod method;
mod policy;

pub use method::WrappedMethod;
pub use policy::RetryPolicy;

#[cfg(test)]
mod tests;
