//! Retry policy
//!
//! Exponential backoff with a ceiling, an overall deadline, and a predicate
//! over status codes.

use crate::error::{Code, Error};
use std::time::Duration;

/// When and how long to wait before retrying a failed call
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Delay before the first retry
    pub initial: Duration,
    /// Upper bound for any single delay
    pub maximum: Duration,
    /// Growth factor applied per attempt (>= 1.0)
    pub multiplier: f64,
    /// Total time budget across all attempts
    pub deadline: Duration,
    /// Status codes that are worth retrying
    pub retry_on: Vec<Code>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(100),
            maximum: Duration::from_secs(60),
            multiplier: 1.3,
            deadline: Duration::from_secs(120),
            retry_on: vec![Code::Unavailable, Code::DeadlineExceeded],
        }
    }
}

impl RetryPolicy {
    /// Default schedule retrying the given codes
    pub fn new(retry_on: impl IntoIterator<Item = Code>) -> Self {
        Self {
            retry_on: retry_on.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Set the initial delay
    #[must_use]
    pub fn with_initial(mut self, initial: Duration) -> Self {
        self.initial = initial;
        self
    }

    /// Set the delay ceiling
    #[must_use]
    pub fn with_maximum(mut self, maximum: Duration) -> Self {
        self.maximum = maximum;
        self
    }

    /// Set the backoff multiplier
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the overall deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Check if `error` matches the retry predicate
    pub fn should_retry(&self, error: &Error) -> bool {
        error
            .code()
            .is_some_and(|code| self.retry_on.contains(&code))
    }

    /// Delay to wait after the given zero-based failed attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(attempt.min(i32::MAX as u32) as i32);
        let secs = self.initial.as_secs_f64() * factor;
        let capped = secs.min(self.maximum.as_secs_f64());
        if capped.is_finite() && capped >= 0.0 {
            Duration::from_secs_f64(capped)
        } else {
            self.maximum
        }
    }
}
