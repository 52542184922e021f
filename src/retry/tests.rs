//! Tests for the retry module

use super::*;
use crate::error::{Code, Error};
use crate::metadata::CallMetadata;
use crate::pagination::AsyncInvoke;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_case::test_case;

fn fast_policy() -> RetryPolicy {
    RetryPolicy::new([Code::Unavailable, Code::DeadlineExceeded])
        .with_initial(Duration::from_millis(1))
        .with_maximum(Duration::from_millis(5))
        .with_multiplier(2.0)
        .with_deadline(Duration::from_secs(5))
}

/// Fails the first `failures` calls with `code`, then echoes the request
fn flaky(failures: usize, code: Code, calls: Arc<AtomicUsize>) -> Arc<dyn AsyncInvoke<String, String>> {
    Arc::new(move |request: String, _metadata: CallMetadata| {
        let n = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if n < failures {
                Err(Error::rpc(code, "flaky backend"))
            } else {
                Ok(format!("echo {request}"))
            }
        }
    })
}

// ============================================================================
// RetryPolicy Tests
// ============================================================================

#[test]
fn test_retry_policy_default() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.initial, Duration::from_millis(100));
    assert_eq!(policy.maximum, Duration::from_secs(60));
    assert!((policy.multiplier - 1.3).abs() < f64::EPSILON);
    assert_eq!(policy.deadline, Duration::from_secs(120));
    assert_eq!(
        policy.retry_on,
        vec![Code::Unavailable, Code::DeadlineExceeded]
    );
}

#[test_case(0, 100)]
#[test_case(1, 200)]
#[test_case(2, 400)]
#[test_case(3, 800)]
#[test_case(4, 1000)]
#[test_case(40, 1000)]
fn test_delay_for_doubling(attempt: u32, expected_ms: u128) {
    let policy = RetryPolicy::default()
        .with_initial(Duration::from_millis(100))
        .with_maximum(Duration::from_secs(1))
        .with_multiplier(2.0);
    assert_eq!(policy.delay_for(attempt).as_millis(), expected_ms);
}

#[test]
fn test_delay_for_default_multiplier() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_for(0), Duration::from_millis(100));
    let second = policy.delay_for(1).as_millis();
    assert!((129..=131).contains(&second), "got {second}ms");
    assert_eq!(policy.delay_for(u32::MAX), Duration::from_secs(60));
}

#[test]
fn test_should_retry() {
    let policy = RetryPolicy::default();
    assert!(policy.should_retry(&Error::rpc(Code::Unavailable, "")));
    assert!(policy.should_retry(&Error::rpc(Code::DeadlineExceeded, "")));
    assert!(policy.should_retry(&Error::Timeout { timeout_ms: 5 }));
    assert!(!policy.should_retry(&Error::rpc(Code::NotFound, "")));
    assert!(!policy.should_retry(&Error::rpc(Code::InvalidArgument, "")));
    assert!(!policy.should_retry(&Error::config("nope")));

    let none = RetryPolicy::new([]);
    assert!(!none.should_retry(&Error::rpc(Code::Unavailable, "")));
}

// ============================================================================
// WrappedMethod Tests
// ============================================================================

#[tokio::test]
async fn test_wrapped_method_retries_then_succeeds() {
    let calls = Arc::new(AtomicUsize::new(0));
    let method = WrappedMethod::new("ListJobs", flaky(2, Code::Unavailable, calls.clone()))
        .with_retry(Some(fast_policy()));

    let response = method
        .call("page".to_string(), CallMetadata::new())
        .await
        .unwrap();

    assert_eq!(response, "echo page");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_wrapped_method_does_not_retry_other_codes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let method = WrappedMethod::new("ListJobs", flaky(5, Code::NotFound, calls.clone()))
        .with_retry(Some(fast_policy()));

    let err = method
        .call("page".to_string(), CallMetadata::new())
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(Code::NotFound));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wrapped_method_without_policy_calls_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let method = WrappedMethod::new("SearchJobs", flaky(1, Code::Unavailable, calls.clone()));

    let result = method.call("q".to_string(), CallMetadata::new()).await;

    tokio_test::assert_err!(result);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(method.retry().is_none());
}

#[tokio::test]
async fn test_wrapped_method_deadline_exhausted() {
    let calls = Arc::new(AtomicUsize::new(0));
    let policy = fast_policy()
        .with_initial(Duration::from_millis(10))
        .with_maximum(Duration::from_millis(10))
        .with_deadline(Duration::from_millis(35));
    let method = WrappedMethod::new("ListJobs", flaky(usize::MAX, Code::Unavailable, calls.clone()))
        .with_retry(Some(policy));

    let err = method
        .call("page".to_string(), CallMetadata::new())
        .await
        .unwrap_err();

    match err {
        Error::RetryExhausted {
            attempts,
            deadline_ms,
            source,
        } => {
            assert_eq!(deadline_ms, 35);
            assert!(attempts >= 1);
            assert_eq!(attempts as usize, calls.load(Ordering::SeqCst));
            assert_eq!(source.code(), Some(Code::Unavailable));
        }
        other => panic!("expected RetryExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrapped_method_timeout() {
    let slow: Arc<dyn AsyncInvoke<String, String>> =
        Arc::new(|request: String, _metadata: CallMetadata| async move {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok::<_, Error>(request)
        });
    let method = WrappedMethod::new("GetJob", slow).with_timeout(Some(Duration::from_millis(10)));

    let err = method
        .call("job".to_string(), CallMetadata::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 10 }));
    assert_eq!(err.code(), Some(Code::DeadlineExceeded));
}

#[tokio::test]
async fn test_wrapped_method_retries_after_timeout() {
    let calls = Arc::new(AtomicUsize::new(0));
    let inner: Arc<dyn AsyncInvoke<String, String>> = {
        let calls = calls.clone();
        Arc::new(move |request: String, _metadata: CallMetadata| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                }
                Ok::<_, Error>(request)
            }
        })
    };
    let method = WrappedMethod::new("GetJob", inner)
        .with_timeout(Some(Duration::from_millis(10)))
        .with_retry(Some(fast_policy()));

    let response = method
        .call("job".to_string(), CallMetadata::new())
        .await
        .unwrap();

    assert_eq!(response, "job");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_wrapped_method_reuses_metadata_on_retry() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let inner: Arc<dyn AsyncInvoke<String, String>> = {
        let seen = seen.clone();
        Arc::new(move |request: String, metadata: CallMetadata| {
            let attempt = {
                let mut seen = seen.lock().unwrap();
                seen.push(metadata);
                seen.len()
            };
            async move {
                if attempt == 1 {
                    Err(Error::rpc(Code::Unavailable, "try again"))
                } else {
                    Ok(request)
                }
            }
        })
    };
    let metadata = CallMetadata::new().with("x-goog-request-params", "parent=p").unwrap();
    let method = WrappedMethod::new("ListJobs", inner).with_retry(Some(fast_policy()));

    method.call("r".to_string(), metadata.clone()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|md| md == &metadata));
}

#[tokio::test]
async fn test_wrapped_method_as_invocation_capability() {
    let calls = Arc::new(AtomicUsize::new(0));
    let method: Arc<dyn AsyncInvoke<String, String>> = Arc::new(
        WrappedMethod::new("ListTenants", flaky(1, Code::Unavailable, calls.clone()))
            .with_retry(Some(fast_policy())),
    );

    assert_eq!(method.name(), "ListTenants");
    let response = method
        .invoke("x".to_string(), CallMetadata::new())
        .await
        .unwrap();
    assert_eq!(response, "echo x");
}
