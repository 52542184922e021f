//! Integration tests using an in-memory Talent service
//!
//! Tests the full flow: config → client → transport calls → pager output

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use talent_client::blocking::BlockingJobServiceClient;
use talent_client::metadata::ROUTING_HEADER;
use talent_client::model::{ListJobsRequest, ListTenantsRequest};
use talent_client::{
    CallMetadata, CallOptions, ClientConfig, Code, Error, JobServiceClient, JsonValue, Result,
    TenantServiceClient, Transport,
};
use tokio_test::{assert_err, assert_ok};

const TENANT: &str = "projects/acme/tenants/main";

// ============================================================================
// In-memory service
// ============================================================================

/// Pages a fixed job list using offset tokens
struct FakeTalent {
    jobs: Vec<String>,
    calls: AtomicUsize,
    failures_left: AtomicUsize,
    routing: Mutex<Vec<String>>,
}

impl FakeTalent {
    fn new(count: usize) -> Arc<Self> {
        Self::flaky(count, 0)
    }

    fn flaky(count: usize, failures: usize) -> Arc<Self> {
        Arc::new(Self {
            jobs: (1..=count).map(|i| format!("{TENANT}/jobs/{i}")).collect(),
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(failures),
            routing: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn page(&self, request: &JsonValue) -> Result<(usize, usize, String)> {
        let start = match request["pageToken"].as_str().unwrap_or_default() {
            "" => 0,
            token => token
                .parse()
                .map_err(|_| Error::rpc(Code::InvalidArgument, "bad page token"))?,
        };
        let size = match request["pageSize"].as_u64().unwrap_or(0) {
            0 => 2,
            n => n as usize,
        };
        let end = (start + size).min(self.jobs.len());
        let next = if end < self.jobs.len() {
            end.to_string()
        } else {
            String::new()
        };
        Ok((start, end, next))
    }
}

#[async_trait]
impl Transport for FakeTalent {
    async fn unary(
        &self,
        path: &str,
        request: JsonValue,
        metadata: CallMetadata,
    ) -> Result<JsonValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(value) = metadata.get(ROUTING_HEADER) {
            self.routing.lock().unwrap().push(value.to_string());
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(Error::rpc(Code::Unavailable, "warming up"));
        }

        match path.rsplit('/').next() {
            Some("ListJobs") => {
                let (start, end, next) = self.page(&request)?;
                let jobs: Vec<JsonValue> = self.jobs[start..end]
                    .iter()
                    .map(|name| json!({"name": name, "requisitionId": name}))
                    .collect();
                Ok(json!({"jobs": jobs, "nextPageToken": next}))
            }
            Some("ListTenants") => Ok(json!({"tenants": [{"name": TENANT}]})),
            _ => Err(Error::rpc(Code::Unimplemented, path.to_string())),
        }
    }
}

// ============================================================================
// Async client
// ============================================================================

#[tokio::test]
async fn test_list_all_jobs_across_pages() {
    let service = FakeTalent::new(5);
    let client = JobServiceClient::new(service.clone(), ClientConfig::default()).unwrap();

    let jobs = client
        .list_jobs_in(TENANT, "", CallOptions::default())
        .await
        .unwrap()
        .collect_items()
        .await
        .unwrap();

    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs[4].name, format!("{TENANT}/jobs/5"));
    assert_eq!(service.calls(), 3);

    let routing = service.routing.lock().unwrap();
    assert_eq!(routing.len(), 3);
    assert!(routing
        .iter()
        .all(|v| v == "parent=projects%2Facme%2Ftenants%2Fmain"));
}

#[tokio::test]
async fn test_page_size_is_preserved_on_continuation() {
    let service = FakeTalent::new(7);
    let client = JobServiceClient::new(service.clone(), ClientConfig::default()).unwrap();

    let request = ListJobsRequest::new(TENANT, "").with_page_size(3);
    let pages: Vec<usize> = client
        .list_jobs(request, CallOptions::default())
        .await
        .unwrap()
        .into_pages()
        .map_ok(|page| page.jobs.len())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages, vec![3, 3, 1]);
}

#[tokio::test]
async fn test_stream_take_stops_fetching() {
    let service = FakeTalent::new(100);
    let client = JobServiceClient::new(service.clone(), ClientConfig::default()).unwrap();

    let first: Vec<_> = client
        .list_jobs_in(TENANT, "", CallOptions::default())
        .await
        .unwrap()
        .into_stream()
        .take(3)
        .collect()
        .await;

    assert_eq!(first.len(), 3);
    assert!(first.iter().all(Result::is_ok));
    assert_eq!(service.calls(), 2);
}

#[tokio::test]
async fn test_pager_stream_runs_on_spawned_task() {
    let service = FakeTalent::new(4);
    let client = JobServiceClient::new(service, ClientConfig::default()).unwrap();

    let stream = client
        .list_jobs_in(TENANT, "", CallOptions::default())
        .await
        .unwrap()
        .into_stream();
    let handle = tokio::spawn(async move { stream.try_collect::<Vec<_>>().await });

    let jobs = handle.await.unwrap().unwrap();
    assert_eq!(jobs.len(), 4);
}

#[tokio::test]
async fn test_yaml_retry_override() {
    let config = ClientConfig::from_yaml_str(
        r"
methods:
  ListJobs:
    retry:
      initial_ms: 1
      max_ms: 5
      codes: [UNAVAILABLE]
",
    )
    .unwrap();
    let service = FakeTalent::flaky(2, 2);
    let client = JobServiceClient::new(service.clone(), config).unwrap();

    let pager = assert_ok!(client.list_jobs_in(TENANT, "", CallOptions::default()).await);

    assert_eq!(pager.latest_response().jobs.len(), 2);
    assert_eq!(service.calls(), 3);
}

#[tokio::test]
async fn test_retry_deadline_exhausted() {
    let config = ClientConfig::from_yaml_str(
        r"
methods:
  ListTenants:
    retry:
      initial_ms: 5
      max_ms: 5
      deadline_ms: 30
      codes: [UNAVAILABLE]
",
    )
    .unwrap();
    let service = FakeTalent::flaky(0, usize::MAX);
    let client = TenantServiceClient::new(service.clone(), config).unwrap();

    let err = assert_err!(
        client
            .list_tenants(ListTenantsRequest::new("projects/acme"), CallOptions::default())
            .await
    );

    assert!(matches!(err, Error::RetryExhausted { .. }));
    assert_eq!(err.code(), Some(Code::DeadlineExceeded));
    assert!(service.calls() > 1);
}

#[tokio::test]
async fn test_continuation_uses_call_options() {
    let service = FakeTalent::flaky(4, 0);
    let client = JobServiceClient::new(service.clone(), ClientConfig::default()).unwrap();

    let mut pager = client
        .list_jobs_in(TENANT, "", CallOptions::new().without_retry())
        .await
        .unwrap();
    service.failures_left.store(1, Ordering::SeqCst);

    assert_ok!(pager.next_item().await.unwrap());
    assert_ok!(pager.next_item().await.unwrap());
    let err = assert_err!(pager.next_item().await.unwrap());
    assert_eq!(err.code(), Some(Code::Unavailable));
    assert!(pager.next_item().await.is_none());
    assert_eq!(service.calls(), 2);
}

// ============================================================================
// Blocking client
// ============================================================================

#[test]
fn test_blocking_client_outside_runtime() {
    let service = FakeTalent::new(5);
    let client = BlockingJobServiceClient::new(service.clone(), ClientConfig::default()).unwrap();

    let names: Vec<String> = client
        .list_jobs_in(TENANT, "", CallOptions::default())
        .unwrap()
        .take(3)
        .map(|job| job.unwrap().name)
        .collect();

    assert_eq!(names.len(), 3);
    assert_eq!(names[2], format!("{TENANT}/jobs/3"));
    assert_eq!(service.calls(), 2);
}

#[test]
fn test_blocking_client_retries() {
    let config = ClientConfig::from_yaml_str(
        r"
methods:
  ListJobs:
    retry:
      initial_ms: 1
      codes: [UNAVAILABLE]
",
    )
    .unwrap();
    let service = FakeTalent::flaky(3, 1);
    let client = BlockingJobServiceClient::new(service.clone(), config).unwrap();

    let count = client
        .list_jobs_in(TENANT, "", CallOptions::default())
        .unwrap()
        .filter(Result::is_ok)
        .count();

    assert_eq!(count, 3);
    assert_eq!(service.calls(), 3);
}
