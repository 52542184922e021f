//! Tests for blocking clients

use super::*;
use crate::error::{Code, Error};
use crate::metadata::ROUTING_HEADER;
use crate::model::{
    Application, CreateApplicationRequest, CreateJobRequest, DeleteApplicationRequest,
    DeleteJobRequest, GetApplicationRequest, GetJobRequest, Job, ListJobsRequest,
    SearchProfilesRequest, UpdateApplicationRequest, UpdateJobRequest,
};
use crate::types::{ApiVersion, JsonValue};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Mutex;

/// Serves job pages keyed by page token
struct PagedJobs {
    calls: Mutex<Vec<(String, CallMetadata)>>,
    fail_on: Option<&'static str>,
}

impl PagedJobs {
    fn new(fail_on: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_on,
        })
    }

    fn tokens(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

#[async_trait]
impl Transport for PagedJobs {
    async fn unary(
        &self,
        path: &str,
        request: JsonValue,
        metadata: CallMetadata,
    ) -> Result<JsonValue> {
        if path.ends_with("/GetJob") || path.ends_with("/GetApplication") {
            return Ok(json!({"name": request["name"], "title": "Engineer"}));
        }
        if path.ends_with("/CreateJob") {
            let mut job = request["job"].clone();
            job["name"] = json!("projects/p/tenants/t/jobs/9");
            return Ok(job);
        }
        if path.ends_with("/UpdateJob") {
            return Ok(request["job"].clone());
        }
        if path.ends_with("/CreateApplication") || path.ends_with("/UpdateApplication") {
            return Ok(request["application"].clone());
        }
        if !path.ends_with("/ListJobs") {
            return Ok(json!({}));
        }

        let token = request["pageToken"].as_str().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push((token.clone(), metadata));

        if self.fail_on == Some(token.as_str()) {
            return Err(Error::rpc(Code::NotFound, "gone"));
        }
        Ok(match token.as_str() {
            "" => json!({"jobs": [{"name": "1"}, {"name": "2"}], "nextPageToken": "p2"}),
            "p2" => json!({"jobs": [], "nextPageToken": "p3"}),
            _ => json!({"jobs": [{"name": "3"}]}),
        })
    }
}

#[test]
fn test_blocking_list_jobs_iterates_all_pages() {
    let transport = PagedJobs::new(None);
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let pager = client
        .list_jobs(ListJobsRequest::new("projects/p/tenants/t", ""), CallOptions::default())
        .unwrap();
    let names: Vec<String> = pager.map(|job| job.unwrap().name).collect();

    assert_eq!(names, vec!["1", "2", "3"]);
    assert_eq!(transport.tokens(), vec!["", "p2", "p3"]);
}

#[test]
fn test_blocking_first_call_is_eager() {
    let transport = PagedJobs::new(None);
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let pager = client
        .list_jobs_in("projects/p/tenants/t", "", CallOptions::default())
        .unwrap();

    assert_eq!(transport.tokens(), vec![""]);
    assert_eq!(pager.latest_response().jobs.len(), 2);
}

#[test]
fn test_blocking_pages_share_metadata() {
    let transport = PagedJobs::new(None);
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let mut pager = client
        .list_jobs_in("projects/p/tenants/t", "", CallOptions::default())
        .unwrap();
    let pages: Vec<usize> = pager.pages().map(|page| page.unwrap().jobs.len()).collect();

    assert_eq!(pages, vec![2, 0, 1]);
    let calls = transport.calls.lock().unwrap();
    assert!(calls.iter().all(|(_, md)| md == &calls[0].1));
    assert_eq!(
        calls[0].1.get(ROUTING_HEADER),
        Some("parent=projects%2Fp%2Ftenants%2Ft")
    );
}

#[test]
fn test_blocking_failure_ends_iteration() {
    let transport = PagedJobs::new(Some("p3"));
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let results: Vec<Result<String>> = client
        .list_jobs_in("projects/p/tenants/t", "", CallOptions::default())
        .unwrap()
        .map(|job| job.map(|j| j.name))
        .collect();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), "1");
    assert_eq!(results[1].as_ref().unwrap(), "2");
    assert_eq!(results[2].as_ref().unwrap_err().code(), Some(Code::NotFound));
    // NOT_FOUND is not retried
    assert_eq!(transport.tokens(), vec!["", "p2", "p3"]);
}

#[test]
fn test_blocking_get_job() {
    let transport = PagedJobs::new(None);
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let job = client
        .get_job(GetJobRequest::new("projects/p/tenants/t/jobs/1"), CallOptions::default())
        .unwrap();
    assert_eq!(job.name, "projects/p/tenants/t/jobs/1");
    assert_eq!(job.title, "Engineer");
    assert!(transport.tokens().is_empty());
}

#[test]
fn test_blocking_beta_services() {
    let transport = PagedJobs::new(None);
    assert!(BlockingProfileServiceClient::new(transport.clone(), ClientConfig::default()).is_err());
    assert!(
        BlockingApplicationServiceClient::new(transport.clone(), ClientConfig::default()).is_err()
    );

    let config = ClientConfig::builder()
        .api_version(ApiVersion::V4beta1)
        .build()
        .unwrap();
    let client = BlockingProfileServiceClient::new(transport, config).unwrap();
    let pager = client
        .search_profiles(
            SearchProfilesRequest::new("projects/p/tenants/t", "x"),
            CallOptions::default(),
        )
        .unwrap();
    assert!(pager.latest_response().summarized_profiles.is_empty());
}

#[test]
fn test_blocking_job_mutations() {
    let transport = PagedJobs::new(None);
    let client = BlockingJobServiceClient::new(transport.clone(), ClientConfig::default()).unwrap();

    let draft = Job {
        title: "Engineer".into(),
        ..Default::default()
    };
    let created = client
        .create_job(
            CreateJobRequest::new("projects/p/tenants/t", draft),
            CallOptions::default(),
        )
        .unwrap();
    assert_eq!(created.name, "projects/p/tenants/t/jobs/9");
    assert_eq!(created.title, "Engineer");

    let renamed = Job {
        title: "Staff Engineer".into(),
        ..created
    };
    let updated = client
        .update_job(UpdateJobRequest::new(renamed), CallOptions::default())
        .unwrap();
    assert_eq!(updated.title, "Staff Engineer");

    client
        .delete_job(DeleteJobRequest::new(updated.name), CallOptions::default())
        .unwrap();

    let err = client
        .delete_job(DeleteJobRequest::default(), CallOptions::default())
        .unwrap_err();
    assert_eq!(err.code(), Some(Code::InvalidArgument));
    assert!(transport.tokens().is_empty());
}

#[test]
fn test_blocking_application_crud() {
    let transport = PagedJobs::new(None);
    let config = ClientConfig::builder()
        .api_version(ApiVersion::V4beta1)
        .build()
        .unwrap();
    let client = BlockingApplicationServiceClient::new(transport, config).unwrap();
    let name = "projects/p/tenants/t/profiles/x/applications/a1";

    let created = client
        .create_application(
            CreateApplicationRequest::new(
                "projects/p/tenants/t/profiles/x",
                Application {
                    name: name.into(),
                    external_id: "ext-1".into(),
                    ..Default::default()
                },
            ),
            CallOptions::default(),
        )
        .unwrap();
    assert_eq!(created.external_id, "ext-1");

    let fetched = client
        .get_application(GetApplicationRequest::new(name), CallOptions::default())
        .unwrap();
    assert_eq!(fetched.name, name);

    let updated = client
        .update_application(
            UpdateApplicationRequest::new(Application {
                outcome_notes: "hired".into(),
                ..created
            }),
            CallOptions::default(),
        )
        .unwrap();
    assert_eq!(updated.outcome_notes, "hired");

    client
        .delete_application(DeleteApplicationRequest::new(name), CallOptions::default())
        .unwrap();
}
