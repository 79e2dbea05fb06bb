// Storage API Rust Library
// Copyright 2025 Storage API Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use std::time::Duration;
use storage_api::sapi::client::{JobPollConfig, RetryConfig, StorageClientBuilder};
use storage_api::sapi::error::Error;
use storage_api::sapi::types::{JobStatus, StorageApi};
use storage_api_common::test_context::{TestContext, api_path};
use storage_api_common::utils::{bucket_json, failed_job, job_json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn request_count(ctx: &TestContext, resource: &str) -> usize {
    ctx.server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == api_path(resource))
        .count()
}

#[tokio::test]
async fn server_error_is_retried() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("buckets/in.c-main")))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .up_to_n_times(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json("GET", "buckets/in.c-main", 200, bucket_json("in.c-main"))
        .await;

    ctx.client.get_bucket("in.c-main").build().send().await.unwrap();

    assert_eq!(request_count(&ctx, "buckets/in.c-main").await, 2);
}

#[tokio::test]
async fn too_many_requests_is_retried() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("buckets")))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "slow down"})))
        .up_to_n_times(2)
        .mount(&ctx.server)
        .await;
    ctx.mock_json("POST", "buckets", 201, bucket_json("out.c-reports"))
        .await;

    ctx.client
        .create_bucket("reports", storage_api::sapi::types::BucketStage::Out)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(request_count(&ctx, "buckets").await, 3);
}

#[tokio::test]
async fn not_implemented_is_not_retried() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "buckets",
        501,
        json!({"error": "not supported on this backend", "code": "storage.notImplemented"}),
    )
    .await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();

    assert_eq!(err.status(), Some(501));
    assert_eq!(request_count(&ctx, "buckets").await, 1);
}

#[tokio::test]
async fn retries_stop_after_max_tries() {
    let ctx = TestContext::new().await;
    ctx.mock_json("GET", "buckets", 503, json!({"error": "maintenance"}))
        .await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(request_count(&ctx, "buckets").await, 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "buckets",
        400,
        json!({"error": "Bucket already exists", "code": "storage.buckets.alreadyExists",
               "exceptionId": "exception-7", "status": "error"}),
    )
    .await;

    let err = ctx
        .client
        .create_bucket("main", storage_api::sapi::types::BucketStage::In)
        .build()
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("storage.buckets.alreadyExists"));
    match &err {
        Error::Server(e) => assert_eq!(e.exception_id.as_deref(), Some("exception-7")),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(request_count(&ctx, "buckets").await, 1);
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    let client = StorageClientBuilder::new("http://127.0.0.1:1".parse().unwrap())
        .token("t")
        .retry_config(RetryConfig::default().max_tries(1))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.list_buckets().build().send().await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn wait_for_job_returns_finished_job() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("jobs/50")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_json(50, "tableExport", "waiting", json!(null))),
        )
        .up_to_n_times(2)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/50",
        200,
        job_json(50, "tableExport", "success", json!({"file": {"id": 600}})),
    )
    .await;

    let job = ctx.client.wait_for_job(50).await.unwrap();

    assert_eq!(job.status, JobStatus::Success);
    assert_eq!(job.results.as_ref().unwrap()["file"]["id"], 600);
    assert_eq!(job.duration(), Some(chrono::Duration::seconds(5)));
    assert_eq!(request_count(&ctx, "jobs/50").await, 3);
}

#[tokio::test]
async fn wait_for_failed_job() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "jobs/51",
        200,
        failed_job(51, "tableImport", "storage.tables.notFound", "Table not found"),
    )
    .await;

    let err = ctx.client.wait_for_job(51).await.unwrap_err();

    assert_eq!(err.code(), Some("storage.tables.notFound"));
    assert!(err.to_string().contains("in job 51"));
}

#[tokio::test]
async fn job_poll_times_out() {
    let ctx = TestContext::with_builder(|b| {
        b.job_poll_config(
            JobPollConfig::default()
                .initial_interval(Duration::from_millis(5))
                .max_interval(Duration::from_millis(10))
                .timeout(Some(Duration::from_millis(50))),
        )
    })
    .await;
    ctx.mock_json(
        "GET",
        "jobs/52",
        200,
        job_json(52, "workspaceCreate", "processing", json!(null)),
    )
    .await;

    let err = ctx.client.wait_for_job(52).await.unwrap_err();

    assert!(matches!(err, Error::JobTimeout { job_id: 52, .. }));
}

#[tokio::test]
async fn get_job_is_not_polled() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "jobs/53",
        200,
        job_json(53, "tableImport", "processing", json!(null)),
    )
    .await;

    let job = ctx.client.get_job(53).build().send().await.unwrap().job().unwrap();

    assert_eq!(job.status, JobStatus::Processing);
    assert_eq!(request_count(&ctx, "jobs/53").await, 1);
}
