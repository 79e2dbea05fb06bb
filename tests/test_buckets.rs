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
use storage_api::sapi::error::{Error, ValidationErr};
use storage_api::sapi::response_traits::{HasBucket, HasStorageFields};
use storage_api::sapi::types::{BucketStage, StorageApi};
use storage_api_common::test_context::{TEST_TOKEN, TestContext, api_path, branch_path};
use storage_api_common::utils::{accepted_job, bucket_json, job_json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_buckets() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("buckets")))
        .and(header("X-StorageApi-Token", TEST_TOKEN))
        .and(query_param("include", "metadata"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([bucket_json("in.c-main"), bucket_json("out.c-reports")])),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .list_buckets()
        .include(vec!["metadata".into()])
        .build()
        .send()
        .await
        .unwrap();

    let buckets = resp.buckets().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].id, "in.c-main");
    assert_eq!(buckets[1].stage, BucketStage::Out);
}

#[tokio::test]
async fn create_bucket() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("buckets")))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "main", "stage": "in", "description": "Raw data"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(bucket_json("in.c-main")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .create_bucket("main", BucketStage::In)
        .description("Raw data")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.bucket().unwrap().id, "in.c-main");
}

#[tokio::test]
async fn create_bucket_answered_with_job() {
    let ctx = TestContext::new().await;
    ctx.mock_job("POST", "buckets", 77, "bucketCreate", bucket_json("in.c-main"))
        .await;

    let resp = ctx
        .client
        .create_bucket("main", BucketStage::In)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.bucket().unwrap().id, "in.c-main");
    let polls = ctx
        .server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == api_path("jobs/77"))
        .count();
    assert_eq!(polls, 1);
}

#[tokio::test]
async fn accepted_without_job_is_not_polled() {
    let ctx = TestContext::new().await;
    ctx.mock_json("PUT", "buckets/in.c-main", 202, bucket_json("in.c-main"))
        .await;

    let resp = ctx
        .client
        .update_bucket("in.c-main")
        .description("Raw data")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.bucket().unwrap().id, "in.c-main");
    assert_eq!(ctx.server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_bucket_rejects_sys_stage() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .create_bucket("main", BucketStage::Sys)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "stage", .. })
    ));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn bucket_exists() {
    let ctx = TestContext::new().await;
    ctx.mock_json("GET", "buckets/in.c-main", 200, bucket_json("in.c-main"))
        .await;
    ctx.mock_json(
        "GET",
        "buckets/in.c-missing",
        404,
        json!({"error": "Bucket in.c-missing not found", "code": "storage.buckets.notFound"}),
    )
    .await;

    let found = ctx.client.bucket_exists("in.c-main").build().send().await.unwrap();
    assert!(found.exists());

    let missing = ctx
        .client
        .bucket_exists("in.c-missing")
        .build()
        .send()
        .await
        .unwrap();
    assert!(!missing.exists());
}

#[tokio::test]
async fn get_missing_bucket_is_an_error() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "buckets/in.c-missing",
        404,
        json!({
            "error": "Bucket in.c-missing not found",
            "code": "storage.buckets.notFound",
            "exceptionId": "exception-1",
        }),
    )
    .await;

    let err = ctx
        .client
        .get_bucket("in.c-missing")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.code(), Some("storage.buckets.notFound"));
}

#[tokio::test]
async fn update_bucket_requires_a_change() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .update_bucket("in.c-main")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::MissingArgument(_))));

    Mock::given(method("PUT"))
        .and(path(api_path("buckets/in.c-main")))
        .and(body_json(json!({"displayName": "main data"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(bucket_json("in.c-main")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.client
        .update_bucket("in.c-main")
        .display_name("main data")
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn drop_bucket_waits_for_job() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("buckets/in.c-main")))
        .and(query_param("force", "1"))
        .and(query_param("async", "1"))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(11, "bucketDrop")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("jobs/11")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_json(11, "bucketDrop", "processing", json!(null))),
        )
        .up_to_n_times(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("jobs/11")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_json(11, "bucketDrop", "success", json!(null))),
        )
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .drop_bucket("in.c-main")
        .force(true)
        .async_(true)
        .build()
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = resp.json().unwrap();
    assert_eq!(body["status"], "success");
    let polls = ctx
        .server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == api_path("jobs/11"))
        .count();
    assert_eq!(polls, 2);
}

#[tokio::test]
async fn branch_client_uses_branch_prefix() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(branch_path("123", "buckets")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let branch = ctx.client.for_branch(123);
    let buckets = branch.list_buckets().build().send().await.unwrap().buckets().unwrap();
    assert!(buckets.is_empty());
}

#[tokio::test]
async fn run_id_header_is_sent() {
    let ctx = TestContext::with_builder(|b| b.run_id("run-42")).await;
    Mock::given(method("GET"))
        .and(path(api_path("buckets")))
        .and(header("X-KBC-RunId", "run-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client.list_buckets().build().send().await.unwrap();
}
