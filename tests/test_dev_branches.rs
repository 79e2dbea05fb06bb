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
use storage_api::sapi::response_traits::{HasDevBranch, HasJobResult};
use storage_api::sapi::types::StorageApi;
use storage_api_common::test_context::{TestContext, api_path, branch_path};
use storage_api_common::utils::{accepted_job, bucket_json, job_json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn branch_json(id: u64, name: &str, is_default: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "isDefault": is_default,
        "created": "2025-03-01T10:00:00+0100",
    })
}

#[tokio::test]
async fn create_branch_and_work_inside_it() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("dev-branches")))
        .and(body_json(json!({"name": "feature-x", "description": "try things"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(60, "devBranchCreate")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/60",
        200,
        job_json(60, "devBranchCreate", "success", branch_json(345, "feature-x", false)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(branch_path("345", "buckets/in.c-main")))
        .respond_with(ResponseTemplate::new(200).set_body_json(bucket_json("in.c-main")))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let branch = ctx
        .client
        .create_branch("feature-x")
        .description("try things")
        .build()
        .send()
        .await
        .unwrap()
        .branch()
        .unwrap();
    assert_eq!(branch.id, 345);
    assert!(!branch.is_default);

    let scoped = ctx.client.for_branch(branch.id);
    scoped.get_bucket("in.c-main").build().send().await.unwrap();
}

#[tokio::test]
async fn branch_management_is_project_scoped() {
    let ctx = TestContext::with_builder(|b| b.branch_id("345")).await;
    ctx.mock_json(
        "GET",
        "dev-branches",
        200,
        json!([branch_json(1, "Main", true), branch_json(345, "feature-x", false)]),
    )
    .await;
    ctx.mock_json("GET", "dev-branches/345", 200, branch_json(345, "feature-x", false))
        .await;

    let branches = ctx
        .client
        .list_branches()
        .build()
        .send()
        .await
        .unwrap()
        .branches()
        .unwrap();
    assert!(branches[0].is_default);

    let branch = ctx
        .client
        .get_branch(345)
        .build()
        .send()
        .await
        .unwrap()
        .branch()
        .unwrap();
    assert_eq!(branch.name, "feature-x");
}

#[tokio::test]
async fn update_branch() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(api_path("dev-branches/345")))
        .and(body_json(json!({"description": "ready for review"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(branch_json(345, "feature-x", false)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .update_branch(345)
        .description("ready for review")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx.client.update_branch(345).build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingArgument(_))
    ));
}

#[tokio::test]
async fn delete_branch_waits_for_job() {
    let ctx = TestContext::new().await;
    ctx.mock_job("DELETE", "dev-branches/345", 61, "devBranchDelete", json!(null))
        .await;

    let resp = ctx.client.delete_branch(345).build().send().await.unwrap();

    let job = resp.job().unwrap();
    assert_eq!(job.id, 61);
    assert_eq!(job.operation_name, "devBranchDelete");
}
