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
use std::collections::HashMap;
use storage_api::sapi::error::{Error, ValidationErr};
use storage_api::sapi::response_traits::HasToken;
use storage_api::sapi::types::{BucketPermission, StorageApi, TokenCreateOptions};
use storage_api_common::test_context::{TestContext, api_path};
use storage_api_common::utils::{accepted_job, job_json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn token_json(id: &str, description: &str, secret: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "description": description,
        "created": "2025-03-01T10:00:00+0100",
        "isMasterToken": false,
        "canManageBuckets": false,
        "canManageTokens": false,
        "bucketPermissions": {"in.c-main": "read"},
        "token": secret,
    })
}

#[tokio::test]
async fn verify_token() {
    let ctx = TestContext::with_builder(|b| b.branch_id("9")).await;
    ctx.mock_json("GET", "tokens/verify", 200, token_json("100", "ci", None))
        .await;

    let token = ctx
        .client
        .verify_token()
        .build()
        .send()
        .await
        .unwrap()
        .token()
        .unwrap();

    assert_eq!(token.id, "100");
    assert_eq!(
        token.bucket_permissions.get("in.c-main"),
        Some(&BucketPermission::Read)
    );
}

#[tokio::test]
async fn create_token_returns_secret_once() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("tokens")))
        .and(body_partial_json(json!({
            "description": "writer",
            "expiresIn": 3600,
            "bucketPermissions": {"out.c-main": "write"},
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(70, "tokenCreate")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/70",
        200,
        job_json(70, "tokenCreate", "success", token_json("101", "writer", Some("101-secret"))),
    )
    .await;

    let options = TokenCreateOptions::builder()
        .description("writer")
        .expires_in(3600)
        .bucket_permissions(HashMap::from([(
            "out.c-main".to_string(),
            BucketPermission::Write,
        )]))
        .build();
    let token = ctx
        .client
        .create_token(options)
        .build()
        .send()
        .await
        .unwrap()
        .token()
        .unwrap();

    assert_eq!(token.token.as_deref(), Some("101-secret"));
}

#[tokio::test]
async fn zero_lifetime_is_rejected() {
    let ctx = TestContext::new().await;
    let options = TokenCreateOptions::builder().expires_in(0).build();

    let err = ctx.client.create_token(options).build().send().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "expires_in", .. })
    ));
}

#[tokio::test]
async fn refresh_list_and_drop() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "tokens/101/refresh",
        200,
        token_json("101", "writer", Some("101-rotated")),
    )
    .await;
    ctx.mock_json(
        "GET",
        "tokens",
        200,
        json!([token_json("100", "ci", None), token_json("101", "writer", None)]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("tokens/101")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let refreshed = ctx
        .client
        .refresh_token("101")
        .build()
        .send()
        .await
        .unwrap()
        .token()
        .unwrap();
    assert_eq!(refreshed.token.as_deref(), Some("101-rotated"));

    let tokens = ctx
        .client
        .list_tokens()
        .build()
        .send()
        .await
        .unwrap()
        .tokens()
        .unwrap();
    assert_eq!(tokens.len(), 2);

    ctx.client.drop_token("101").build().send().await.unwrap();
}

#[tokio::test]
async fn share_token() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("tokens/101/share")))
        .and(body_json(json!({"recipientEmail": "dev@example.com", "message": "for the loader"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .share_token("101", "dev@example.com", "for the loader")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .client
        .share_token("101", "not-an-address", "x")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "recipient_email", .. })
    ));
}
