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
use storage_api::sapi::types::{EventType, StorageApi};
use storage_api_common::test_context::{TestContext, api_path};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_event_with_client_run_id() {
    let ctx = TestContext::with_builder(|b| b.run_id("1234.5678")).await;
    Mock::given(method("POST"))
        .and(path(api_path("events")))
        .and(body_json(json!({
            "component": "my-extractor",
            "message": "Extraction finished",
            "type": "success",
            "duration": 12,
            "runId": "1234.5678",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 4242})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let resp = ctx
        .client
        .create_event("my-extractor", "Extraction finished")
        .event_type(EventType::Success)
        .duration(12)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.event_id().unwrap(), "4242");
}

#[tokio::test]
async fn list_and_get_events() {
    let ctx = TestContext::new().await;
    let event = json!({
        "id": "4242",
        "event": "ext.my-extractor.",
        "component": "my-extractor",
        "message": "Extraction finished",
        "type": "success",
        "created": "2025-03-01T10:00:00+0100",
        "runId": 1234,
    });
    Mock::given(method("GET"))
        .and(path(api_path("events")))
        .and(query_param("component", "my-extractor"))
        .and(query_param("limit", "10"))
        .and(query_param("sinceId", "4000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event.clone()])))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json("GET", "events/4242", 200, event).await;

    let events = ctx
        .client
        .list_events()
        .component("my-extractor")
        .limit(10)
        .since_id("4000")
        .build()
        .send()
        .await
        .unwrap()
        .events()
        .unwrap();
    assert_eq!(events[0].event_type, EventType::Success);
    assert_eq!(events[0].run_id, "1234");

    let one = ctx
        .client
        .get_event("4242")
        .build()
        .send()
        .await
        .unwrap()
        .event()
        .unwrap();
    assert_eq!(one.message, "Extraction finished");
}

#[tokio::test]
async fn event_needs_a_message() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .create_event("my-extractor", "  ")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, storage_api::sapi::Error::Validation(_)));
}
