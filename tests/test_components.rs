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
use storage_api::sapi::response_traits::HasConfiguration;
use storage_api::sapi::types::{Configuration, ConfigurationRow, StorageApi};
use storage_api_common::test_context::{TestContext, api_path, branch_path};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn config_json(id: &str, version: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Daily load",
        "description": "",
        "created": "2025-03-01T10:00:00+0100",
        "version": version,
        "changeDescription": "",
        "isDisabled": false,
        "isDeleted": false,
        "configuration": {"parameters": {"tables": ["users"]}},
        "state": {},
        "rows": [],
    })
}

#[tokio::test]
async fn list_components_and_configurations() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("components")))
        .and(query_param("include", "configuration,rows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "keboola.ex-db-snowflake",
            "type": "extractor",
            "name": "Snowflake",
            "configurations": [config_json("123", 2)],
        }])))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("components/keboola.ex-db-snowflake/configs")))
        .and(query_param("isDeleted", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([config_json("99", 1)])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let components = ctx
        .client
        .list_components()
        .include(vec!["configuration".into(), "rows".into()])
        .build()
        .send()
        .await
        .unwrap()
        .components()
        .unwrap();
    assert_eq!(components[0].component_type, "extractor");
    assert_eq!(components[0].configurations[0].id, "123");

    let deleted = ctx
        .client
        .list_component_configurations("keboola.ex-db-snowflake")
        .is_deleted(true)
        .build()
        .send()
        .await
        .unwrap()
        .configurations()
        .unwrap();
    assert_eq!(deleted[0].id, "99");
}

#[tokio::test]
async fn add_configuration() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("components/wr-db/configs")))
        .and(body_json(json!({
            "name": "Writer",
            "configuration": {"parameters": {"db": "main"}},
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(config_json("500", 1)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let configuration = Configuration::builder()
        .component_id("wr-db")
        .name("Writer")
        .configuration(json!({"parameters": {"db": "main"}}))
        .build();
    let created = ctx
        .client
        .add_configuration(configuration)
        .build()
        .send()
        .await
        .unwrap()
        .configuration()
        .unwrap();

    assert_eq!(created.id, "500");
    assert_eq!(created.version, 1);
}

#[tokio::test]
async fn configuration_needs_a_name() {
    let ctx = TestContext::new().await;
    let configuration = Configuration::builder().component_id("wr-db").build();

    let err = ctx
        .client
        .add_configuration(configuration)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingArgument("name"))
    ));
}

#[tokio::test]
async fn update_configuration_in_branch() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(branch_path("7", "components/wr-db/configs/500")))
        .and(body_json(json!({
            "configurationId": "500",
            "changeDescription": "new target",
            "configuration": {"parameters": {"db": "backup"}},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json("500", 2)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let configuration = Configuration::builder()
        .component_id("wr-db")
        .configuration_id("500")
        .configuration(json!({"parameters": {"db": "backup"}}))
        .change_description("new target")
        .build();
    let updated = ctx
        .client
        .for_branch(7)
        .update_configuration(configuration)
        .build()
        .send()
        .await
        .unwrap()
        .configuration()
        .unwrap();
    assert_eq!(updated.version, 2);

    let missing_id = Configuration::builder().component_id("wr-db").build();
    let err = ctx
        .client
        .update_configuration(missing_id)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingArgument("configuration_id"))
    ));
}

#[tokio::test]
async fn update_state_requires_object() {
    let ctx = TestContext::new().await;
    Mock::given(method("PUT"))
        .and(path(api_path("components/wr-db/configs/500/state")))
        .and(body_json(json!({"state": {"lastRun": "2025-03-01"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json("500", 2)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .update_configuration_state("wr-db", "500", json!({"lastRun": "2025-03-01"}))
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx
        .client
        .update_configuration_state("wr-db", "500", json!(["not", "an", "object"]))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "state", .. })
    ));
}

#[tokio::test]
async fn versions_and_rollback() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "components/wr-db/configs/500/versions",
        200,
        json!([
            {"version": 2, "created": "2025-03-02T10:00:00+0100", "changeDescription": "new target"},
            {"version": 1, "created": "2025-03-01T10:00:00+0100", "changeDescription": "created"},
        ]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(api_path("components/wr-db/configs/500/versions/1/rollback")))
        .and(body_json(json!({"changeDescription": "undo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json("500", 3)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let versions = ctx
        .client
        .list_configuration_versions("wr-db", "500")
        .build()
        .send()
        .await
        .unwrap()
        .versions()
        .unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[1].change_description, "created");

    let rolled_back = ctx
        .client
        .rollback_configuration("wr-db", "500", 1)
        .change_description("undo")
        .build()
        .send()
        .await
        .unwrap()
        .configuration()
        .unwrap();
    assert_eq!(rolled_back.version, 3);

    let err = ctx
        .client
        .rollback_configuration("wr-db", "500", 0)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn configuration_rows() {
    let ctx = TestContext::new().await;
    let row_json = json!({"id": "r1", "name": "users", "version": 1,
                          "configuration": {"table": "users"}});
    Mock::given(method("POST"))
        .and(path(api_path("components/wr-db/configs/500/rows")))
        .and(body_json(json!({"name": "users", "configuration": {"table": "users"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(row_json.clone()))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "components/wr-db/configs/500/rows",
        200,
        json!([row_json]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("components/wr-db/configs/500/rows/r1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let row = ConfigurationRow::builder()
        .name("users")
        .configuration(json!({"table": "users"}))
        .build();
    let created = ctx
        .client
        .add_configuration_row("wr-db", "500", row)
        .build()
        .send()
        .await
        .unwrap()
        .row()
        .unwrap();
    assert_eq!(created.id, "r1");

    let rows = ctx
        .client
        .list_configuration_rows("wr-db", "500")
        .build()
        .send()
        .await
        .unwrap()
        .rows()
        .unwrap();
    assert_eq!(rows.len(), 1);

    let unnamed = ConfigurationRow::builder().name("orders").build();
    let err = ctx
        .client
        .update_configuration_row("wr-db", "500", unnamed)
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingArgument("row_id"))
    ));

    ctx.client
        .delete_configuration_row("wr-db", "500", "r1")
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_configuration() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("components/wr-db/configs/500")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .delete_configuration("wr-db", "500")
        .build()
        .send()
        .await
        .unwrap();
}
