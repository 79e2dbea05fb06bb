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
use storage_api::sapi::response_traits::HasMetadata;
use storage_api::sapi::types::{MetadataItem, MetadataTarget, StorageApi};
use storage_api_common::test_context::{TestContext, api_path};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn entry(id: u64, key: &str, value: &str) -> serde_json::Value {
    json!({
        "id": id,
        "key": key,
        "value": value,
        "provider": "user",
        "timestamp": "2025-03-01T10:00:00+0100",
    })
}

#[tokio::test]
async fn post_and_list_table_metadata() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("tables/in.c-main.users/metadata")))
        .and(body_json(json!({
            "provider": "user",
            "metadata": [{"key": "KBC.description", "value": "All users"}],
            "columnsMetadata": {"email": [{"key": "KBC.datatype.basetype", "value": "STRING"}]},
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([entry(1, "KBC.description", "All users")])),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "tables/in.c-main.users/metadata",
        200,
        json!([entry(1, "KBC.description", "All users")]),
    )
    .await;

    let posted = ctx
        .client
        .post_table_metadata(
            "in.c-main.users",
            "user",
            vec![MetadataItem::new("KBC.description", "All users")],
        )
        .columns_metadata(HashMap::from([(
            "email".to_string(),
            vec![MetadataItem::new("KBC.datatype.basetype", "STRING")],
        )]))
        .build()
        .send()
        .await
        .unwrap()
        .metadata()
        .unwrap();
    assert_eq!(posted[0].id, "1");

    let listed = ctx
        .client
        .list_table_metadata("in.c-main.users")
        .build()
        .send()
        .await
        .unwrap()
        .metadata()
        .unwrap();
    assert_eq!(listed[0].value, "All users");
}

#[tokio::test]
async fn column_and_bucket_metadata_paths() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "columns/in.c-main.users.email/metadata",
        200,
        json!([entry(2, "KBC.datatype.type", "VARCHAR")]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("buckets/in.c-main/metadata/3")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let column = ctx
        .client
        .list_column_metadata("in.c-main.users.email")
        .build()
        .send()
        .await
        .unwrap()
        .metadata()
        .unwrap();
    assert_eq!(column[0].key, "KBC.datatype.type");

    ctx.client
        .delete_bucket_metadata("in.c-main", "3")
        .build()
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn metadata_validation() {
    let ctx = TestContext::new().await;

    let empty = ctx
        .client
        .post_bucket_metadata("in.c-main", "user", vec![])
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        empty,
        Error::Validation(ValidationErr::InvalidMetadata(_))
    ));

    let blank_key = ctx
        .client
        .post_bucket_metadata("in.c-main", "user", vec![MetadataItem::new("", "x")])
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        blank_key,
        Error::Validation(ValidationErr::InvalidMetadata(_))
    ));

    let columns_on_bucket = ctx
        .client
        .post_metadata(
            MetadataTarget::Bucket("in.c-main".into()),
            "user",
            vec![MetadataItem::new("k", "v")],
        )
        .columns_metadata(HashMap::from([(
            "email".to_string(),
            vec![MetadataItem::new("k", "v")],
        )]))
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        columns_on_bucket,
        Error::Validation(ValidationErr::InvalidMetadata(_))
    ));

    let no_provider = ctx
        .client
        .post_table_metadata("in.c-main.users", "", vec![MetadataItem::new("k", "v")])
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(no_provider, Error::Validation(_)));

    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}
