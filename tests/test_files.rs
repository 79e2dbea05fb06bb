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

use bytes::Bytes;
use serde_json::json;
use storage_api::sapi::error::{Error, ValidationErr};
use storage_api::sapi::types::{FileUploadOptions, StorageApi};
use storage_api_common::test_context::{TestContext, api_path};
use storage_api_common::utils::file_json;
use wiremock::matchers::{body_json, body_partial_json, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn upload_bytes_prepares_and_posts_form() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("files/prepare")))
        .and(body_partial_json(json!({
            "name": "notes.txt",
            "sizeBytes": 11,
            "isEncrypted": true,
            "tags": ["notes"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 77,
            "name": "notes.txt",
            "uploadParams": {
                "key": "exp-15/77_notes.txt",
                "url": ctx.url("/bucket/"),
                "policy": "eyJleHBpcmF0aW9uIjoi",
                "signature": "c2lnbmF0dXJl",
            },
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bucket/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let options = FileUploadOptions::builder().tags(vec!["notes".into()]).build();
    let file_id = ctx
        .client
        .upload_bytes("notes.txt", Bytes::from_static(b"hello world"), options)
        .await
        .unwrap();
    assert_eq!(file_id, 77);

    let requests = ctx.server.received_requests().await.unwrap();
    let upload = requests.iter().find(|r| r.url.path() == "/bucket/").unwrap();
    assert!(upload.headers.get("X-StorageApi-Token").is_none());
    let body = String::from_utf8_lossy(&upload.body);
    let key_at = body.find("exp-15/77_notes.txt").unwrap();
    let policy_at = body.find("eyJleHBpcmF0aW9uIjoi").unwrap();
    let content_at = body.find("hello world").unwrap();
    assert!(key_at < policy_at && policy_at < content_at);
    assert!(body.contains("filename=\"notes.txt\""));
}

#[tokio::test]
async fn upload_without_target_url_fails() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "files/prepare",
        200,
        json!({"id": 78, "name": "a.csv", "uploadParams": {"key": "exp-15/78"}}),
    )
    .await;

    let err = ctx
        .client
        .upload_bytes("a.csv", Bytes::from_static(b"a"), FileUploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidUploadParams(_))
    ));
}

#[tokio::test]
async fn upload_file_uses_file_name_from_path() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("files/prepare")))
        .and(body_partial_json(json!({"name": "report.csv"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 79,
            "uploadParams": {"key": "exp-15/79", "url": ctx.url("/put")},
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/put"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&ctx.server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("report.csv");
    std::fs::write(&local, "a,b\n1,2\n").unwrap();

    let file_id = ctx
        .client
        .upload_file(&local, FileUploadOptions::default())
        .await
        .unwrap();
    assert_eq!(file_id, 79);
}

#[tokio::test]
async fn download_plain_file() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("files/80")))
        .and(query_param("federationToken", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(file_json(80, &ctx.url("/downloads/80.csv"), false)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/downloads/80.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,name\n1,alice\n"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.csv");
    let file = ctx.client.download_file(80, &dest).await.unwrap();

    assert_eq!(file.id, 80);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "id,name\n1,alice\n");
}

#[tokio::test]
async fn download_sliced_file_in_manifest_order() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "files/81",
        200,
        file_json(81, &ctx.url("/downloads/81/manifest"), true),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/downloads/81/manifest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [
                {"url": ctx.url("/downloads/81/part0001")},
                {"url": ctx.url("/downloads/81/part0000")},
            ]
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/downloads/81/part0000"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"2\",\"bob\"\n"))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/downloads/81/part0001"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"1\",\"alice\"\n"))
        .mount(&ctx.server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("sliced.csv");
    ctx.client.download_file(81, &dest).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&dest).unwrap(),
        "\"1\",\"alice\"\n\"2\",\"bob\"\n"
    );
}

#[tokio::test]
async fn sliced_manifest_with_foreign_scheme_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "files/82",
        200,
        file_json(82, &ctx.url("/downloads/82/manifest"), true),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/downloads/82/manifest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [{"url": "s3://exports/82/part0000"}]
        })))
        .mount(&ctx.server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = ctx
        .client
        .download_file(82, dir.path().join("x.csv"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "url", .. })
    ));
}

#[tokio::test]
async fn files_are_project_scoped() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("files")))
        .and(query_param("tags[]", "export"))
        .and(query_param("limit", "5"))
        .and(header_exists("X-StorageApi-Token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([file_json(83, "https://files.example.com/83", false)])),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let files = ctx
        .client
        .for_branch(456)
        .list_files()
        .tags(vec!["export".into()])
        .limit(5)
        .build()
        .send()
        .await
        .unwrap()
        .files()
        .unwrap();
    assert_eq!(files[0].id, 83);
}

#[tokio::test]
async fn file_tags() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("files/84/tags")))
        .and(body_json(json!({"tag": "archived"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("files/84/tags/archived")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .add_file_tag(84, "archived")
        .build()
        .send()
        .await
        .unwrap();
    ctx.client
        .delete_file_tag(84, "archived")
        .build()
        .send()
        .await
        .unwrap();

    let err = ctx.client.add_file_tag(84, " ").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
