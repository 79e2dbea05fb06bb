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
use std::io::Write;
use storage_api::sapi::csv::CsvTable;
use storage_api::sapi::error::{Error, ValidationErr};
use storage_api::sapi::response_traits::HasTable;
use storage_api::sapi::types::{
    ColumnDefinition, CreateTableOptions, StorageApi, WhereOperator, WriteTableOptions,
};
use storage_api_common::test_context::{TestContext, api_path};
use storage_api_common::utils::{accepted_job, failed_job, rand_table_name, table_json};
use wiremock::matchers::{
    body_partial_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, ResponseTemplate};

/// Mounts `files/prepare` and the upload target for file `file_id`
async fn mock_upload(ctx: &TestContext, file_id: u64) {
    mock_upload_containing(ctx, file_id, "").await;
}

/// Like [`mock_upload`], but the uploaded form must contain `content`
async fn mock_upload_containing(ctx: &TestContext, file_id: u64, content: &str) {
    Mock::given(method("POST"))
        .and(path(api_path("files/prepare")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": file_id,
            "name": "upload.csv",
            "uploadParams": {
                "key": format!("exp-15/{file_id}.csv"),
                "url": ctx.url("/upload"),
                "acl": "private",
            },
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains(content))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

fn csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn list_tables_in_bucket() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "buckets/in.c-main/tables",
        200,
        json!([table_json("in.c-main.users", &["id", "name"])]),
    )
    .await;
    ctx.mock_json(
        "GET",
        "tables",
        200,
        json!([
            table_json("in.c-main.users", &["id", "name"]),
            table_json("out.c-reports.daily", &["day", "total"]),
        ]),
    )
    .await;

    let in_bucket = ctx
        .client
        .list_tables()
        .bucket_id("in.c-main")
        .build()
        .send()
        .await
        .unwrap()
        .tables()
        .unwrap();
    assert_eq!(in_bucket.len(), 1);
    assert_eq!(in_bucket[0].columns, vec!["id", "name"]);

    let all = ctx.client.list_tables().build().send().await.unwrap();
    assert_eq!(all.tables().unwrap().len(), 2);
}

#[tokio::test]
async fn get_table_and_exists() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "GET",
        "tables/in.c-main.users",
        200,
        table_json("in.c-main.users", &["id", "name"]),
    )
    .await;
    ctx.mock_json(
        "GET",
        "tables/in.c-main.gone",
        404,
        json!({"error": "table not found", "code": "storage.tables.notFound"}),
    )
    .await;

    let table = ctx
        .client
        .get_table("in.c-main.users")
        .build()
        .send()
        .await
        .unwrap()
        .table()
        .unwrap();
    assert_eq!(table.name, "users");
    assert_eq!(table.rows_count, Some(2));

    let gone = ctx
        .client
        .table_exists("in.c-main.gone")
        .build()
        .send()
        .await
        .unwrap();
    assert!(!gone.exists());
}

#[tokio::test]
async fn invalid_table_id_is_rejected_locally() {
    let ctx = TestContext::new().await;

    let err = ctx.client.get_table("users").build().send().await.unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationErr::InvalidTableId(_))));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_table_from_local_file() {
    let ctx = TestContext::new().await;
    let name = rand_table_name();
    let table_id = format!("in.c-main.{name}");
    mock_upload(&ctx, 501).await;

    Mock::given(method("POST"))
        .and(path(api_path("buckets/in.c-main/tables-async")))
        .and(body_partial_json(json!({
            "name": name,
            "dataFileId": 501,
            "primaryKey": "id",
            "delimiter": ";",
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(31, "tableCreate")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/31",
        200,
        json!({
            "id": 31,
            "status": "success",
            "operationName": "tableCreate",
            "tableId": table_id,
            "results": table_json(&table_id, &["id", "name"]),
        }),
    )
    .await;

    let file = csv_file("id;name\n1;alice\n2;bob\n");
    let options = CreateTableOptions::builder()
        .delimiter(';')
        .primary_key(vec!["id".into()])
        .build();
    let resp = ctx
        .client
        .create_table("in.c-main", name.as_str(), file.path(), options)
        .await
        .unwrap();

    assert_eq!(resp.table_id().unwrap(), table_id);
    assert_eq!(resp.table().unwrap().columns, vec!["id", "name"]);

    let upload = ctx
        .server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.url.path() == "/upload")
        .unwrap();
    let content_type = upload.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("exp-15/501.csv"));
    assert!(body.contains("1;alice"));
}

#[tokio::test]
async fn write_table_incrementally() {
    let ctx = TestContext::new().await;
    mock_upload(&ctx, 502).await;
    Mock::given(method("POST"))
        .and(path(api_path("tables/in.c-main.users/import-async")))
        .and(body_partial_json(json!({"dataFileId": 502, "incremental": true})))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(32, "tableImport")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/32",
        200,
        json!({
            "id": 32,
            "status": "success",
            "operationName": "tableImport",
            "results": {"importedRowsCount": 2, "importedColumns": ["id", "name"], "warnings": []},
        }),
    )
    .await;

    let file = csv_file("id,name\n3,carol\n4,dave\n");
    let options = WriteTableOptions::builder().incremental(true).build();
    let resp = ctx
        .client
        .write_table("in.c-main.users", file.path(), options)
        .await
        .unwrap();

    let result = resp.import_result().unwrap();
    assert_eq!(result.imported_rows_count, Some(2));
    assert_eq!(result.imported_columns, vec!["id", "name"]);
}

#[tokio::test]
async fn export_table_async_reports_file_id() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(api_path("tables/in.c-main.users/export-async")))
        .and(body_partial_json(json!({
            "changedSince": "2024-05-02T08:11:12Z",
            "changedUntil": "-1 hours",
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(36, "tableExport")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/36",
        200,
        json!({
            "id": 36,
            "status": "success",
            "operationName": "tableExport",
            "results": {"file": {"id": "601"}},
        }),
    )
    .await;

    let since = chrono::DateTime::parse_from_rfc3339("2024-05-02T10:11:12+02:00")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let resp = ctx
        .client
        .export_table_async("in.c-main.users")
        .changed_since(since)
        .changed_until("-1 hours")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.file_id().unwrap(), 601);
}

fn users_rows() -> CsvTable {
    CsvTable {
        header: vec!["id".into(), "name".into()],
        rows: vec![
            vec!["5".into(), "erin".into()],
            vec!["6".into(), "frank \"the tank\"".into()],
        ],
    }
}

#[tokio::test]
async fn write_table_rows_uploads_generated_csv() {
    let ctx = TestContext::new().await;
    mock_upload_containing(
        &ctx,
        503,
        "\"id\",\"name\"\n\"5\",\"erin\"\n\"6\",\"frank \"\"the tank\"\"\"\n",
    )
    .await;
    Mock::given(method("POST"))
        .and(path(api_path("tables/in.c-main.users/import-async")))
        .and(body_partial_json(json!({"dataFileId": 503, "incremental": true})))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(34, "tableImport")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/34",
        200,
        json!({
            "id": 34,
            "status": "success",
            "operationName": "tableImport",
            "results": {"importedRowsCount": 2, "importedColumns": ["id", "name"], "warnings": []},
        }),
    )
    .await;

    let options = WriteTableOptions::builder().incremental(true).build();
    let resp = ctx
        .client
        .write_table_rows("in.c-main.users", &users_rows(), options)
        .await
        .unwrap();

    let result = resp.import_result().unwrap();
    assert_eq!(result.imported_rows_count, Some(2));
    assert_eq!(result.imported_columns, vec!["id", "name"]);
}

#[tokio::test]
async fn write_table_rows_without_headers_uses_delimiter() {
    let ctx = TestContext::new().await;
    mock_upload_containing(&ctx, 504, "\"5\";\"erin\"\n").await;
    Mock::given(method("POST"))
        .and(path(api_path("tables/in.c-main.users/import-async")))
        .and(body_partial_json(json!({
            "dataFileId": 504,
            "delimiter": ";",
            "withoutHeaders": true,
            "columns": ["id", "name"],
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(35, "tableImport")))
        .expect(1)
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/35",
        200,
        json!({
            "id": 35,
            "status": "success",
            "operationName": "tableImport",
            "results": {"importedRowsCount": 2},
        }),
    )
    .await;

    let options = WriteTableOptions::builder()
        .delimiter(';')
        .without_headers(true)
        .build();
    let resp = ctx
        .client
        .write_table_rows("in.c-main.users", &users_rows(), options)
        .await
        .unwrap();
    assert_eq!(resp.import_result().unwrap().imported_rows_count, Some(2));
}

#[tokio::test]
async fn write_table_rows_rejects_multibyte_delimiter() {
    let ctx = TestContext::new().await;
    let options = WriteTableOptions::builder().delimiter('\u{2016}').build();
    let err = ctx
        .client
        .write_table_rows("in.c-main.users", &users_rows(), options)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "delimiter", .. })
    ));
}

#[tokio::test]
async fn failed_job_surfaces_error_code() {
    let ctx = TestContext::new().await;
    ctx.mock_json(
        "POST",
        "tables/in.c-main.users/import-async",
        202,
        accepted_job(33, "tableImport"),
    )
    .await;
    ctx.mock_json(
        "GET",
        "jobs/33",
        200,
        failed_job(33, "tableImport", "storage.tables.validation", "Invalid columns"),
    )
    .await;

    let err = ctx
        .client
        .write_table_async("in.c-main.users", 900)
        .build()
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("storage.tables.validation"));
    match err {
        Error::Server(e) => {
            assert_eq!(e.job_id, Some(33));
            assert_eq!(e.exception_id.as_deref(), Some("exception-33"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn headerless_import_needs_columns() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .write_table_async("in.c-main.users", 900)
        .without_headers(true)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidArgument { name: "columns", .. })
    ));
}

#[tokio::test]
async fn create_table_definition_checks_primary_key() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .create_table_definition(
            "in.c-main",
            "typed",
            vec![ColumnDefinition::typed("id", "INTEGER")],
        )
        .primary_keys_names(vec!["email".into()])
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationErr::InvalidColumnName(_))));

    ctx.mock_job(
        "POST",
        "buckets/in.c-main/tables-definition",
        34,
        "tableDefinitionCreate",
        table_json("in.c-main.typed", &["id"]),
    )
    .await;
    let resp = ctx
        .client
        .create_table_definition(
            "in.c-main",
            "typed",
            vec![ColumnDefinition::typed("id", "INTEGER")],
        )
        .primary_keys_names(vec!["id".into()])
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.table_id().unwrap(), "in.c-main.typed");
}

#[tokio::test]
async fn data_preview_as_csv() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(api_path("tables/in.c-main.users/data-preview")))
        .and(header("Accept", "text/csv"))
        .and(query_param("format", "rfc"))
        .and(query_param("limit", "10"))
        .and(query_param("whereColumn", "name"))
        .and(query_param("whereValues[]", "alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("\"id\",\"name\"\n\"1\",\"alice\"\n")
                .insert_header("Content-Type", "text/csv"),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let csv = ctx
        .client
        .get_table_data_preview("in.c-main.users")
        .limit(10)
        .where_column("name")
        .where_values(vec!["alice".into()])
        .build()
        .send()
        .await
        .unwrap()
        .csv()
        .unwrap();

    assert_eq!(csv.header, vec!["id", "name"]);
    assert_eq!(csv.column("name").unwrap(), vec!["alice"]);
}

#[tokio::test]
async fn delete_rows_with_filter() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("tables/in.c-main.users/rows")))
        .and(query_param("whereColumn", "country"))
        .and(query_param("whereOperator", "ne"))
        .respond_with(ResponseTemplate::new(202).set_body_json(accepted_job(35, "tableRowsDelete")))
        .mount(&ctx.server)
        .await;
    ctx.mock_json(
        "GET",
        "jobs/35",
        200,
        json!({"id": 35, "status": "success", "operationName": "tableRowsDelete",
               "results": {"deletedRows": 7}}),
    )
    .await;

    let resp = ctx
        .client
        .delete_table_rows("in.c-main.users")
        .where_column("country")
        .where_values(vec!["CZ".into()])
        .where_operator(WhereOperator::Ne)
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.deleted_rows().unwrap(), 7);
}

#[tokio::test]
async fn filter_values_need_a_column() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .delete_table_rows("in.c-main.users")
        .where_values(vec!["CZ".into()])
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingArgument("where_column"))
    ));
}

#[tokio::test]
async fn snapshots() {
    let ctx = TestContext::new().await;
    ctx.mock_job(
        "POST",
        "tables/in.c-main.users/snapshots",
        36,
        "tableSnapshotCreate",
        json!({"id": 9001, "description": "before import"}),
    )
    .await;
    ctx.mock_json(
        "GET",
        "tables/in.c-main.users/snapshots",
        200,
        json!([{"id": 9001, "description": "before import", "created": "2025-03-01T10:00:00+0100"}]),
    )
    .await;

    let snapshot_id = ctx
        .client
        .create_table_snapshot("in.c-main.users")
        .build()
        .send()
        .await
        .unwrap()
        .snapshot_id()
        .unwrap();
    assert_eq!(snapshot_id, "9001");

    let snapshots = ctx
        .client
        .list_table_snapshots("in.c-main.users")
        .build()
        .send()
        .await
        .unwrap()
        .snapshots()
        .unwrap();
    assert_eq!(snapshots[0].id, "9001");
}
