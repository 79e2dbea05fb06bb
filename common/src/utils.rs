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

use serde_json::{Value, json};
use uuid::Uuid;

pub fn rand_bucket_name() -> String {
    format!("test-{}", &Uuid::new_v4().simple().to_string()[..8])
}

pub fn rand_table_name() -> String {
    format!("table_{}", &Uuid::new_v4().simple().to_string()[..8])
}

/// Body of a `202 Accepted` answer that started a job
pub fn accepted_job(job_id: u64, operation: &str) -> Value {
    json!({
        "id": job_id,
        "status": "waiting",
        "operationName": operation,
        "url": format!("https://connection.example.com/v2/storage/jobs/{job_id}"),
        "results": null,
    })
}

/// Job document as returned by `GET jobs/{id}`
pub fn job_json(job_id: u64, operation: &str, status: &str, results: Value) -> Value {
    json!({
        "id": job_id,
        "status": status,
        "operationName": operation,
        "results": results,
        "startTime": "2025-03-01T10:00:00+0100",
        "endTime": "2025-03-01T10:00:05+0100",
    })
}

/// Failed job with a storage error code
pub fn failed_job(job_id: u64, operation: &str, code: &str, message: &str) -> Value {
    json!({
        "id": job_id,
        "status": "error",
        "operationName": operation,
        "results": null,
        "error": {
            "code": code,
            "message": message,
            "exceptionId": format!("exception-{job_id}"),
        },
    })
}

pub fn bucket_json(bucket_id: &str) -> Value {
    let (stage, name) = bucket_id.split_once('.').unwrap_or(("in", bucket_id));
    json!({
        "id": bucket_id,
        "name": name,
        "displayName": name.trim_start_matches("c-"),
        "stage": stage,
        "description": "",
        "backend": "snowflake",
        "created": "2025-03-01T10:00:00+0100",
        "isReadOnly": false,
        "metadata": [],
    })
}

pub fn table_json(table_id: &str, columns: &[&str]) -> Value {
    let name = table_id.rsplit('.').next().unwrap_or(table_id);
    json!({
        "id": table_id,
        "name": name,
        "displayName": name,
        "columns": columns,
        "primaryKey": [],
        "created": "2025-03-01T10:00:00+0100",
        "rowsCount": 2,
        "isAlias": false,
        "metadata": [],
        "columnMetadata": [],
    })
}

pub fn file_json(file_id: u64, url: &str, is_sliced: bool) -> Value {
    json!({
        "id": file_id,
        "name": format!("file-{file_id}.csv"),
        "url": url,
        "sizeBytes": 128,
        "isSliced": is_sliced,
        "isEncrypted": true,
        "created": "2025-03-01T10:00:00+0100",
        "tags": [],
    })
}
