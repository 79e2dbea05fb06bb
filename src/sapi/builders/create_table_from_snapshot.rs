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

use super::table_common::bucket_path;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::CreateTableResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, check_not_empty};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for restoring a table snapshot into a new table
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableFromSnapshot {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    snapshot_id: String,
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTableFromSnapshotBody {
    snapshot_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl StorageApi for CreateTableFromSnapshot {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateTableFromSnapshot
pub type CreateTableFromSnapshotBldr =
    CreateTableFromSnapshotBuilder<((StorageClient,), (String,), (String,), ())>;

impl ToStorageRequest for CreateTableFromSnapshot {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_not_empty("snapshot_id", &self.snapshot_id)?;

        let body = CreateTableFromSnapshotBody {
            snapshot_id: self.snapshot_id,
            name: self.name,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            bucket_path(&self.bucket_id, "tables-async"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
