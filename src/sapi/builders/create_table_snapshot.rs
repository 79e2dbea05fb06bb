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

use super::table_common::table_path;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::CreateTableSnapshotResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_table_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for snapshotting a table
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableSnapshot {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
}

#[derive(Serialize)]
struct CreateTableSnapshotBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl StorageApi for CreateTableSnapshot {
    type StorageResponse = CreateTableSnapshotResponse;
}

/// Builder type for CreateTableSnapshot
pub type CreateTableSnapshotBldr = CreateTableSnapshotBuilder<((StorageClient,), (String,), ())>;

impl ToStorageRequest for CreateTableSnapshot {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            table_path(&self.table_id, "snapshots"),
        )
        .json_body(&CreateTableSnapshotBody {
            description: self.description,
        })?
        .wait_for_job())
    }
}
