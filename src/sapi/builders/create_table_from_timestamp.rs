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
use crate::sapi::utils::{check_bucket_id, check_not_empty, check_table_id};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating a table from the state of another table at
/// a point in time
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableFromTimestamp {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    source_table_id: String,
    /// Point in time, e.g. `2025-01-31 12:00:00` or an RFC 3339 timestamp
    #[builder(!default, setter(into))]
    timestamp: String,
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTableFromTimestampBody {
    source_table_id: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl StorageApi for CreateTableFromTimestamp {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateTableFromTimestamp
pub type CreateTableFromTimestampBldr =
    CreateTableFromTimestampBuilder<((StorageClient,), (String,), (String,), (String,), ())>;

impl ToStorageRequest for CreateTableFromTimestamp {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_table_id(&self.source_table_id)?;
        check_not_empty("timestamp", &self.timestamp)?;

        let body = CreateTableFromTimestampBody {
            source_table_id: self.source_table_id,
            timestamp: self.timestamp,
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
