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
use crate::sapi::response::TableJobResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_table_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for defining a table's primary key
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTablePrimaryKey {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(!default)]
    columns: Vec<String>,
}

#[derive(Serialize)]
struct CreateTablePrimaryKeyBody {
    columns: Vec<String>,
}

impl StorageApi for CreateTablePrimaryKey {
    type StorageResponse = TableJobResponse;
}

/// Builder type for CreateTablePrimaryKey
pub type CreateTablePrimaryKeyBldr =
    CreateTablePrimaryKeyBuilder<((StorageClient,), (String,), (Vec<String>,))>;

impl ToStorageRequest for CreateTablePrimaryKey {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        if self.columns.is_empty() {
            return Err(ValidationErr::InvalidArgument {
                name: "columns",
                reason: "a primary key needs at least one column".into(),
            });
        }
        if self.columns.iter().any(|c| c.trim().is_empty()) {
            return Err(ValidationErr::InvalidColumnName(
                "column name cannot be empty".into(),
            ));
        }
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            table_path(&self.table_id, "primary-key"),
        )
        .json_body(&CreateTablePrimaryKeyBody {
            columns: self.columns,
        })?
        .wait_for_job())
    }
}
