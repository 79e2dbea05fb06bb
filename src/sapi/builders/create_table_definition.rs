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
use crate::sapi::types::{ColumnDefinition, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, check_not_empty};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating a typed table from column definitions
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableDefinition {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    name: String,
    #[builder(!default)]
    columns: Vec<ColumnDefinition>,
    #[builder(default)]
    primary_keys_names: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTableDefinitionBody {
    name: String,
    primary_keys_names: Vec<String>,
    columns: Vec<ColumnDefinition>,
}

impl StorageApi for CreateTableDefinition {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateTableDefinition
pub type CreateTableDefinitionBldr = CreateTableDefinitionBuilder<(
    (StorageClient,),
    (String,),
    (String,),
    (Vec<ColumnDefinition>,),
    (),
)>;

impl ToStorageRequest for CreateTableDefinition {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_not_empty("name", &self.name)?;
        if self.columns.is_empty() {
            return Err(ValidationErr::InvalidArgument {
                name: "columns",
                reason: "at least one column is required".into(),
            });
        }
        for column in &self.columns {
            if column.name.is_empty() {
                return Err(ValidationErr::InvalidColumnName(
                    "column name cannot be empty".into(),
                ));
            }
        }
        for key in &self.primary_keys_names {
            if !self.columns.iter().any(|c| &c.name == key) {
                return Err(ValidationErr::InvalidColumnName(format!(
                    "primary key column '{key}' is not among the table columns"
                )));
            }
        }

        let body = CreateTableDefinitionBody {
            name: self.name,
            primary_keys_names: self.primary_keys_names,
            columns: self.columns,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            bucket_path(&self.bucket_id, "tables-definition"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
