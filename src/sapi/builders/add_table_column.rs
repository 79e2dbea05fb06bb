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
use crate::sapi::types::{ColumnTypeDefinition, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_table_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for adding a column to a table
#[derive(Clone, Debug, TypedBuilder)]
pub struct AddTableColumn {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(!default, setter(into))]
    name: String,
    /// Backend-native type, for typed tables
    #[builder(default, setter(strip_option))]
    definition: Option<ColumnTypeDefinition>,
    /// Backend-agnostic type, for typed tables
    #[builder(default, setter(into, strip_option))]
    basetype: Option<String>,
}

#[derive(Serialize)]
struct AddTableColumnBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<ColumnTypeDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basetype: Option<String>,
}

impl StorageApi for AddTableColumn {
    type StorageResponse = TableJobResponse;
}

/// Builder type for AddTableColumn
pub type AddTableColumnBldr =
    AddTableColumnBuilder<((StorageClient,), (String,), (String,), (), ())>;

impl ToStorageRequest for AddTableColumn {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        if self.name.trim().is_empty() {
            return Err(ValidationErr::InvalidColumnName(
                "column name cannot be empty".into(),
            ));
        }
        if self.definition.is_some() && self.basetype.is_some() {
            return Err(ValidationErr::InvalidArgument {
                name: "definition",
                reason: "definition and basetype are mutually exclusive".into(),
            });
        }

        let body = AddTableColumnBody {
            name: self.name,
            definition: self.definition,
            basetype: self.basetype,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            table_path(&self.table_id, "columns"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
