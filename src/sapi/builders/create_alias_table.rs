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
use crate::sapi::types::{AliasFilter, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, check_not_empty, check_table_id};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating an alias of a table in another bucket
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateAliasTable {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    source_table_id: String,
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
    #[builder(default, setter(strip_option))]
    alias_filter: Option<AliasFilter>,
    #[builder(default)]
    alias_columns: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAliasTableBody {
    source_table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias_filter: Option<AliasFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alias_columns: Vec<String>,
}

impl StorageApi for CreateAliasTable {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateAliasTable
pub type CreateAliasTableBldr =
    CreateAliasTableBuilder<((StorageClient,), (String,), (String,), (), (), ())>;

impl ToStorageRequest for CreateAliasTable {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_table_id(&self.source_table_id)?;
        if let Some(filter) = &self.alias_filter {
            check_not_empty("alias_filter.column", &filter.column)?;
        }

        let body = CreateAliasTableBody {
            source_table: self.source_table_id,
            name: self.name,
            alias_filter: self.alias_filter,
            alias_columns: self.alias_columns,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            bucket_path(&self.bucket_id, "table-aliases"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
