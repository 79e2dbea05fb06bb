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

use super::table_common::{RowFilter, table_path};
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::ExportTableResponse;
use crate::sapi::types::{
    ExportOptions, StorageApi, StorageRequest, ToStorageRequest, WhereOperator,
};
use crate::sapi::utils::{ChangeBound, check_table_id};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for exporting a table into a file.
///
/// The finished job carries the id of the exported file.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ExportTableAsync {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(default, setter(strip_option))]
    limit: Option<u64>,
    #[builder(default)]
    columns: Vec<String>,
    #[builder(default, setter(into, strip_option))]
    where_column: Option<String>,
    #[builder(default)]
    where_values: Vec<String>,
    #[builder(default, setter(strip_option))]
    where_operator: Option<WhereOperator>,
    #[builder(
        default,
        setter(transform = |bound: impl Into<ChangeBound>| Some(bound.into().into_inner()))
    )]
    changed_since: Option<String>,
    #[builder(
        default,
        setter(transform = |bound: impl Into<ChangeBound>| Some(bound.into().into_inner()))
    )]
    changed_until: Option<String>,
    #[builder(default)]
    gzip: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportTableAsyncBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    where_column: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    where_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    where_operator: Option<WhereOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed_since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed_until: Option<String>,
    gzip: bool,
}

impl StorageApi for ExportTableAsync {
    type StorageResponse = ExportTableResponse;
}

/// Builder type for ExportTableAsync
pub type ExportTableAsyncBldr = ExportTableAsyncBuilder<(
    (StorageClient,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl ExportTableAsync {
    /// Uncompressed export with the given filters
    pub(crate) fn from_options(
        client: StorageClient,
        table_id: String,
        options: ExportOptions,
    ) -> Self {
        Self {
            client,
            table_id,
            limit: options.limit,
            columns: options.columns,
            where_column: options.where_column,
            where_values: options.where_values,
            where_operator: options.where_operator,
            changed_since: options.changed_since,
            changed_until: options.changed_until,
            gzip: false,
        }
    }
}

impl ToStorageRequest for ExportTableAsync {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        RowFilter {
            where_column: self.where_column.clone(),
            where_values: self.where_values.clone(),
            ..Default::default()
        }
        .validate()?;

        let body = ExportTableAsyncBody {
            limit: self.limit,
            columns: self.columns,
            where_column: self.where_column,
            where_values: self.where_values,
            where_operator: self.where_operator,
            changed_since: self.changed_since,
            changed_until: self.changed_until,
            gzip: self.gzip,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            table_path(&self.table_id, "export-async"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
