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
use crate::sapi::header_constants::{ACCEPT, TEXT_CSV};
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::TableDataPreviewResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest, WhereOperator};
use crate::sapi::utils::{ChangeBound, check_table_id};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading a sample of table rows as CSV
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetTableDataPreview {
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
}

impl StorageApi for GetTableDataPreview {
    type StorageResponse = TableDataPreviewResponse;
}

/// Builder type for GetTableDataPreview
pub type GetTableDataPreviewBldr = GetTableDataPreviewBuilder<(
    (StorageClient,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl ToStorageRequest for GetTableDataPreview {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        let filter = RowFilter {
            where_column: self.where_column,
            where_values: self.where_values,
            where_operator: self.where_operator,
            changed_since: self.changed_since,
            changed_until: self.changed_until,
        };
        filter.validate()?;

        let mut query = Multimap::new();
        query.add("format", "rfc");
        query.add_opt("limit", self.limit.map(|l| l.to_string()));
        if !self.columns.is_empty() {
            query.add("columns", self.columns.join(","));
        }
        filter.add_to_query(&mut query);

        let mut headers = Multimap::new();
        headers.add(ACCEPT, TEXT_CSV);

        let mut request = StorageRequest::new(
            self.client,
            Method::GET,
            table_path(&self.table_id, "data-preview"),
        )
        .query_params(query);
        request.headers = headers;
        Ok(request)
    }
}
