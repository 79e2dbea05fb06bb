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
use crate::sapi::multimap_ext::Multimap;
use crate::sapi::response::DeleteTableRowsResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest, WhereOperator};
use crate::sapi::utils::{ChangeBound, check_table_id};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting table rows.
///
/// Without a filter every row is deleted.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteTableRows {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
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

impl StorageApi for DeleteTableRows {
    type StorageResponse = DeleteTableRowsResponse;
}

/// Builder type for DeleteTableRows
pub type DeleteTableRowsBldr =
    DeleteTableRowsBuilder<((StorageClient,), (String,), (), (), (), (), ())>;

impl ToStorageRequest for DeleteTableRows {
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
        filter.add_to_query(&mut query);
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            table_path(&self.table_id, "rows"),
        )
        .query_params(query)
        .wait_for_job())
    }
}
