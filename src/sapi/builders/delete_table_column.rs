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
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::TableJobResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_table_id, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for removing a column from a table
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteTableColumn {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(!default, setter(into))]
    name: String,
    /// Also remove the column from aliases
    #[builder(default)]
    force: bool,
}

impl StorageApi for DeleteTableColumn {
    type StorageResponse = TableJobResponse;
}

/// Builder type for DeleteTableColumn
pub type DeleteTableColumnBldr =
    DeleteTableColumnBuilder<((StorageClient,), (String,), (String,), ())>;

impl ToStorageRequest for DeleteTableColumn {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        if self.name.trim().is_empty() {
            return Err(ValidationErr::InvalidColumnName(
                "column name cannot be empty".into(),
            ));
        }
        let mut query = Multimap::new();
        if self.force {
            query.add_flag("force", true);
        }
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            table_path(&self.table_id, &format!("columns/{}", url_encode(&self.name))),
        )
        .query_params(query)
        .wait_for_job())
    }
}
