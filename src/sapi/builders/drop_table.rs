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
use crate::sapi::response::DropTableResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_table_id;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for dropping a table
#[derive(Clone, Debug, TypedBuilder)]
pub struct DropTable {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    /// Also drop aliases of the table
    #[builder(default)]
    force: bool,
}

impl StorageApi for DropTable {
    type StorageResponse = DropTableResponse;
}

/// Builder type for DropTable
pub type DropTableBldr = DropTableBuilder<((StorageClient,), (String,), ())>;

impl ToStorageRequest for DropTable {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        let mut query = Multimap::new();
        if self.force {
            query.add_flag("force", true);
        }
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            table_path(&self.table_id, ""),
        )
        .query_params(query)
        .wait_for_job())
    }
}
