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
use crate::sapi::response::TableExistsResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_table_id;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for checking whether a table exists
#[derive(Clone, Debug, TypedBuilder)]
pub struct TableExists {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
}

impl StorageApi for TableExists {
    type StorageResponse = TableExistsResponse;
}

/// Builder type for TableExists
pub type TableExistsBldr = TableExistsBuilder<((StorageClient,), (String,))>;

impl ToStorageRequest for TableExists {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            table_path(&self.table_id, ""),
        ))
    }
}
