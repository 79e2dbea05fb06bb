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
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::ListTablesResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_bucket_id;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing tables, in one bucket or in the whole project
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListTables {
    #[builder(!default)]
    client: StorageClient,
    #[builder(default, setter(into, strip_option))]
    bucket_id: Option<String>,
    #[builder(default)]
    include: Vec<String>,
}

impl StorageApi for ListTables {
    type StorageResponse = ListTablesResponse;
}

/// Builder type for ListTables
pub type ListTablesBldr = ListTablesBuilder<((StorageClient,), (), ())>;

impl ToStorageRequest for ListTables {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let path = match &self.bucket_id {
            Some(bucket_id) => {
                check_bucket_id(bucket_id)?;
                bucket_path(bucket_id, "tables")
            }
            None => "tables".to_string(),
        };
        let mut query = Multimap::new();
        if !self.include.is_empty() {
            query.add("include", self.include.join(","));
        }
        Ok(StorageRequest::new(self.client, Method::GET, path).query_params(query))
    }
}
