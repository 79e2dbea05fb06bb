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

use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::GetFileResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading one file.
///
/// `federation_token` asks for temporary cloud credentials along with the
/// download URL.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetFile {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    file_id: u64,
    #[builder(default)]
    federation_token: bool,
}

impl StorageApi for GetFile {
    type StorageResponse = GetFileResponse;
}

/// Builder type for GetFile
pub type GetFileBldr = GetFileBuilder<((StorageClient,), (u64,), ())>;

impl ToStorageRequest for GetFile {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let mut query = Multimap::new();
        if self.federation_token {
            query.add_flag("federationToken", true);
        }
        Ok(
            StorageRequest::new(self.client, Method::GET, format!("files/{}", self.file_id))
                .scope(Scope::Project)
                .query_params(query),
        )
    }
}
