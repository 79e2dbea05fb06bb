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
use crate::sapi::response::ListDevBranchesResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct ListDevBranches {
    #[builder(!default)]
    client: StorageClient,
}

impl StorageApi for ListDevBranches {
    type StorageResponse = ListDevBranchesResponse;
}

/// Builder type for ListDevBranches
pub type ListDevBranchesBldr = ListDevBranchesBuilder<((StorageClient,),)>;

impl ToStorageRequest for ListDevBranches {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        Ok(StorageRequest::new(self.client, Method::GET, "dev-branches").scope(Scope::Project))
    }
}
