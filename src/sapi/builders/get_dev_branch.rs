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
use crate::sapi::response::GetDevBranchResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct GetDevBranch {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    branch_id: u64,
}

impl StorageApi for GetDevBranch {
    type StorageResponse = GetDevBranchResponse;
}

/// Builder type for GetDevBranch
pub type GetDevBranchBldr = GetDevBranchBuilder<((StorageClient,), (u64,))>;

impl ToStorageRequest for GetDevBranch {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            format!("dev-branches/{}", self.branch_id),
        )
        .scope(Scope::Project))
    }
}
