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
use crate::sapi::response::ResetWorkspacePasswordResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct ResetWorkspacePassword {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    workspace_id: u64,
}

impl StorageApi for ResetWorkspacePassword {
    type StorageResponse = ResetWorkspacePasswordResponse;
}

/// Builder type for ResetWorkspacePassword
pub type ResetWorkspacePasswordBldr = ResetWorkspacePasswordBuilder<((StorageClient,), (u64,))>;

impl ToStorageRequest for ResetWorkspacePassword {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            format!("workspaces/{}/password", self.workspace_id),
        ))
    }
}
