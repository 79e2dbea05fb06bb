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
use crate::sapi::response::DeleteWorkspaceResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting a workspace, optionally as a job
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteWorkspace {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    workspace_id: u64,
    #[builder(default)]
    async_: bool,
}

impl StorageApi for DeleteWorkspace {
    type StorageResponse = DeleteWorkspaceResponse;
}

/// Builder type for DeleteWorkspace
pub type DeleteWorkspaceBldr = DeleteWorkspaceBuilder<((StorageClient,), (u64,), ())>;

impl ToStorageRequest for DeleteWorkspace {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let mut query = Multimap::new();
        if self.async_ {
            query.add_flag("async", true);
        }
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            format!("workspaces/{}", self.workspace_id),
        )
        .query_params(query)
        .wait_for_job())
    }
}
