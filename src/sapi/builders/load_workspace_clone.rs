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

use super::workspace_common::load_request;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::LoadWorkspaceResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest, WorkspaceLoadInput};
use typed_builder::TypedBuilder;

/// Argument builder for cloning tables into a workspace, on backends that
/// support zero-copy clones
#[derive(Clone, Debug, TypedBuilder)]
pub struct LoadWorkspaceClone {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    workspace_id: u64,
    #[builder(!default)]
    inputs: Vec<WorkspaceLoadInput>,
    #[builder(default)]
    preserve: bool,
}

impl StorageApi for LoadWorkspaceClone {
    type StorageResponse = LoadWorkspaceResponse;
}

/// Builder type for LoadWorkspaceClone
pub type LoadWorkspaceCloneBldr =
    LoadWorkspaceCloneBuilder<((StorageClient,), (u64,), (Vec<WorkspaceLoadInput>,), ())>;

impl ToStorageRequest for LoadWorkspaceClone {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        load_request(
            self.client,
            self.workspace_id,
            "load-clone",
            self.inputs,
            self.preserve,
        )
    }
}
