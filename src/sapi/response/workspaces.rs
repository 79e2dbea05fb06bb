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

//! Responses of workspace operations

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasJobResult, HasStorageFields, HasWorkspace};
use crate::sapi::types::{StorageRequest, Workspace};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of workspace provisioning
#[derive(Clone, Debug)]
pub struct CreateWorkspaceResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateWorkspaceResponse {
    /// The new workspace, including the connection password
    pub fn workspace(&self) -> Result<Workspace, ValidationErr> {
        self.job_results()
    }
}

#[derive(Clone, Debug)]
pub struct ListWorkspacesResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListWorkspacesResponse {
    pub fn workspaces(&self) -> Result<Vec<Workspace>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct GetWorkspaceResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DeleteWorkspaceResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of a workspace load or clone
#[derive(Clone, Debug)]
pub struct LoadWorkspaceResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct ResetWorkspacePasswordResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ResetWorkspacePasswordResponse {
    pub fn password(&self) -> Result<String, ValidationErr> {
        let json: serde_json::Value = self.json()?;
        json.get("password")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ValidationErr::StrError {
                message: "Missing 'password' field in response".into(),
                source: None,
            })
    }
}

impl_from_storage_response!(
    CreateWorkspaceResponse,
    ListWorkspacesResponse,
    GetWorkspaceResponse,
    DeleteWorkspaceResponse,
    LoadWorkspaceResponse,
    ResetWorkspacePasswordResponse,
);
impl_has_storage_fields!(
    CreateWorkspaceResponse,
    ListWorkspacesResponse,
    GetWorkspaceResponse,
    DeleteWorkspaceResponse,
    LoadWorkspaceResponse,
    ResetWorkspacePasswordResponse,
);

impl HasWorkspace for GetWorkspaceResponse {}
impl HasJobResult for CreateWorkspaceResponse {}
impl HasJobResult for DeleteWorkspaceResponse {}
impl HasJobResult for LoadWorkspaceResponse {}
