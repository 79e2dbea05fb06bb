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

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasDevBranch, HasJobResult, HasStorageFields};
use crate::sapi::types::{DevBranch, StorageRequest};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of branch creation; the branch comes from the job results
#[derive(Clone, Debug)]
pub struct CreateDevBranchResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateDevBranchResponse {
    pub fn branch(&self) -> Result<DevBranch, ValidationErr> {
        self.job_results()
    }
}

#[derive(Clone, Debug)]
pub struct ListDevBranchesResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListDevBranchesResponse {
    pub fn branches(&self) -> Result<Vec<DevBranch>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct GetDevBranchResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct UpdateDevBranchResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DeleteDevBranchResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_storage_response!(
    CreateDevBranchResponse,
    ListDevBranchesResponse,
    GetDevBranchResponse,
    UpdateDevBranchResponse,
    DeleteDevBranchResponse,
);
impl_has_storage_fields!(
    CreateDevBranchResponse,
    ListDevBranchesResponse,
    GetDevBranchResponse,
    UpdateDevBranchResponse,
    DeleteDevBranchResponse,
);

impl HasJobResult for CreateDevBranchResponse {}
impl HasJobResult for DeleteDevBranchResponse {}
impl HasDevBranch for GetDevBranchResponse {}
impl HasDevBranch for UpdateDevBranchResponse {}
