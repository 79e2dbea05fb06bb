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

//! Responses of file storage operations

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasFileInfo, HasStorageFields};
use crate::sapi::types::{FileInfo, StorageRequest};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of `POST files/prepare`; the file carries `upload_params`
#[derive(Clone, Debug)]
pub struct PrepareFileUploadResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of `GET files`
#[derive(Clone, Debug)]
pub struct ListFilesResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListFilesResponse {
    pub fn files(&self) -> Result<Vec<FileInfo>, ValidationErr> {
        self.json()
    }
}

/// Response of `GET files/{id}`
#[derive(Clone, Debug)]
pub struct GetFileResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DeleteFileResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct AddFileTagResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DeleteFileTagResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_storage_response!(
    PrepareFileUploadResponse,
    ListFilesResponse,
    GetFileResponse,
    DeleteFileResponse,
    AddFileTagResponse,
    DeleteFileTagResponse,
);
impl_has_storage_fields!(
    PrepareFileUploadResponse,
    ListFilesResponse,
    GetFileResponse,
    DeleteFileResponse,
    AddFileTagResponse,
    DeleteFileTagResponse,
);

impl HasFileInfo for PrepareFileUploadResponse {}
impl HasFileInfo for GetFileResponse {}
