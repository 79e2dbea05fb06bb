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
use crate::sapi::response::PrepareFileUploadResponse;
use crate::sapi::types::{FileUploadOptions, Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for registering a new file and obtaining upload
/// parameters
#[derive(Clone, Debug, TypedBuilder)]
pub struct PrepareFileUpload {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    options: FileUploadOptions,
}

impl StorageApi for PrepareFileUpload {
    type StorageResponse = PrepareFileUploadResponse;
}

/// Builder type for PrepareFileUpload
pub type PrepareFileUploadBldr = PrepareFileUploadBuilder<((StorageClient,), (FileUploadOptions,))>;

impl ToStorageRequest for PrepareFileUpload {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        if let Some(name) = &self.options.file_name {
            check_not_empty("file_name", name)?;
        }
        Ok(
            StorageRequest::new(self.client, Method::POST, "files/prepare")
                .scope(Scope::Project)
                .json_body(&self.options)?,
        )
    }
}
