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

use super::metadata_common::check_target;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::DeleteMetadataResponse;
use crate::sapi::types::{MetadataTarget, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_not_empty, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteMetadata {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    target: MetadataTarget,
    #[builder(!default, setter(into))]
    metadata_id: String,
}

impl StorageApi for DeleteMetadata {
    type StorageResponse = DeleteMetadataResponse;
}

/// Builder type for DeleteMetadata
pub type DeleteMetadataBldr =
    DeleteMetadataBuilder<((StorageClient,), (MetadataTarget,), (String,))>;

impl ToStorageRequest for DeleteMetadata {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_target(&self.target)?;
        check_not_empty("metadata_id", &self.metadata_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            format!("{}/{}", self.target.path(), url_encode(&self.metadata_id)),
        ))
    }
}
