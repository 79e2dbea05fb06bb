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
use crate::sapi::response_traits::HasStorageFields;
use crate::sapi::types::{Job, StorageRequest};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of `GET jobs/{id}`
#[derive(Clone, Debug)]
pub struct GetJobResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl GetJobResponse {
    pub fn job(&self) -> Result<Job, ValidationErr> {
        self.json()
    }
}

impl_from_storage_response!(GetJobResponse);
impl_has_storage_fields!(GetJobResponse);
