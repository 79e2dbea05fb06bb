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
use crate::sapi::response::GetJobResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading the current state of a storage job
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetJob {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    job_id: u64,
}

impl StorageApi for GetJob {
    type StorageResponse = GetJobResponse;
}

/// Builder type for GetJob
pub type GetJobBldr = GetJobBuilder<((StorageClient,), (u64,))>;

impl ToStorageRequest for GetJob {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            format!("jobs/{}", self.job_id),
        )
        .scope(Scope::Project))
    }
}
