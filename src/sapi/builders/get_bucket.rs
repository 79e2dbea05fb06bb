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
use crate::sapi::response::GetBucketResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading one bucket
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucket {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
}

impl StorageApi for GetBucket {
    type StorageResponse = GetBucketResponse;
}

/// Builder type for GetBucket
pub type GetBucketBldr = GetBucketBuilder<((StorageClient,), (String,))>;

impl ToStorageRequest for GetBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            format!("buckets/{}", url_encode(&self.bucket_id)),
        ))
    }
}
