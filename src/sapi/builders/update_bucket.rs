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
use crate::sapi::response::UpdateBucketResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, url_encode};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for changing a bucket's display name or description
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateBucket {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(default, setter(into, strip_option))]
    display_name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBucketBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl StorageApi for UpdateBucket {
    type StorageResponse = UpdateBucketResponse;
}

/// Builder type for UpdateBucket
pub type UpdateBucketBldr = UpdateBucketBuilder<((StorageClient,), (String,), (), ())>;

impl ToStorageRequest for UpdateBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        if self.display_name.is_none() && self.description.is_none() {
            return Err(ValidationErr::MissingArgument("display_name or description"));
        }
        let body = UpdateBucketBody {
            display_name: self.display_name,
            description: self.description,
        };
        StorageRequest::new(
            self.client,
            Method::PUT,
            format!("buckets/{}", url_encode(&self.bucket_id)),
        )
        .json_body(&body)
    }
}
