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
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::DropBucketResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for dropping a bucket.
///
/// `force` drops a bucket that still holds tables. With `async_` the server
/// drops the bucket in a job, which is polled to completion.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DropBucket {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(default)]
    force: bool,
    #[builder(default)]
    async_: bool,
}

impl StorageApi for DropBucket {
    type StorageResponse = DropBucketResponse;
}

/// Builder type for DropBucket
pub type DropBucketBldr = DropBucketBuilder<((StorageClient,), (String,), (), ())>;

impl ToStorageRequest for DropBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        let mut query = Multimap::new();
        if self.force {
            query.add_flag("force", true);
        }
        if self.async_ {
            query.add_flag("async", true);
        }
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            format!("buckets/{}", url_encode(&self.bucket_id)),
        )
        .query_params(query)
        .wait_for_job())
    }
}
