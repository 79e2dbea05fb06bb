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
use crate::sapi::response::CreateBucketResponse;
use crate::sapi::types::{Backend, BucketStage, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating a bucket.
///
/// The server prefixes the name with `c-`, so `create_bucket("main", In)`
/// creates `in.c-main`.
///
/// # Example
///
/// ```no_run
/// use storage_api::sapi::client::StorageClient;
/// use storage_api::sapi::response_traits::HasBucket;
/// use storage_api::sapi::types::{BucketStage, StorageApi};
///
/// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
/// let response = client
///     .create_bucket("main", BucketStage::In)
///     .description("Raw data")
///     .build()
///     .send()
///     .await?;
/// println!("created {}", response.bucket()?.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    name: String,
    #[builder(!default)]
    stage: BucketStage,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
    #[builder(default, setter(strip_option))]
    backend: Option<Backend>,
    #[builder(default, setter(into, strip_option))]
    display_name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBucketBody {
    name: String,
    stage: BucketStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend: Option<Backend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl StorageApi for CreateBucket {
    type StorageResponse = CreateBucketResponse;
}

/// Builder type for CreateBucket
pub type CreateBucketBldr =
    CreateBucketBuilder<((StorageClient,), (String,), (BucketStage,), (), (), ())>;

impl ToStorageRequest for CreateBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("name", &self.name)?;
        if matches!(self.stage, BucketStage::Unknown | BucketStage::Sys) {
            return Err(ValidationErr::InvalidArgument {
                name: "stage",
                reason: format!(
                    "buckets can only be created in stage in or out, not {}",
                    self.stage
                ),
            });
        }

        let body = CreateBucketBody {
            name: self.name,
            stage: self.stage,
            description: self.description,
            backend: self.backend,
            display_name: self.display_name,
        };
        StorageRequest::new(self.client, Method::POST, "buckets").json_body(&body)
    }
}
