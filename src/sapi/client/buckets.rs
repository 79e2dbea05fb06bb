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

//! Client methods for bucket operations

use crate::sapi::builders::{
    BucketExists, BucketExistsBldr, CreateBucket, CreateBucketBldr, DropBucket, DropBucketBldr,
    GetBucket, GetBucketBldr, ListBuckets, ListBucketsBldr, UpdateBucket, UpdateBucketBldr,
};
use crate::sapi::client::StorageClient;
use crate::sapi::types::BucketStage;

impl StorageClient {
    /// Lists the buckets of the project (or of the current dev branch).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::StorageApi;
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = client.list_buckets().include(vec!["metadata".into()]).build().send().await?;
    /// for bucket in resp.buckets()? {
    ///     println!("{} ({})", bucket.id, bucket.stage);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }

    pub fn get_bucket<S: Into<String>>(&self, bucket_id: S) -> GetBucketBldr {
        GetBucket::builder().client(self.clone()).bucket_id(bucket_id)
    }

    /// Checks whether a bucket exists. A missing bucket is not an error.
    pub fn bucket_exists<S: Into<String>>(&self, bucket_id: S) -> BucketExistsBldr {
        BucketExists::builder().client(self.clone()).bucket_id(bucket_id)
    }

    /// Creates a bucket.
    ///
    /// The server prefixes `name` with `c-`, so `create_bucket("main", In)`
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
    /// let resp = client
    ///     .create_bucket("main", BucketStage::In)
    ///     .description("Raw input data")
    ///     .build()
    ///     .send()
    ///     .await?;
    /// assert_eq!(resp.bucket()?.id, "in.c-main");
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, name: S, stage: BucketStage) -> CreateBucketBldr {
        CreateBucket::builder()
            .client(self.clone())
            .name(name)
            .stage(stage)
    }

    pub fn update_bucket<S: Into<String>>(&self, bucket_id: S) -> UpdateBucketBldr {
        UpdateBucket::builder().client(self.clone()).bucket_id(bucket_id)
    }

    /// Drops a bucket. With `force(true)` the bucket's tables are dropped too.
    pub fn drop_bucket<S: Into<String>>(&self, bucket_id: S) -> DropBucketBldr {
        DropBucket::builder().client(self.clone()).bucket_id(bucket_id)
    }
}
