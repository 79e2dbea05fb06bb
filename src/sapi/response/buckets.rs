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

//! Responses of bucket operations

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasBucket, HasJobResult, HasStorageFields};
use crate::sapi::types::{Bucket, StorageRequest};
use crate::{impl_from_storage_response, impl_from_storage_response_exists, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of `GET buckets`
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListBucketsResponse {
    pub fn buckets(&self) -> Result<Vec<Bucket>, ValidationErr> {
        self.json()
    }
}

/// Response of `GET buckets/{id}`
#[derive(Clone, Debug)]
pub struct GetBucketResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of a bucket existence check
#[derive(Clone, Debug)]
pub struct BucketExistsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    exists: bool,
}

impl BucketExistsResponse {
    /// False when the server answered 404
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// Response of `POST buckets`
#[derive(Clone, Debug)]
pub struct CreateBucketResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of `PUT buckets/{id}`
#[derive(Clone, Debug)]
pub struct UpdateBucketResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of `DELETE buckets/{id}`
#[derive(Clone, Debug)]
pub struct DropBucketResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_storage_response!(
    ListBucketsResponse,
    GetBucketResponse,
    CreateBucketResponse,
    UpdateBucketResponse,
    DropBucketResponse,
);
impl_from_storage_response_exists!(BucketExistsResponse);
impl_has_storage_fields!(
    ListBucketsResponse,
    GetBucketResponse,
    BucketExistsResponse,
    CreateBucketResponse,
    UpdateBucketResponse,
    DropBucketResponse,
);

impl HasBucket for GetBucketResponse {}
impl HasBucket for CreateBucketResponse {}
impl HasBucket for UpdateBucketResponse {}
impl HasJobResult for DropBucketResponse {}
