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

//! Trait composition for Storage API responses
//!
//! Every response keeps the request it answers together with the response
//! headers and the raw body. Typed accessors decode the body on demand.

use crate::sapi::error::ValidationErr;
use crate::sapi::types::job::{is_job_document, job_result_value};
use crate::sapi::types::{
    Bucket, ConfigurationDetail, DevBranch, FileInfo, Job, MetadataEntry, StorageRequest, Table,
    Token, Workspace,
};
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

#[macro_export]
/// Implements the `FromStorageResponse` trait for the specified types.
///
/// This macro generates the boilerplate code for storing the request,
/// headers, and body in the response struct.
macro_rules! impl_from_storage_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::sapi::types::FromStorageResponse for $ty {
                async fn from_storage_response(
                    request: $crate::sapi::types::StorageRequest,
                    response: Result<$crate::sapi::types::RawResponse, $crate::sapi::error::Error>,
                ) -> Result<Self, $crate::sapi::error::Error> {
                    let resp = response?;
                    Ok(Self {
                        request,
                        headers: resp.headers,
                        body: resp.body,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromStorageResponse` trait for existence checks.
///
/// A 404 from the server becomes `exists == false` instead of an error.
macro_rules! impl_from_storage_response_exists {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::sapi::types::FromStorageResponse for $ty {
                async fn from_storage_response(
                    request: $crate::sapi::types::StorageRequest,
                    response: Result<$crate::sapi::types::RawResponse, $crate::sapi::error::Error>,
                ) -> Result<Self, $crate::sapi::error::Error> {
                    match response {
                        Ok(resp) => Ok(Self {
                            request,
                            headers: resp.headers,
                            body: resp.body,
                            exists: true,
                        }),
                        Err(e) if e.is_not_found() => Ok(Self {
                            request,
                            headers: http::HeaderMap::new(),
                            body: bytes::Bytes::new(),
                            exists: false,
                        }),
                        Err(e) => Err(e),
                    }
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasStorageFields` trait for the specified types.
macro_rules! impl_has_storage_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::sapi::response_traits::HasStorageFields for $ty {
                /// The request that was sent to the Storage API.
                #[inline]
                fn request(&self) -> &$crate::sapi::types::StorageRequest {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Base trait providing access to common response fields
pub trait HasStorageFields {
    /// The request that was sent to the Storage API.
    fn request(&self) -> &StorageRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server, as raw bytes.
    fn body(&self) -> &Bytes;

    /// Decodes the response body as JSON.
    ///
    /// For a request that ran as a job this is the job's `results`.
    fn json<T: DeserializeOwned>(&self) -> Result<T, ValidationErr> {
        if self.request().wait_for_job {
            return Ok(serde_json::from_value(job_result_value(self.body())?)?);
        }
        Ok(serde_json::from_slice(self.body())?)
    }
}

/// Responses of operations the server may run as an asynchronous job.
///
/// After polling, the body holds the finished job document; the operation
/// result is its `results` field. When the server answered synchronously the
/// body itself is the result.
pub trait HasJobResult: HasStorageFields {
    /// The finished job, when the operation ran asynchronously
    fn job(&self) -> Option<Job> {
        let value: serde_json::Value = serde_json::from_slice(self.body()).ok()?;
        if is_job_document(&value) {
            serde_json::from_value(value).ok()
        } else {
            None
        }
    }

    /// Decodes the operation result.
    fn job_results<T: DeserializeOwned>(&self) -> Result<T, ValidationErr> {
        Ok(serde_json::from_value(job_result_value(self.body())?)?)
    }
}

/// Bucket document in the response body
pub trait HasBucket: HasStorageFields {
    fn bucket(&self) -> Result<Bucket, ValidationErr> {
        self.json()
    }
}

/// Table document in the response body
pub trait HasTable: HasStorageFields {
    fn table(&self) -> Result<Table, ValidationErr> {
        self.json()
    }
}

/// File document in the response body
pub trait HasFileInfo: HasStorageFields {
    fn file_info(&self) -> Result<FileInfo, ValidationErr> {
        self.json()
    }
}

/// Workspace document in the response body
pub trait HasWorkspace: HasStorageFields {
    fn workspace(&self) -> Result<Workspace, ValidationErr> {
        self.json()
    }
}

/// Component configuration in the response body
pub trait HasConfiguration: HasStorageFields {
    fn configuration(&self) -> Result<ConfigurationDetail, ValidationErr> {
        self.json()
    }
}

/// Full metadata list of the target object
pub trait HasMetadata: HasStorageFields {
    fn metadata(&self) -> Result<Vec<MetadataEntry>, ValidationErr> {
        self.json()
    }
}

/// Dev branch document in the response body
pub trait HasDevBranch: HasStorageFields {
    fn branch(&self) -> Result<DevBranch, ValidationErr> {
        self.json()
    }
}

/// Token document in the response body
pub trait HasToken: HasStorageFields {
    fn token(&self) -> Result<Token, ValidationErr> {
        self.json()
    }
}
