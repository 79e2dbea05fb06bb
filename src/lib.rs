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

//! # Storage API Rust client (`storage-api`)
//!
//! Async, strongly-typed client for the Storage API: buckets, tables, files,
//! workspaces, component configurations, metadata, dev branches, tokens,
//! events and jobs.
//!
//! Each operation has a request builder (e.g. [`sapi::builders::CreateBucket`],
//! [`sapi::builders::ExportTableAsync`]) configured with a fluent builder
//! pattern. Builders implement [`sapi::types::StorageApi`], whose async
//! [`send`](crate::sapi::types::StorageApi::send) executes the request and
//! returns a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use storage_api::sapi::StorageClientBuilder;
//! use storage_api::sapi::types::StorageApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StorageClientBuilder::from_env()?.build()?;
//!
//!     let exists = client.bucket_exists("in.c-main").build().send().await?;
//!     println!("bucket exists: {}", exists.exists());
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - Each method on [`sapi::client::StorageClient`] returns a builder struct
//! - Builders implement [`sapi::types::ToStorageRequest`] for request conversion
//! - Responses implement [`sapi::types::FromStorageResponse`]
//! - Requests answered with `202 Accepted` are polled until their job finishes
//! - Transient failures (network errors, HTTP 429 and 5xx) are retried with
//!   exponential backoff

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod sapi;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
