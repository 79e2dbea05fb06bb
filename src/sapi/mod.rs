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

//! Client for the Storage API
//!
//! [`StorageClient`] sends requests built by the argument builders in
//! [`builders`]; each builder's `send()` returns the matching type from
//! [`response`]. Asynchronous operations are polled until their job
//! finishes.

pub mod builders;
pub mod client;
pub mod creds;
pub mod csv;
pub mod error;
pub mod exporter;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod types;
pub mod utils;

pub use client::{StorageClient, StorageClientBuilder};
pub use error::Error;
