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

//! Responses for [StorageClient](crate::sapi::client::StorageClient) APIs

mod buckets;
mod components;
mod dev_branches;
mod events;
mod files;
mod jobs;
mod metadata;
mod tables;
mod tokens;
mod workspaces;

pub use buckets::*;
pub use components::*;
pub use dev_branches::*;
pub use events::*;
pub use files::*;
pub use jobs::*;
pub use metadata::*;
pub use tables::*;
pub use tokens::*;
pub use workspaces::*;
