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
use crate::sapi::response::AddFileTagResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for tagging a file
#[derive(Clone, Debug, TypedBuilder)]
pub struct AddFileTag {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    file_id: u64,
    #[builder(!default, setter(into))]
    tag: String,
}

#[derive(Serialize)]
struct AddFileTagBody {
    tag: String,
}

impl StorageApi for AddFileTag {
    type StorageResponse = AddFileTagResponse;
}

/// Builder type for AddFileTag
pub type AddFileTagBldr = AddFileTagBuilder<((StorageClient,), (u64,), (String,))>;

impl ToStorageRequest for AddFileTag {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("tag", &self.tag)?;
        StorageRequest::new(
            self.client,
            Method::POST,
            format!("files/{}/tags", self.file_id),
        )
        .scope(Scope::Project)
        .json_body(&AddFileTagBody { tag: self.tag })
    }
}
