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

use super::token_common::token_path;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::DropTokenResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct DropToken {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    token_id: String,
}

impl StorageApi for DropToken {
    type StorageResponse = DropTokenResponse;
}

/// Builder type for DropToken
pub type DropTokenBldr = DropTokenBuilder<((StorageClient,), (String,))>;

impl ToStorageRequest for DropToken {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("token_id", &self.token_id)?;
        Ok(
            StorageRequest::new(self.client, Method::DELETE, token_path(&self.token_id))
                .scope(Scope::Project),
        )
    }
}
