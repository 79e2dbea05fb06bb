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
use crate::sapi::response::CreateTokenResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest, TokenCreateOptions};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for creating a token.
///
/// The secret is only returned once, in the response of this call.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateToken {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    options: TokenCreateOptions,
}

impl StorageApi for CreateToken {
    type StorageResponse = CreateTokenResponse;
}

/// Builder type for CreateToken
pub type CreateTokenBldr = CreateTokenBuilder<((StorageClient,), (TokenCreateOptions,))>;

impl ToStorageRequest for CreateToken {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        if self.options.expires_in == Some(0) {
            return Err(ValidationErr::InvalidArgument {
                name: "expires_in",
                reason: "token lifetime must be positive".into(),
            });
        }
        for bucket_id in self.options.bucket_permissions.keys() {
            check_not_empty("bucket_permissions", bucket_id)?;
        }
        Ok(StorageRequest::new(self.client, Method::POST, "tokens")
            .scope(Scope::Project)
            .json_body(&self.options)?
            .wait_for_job())
    }
}
