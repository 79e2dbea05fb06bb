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
use crate::sapi::response::ShareTokenResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for sending a token to someone by e-mail
#[derive(Clone, Debug, TypedBuilder)]
pub struct ShareToken {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    token_id: String,
    #[builder(!default, setter(into))]
    recipient_email: String,
    #[builder(!default, setter(into))]
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareTokenBody<'a> {
    recipient_email: &'a str,
    message: &'a str,
}

impl StorageApi for ShareToken {
    type StorageResponse = ShareTokenResponse;
}

/// Builder type for ShareToken
pub type ShareTokenBldr =
    ShareTokenBuilder<((StorageClient,), (String,), (String,), (String,))>;

impl ToStorageRequest for ShareToken {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("token_id", &self.token_id)?;
        if !self.recipient_email.contains('@') {
            return Err(ValidationErr::InvalidArgument {
                name: "recipient_email",
                reason: format!("'{}' is not an e-mail address", self.recipient_email),
            });
        }
        let body = ShareTokenBody {
            recipient_email: &self.recipient_email,
            message: &self.message,
        };
        StorageRequest::new(
            self.client,
            Method::POST,
            format!("{}/share", token_path(&self.token_id)),
        )
        .scope(Scope::Project)
        .json_body(&body)
    }
}
