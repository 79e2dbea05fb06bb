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

use super::dev_branch_common::BranchBody;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::UpdateDevBranchResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateDevBranch {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    branch_id: u64,
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
}

impl StorageApi for UpdateDevBranch {
    type StorageResponse = UpdateDevBranchResponse;
}

/// Builder type for UpdateDevBranch
pub type UpdateDevBranchBldr = UpdateDevBranchBuilder<((StorageClient,), (u64,), (), ())>;

impl ToStorageRequest for UpdateDevBranch {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        if self.name.is_none() && self.description.is_none() {
            return Err(ValidationErr::MissingArgument("name or description"));
        }
        if let Some(name) = &self.name {
            check_not_empty("name", name)?;
        }
        let body = BranchBody {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
        };
        StorageRequest::new(
            self.client,
            Method::PUT,
            format!("dev-branches/{}", self.branch_id),
        )
        .scope(Scope::Project)
        .json_body(&body)
    }
}
