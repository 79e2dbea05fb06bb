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
use crate::sapi::response::CreateDevBranchResponse;
use crate::sapi::types::{Scope, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for creating a dev branch; waits for the creation job
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateDevBranch {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    name: String,
    #[builder(default, setter(into, strip_option))]
    description: Option<String>,
}

impl StorageApi for CreateDevBranch {
    type StorageResponse = CreateDevBranchResponse;
}

/// Builder type for CreateDevBranch
pub type CreateDevBranchBldr = CreateDevBranchBuilder<((StorageClient,), (String,), ())>;

impl ToStorageRequest for CreateDevBranch {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("name", &self.name)?;
        let body = BranchBody {
            name: Some(&self.name),
            description: self.description.as_deref(),
        };
        Ok(
            StorageRequest::new(self.client, Method::POST, "dev-branches")
                .scope(Scope::Project)
                .json_body(&body)?
                .wait_for_job(),
        )
    }
}
