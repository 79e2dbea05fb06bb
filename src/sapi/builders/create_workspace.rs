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
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::CreateWorkspaceResponse;
use crate::sapi::types::{Backend, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for provisioning a workspace.
///
/// Provisioning runs as a job; the finished job holds the workspace with its
/// password, which is not returned anywhere else.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateWorkspace {
    #[builder(!default)]
    client: StorageClient,
    #[builder(default, setter(strip_option))]
    backend: Option<Backend>,
    #[builder(default, setter(into, strip_option))]
    backend_size: Option<String>,
    #[builder(default, setter(strip_option))]
    read_only_storage_access: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    network_policy: Option<String>,
    #[builder(default, setter(into, strip_option))]
    login_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWorkspaceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend: Option<Backend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    read_only_storage_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    login_type: Option<String>,
}

impl StorageApi for CreateWorkspace {
    type StorageResponse = CreateWorkspaceResponse;
}

/// Builder type for CreateWorkspace
pub type CreateWorkspaceBldr = CreateWorkspaceBuilder<((StorageClient,), (), (), (), (), ())>;

impl ToStorageRequest for CreateWorkspace {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        if matches!(self.backend, Some(Backend::Unknown)) {
            return Err(ValidationErr::InvalidArgument {
                name: "backend",
                reason: "unknown backend".into(),
            });
        }
        let body = CreateWorkspaceBody {
            backend: self.backend,
            backend_size: self.backend_size,
            read_only_storage_access: self.read_only_storage_access,
            network_policy: self.network_policy,
            login_type: self.login_type,
        };
        let mut query = Multimap::new();
        query.add_flag("async", true);
        Ok(StorageRequest::new(self.client, Method::POST, "workspaces")
            .query_params(query)
            .json_body(&body)?
            .wait_for_job())
    }
}
