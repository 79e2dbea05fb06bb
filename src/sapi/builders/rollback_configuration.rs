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

use super::component_common::{check_config_ids, config_path};
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::ConfigurationResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for restoring an earlier configuration version
#[derive(Clone, Debug, TypedBuilder)]
pub struct RollbackConfiguration {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
    #[builder(!default)]
    version: u64,
    #[builder(default, setter(into, strip_option))]
    change_description: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RollbackBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    change_description: Option<String>,
}

impl StorageApi for RollbackConfiguration {
    type StorageResponse = ConfigurationResponse;
}

/// Builder type for RollbackConfiguration
pub type RollbackConfigurationBldr =
    RollbackConfigurationBuilder<((StorageClient,), (String,), (String,), (u64,), ())>;

impl ToStorageRequest for RollbackConfiguration {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        if self.version == 0 {
            return Err(ValidationErr::InvalidArgument {
                name: "version",
                reason: "versions start at 1".into(),
            });
        }
        StorageRequest::new(
            self.client,
            Method::POST,
            format!(
                "{}/versions/{}/rollback",
                config_path(&self.component_id, &self.configuration_id),
                self.version
            ),
        )
        .json_body(&RollbackBody {
            change_description: self.change_description,
        })
    }
}
