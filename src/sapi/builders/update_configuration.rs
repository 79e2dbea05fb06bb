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
use crate::sapi::types::{Configuration, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for changing a configuration; creates a new version
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateConfiguration {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    configuration: Configuration,
}

impl StorageApi for UpdateConfiguration {
    type StorageResponse = ConfigurationResponse;
}

/// Builder type for UpdateConfiguration
pub type UpdateConfigurationBldr =
    UpdateConfigurationBuilder<((StorageClient,), (Configuration,))>;

impl ToStorageRequest for UpdateConfiguration {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let configuration_id = self
            .configuration
            .configuration_id
            .clone()
            .ok_or(ValidationErr::MissingArgument("configuration_id"))?;
        check_config_ids(&self.configuration.component_id, &configuration_id)?;
        if let Some(name) = &self.configuration.name {
            check_not_empty("name", name)?;
        }
        StorageRequest::new(
            self.client,
            Method::PUT,
            config_path(&self.configuration.component_id, &configuration_id),
        )
        .json_body(&self.configuration)
    }
}
