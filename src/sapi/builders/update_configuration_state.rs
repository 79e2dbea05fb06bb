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

/// Argument builder for replacing a configuration's state without creating
/// a new version
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateConfigurationState {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
    #[builder(!default)]
    state: serde_json::Value,
}

#[derive(Serialize)]
struct UpdateStateBody {
    state: serde_json::Value,
}

impl StorageApi for UpdateConfigurationState {
    type StorageResponse = ConfigurationResponse;
}

/// Builder type for UpdateConfigurationState
pub type UpdateConfigurationStateBldr = UpdateConfigurationStateBuilder<(
    (StorageClient,),
    (String,),
    (String,),
    (serde_json::Value,),
)>;

impl ToStorageRequest for UpdateConfigurationState {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        if !self.state.is_object() {
            return Err(ValidationErr::InvalidArgument {
                name: "state",
                reason: "state must be a JSON object".into(),
            });
        }
        StorageRequest::new(
            self.client,
            Method::PUT,
            format!(
                "{}/state",
                config_path(&self.component_id, &self.configuration_id)
            ),
        )
        .json_body(&UpdateStateBody { state: self.state })
    }
}
