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
use crate::sapi::response::ConfigurationRowResponse;
use crate::sapi::types::{ConfigurationRow, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_not_empty, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for changing a configuration row; `row.row_id` is
/// required
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateConfigurationRow {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
    #[builder(!default)]
    row: ConfigurationRow,
}

impl StorageApi for UpdateConfigurationRow {
    type StorageResponse = ConfigurationRowResponse;
}

/// Builder type for UpdateConfigurationRow
pub type UpdateConfigurationRowBldr = UpdateConfigurationRowBuilder<(
    (StorageClient,),
    (String,),
    (String,),
    (ConfigurationRow,),
)>;

impl ToStorageRequest for UpdateConfigurationRow {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        let row_id = self
            .row
            .row_id
            .clone()
            .ok_or(ValidationErr::MissingArgument("row_id"))?;
        check_not_empty("row_id", &row_id)?;
        StorageRequest::new(
            self.client,
            Method::PUT,
            format!(
                "{}/rows/{}",
                config_path(&self.component_id, &self.configuration_id),
                url_encode(&row_id)
            ),
        )
        .json_body(&self.row)
    }
}
