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
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct AddConfigurationRow {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
    #[builder(!default)]
    row: ConfigurationRow,
}

impl StorageApi for AddConfigurationRow {
    type StorageResponse = ConfigurationRowResponse;
}

/// Builder type for AddConfigurationRow
pub type AddConfigurationRowBldr = AddConfigurationRowBuilder<(
    (StorageClient,),
    (String,),
    (String,),
    (ConfigurationRow,),
)>;

impl ToStorageRequest for AddConfigurationRow {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        StorageRequest::new(
            self.client,
            Method::POST,
            format!(
                "{}/rows",
                config_path(&self.component_id, &self.configuration_id)
            ),
        )
        .json_body(&self.row)
    }
}
