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
use crate::sapi::response::ListConfigurationVersionsResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct ListConfigurationVersions {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
}

impl StorageApi for ListConfigurationVersions {
    type StorageResponse = ListConfigurationVersionsResponse;
}

/// Builder type for ListConfigurationVersions
pub type ListConfigurationVersionsBldr =
    ListConfigurationVersionsBuilder<((StorageClient,), (String,), (String,))>;

impl ToStorageRequest for ListConfigurationVersions {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            format!(
                "{}/versions",
                config_path(&self.component_id, &self.configuration_id)
            ),
        ))
    }
}
