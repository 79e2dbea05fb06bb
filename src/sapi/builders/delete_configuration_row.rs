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
use crate::sapi::response::DeleteConfigurationRowResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_not_empty, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteConfigurationRow {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(!default, setter(into))]
    configuration_id: String,
    #[builder(!default, setter(into))]
    row_id: String,
}

impl StorageApi for DeleteConfigurationRow {
    type StorageResponse = DeleteConfigurationRowResponse;
}

/// Builder type for DeleteConfigurationRow
pub type DeleteConfigurationRowBldr =
    DeleteConfigurationRowBuilder<((StorageClient,), (String,), (String,), (String,))>;

impl ToStorageRequest for DeleteConfigurationRow {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_config_ids(&self.component_id, &self.configuration_id)?;
        check_not_empty("row_id", &self.row_id)?;
        Ok(StorageRequest::new(
            self.client,
            Method::DELETE,
            format!(
                "{}/rows/{}",
                config_path(&self.component_id, &self.configuration_id),
                url_encode(&self.row_id)
            ),
        ))
    }
}
