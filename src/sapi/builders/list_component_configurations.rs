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

use super::component_common::configs_path;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::multimap_ext::{Multimap, MultimapExt};
use crate::sapi::response::ListComponentConfigurationsResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing the configurations of one component.
///
/// `is_deleted` lists the configurations in trash instead.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListComponentConfigurations {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    component_id: String,
    #[builder(default)]
    is_deleted: bool,
}

impl StorageApi for ListComponentConfigurations {
    type StorageResponse = ListComponentConfigurationsResponse;
}

/// Builder type for ListComponentConfigurations
pub type ListComponentConfigurationsBldr =
    ListComponentConfigurationsBuilder<((StorageClient,), (String,), ())>;

impl ToStorageRequest for ListComponentConfigurations {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("component_id", &self.component_id)?;
        let mut query = Multimap::new();
        if self.is_deleted {
            query.add_flag("isDeleted", true);
        }
        Ok(StorageRequest::new(
            self.client,
            Method::GET,
            configs_path(&self.component_id),
        )
        .query_params(query))
    }
}
