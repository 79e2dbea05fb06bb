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
use crate::sapi::response::ConfigurationResponse;
use crate::sapi::types::{Configuration, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::check_not_empty;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for creating a configuration
///
/// # Example
///
/// ```no_run
/// use storage_api::sapi::client::StorageClient;
/// use storage_api::sapi::response_traits::HasConfiguration;
/// use storage_api::sapi::types::{Configuration, StorageApi};
/// use serde_json::json;
///
/// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
/// let config = Configuration::builder()
///     .component_id("keboola.ex-http")
///     .name("Daily download")
///     .configuration(json!({"parameters": {"baseUrl": "https://example.com"}}))
///     .build();
/// let created = client.add_configuration(config).build().send().await?;
/// println!("{}", created.configuration()?.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct AddConfiguration {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    configuration: Configuration,
}

impl StorageApi for AddConfiguration {
    type StorageResponse = ConfigurationResponse;
}

/// Builder type for AddConfiguration
pub type AddConfigurationBldr = AddConfigurationBuilder<((StorageClient,), (Configuration,))>;

impl ToStorageRequest for AddConfiguration {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_not_empty("component_id", &self.configuration.component_id)?;
        match &self.configuration.name {
            Some(name) => check_not_empty("name", name)?,
            None => return Err(ValidationErr::MissingArgument("name")),
        }
        StorageRequest::new(
            self.client,
            Method::POST,
            configs_path(&self.configuration.component_id),
        )
        .json_body(&self.configuration)
    }
}
