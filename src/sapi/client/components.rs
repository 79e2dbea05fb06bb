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

//! Client methods for components and their configurations

use crate::sapi::builders::*;
use crate::sapi::client::StorageClient;
use crate::sapi::types::{Configuration, ConfigurationRow};

impl StorageClient {
    pub fn list_components(&self) -> ListComponentsBldr {
        ListComponents::builder().client(self.clone())
    }

    pub fn list_component_configurations<S: Into<String>>(
        &self,
        component_id: S,
    ) -> ListComponentConfigurationsBldr {
        ListComponentConfigurations::builder()
            .client(self.clone())
            .component_id(component_id)
    }

    pub fn get_configuration<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
    ) -> GetConfigurationBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        GetConfiguration::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
    }

    pub fn add_configuration(&self, configuration: Configuration) -> AddConfigurationBldr {
        AddConfiguration::builder()
            .client(self.clone())
            .configuration(configuration)
    }

    /// Updates a configuration. `configuration.configuration_id` must be set.
    pub fn update_configuration(&self, configuration: Configuration) -> UpdateConfigurationBldr {
        UpdateConfiguration::builder()
            .client(self.clone())
            .configuration(configuration)
    }

    pub fn update_configuration_state<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
        state: serde_json::Value,
    ) -> UpdateConfigurationStateBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        UpdateConfigurationState::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
            .state(state)
    }

    pub fn delete_configuration<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
    ) -> DeleteConfigurationBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        DeleteConfiguration::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
    }

    pub fn list_configuration_versions<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
    ) -> ListConfigurationVersionsBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        ListConfigurationVersions::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
    }

    /// Restores `version` of a configuration as its newest version.
    pub fn rollback_configuration<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
        version: u64,
    ) -> RollbackConfigurationBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        RollbackConfiguration::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
            .version(version)
    }

    pub fn add_configuration_row<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
        row: ConfigurationRow,
    ) -> AddConfigurationRowBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        AddConfigurationRow::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
            .row(row)
    }

    pub fn list_configuration_rows<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
    ) -> ListConfigurationRowsBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        ListConfigurationRows::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
    }

    pub fn update_configuration_row<S1, S2>(
        &self,
        component_id: S1,
        configuration_id: S2,
        row: ConfigurationRow,
    ) -> UpdateConfigurationRowBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        UpdateConfigurationRow::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
            .row(row)
    }

    pub fn delete_configuration_row<S1, S2, S3>(
        &self,
        component_id: S1,
        configuration_id: S2,
        row_id: S3,
    ) -> DeleteConfigurationRowBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        DeleteConfigurationRow::builder()
            .client(self.clone())
            .component_id(component_id)
            .configuration_id(configuration_id)
            .row_id(row_id)
    }
}
