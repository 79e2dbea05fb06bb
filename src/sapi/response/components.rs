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

//! Responses of component and configuration operations

use crate::sapi::error::ValidationErr;
use crate::sapi::response_traits::{HasConfiguration, HasStorageFields};
use crate::sapi::types::{
    Component, ConfigurationDetail, ConfigurationRowDetail, ConfigurationVersion, StorageRequest,
};
use crate::{impl_from_storage_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

#[derive(Clone, Debug)]
pub struct ListComponentsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListComponentsResponse {
    pub fn components(&self) -> Result<Vec<Component>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct ListComponentConfigurationsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListComponentConfigurationsResponse {
    pub fn configurations(&self) -> Result<Vec<ConfigurationDetail>, ValidationErr> {
        self.json()
    }
}

/// Response carrying one configuration: get, add, update, state update and
/// rollback
#[derive(Clone, Debug)]
pub struct ConfigurationResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct DeleteConfigurationResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

#[derive(Clone, Debug)]
pub struct ListConfigurationVersionsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListConfigurationVersionsResponse {
    pub fn versions(&self) -> Result<Vec<ConfigurationVersion>, ValidationErr> {
        self.json()
    }
}

/// Response carrying one configuration row
#[derive(Clone, Debug)]
pub struct ConfigurationRowResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ConfigurationRowResponse {
    pub fn row(&self) -> Result<ConfigurationRowDetail, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct ListConfigurationRowsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListConfigurationRowsResponse {
    pub fn rows(&self) -> Result<Vec<ConfigurationRowDetail>, ValidationErr> {
        self.json()
    }
}

#[derive(Clone, Debug)]
pub struct DeleteConfigurationRowResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_storage_response!(
    ListComponentsResponse,
    ListComponentConfigurationsResponse,
    ConfigurationResponse,
    DeleteConfigurationResponse,
    ListConfigurationVersionsResponse,
    ConfigurationRowResponse,
    ListConfigurationRowsResponse,
    DeleteConfigurationRowResponse,
);
impl_has_storage_fields!(
    ListComponentsResponse,
    ListComponentConfigurationsResponse,
    ConfigurationResponse,
    DeleteConfigurationResponse,
    ListConfigurationVersionsResponse,
    ConfigurationRowResponse,
    ListConfigurationRowsResponse,
    DeleteConfigurationRowResponse,
);

impl HasConfiguration for ConfigurationResponse {}
