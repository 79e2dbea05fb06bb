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

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Component registered in the project, with its configurations when listed
/// with `include=configuration`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub component_type: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    pub configurations: Vec<ConfigurationDetail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationDetail {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub version: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub change_description: String,
    pub is_disabled: bool,
    pub is_deleted: bool,
    pub configuration: serde_json::Value,
    pub state: serde_json::Value,
    pub rows: Vec<ConfigurationRowDetail>,
    pub current_version: Option<ConfigurationVersion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationRowDetail {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    pub version: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub change_description: String,
    pub is_disabled: bool,
    pub configuration: serde_json::Value,
    pub state: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationVersion {
    pub version: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub change_description: String,
    pub creator_token: Option<serde_json::Value>,
    pub name: Option<String>,
}

/// Component configuration payload
///
/// `configuration_id` is required for updates; it may be set on creation to
/// choose the id instead of letting the server assign one.
///
/// # Example
///
/// ```
/// use storage_api::sapi::types::Configuration;
/// use serde_json::json;
///
/// let config = Configuration::builder()
///     .component_id("keboola.ex-db-mysql")
///     .name("Production DB")
///     .configuration(json!({"parameters": {"host": "db.example.com"}}))
///     .build();
/// assert_eq!(config.component_id, "keboola.ex-db-mysql");
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[builder(setter(into))]
    #[serde(skip)]
    pub component_id: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}

/// Configuration row payload
#[derive(Debug, Clone, Default, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRow {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_description: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
}
