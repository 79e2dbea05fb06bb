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

use super::{Backend, WhereOperator};
use crate::sapi::utils::ChangeBound;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    #[serde(deserialize_with = "super::de::u64_or_string")]
    pub id: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    pub component: Option<String>,
    pub configuration_id: Option<String>,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub backend_size: Option<String>,
    pub read_only_storage_access: bool,
    pub connection: WorkspaceConnection,
}

/// Credentials of a workspace database
///
/// `password` is only populated by create and password-reset calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceConnection {
    pub backend: Backend,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub host: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub database: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub schema: String,
    pub warehouse: Option<String>,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub user: String,
    pub password: Option<String>,
    pub region: Option<String>,
    pub login_type: Option<String>,
}

/// Table to load into a workspace
///
/// # Example
///
/// ```
/// use storage_api::sapi::types::WorkspaceLoadInput;
///
/// let input = WorkspaceLoadInput::builder()
///     .source("in.c-main.users")
///     .destination("users")
///     .columns(vec!["id".to_string(), "name".to_string()])
///     .build();
/// assert_eq!(input.destination, "users");
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceLoadInput {
    #[builder(setter(into))]
    pub source: String,
    #[builder(setter(into))]
    pub destination: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_column: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub where_values: Vec<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_operator: Option<WhereOperator>,
    #[builder(
        default,
        setter(transform = |bound: impl Into<ChangeBound>| Some(bound.into().into_inner()))
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_since: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
    #[builder(default)]
    pub incremental: bool,
    #[builder(default)]
    pub use_view: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_workspace_with_null_fields() {
        let workspace: Workspace = serde_json::from_str(
            r#"{"id":501,"name":null,"created":"2025-03-01T10:00:00+0100",
                "connection":{"backend":"snowflake","host":"db.example.com","database":null,
                "schema":"WORKSPACE_501","user":"WORKSPACE_501_USER"}}"#,
        )
        .unwrap();
        assert_eq!(workspace.id, 501);
        assert!(workspace.name.is_empty());
        assert!(workspace.connection.database.is_empty());
        assert!(workspace.connection.password.is_none());
    }
}
