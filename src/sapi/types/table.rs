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

use super::{Bucket, FileUploadOptions, MetadataEntry};
use crate::sapi::utils::ChangeBound;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub display_name: String,
    pub bucket: Option<Bucket>,
    pub columns: Vec<String>,
    pub primary_key: Vec<String>,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub last_import_date: Option<String>,
    pub last_change_date: Option<String>,
    pub rows_count: Option<u64>,
    pub data_size_bytes: Option<u64>,
    pub is_alias: bool,
    pub is_aliasable: bool,
    pub is_typed: bool,
    pub source_table: Option<serde_json::Value>,
    pub metadata: Vec<MetadataEntry>,
    #[serde(deserialize_with = "super::de::map_or_empty_seq")]
    pub column_metadata: HashMap<String, Vec<MetadataEntry>>,
    pub definition: Option<TableDefinition>,
}

/// Typed table definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableDefinition {
    pub primary_keys_names: Vec<String>,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<ColumnTypeDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basetype: Option<String>,
}

impl ColumnDefinition {
    /// Column with a backend-native type, e.g. `VARCHAR`
    pub fn typed(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: Some(ColumnTypeDefinition {
                data_type: data_type.into(),
                nullable: true,
                length: None,
                default: None,
            }),
            basetype: None,
        }
    }

    /// Column with a backend-agnostic base type, e.g. `STRING`
    pub fn basetype(name: impl Into<String>, basetype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: None,
            basetype: Some(basetype.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTypeDefinition {
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// Comparison used by `whereColumn`/`whereValues` filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhereOperator {
    #[default]
    Eq,
    Ne,
}

impl WhereOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            WhereOperator::Eq => "eq",
            WhereOperator::Ne => "ne",
        }
    }
}

/// Row filter of an alias table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasFilter {
    pub column: String,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<WhereOperator>,
}

/// Options for creating a table bound to a component configuration
#[derive(Debug, Clone, TypedBuilder)]
pub struct TableWithConfigurationOptions {
    #[builder(setter(into))]
    pub table_name: String,
    #[builder(setter(into))]
    pub configuration_id: String,
}

/// CSV dialect and primary key used when a table is created from a local
/// file
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct CreateTableOptions {
    #[builder(default, setter(strip_option))]
    pub delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    pub enclosure: Option<char>,
    #[builder(default)]
    pub primary_key: Vec<String>,
    /// Options of the intermediate file upload
    #[builder(default)]
    pub upload: FileUploadOptions,
}

/// Import settings used when a local file is written into a table
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct WriteTableOptions {
    #[builder(default)]
    pub incremental: bool,
    #[builder(default, setter(strip_option))]
    pub delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    pub enclosure: Option<char>,
    #[builder(default)]
    pub columns: Vec<String>,
    #[builder(default)]
    pub without_headers: bool,
    #[builder(default)]
    pub upload: FileUploadOptions,
}

/// Row and column filters of a table export
///
/// # Example
///
/// ```
/// use storage_api::sapi::types::{ExportOptions, WhereOperator};
///
/// let options = ExportOptions::builder()
///     .columns(vec!["id".into(), "email".into()])
///     .where_column("country")
///     .where_values(vec!["CZ".into(), "SK".into()])
///     .where_operator(WhereOperator::Ne)
///     .build();
/// assert_eq!(options.where_column.as_deref(), Some("country"));
/// ```
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct ExportOptions {
    #[builder(default, setter(strip_option))]
    pub limit: Option<u64>,
    #[builder(default)]
    pub columns: Vec<String>,
    #[builder(default, setter(into, strip_option))]
    pub where_column: Option<String>,
    #[builder(default)]
    pub where_values: Vec<String>,
    #[builder(default, setter(strip_option))]
    pub where_operator: Option<WhereOperator>,
    #[builder(
        default,
        setter(transform = |bound: impl Into<ChangeBound>| Some(bound.into().into_inner()))
    )]
    pub changed_since: Option<String>,
    #[builder(
        default,
        setter(transform = |bound: impl Into<ChangeBound>| Some(bound.into().into_inner()))
    )]
    pub changed_until: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub table: Option<serde_json::Value>,
}

/// Outcome of a table import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportResult {
    pub imported_rows_count: Option<u64>,
    pub imported_columns: Vec<String>,
    pub warnings: Vec<serde_json::Value>,
    pub transaction: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_metadata_accepts_empty_array() {
        let table: Table = serde_json::from_str(
            r#"{"id":"in.c-main.users","name":"users","columns":["id","name"],
                "primaryKey":["id"],"columnMetadata":[]}"#,
        )
        .unwrap();
        assert!(table.column_metadata.is_empty());
        assert_eq!(table.primary_key, vec!["id"]);
    }

    #[test]
    fn column_definition_serialization() {
        let col = ColumnDefinition::typed("id", "INTEGER");
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name":"id","definition":{"type":"INTEGER","nullable":true}})
        );
        let base = serde_json::to_value(ColumnDefinition::basetype("name", "STRING")).unwrap();
        assert_eq!(base, serde_json::json!({"name":"name","basetype":"STRING"}));
    }

    #[test]
    fn export_options_format_change_bounds() {
        let since = chrono::DateTime::parse_from_rfc3339("2024-05-02T10:11:12+02:00")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let options = ExportOptions::builder()
            .changed_since(since)
            .changed_until("-1 hours")
            .build();
        assert_eq!(options.changed_since.as_deref(), Some("2024-05-02T08:11:12Z"));
        assert_eq!(options.changed_until.as_deref(), Some("-1 hours"));
    }

    #[test]
    fn decodes_table_with_null_text_fields() {
        let table: Table = serde_json::from_str(
            r#"{"id":"in.c-main.users","name":"users","displayName":null,"created":null,
                "columns":["id"],"lastImportDate":null}"#,
        )
        .unwrap();
        assert_eq!(table.display_name, "");
        assert_eq!(table.columns, vec!["id"]);
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"id":77,"description":null}"#).unwrap();
        assert_eq!(snapshot.id, "77");
        assert_eq!(snapshot.description, "");
    }
}
