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

use super::MetadataEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket stage: input or output data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketStage {
    #[default]
    In,
    Out,
    Sys,
    #[serde(other)]
    Unknown,
}

impl BucketStage {
    pub fn as_str(self) -> &'static str {
        match self {
            BucketStage::In => "in",
            BucketStage::Out => "out",
            BucketStage::Sys => "sys",
            BucketStage::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BucketStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend of a bucket or workspace. Treated as an opaque label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Snowflake,
    Redshift,
    Synapse,
    Exasol,
    Teradata,
    Bigquery,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bucket {
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub display_name: String,
    pub stage: BucketStage,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    pub backend: Backend,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub last_change_date: Option<String>,
    pub is_read_only: bool,
    pub data_size_bytes: Option<u64>,
    pub rows_count: Option<u64>,
    pub metadata: Vec<MetadataEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_fields_decode_as_empty() {
        let bucket: Bucket = serde_json::from_str(
            r#"{"id":"in.c-main","name":"c-main","stage":"in","description":null,
                "displayName":null,"lastChangeDate":null,"backend":"snowflake"}"#,
        )
        .unwrap();
        assert_eq!(bucket.description, "");
        assert_eq!(bucket.display_name, "");
        assert_eq!(bucket.stage, BucketStage::In);
    }
}
