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

use crate::sapi::utils::url_encode;
use serde::{Deserialize, Serialize};

/// Stored metadata record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataEntry {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub key: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub value: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub provider: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub timestamp: String,
}

/// Key/value pair to store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    pub key: String,
    pub value: String,
}

impl MetadataItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Object that metadata is attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataTarget {
    Bucket(String),
    Table(String),
    /// Column id, `{tableId}.{column}`
    Column(String),
}

impl MetadataTarget {
    /// Path of the target's metadata collection
    pub fn path(&self) -> String {
        match self {
            MetadataTarget::Bucket(id) => format!("buckets/{}/metadata", url_encode(id)),
            MetadataTarget::Table(id) => format!("tables/{}/metadata", url_encode(id)),
            MetadataTarget::Column(id) => format!("columns/{}/metadata", url_encode(id)),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MetadataTarget::Bucket(id) | MetadataTarget::Table(id) | MetadataTarget::Column(id) => {
                id
            }
        }
    }
}
