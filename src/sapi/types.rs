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

//! Core types for Storage API operations

mod bucket;
mod component;
mod dev_branch;
mod event;
mod file;
pub(crate) mod job;
mod metadata;
pub mod request;
mod table;
mod token;
mod workspace;

pub use bucket::*;
pub use component::*;
pub use dev_branch::*;
pub use event::*;
pub use file::*;
pub use job::*;
pub use metadata::*;
pub use request::{
    FromStorageResponse, RawResponse, Scope, StorageApi, StorageRequest, ToStorageRequest,
};
pub use table::*;
pub use token::*;
pub use workspace::*;

/// Lenient deserializers for fields the API encodes inconsistently
pub(crate) mod de {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use std::collections::HashMap;

    /// Accepts `"123"` and `123`
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            serde_json::Value::Null => Ok(String::new()),
            other => Err(D::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }

    /// Reads `null` as an empty string
    pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Accepts `123` and `"123"`
    pub fn u64_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| D::Error::custom(format!("expected unsigned id, got {n}"))),
            serde_json::Value::String(s) => s.parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!("expected id, got {other}"))),
        }
    }

    /// Accepts an object, or an empty array standing in for an empty object
    pub fn map_or_empty_seq<'de, D, V>(deserializer: D) -> Result<HashMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: DeserializeOwned,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| serde_json::from_value(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()
                .map_err(D::Error::custom),
            serde_json::Value::Array(items) if items.is_empty() => Ok(HashMap::new()),
            serde_json::Value::Null => Ok(HashMap::new()),
            other => Err(D::Error::custom(format!("expected object, got {other}"))),
        }
    }
}
