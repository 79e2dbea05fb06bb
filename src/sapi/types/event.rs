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
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Info,
    Warn,
    Error,
    Success,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Info => "info",
            EventType::Warn => "warn",
            EventType::Error => "error",
            EventType::Success => "success",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub event: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub component: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub message: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub params: Option<serde_json::Value>,
    pub results: Option<serde_json::Value>,
    pub performance: Option<serde_json::Value>,
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub run_id: String,
    pub configuration_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_event_with_null_description() {
        let event: Event = serde_json::from_str(
            r#"{"id":4242,"event":"ext.writer.","component":"writer","message":"done",
                "description":null,"type":"warn","runId":null}"#,
        )
        .unwrap();
        assert_eq!(event.id, "4242");
        assert_eq!(event.event_type, EventType::Warn);
        assert_eq!(event.description, "");
        assert_eq!(event.run_id, "");
    }
}
