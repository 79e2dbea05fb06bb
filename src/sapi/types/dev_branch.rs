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

/// Development branch of a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevBranch {
    #[serde(deserialize_with = "super::de::u64_or_string")]
    pub id: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    pub is_default: bool,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub creator_token: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_branch_without_description() {
        let branch: DevBranch = serde_json::from_str(
            r#"{"id":"345","name":"feature","description":null,"isDefault":false,"created":null}"#,
        )
        .unwrap();
        assert_eq!(branch.id, 345);
        assert!(branch.description.is_empty());
        assert!(branch.created.is_empty());
    }
}
