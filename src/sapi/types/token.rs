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
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Access level of a token to a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketPermission {
    Read,
    Write,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Token {
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub description: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub refreshed: Option<String>,
    pub expires: Option<String>,
    pub is_master_token: bool,
    pub can_manage_buckets: bool,
    pub can_manage_tokens: bool,
    pub can_read_all_file_uploads: bool,
    pub can_purge_trash: bool,
    #[serde(deserialize_with = "super::de::map_or_empty_seq")]
    pub bucket_permissions: HashMap<String, BucketPermission>,
    pub component_access: Vec<String>,
    /// Token string, returned only on creation and refresh
    pub token: Option<String>,
    pub owner: Option<serde_json::Value>,
}

/// Options of a new token
///
/// # Example
///
/// ```
/// use storage_api::sapi::types::{BucketPermission, TokenCreateOptions};
/// use std::collections::HashMap;
///
/// let options = TokenCreateOptions::builder()
///     .description("reader")
///     .expires_in(3600)
///     .bucket_permissions(HashMap::from([
///         ("in.c-main".to_string(), BucketPermission::Read),
///     ]))
///     .build();
/// assert_eq!(options.expires_in, Some(3600));
/// ```
#[derive(Debug, Clone, Default, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct TokenCreateOptions {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifetime in seconds
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[builder(default)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub bucket_permissions: HashMap<String, BucketPermission>,
    #[builder(default)]
    pub can_manage_buckets: bool,
    #[builder(default)]
    pub can_read_all_file_uploads: bool,
    #[builder(default)]
    pub can_purge_trash: bool,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_access: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_token_with_empty_permissions() {
        let token: Token = serde_json::from_str(
            r#"{"id":"123","description":"master","isMasterToken":true,"bucketPermissions":[]}"#,
        )
        .unwrap();
        assert!(token.is_master_token);
        assert!(token.bucket_permissions.is_empty());
    }

    #[test]
    fn create_options_body() {
        let options = TokenCreateOptions::builder()
            .description("writer")
            .bucket_permissions(HashMap::from([(
                "out.c-main".to_string(),
                BucketPermission::Write,
            )]))
            .can_read_all_file_uploads(true)
            .build();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["bucketPermissions"]["out.c-main"], "write");
        assert_eq!(json["canReadAllFileUploads"], true);
        assert!(json.get("expiresIn").is_none());
    }

    #[test]
    fn decodes_token_with_null_description() {
        let token: Token =
            serde_json::from_str(r#"{"id":9,"description":null,"created":null}"#).unwrap();
        assert_eq!(token.id, "9");
        assert_eq!(token.description, "");
    }
}
