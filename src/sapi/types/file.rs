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

/// File in project file storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileInfo {
    #[serde(deserialize_with = "super::de::u64_or_string")]
    pub id: u64,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub name: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub url: String,
    pub size_bytes: Option<u64>,
    pub is_sliced: bool,
    pub is_public: bool,
    pub is_encrypted: bool,
    pub is_expired: bool,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub created: String,
    pub tags: Vec<String>,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub provider: String,
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub region: String,
    pub max_age_days: Option<u64>,
    /// Parameters of the direct upload, present in `files/prepare` responses
    pub upload_params: Option<serde_json::Map<String, serde_json::Value>>,
    pub credentials: Option<serde_json::Value>,
}

/// Manifest of a sliced file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicedManifest {
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestEntry {
    #[serde(deserialize_with = "super::de::string_or_null")]
    pub url: String,
}

/// Options of a new file upload
///
/// # Example
///
/// ```
/// use storage_api::sapi::types::FileUploadOptions;
///
/// let options = FileUploadOptions::builder()
///     .file_name("users.csv")
///     .tags(vec!["export".to_string()])
///     .is_permanent(true)
///     .build();
/// assert_eq!(options.file_name.as_deref(), Some("users.csv"));
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadOptions {
    #[builder(default, setter(into, strip_option))]
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[builder(default)]
    pub is_public: bool,
    #[builder(default)]
    pub is_permanent: bool,
    #[builder(default)]
    pub notify: bool,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[builder(default)]
    pub is_sliced: bool,
    #[builder(default = true)]
    pub is_encrypted: bool,
    #[builder(default)]
    pub federation_token: bool,
}

impl Default for FileUploadOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_options_body() {
        let options = FileUploadOptions::builder()
            .file_name("data.csv")
            .size_bytes(12)
            .tags(vec!["a".into(), "b".into()])
            .build();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["name"], "data.csv");
        assert_eq!(json["sizeBytes"], 12);
        assert_eq!(json["isEncrypted"], true);
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(json["federationToken"], false);
    }

    #[test]
    fn default_upload_is_encrypted() {
        let options = FileUploadOptions::default();
        assert!(options.is_encrypted);
        assert!(!options.is_sliced);
    }

    #[test]
    fn decodes_prepared_file() {
        let file: FileInfo = serde_json::from_str(
            r#"{"id":"1001","name":"data.csv","isSliced":false,
                "uploadParams":{"url":"https://upload.example.com/","key":"exp-1/data.csv","acl":"private"}}"#,
        )
        .unwrap();
        assert_eq!(file.id, 1001);
        let params = file.upload_params.unwrap();
        assert_eq!(params["url"], "https://upload.example.com/");
        let keys: Vec<_> = params.keys().cloned().collect();
        assert_eq!(keys, vec!["url", "key", "acl"]);
    }

    #[test]
    fn decodes_file_with_null_region() {
        let file: FileInfo = serde_json::from_str(
            r#"{"id":5,"name":"data.csv","url":"https://files.example.com/5","region":null,"provider":null}"#,
        )
        .unwrap();
        assert_eq!(file.id, 5);
        assert!(file.region.is_empty());
        assert!(file.provider.is_empty());
    }
}
