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

use super::metadata_common::check_target;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::PostMetadataResponse;
use crate::sapi::types::{
    MetadataItem, MetadataTarget, StorageApi, StorageRequest, ToStorageRequest,
};
use crate::sapi::utils::check_not_empty;
use http::Method;
use serde::Serialize;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

fn check_items(items: &[MetadataItem]) -> Result<(), ValidationErr> {
    for item in items {
        if item.key.is_empty() {
            return Err(ValidationErr::InvalidMetadata(
                "metadata key must not be empty".into(),
            ));
        }
    }
    Ok(())
}

/// Argument builder for storing metadata on a bucket, table or column.
///
/// Existing keys of the same provider are overwritten. `columns_metadata`
/// is only accepted for table targets and is keyed by column name.
///
/// # Example
///
/// ```no_run
/// use storage_api::sapi::client::StorageClient;
/// use storage_api::sapi::response_traits::HasMetadata;
/// use storage_api::sapi::types::{MetadataItem, MetadataTarget, StorageApi};
///
/// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
/// let resp = client
///     .post_metadata(
///         MetadataTarget::Table("in.c-main.users".into()),
///         "user",
///         vec![MetadataItem::new("KBC.description", "Registered users")],
///     )
///     .build()
///     .send()
///     .await?;
/// for entry in resp.metadata()? {
///     println!("{} = {}", entry.key, entry.value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct PostMetadata {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default)]
    target: MetadataTarget,
    #[builder(!default, setter(into))]
    provider: String,
    #[builder(!default)]
    items: Vec<MetadataItem>,
    #[builder(default)]
    columns_metadata: HashMap<String, Vec<MetadataItem>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostMetadataBody<'a> {
    provider: &'a str,
    metadata: &'a [MetadataItem],
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    columns_metadata: &'a HashMap<String, Vec<MetadataItem>>,
}

impl StorageApi for PostMetadata {
    type StorageResponse = PostMetadataResponse;
}

/// Builder type for PostMetadata
pub type PostMetadataBldr = PostMetadataBuilder<(
    (StorageClient,),
    (MetadataTarget,),
    (String,),
    (Vec<MetadataItem>,),
    (),
)>;

impl ToStorageRequest for PostMetadata {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_target(&self.target)?;
        check_not_empty("provider", &self.provider)?;
        if self.items.is_empty() {
            return Err(ValidationErr::InvalidMetadata(
                "at least one metadata item is required".into(),
            ));
        }
        check_items(&self.items)?;
        if !self.columns_metadata.is_empty() {
            if !matches!(self.target, MetadataTarget::Table(_)) {
                return Err(ValidationErr::InvalidMetadata(
                    "columns metadata can only be posted to a table".into(),
                ));
            }
            for (column, items) in &self.columns_metadata {
                check_not_empty("column", column)?;
                check_items(items)?;
            }
        }

        let body = PostMetadataBody {
            provider: &self.provider,
            metadata: &self.items,
            columns_metadata: &self.columns_metadata,
        };
        let path = self.target.path();
        StorageRequest::new(self.client, Method::POST, path).json_body(&body)
    }
}
