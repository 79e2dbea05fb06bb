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

//! Client methods for bucket, table and column metadata

use crate::sapi::builders::{
    DeleteMetadata, DeleteMetadataBldr, ListMetadata, ListMetadataBldr, PostMetadata,
    PostMetadataBldr,
};
use crate::sapi::client::StorageClient;
use crate::sapi::types::{MetadataItem, MetadataTarget};

impl StorageClient {
    pub fn list_metadata(&self, target: MetadataTarget) -> ListMetadataBldr {
        ListMetadata::builder().client(self.clone()).target(target)
    }

    /// Stores metadata items under `provider`. See [`PostMetadata`].
    pub fn post_metadata<S: Into<String>>(
        &self,
        target: MetadataTarget,
        provider: S,
        items: Vec<MetadataItem>,
    ) -> PostMetadataBldr {
        PostMetadata::builder()
            .client(self.clone())
            .target(target)
            .provider(provider)
            .items(items)
    }

    pub fn delete_metadata<S: Into<String>>(
        &self,
        target: MetadataTarget,
        metadata_id: S,
    ) -> DeleteMetadataBldr {
        DeleteMetadata::builder()
            .client(self.clone())
            .target(target)
            .metadata_id(metadata_id)
    }

    pub fn list_bucket_metadata<S: Into<String>>(&self, bucket_id: S) -> ListMetadataBldr {
        self.list_metadata(MetadataTarget::Bucket(bucket_id.into()))
    }

    pub fn list_table_metadata<S: Into<String>>(&self, table_id: S) -> ListMetadataBldr {
        self.list_metadata(MetadataTarget::Table(table_id.into()))
    }

    /// `column_id` is `{table_id}.{column}`
    pub fn list_column_metadata<S: Into<String>>(&self, column_id: S) -> ListMetadataBldr {
        self.list_metadata(MetadataTarget::Column(column_id.into()))
    }

    pub fn post_bucket_metadata<S1, S2>(
        &self,
        bucket_id: S1,
        provider: S2,
        items: Vec<MetadataItem>,
    ) -> PostMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.post_metadata(MetadataTarget::Bucket(bucket_id.into()), provider, items)
    }

    /// Stores table metadata; add per-column items with
    /// `.columns_metadata(...)`.
    pub fn post_table_metadata<S1, S2>(
        &self,
        table_id: S1,
        provider: S2,
        items: Vec<MetadataItem>,
    ) -> PostMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.post_metadata(MetadataTarget::Table(table_id.into()), provider, items)
    }

    pub fn post_column_metadata<S1, S2>(
        &self,
        column_id: S1,
        provider: S2,
        items: Vec<MetadataItem>,
    ) -> PostMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.post_metadata(MetadataTarget::Column(column_id.into()), provider, items)
    }

    pub fn delete_bucket_metadata<S1, S2>(
        &self,
        bucket_id: S1,
        metadata_id: S2,
    ) -> DeleteMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.delete_metadata(MetadataTarget::Bucket(bucket_id.into()), metadata_id)
    }

    pub fn delete_table_metadata<S1, S2>(
        &self,
        table_id: S1,
        metadata_id: S2,
    ) -> DeleteMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.delete_metadata(MetadataTarget::Table(table_id.into()), metadata_id)
    }

    pub fn delete_column_metadata<S1, S2>(
        &self,
        column_id: S1,
        metadata_id: S2,
    ) -> DeleteMetadataBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        self.delete_metadata(MetadataTarget::Column(column_id.into()), metadata_id)
    }
}
