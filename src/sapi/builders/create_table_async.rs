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

use super::table_common::{bucket_path, check_single_byte};
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::CreateTableResponse;
use crate::sapi::types::{CreateTableOptions, StorageApi, StorageRequest, ToStorageRequest};
use crate::sapi::utils::{check_bucket_id, check_not_empty};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating a table from an uploaded CSV file.
///
/// The table is created by a job; the response exposes the new table once
/// the job has finished.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableAsync {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default, setter(into))]
    name: String,
    #[builder(!default)]
    data_file_id: u64,
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    enclosure: Option<char>,
    #[builder(default)]
    primary_key: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTableAsyncBody {
    name: String,
    data_file_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enclosure: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_key: Option<String>,
}

impl StorageApi for CreateTableAsync {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateTableAsync
pub type CreateTableAsyncBldr =
    CreateTableAsyncBuilder<((StorageClient,), (String,), (String,), (u64,), (), (), ())>;

impl CreateTableAsync {
    /// Request for a table created from a freshly uploaded local file
    pub(crate) fn from_upload(
        client: StorageClient,
        bucket_id: String,
        name: String,
        data_file_id: u64,
        options: CreateTableOptions,
    ) -> Self {
        Self {
            client,
            bucket_id,
            name,
            data_file_id,
            delimiter: options.delimiter,
            enclosure: options.enclosure,
            primary_key: options.primary_key,
        }
    }
}

impl ToStorageRequest for CreateTableAsync {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_not_empty("name", &self.name)?;
        check_single_byte("delimiter", self.delimiter)?;
        check_single_byte("enclosure", self.enclosure)?;

        let body = CreateTableAsyncBody {
            name: self.name,
            data_file_id: self.data_file_id,
            delimiter: self.delimiter,
            enclosure: self.enclosure,
            primary_key: (!self.primary_key.is_empty()).then(|| self.primary_key.join(",")),
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            bucket_path(&self.bucket_id, "tables-async"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
