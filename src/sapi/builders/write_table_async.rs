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

use super::table_common::{check_single_byte, table_path};
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::WriteTableResponse;
use crate::sapi::types::{StorageApi, StorageRequest, ToStorageRequest, WriteTableOptions};
use crate::sapi::utils::check_table_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for importing an uploaded CSV file into a table
#[derive(Clone, Debug, TypedBuilder)]
pub struct WriteTableAsync {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    table_id: String,
    #[builder(!default)]
    data_file_id: u64,
    /// Append to the table instead of replacing its content
    #[builder(default)]
    incremental: bool,
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    enclosure: Option<char>,
    /// Column names of a file without a header row
    #[builder(default)]
    columns: Vec<String>,
    #[builder(default)]
    without_headers: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WriteTableAsyncBody {
    data_file_id: u64,
    incremental: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enclosure: Option<char>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    columns: Vec<String>,
    without_headers: bool,
}

impl StorageApi for WriteTableAsync {
    type StorageResponse = WriteTableResponse;
}

/// Builder type for WriteTableAsync
pub type WriteTableAsyncBldr =
    WriteTableAsyncBuilder<((StorageClient,), (String,), (u64,), (), (), (), (), ())>;

impl WriteTableAsync {
    /// Import of a freshly uploaded local file
    pub(crate) fn from_upload(
        client: StorageClient,
        table_id: String,
        data_file_id: u64,
        options: WriteTableOptions,
    ) -> Self {
        Self {
            client,
            table_id,
            data_file_id,
            incremental: options.incremental,
            delimiter: options.delimiter,
            enclosure: options.enclosure,
            columns: options.columns,
            without_headers: options.without_headers,
        }
    }
}

impl ToStorageRequest for WriteTableAsync {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_table_id(&self.table_id)?;
        check_single_byte("delimiter", self.delimiter)?;
        check_single_byte("enclosure", self.enclosure)?;
        if self.without_headers && self.columns.is_empty() {
            return Err(ValidationErr::InvalidArgument {
                name: "columns",
                reason: "column names are required for a file without headers".into(),
            });
        }

        let body = WriteTableAsyncBody {
            data_file_id: self.data_file_id,
            incremental: self.incremental,
            delimiter: self.delimiter,
            enclosure: self.enclosure,
            columns: self.columns,
            without_headers: self.without_headers,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            table_path(&self.table_id, "import-async"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
