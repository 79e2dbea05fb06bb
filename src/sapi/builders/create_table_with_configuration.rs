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

use super::table_common::bucket_path;
use crate::sapi::client::StorageClient;
use crate::sapi::error::ValidationErr;
use crate::sapi::response::CreateTableResponse;
use crate::sapi::types::{
    StorageApi, StorageRequest, TableWithConfigurationOptions, ToStorageRequest,
};
use crate::sapi::utils::{check_bucket_id, check_not_empty};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// Argument builder for creating a table bound to a component configuration
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTableWithConfiguration {
    #[builder(!default)]
    client: StorageClient,
    #[builder(!default, setter(into))]
    bucket_id: String,
    #[builder(!default)]
    options: TableWithConfigurationOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTableWithConfigurationBody {
    table_name: String,
    configuration_id: String,
}

impl StorageApi for CreateTableWithConfiguration {
    type StorageResponse = CreateTableResponse;
}

/// Builder type for CreateTableWithConfiguration
pub type CreateTableWithConfigurationBldr = CreateTableWithConfigurationBuilder<(
    (StorageClient,),
    (String,),
    (TableWithConfigurationOptions,),
)>;

impl ToStorageRequest for CreateTableWithConfiguration {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;
        check_not_empty("table_name", &self.options.table_name)?;
        check_not_empty("configuration_id", &self.options.configuration_id)?;

        let body = CreateTableWithConfigurationBody {
            table_name: self.options.table_name,
            configuration_id: self.options.configuration_id,
        };
        Ok(StorageRequest::new(
            self.client,
            Method::POST,
            bucket_path(&self.bucket_id, "tables-with-configuration"),
        )
        .json_body(&body)?
        .wait_for_job())
    }
}
