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

//! Client methods for table operations

use crate::sapi::builders::*;
use crate::sapi::client::StorageClient;
use crate::sapi::csv::{CsvOptions, CsvTable, CsvWriter};
use crate::sapi::error::{Error, ValidationErr};
use crate::sapi::response::{CreateTableResponse, WriteTableResponse};
use crate::sapi::types::{
    ColumnDefinition, CreateTableOptions, StorageApi, TableWithConfigurationOptions,
    WriteTableOptions,
};
use crate::sapi::utils::TableId;
use bytes::Bytes;
use std::path::Path;

impl StorageClient {
    /// Lists tables of the whole project, or of one bucket when
    /// `bucket_id` is set.
    pub fn list_tables(&self) -> ListTablesBldr {
        ListTables::builder().client(self.clone())
    }

    pub fn get_table<S: Into<String>>(&self, table_id: S) -> GetTableBldr {
        GetTable::builder().client(self.clone()).table_id(table_id)
    }

    /// Checks whether a table exists. A missing table is not an error.
    pub fn table_exists<S: Into<String>>(&self, table_id: S) -> TableExistsBldr {
        TableExists::builder().client(self.clone()).table_id(table_id)
    }

    /// Creates a table from a file that was already uploaded.
    pub fn create_table_async<S1, S2>(
        &self,
        bucket_id: S1,
        name: S2,
        data_file_id: u64,
    ) -> CreateTableAsyncBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        CreateTableAsync::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .name(name)
            .data_file_id(data_file_id)
    }

    /// Uploads a local CSV file and creates a table from it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storage_api::sapi::client::StorageClient;
    /// use storage_api::sapi::types::CreateTableOptions;
    ///
    /// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let options = CreateTableOptions::builder()
    ///     .primary_key(vec!["id".into()])
    ///     .build();
    /// let resp = client
    ///     .create_table("in.c-main", "users", "users.csv", options)
    ///     .await?;
    /// println!("created {}", resp.table_id()?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_table<S1, S2, P>(
        &self,
        bucket_id: S1,
        name: S2,
        csv_path: P,
        options: CreateTableOptions,
    ) -> Result<CreateTableResponse, Error>
    where
        S1: Into<String>,
        S2: Into<String>,
        P: AsRef<Path>,
    {
        let file_id = self.upload_file(csv_path, options.upload.clone()).await?;
        CreateTableAsync::from_upload(
            self.clone(),
            bucket_id.into(),
            name.into(),
            file_id,
            options,
        )
        .send()
        .await
    }

    /// Creates a typed table from column definitions.
    pub fn create_table_definition<S1, S2>(
        &self,
        bucket_id: S1,
        name: S2,
        columns: Vec<ColumnDefinition>,
    ) -> CreateTableDefinitionBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        CreateTableDefinition::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .name(name)
            .columns(columns)
    }

    pub fn create_table_with_configuration<S: Into<String>>(
        &self,
        bucket_id: S,
        options: TableWithConfigurationOptions,
    ) -> CreateTableWithConfigurationBldr {
        CreateTableWithConfiguration::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .options(options)
    }

    /// Creates an alias of `source_table_id` in the given bucket.
    pub fn create_alias_table<S1, S2>(
        &self,
        bucket_id: S1,
        source_table_id: S2,
    ) -> CreateAliasTableBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        CreateAliasTable::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .source_table_id(source_table_id)
    }

    pub fn create_table_from_snapshot<S1, S2>(
        &self,
        bucket_id: S1,
        snapshot_id: S2,
    ) -> CreateTableFromSnapshotBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        CreateTableFromSnapshot::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .snapshot_id(snapshot_id)
    }

    /// Creates a table with the content `source_table_id` had at
    /// `timestamp` (time travel).
    pub fn create_table_from_timestamp<S1, S2, S3>(
        &self,
        bucket_id: S1,
        source_table_id: S2,
        timestamp: S3,
    ) -> CreateTableFromTimestampBldr
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        CreateTableFromTimestamp::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
            .source_table_id(source_table_id)
            .timestamp(timestamp)
    }

    pub fn update_table<S: Into<String>>(&self, table_id: S) -> UpdateTableBldr {
        UpdateTable::builder().client(self.clone()).table_id(table_id)
    }

    pub fn drop_table<S: Into<String>>(&self, table_id: S) -> DropTableBldr {
        DropTable::builder().client(self.clone()).table_id(table_id)
    }

    /// Imports an already uploaded file into a table.
    pub fn write_table_async<S: Into<String>>(
        &self,
        table_id: S,
        data_file_id: u64,
    ) -> WriteTableAsyncBldr {
        WriteTableAsync::builder()
            .client(self.clone())
            .table_id(table_id)
            .data_file_id(data_file_id)
    }

    /// Uploads a local CSV file and imports it into a table.
    pub async fn write_table<S, P>(
        &self,
        table_id: S,
        csv_path: P,
        options: WriteTableOptions,
    ) -> Result<WriteTableResponse, Error>
    where
        S: Into<String>,
        P: AsRef<Path>,
    {
        let file_id = self.upload_file(csv_path, options.upload.clone()).await?;
        WriteTableAsync::from_upload(self.clone(), table_id.into(), file_id, options)
            .send()
            .await
    }

    /// Encodes in-memory rows as CSV, uploads them and imports them into a
    /// table.
    ///
    /// The header row is skipped when `without_headers` is set; the import
    /// then takes its column list from `options.columns`, or from the
    /// table header when none are given.
    pub async fn write_table_rows<S: Into<String>>(
        &self,
        table_id: S,
        data: &CsvTable,
        mut options: WriteTableOptions,
    ) -> Result<WriteTableResponse, Error> {
        let table_id = TableId::new(table_id)?;
        if options.without_headers && options.columns.is_empty() {
            options.columns = data.header.clone();
        }
        let mut csv = CsvOptions::default();
        if let Some(delimiter) = options.delimiter {
            csv = csv.delimiter(csv_byte("delimiter", delimiter)?);
        }
        if let Some(enclosure) = options.enclosure {
            csv = csv.enclosure(csv_byte("enclosure", enclosure)?);
        }

        let mut writer = CsvWriter::in_memory(&csv);
        if options.without_headers {
            for row in &data.rows {
                writer.write_row(row)?;
            }
        } else {
            writer.write_table(data)?;
        }
        let content = Bytes::from(writer.finish()?);

        let file_id = self
            .upload_bytes(
                format!("{}.csv", table_id.name()),
                content,
                options.upload.clone(),
            )
            .await?;
        WriteTableAsync::from_upload(self.clone(), table_id.into_inner(), file_id, options)
            .send()
            .await
    }

    pub fn export_table_async<S: Into<String>>(&self, table_id: S) -> ExportTableAsyncBldr {
        ExportTableAsync::builder()
            .client(self.clone())
            .table_id(table_id)
    }

    /// Reads a sample of rows; decode the body with
    /// [`csv()`](crate::sapi::response::TableDataPreviewResponse::csv).
    pub fn get_table_data_preview<S: Into<String>>(
        &self,
        table_id: S,
    ) -> GetTableDataPreviewBldr {
        GetTableDataPreview::builder()
            .client(self.clone())
            .table_id(table_id)
    }

    pub fn add_table_column<S1, S2>(&self, table_id: S1, name: S2) -> AddTableColumnBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        AddTableColumn::builder()
            .client(self.clone())
            .table_id(table_id)
            .name(name)
    }

    pub fn delete_table_column<S1, S2>(&self, table_id: S1, name: S2) -> DeleteTableColumnBldr
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        DeleteTableColumn::builder()
            .client(self.clone())
            .table_id(table_id)
            .name(name)
    }

    pub fn create_table_primary_key<S: Into<String>>(
        &self,
        table_id: S,
        columns: Vec<String>,
    ) -> CreateTablePrimaryKeyBldr {
        CreateTablePrimaryKey::builder()
            .client(self.clone())
            .table_id(table_id)
            .columns(columns)
    }

    pub fn remove_table_primary_key<S: Into<String>>(
        &self,
        table_id: S,
    ) -> RemoveTablePrimaryKeyBldr {
        RemoveTablePrimaryKey::builder()
            .client(self.clone())
            .table_id(table_id)
    }

    /// Deletes the rows matching the filters. Without filters every row is
    /// deleted.
    pub fn delete_table_rows<S: Into<String>>(&self, table_id: S) -> DeleteTableRowsBldr {
        DeleteTableRows::builder()
            .client(self.clone())
            .table_id(table_id)
    }

    pub fn create_table_snapshot<S: Into<String>>(&self, table_id: S) -> CreateTableSnapshotBldr {
        CreateTableSnapshot::builder()
            .client(self.clone())
            .table_id(table_id)
    }

    pub fn list_table_snapshots<S: Into<String>>(&self, table_id: S) -> ListTableSnapshotsBldr {
        ListTableSnapshots::builder()
            .client(self.clone())
            .table_id(table_id)
    }
}

fn csv_byte(name: &'static str, c: char) -> Result<u8, ValidationErr> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(ValidationErr::InvalidArgument {
            name,
            reason: format!("'{c}' is not an ASCII character"),
        })
    }
}
