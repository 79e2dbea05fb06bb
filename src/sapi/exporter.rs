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

//! Exports tables into local CSV files
//!
//! An export runs the `export-async` job, looks up the produced file and
//! downloads it. Sliced exports carry no header row, so the exporter writes
//! one before appending the slices.

use crate::sapi::builders::ExportTableAsync;
use crate::sapi::client::StorageClient;
use crate::sapi::csv::{CsvOptions, CsvWriter};
use crate::sapi::error::Error;
use crate::sapi::response_traits::{HasFileInfo, HasTable};
use crate::sapi::types::StorageApi;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub use crate::sapi::types::ExportOptions;

/// Outcome of one table export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportResult {
    /// Id of the storage file holding the export
    pub file_id: u64,
    pub path: PathBuf,
    /// True when the file was assembled from slices
    pub sliced: bool,
}

/// One entry of [`TableExporter::export_tables`]
#[derive(Clone, Debug)]
pub struct ExportJob {
    pub table_id: String,
    pub destination: PathBuf,
    pub options: ExportOptions,
}

impl ExportJob {
    pub fn new(table_id: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            table_id: table_id.into(),
            destination: destination.into(),
            options: ExportOptions::default(),
        }
    }

    pub fn options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }
}

/// Downloads tables as CSV files
///
/// # Example
///
/// ```no_run
/// use storage_api::sapi::client::StorageClient;
/// use storage_api::sapi::exporter::{ExportOptions, TableExporter};
///
/// # async fn example(client: StorageClient) -> Result<(), Box<dyn std::error::Error>> {
/// let exporter = TableExporter::new(client);
/// let result = exporter
///     .export_table("in.c-main.users", "users.csv", ExportOptions::default())
///     .await?;
/// println!("file {} written to {}", result.file_id, result.path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TableExporter {
    client: StorageClient,
    csv: CsvOptions,
}

impl TableExporter {
    pub fn new(client: StorageClient) -> Self {
        Self {
            client,
            csv: CsvOptions::default(),
        }
    }

    /// Exports one table into `destination`, replacing an existing file.
    pub async fn export_table<P: AsRef<Path>>(
        &self,
        table_id: &str,
        destination: P,
        options: ExportOptions,
    ) -> Result<ExportResult, Error> {
        let path = destination.as_ref().to_path_buf();
        let selected = options.columns.clone();

        let export = ExportTableAsync::from_options(
            self.client.clone(),
            table_id.to_string(),
            options,
        )
        .send()
        .await?;
        let file_id = export.file_id()?;

        let file = self
            .client
            .get_file(file_id)
            .federation_token(true)
            .build()
            .send()
            .await?
            .file_info()?;

        let mut out = tokio::fs::File::create(&path).await?;
        if file.is_sliced {
            let columns = if selected.is_empty() {
                self.client
                    .get_table(table_id)
                    .build()
                    .send()
                    .await?
                    .table()?
                    .columns
            } else {
                selected
            };
            out.write_all(&self.header_line(&columns)?).await?;
        }
        self.client.write_file_content(&file, &mut out).await?;
        out.flush().await?;

        log::info!(
            "exported {table_id} (file {file_id}{}) to {}",
            if file.is_sliced { ", sliced" } else { "" },
            path.display()
        );
        Ok(ExportResult {
            file_id,
            path,
            sliced: file.is_sliced,
        })
    }

    /// Runs the exports one after another. Stops at the first failure.
    pub async fn export_tables(&self, jobs: Vec<ExportJob>) -> Result<Vec<ExportResult>, Error> {
        let mut results = Vec::with_capacity(jobs.len());
        for job in jobs {
            results.push(
                self.export_table(&job.table_id, &job.destination, job.options)
                    .await?,
            );
        }
        Ok(results)
    }

    fn header_line(&self, columns: &[String]) -> Result<Vec<u8>, Error> {
        let mut writer = CsvWriter::in_memory(&self.csv);
        writer.write_row(columns)?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_quotes_every_column() {
        let client = StorageClient::new("http://localhost:8080".parse().unwrap(), "t").unwrap();
        let exporter = TableExporter::new(client);
        let line = exporter
            .header_line(&["id".to_string(), "full \"name\"".to_string()])
            .unwrap();
        assert_eq!(line, b"\"id\",\"full \"\"name\"\"\"\n");
    }
}
