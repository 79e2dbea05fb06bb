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

//! Responses of table operations

use crate::sapi::csv::{CsvOptions, CsvTable, parse_csv};
use crate::sapi::error::{Error, ValidationErr};
use crate::sapi::response_traits::{HasJobResult, HasStorageFields, HasTable};
use crate::sapi::types::{ImportResult, Snapshot, StorageRequest, Table};
use crate::{impl_from_storage_response, impl_from_storage_response_exists, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;
use serde_json::Value;

fn missing_field(field: &str) -> ValidationErr {
    ValidationErr::StrError {
        message: format!("Missing '{field}' field in response"),
        source: None,
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Response of `GET tables` and `GET buckets/{id}/tables`
#[derive(Clone, Debug)]
pub struct ListTablesResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListTablesResponse {
    pub fn tables(&self) -> Result<Vec<Table>, ValidationErr> {
        self.json()
    }
}

/// Response of `GET tables/{id}`
#[derive(Clone, Debug)]
pub struct GetTableResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of a table existence check
#[derive(Clone, Debug)]
pub struct TableExistsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    exists: bool,
}

impl TableExistsResponse {
    /// False when the server answered 404
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// Response of every table-creating operation
///
/// The new table is the result of the creation job.
#[derive(Clone, Debug)]
pub struct CreateTableResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateTableResponse {
    /// The created table
    pub fn table(&self) -> Result<Table, ValidationErr> {
        self.job_results()
    }

    /// Id of the created table, read from the job results
    pub fn table_id(&self) -> Result<String, ValidationErr> {
        let results: Value = self.job_results()?;
        results
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| self.job().and_then(|job| job.table_id))
            .ok_or_else(|| missing_field("id"))
    }
}

/// Response of table changes that run as a job: updates, column and primary
/// key changes
#[derive(Clone, Debug)]
pub struct TableJobResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl TableJobResponse {
    /// The table after the change, when the server returns it
    pub fn table(&self) -> Result<Table, ValidationErr> {
        self.job_results()
    }
}

/// Response of `DELETE tables/{id}`
#[derive(Clone, Debug)]
pub struct DropTableResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

/// Response of a table import
#[derive(Clone, Debug)]
pub struct WriteTableResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl WriteTableResponse {
    pub fn import_result(&self) -> Result<ImportResult, ValidationErr> {
        self.job_results()
    }
}

/// Response of a table export
#[derive(Clone, Debug)]
pub struct ExportTableResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ExportTableResponse {
    /// Id of the file holding the exported data
    pub fn file_id(&self) -> Result<u64, ValidationErr> {
        let results: Value = self.job_results()?;
        let id = results
            .get("file")
            .and_then(|f| f.get("id"))
            .and_then(id_string)
            .ok_or_else(|| missing_field("file.id"))?;
        id.parse::<u64>().map_err(|e| ValidationErr::StrError {
            message: format!("invalid file id '{id}'"),
            source: Some(e.into()),
        })
    }
}

/// Response of `GET tables/{id}/data-preview`; the body is CSV
#[derive(Clone, Debug)]
pub struct TableDataPreviewResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl TableDataPreviewResponse {
    /// Decodes the preview with the default CSV dialect
    pub fn csv(&self) -> Result<CsvTable, Error> {
        parse_csv(&self.body, &CsvOptions::default())
    }

    /// Decodes the preview with the given CSV dialect
    pub fn csv_with(&self, opts: &CsvOptions) -> Result<CsvTable, Error> {
        parse_csv(&self.body, opts)
    }
}

/// Response of `DELETE tables/{id}/rows`
#[derive(Clone, Debug)]
pub struct DeleteTableRowsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl DeleteTableRowsResponse {
    pub fn deleted_rows(&self) -> Result<u64, ValidationErr> {
        let results: Value = self.job_results()?;
        results
            .get("deletedRows")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing_field("deletedRows"))
    }
}

/// Response of `POST tables/{id}/snapshots`
#[derive(Clone, Debug)]
pub struct CreateTableSnapshotResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl CreateTableSnapshotResponse {
    pub fn snapshot_id(&self) -> Result<String, ValidationErr> {
        let results: Value = self.job_results()?;
        results
            .get("id")
            .and_then(id_string)
            .ok_or_else(|| missing_field("id"))
    }
}

/// Response of `GET tables/{id}/snapshots`
#[derive(Clone, Debug)]
pub struct ListTableSnapshotsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl ListTableSnapshotsResponse {
    pub fn snapshots(&self) -> Result<Vec<Snapshot>, ValidationErr> {
        self.json()
    }
}

impl_from_storage_response!(
    ListTablesResponse,
    GetTableResponse,
    CreateTableResponse,
    TableJobResponse,
    DropTableResponse,
    WriteTableResponse,
    ExportTableResponse,
    TableDataPreviewResponse,
    DeleteTableRowsResponse,
    CreateTableSnapshotResponse,
    ListTableSnapshotsResponse,
);
impl_from_storage_response_exists!(TableExistsResponse);
impl_has_storage_fields!(
    ListTablesResponse,
    GetTableResponse,
    TableExistsResponse,
    CreateTableResponse,
    TableJobResponse,
    DropTableResponse,
    WriteTableResponse,
    ExportTableResponse,
    TableDataPreviewResponse,
    DeleteTableRowsResponse,
    CreateTableSnapshotResponse,
    ListTableSnapshotsResponse,
);

impl HasTable for GetTableResponse {}
impl HasJobResult for CreateTableResponse {}
impl HasJobResult for TableJobResponse {}
impl HasJobResult for DropTableResponse {}
impl HasJobResult for WriteTableResponse {}
impl HasJobResult for ExportTableResponse {}
impl HasJobResult for DeleteTableRowsResponse {}
impl HasJobResult for CreateTableSnapshotResponse {}
