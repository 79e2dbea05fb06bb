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

//! CSV codec for table previews, exports and in-memory uploads

use crate::sapi::error::{Error, IoError};
use std::io::Write;

/// Dialect of a CSV document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub enclosure: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            enclosure: b'"',
        }
    }
}

impl CsvOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn enclosure(mut self, enclosure: u8) -> Self {
        self.enclosure = enclosure;
        self
    }
}

/// Decoded CSV document: the header and the data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).map(String::as_str).unwrap_or_default())
                .collect(),
        )
    }
}

/// Parses a CSV document whose first record is the header.
///
/// Every record must have as many fields as the header.
///
/// # Examples
///
/// ```
/// use storage_api::sapi::csv::{parse_csv, CsvOptions};
///
/// let table = parse_csv(b"\"id\",\"name\"\n\"1\",\"Alice\"\n", &CsvOptions::default()).unwrap();
/// assert_eq!(table.header, vec!["id", "name"]);
/// assert_eq!(table.rows, vec![vec!["1", "Alice"]]);
/// ```
pub fn parse_csv(data: &[u8], opts: &CsvOptions) -> Result<CsvTable, Error> {
    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(CsvTable::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .quote(opts.enclosure)
        .flexible(false)
        .from_reader(data);

    let header = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { header, rows })
}

/// Writes CSV with every field enclosed
///
/// The writer is synchronous. It is meant for in-memory buffers whose bytes
/// are then uploaded or written with `tokio::fs`.
pub struct CsvWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl CsvWriter<Vec<u8>> {
    /// Writer into an in-memory buffer
    pub fn in_memory(opts: &CsvOptions) -> Self {
        Self::from_writer(Vec::new(), opts)
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(writer: W, opts: &CsvOptions) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(opts.delimiter)
            .quote(opts.enclosure)
            .quote_style(csv::QuoteStyle::Always)
            .has_headers(false)
            .from_writer(writer);
        Self { inner }
    }

    /// Writes one record; use it for the header first
    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(row)?;
        Ok(())
    }

    /// Writes the header followed by all rows
    pub fn write_table(&mut self, table: &CsvTable) -> Result<(), Error> {
        self.write_row(&table.header)?;
        for row in &table.rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn finish(self) -> Result<W, Error> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(IoError::IOError(e.into_error())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields() {
        let data = b"\"id\",\"note\"\n\"1\",\"line one\nline two\"\n\"2\",\"say \"\"hi\"\"\"\n";
        let table = parse_csv(data, &CsvOptions::default()).unwrap();
        assert_eq!(table.header, vec!["id", "note"]);
        assert_eq!(table.rows[0][1], "line one\nline two");
        assert_eq!(table.rows[1][1], "say \"hi\"");
        assert_eq!(table.column("id").unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn empty_body_is_empty_table() {
        let table = parse_csv(b"", &CsvOptions::default()).unwrap();
        assert!(table.header.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn header_only() {
        let table = parse_csv(b"a,b\n", &CsvOptions::default()).unwrap();
        assert_eq!(table.header, vec!["a", "b"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn ragged_record_is_an_error() {
        let err = parse_csv(b"a,b\n1,2,3\n", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn custom_dialect() {
        let opts = CsvOptions::default().delimiter(b';').enclosure(b'\'');
        let table = parse_csv(b"'a';'b'\n'x;y';'z'\n", &opts).unwrap();
        assert_eq!(table.rows, vec![vec!["x;y", "z"]]);
    }

    #[test]
    fn writer_encloses_every_field() {
        let mut writer = CsvWriter::in_memory(&CsvOptions::default());
        writer.write_row(["id", "name"]).unwrap();
        writer.write_row(["1", "O\"Brien"]).unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out, "\"id\",\"name\"\n\"1\",\"O\"\"Brien\"\n");
    }

    #[test]
    fn writer_output_parses_back() {
        let table = CsvTable {
            header: vec!["k".into(), "v".into()],
            rows: vec![vec!["a".into(), "1,2".into()]],
        };
        let mut writer = CsvWriter::in_memory(&CsvOptions::default());
        writer.write_table(&table).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(parse_csv(&bytes, &CsvOptions::default()).unwrap(), table);
    }
}
