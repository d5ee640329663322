//! CSV file reader for attempt records
//!
//! Rows are deserialized by header name, so column order does not matter and
//! extra columns are ignored.

use crate::reader::{IoError, IoResult, RecordReader};
use crate::record::AttemptRecord;
use crate::schema::DataSchema;
use crate::table::AttemptTable;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV file reader
pub struct CsvReader {
    path: String,
    table: AttemptTable,
    metadata: HashMap<String, String>,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file
    pub fn open_with_delimiter(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let table = read_attempts(BufReader::new(file), delimiter)?;

        let mut metadata = HashMap::new();
        metadata.insert("format".to_string(), "CSV".to_string());
        metadata.insert("delimiter".to_string(), (delimiter as char).to_string());

        tracing::debug!("Parsed {} rows from {}", table.len(), path);

        Ok(Self {
            path: path.to_string(),
            table,
            metadata,
        })
    }
}

impl RecordReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        let mut schema = self.table.schema();
        schema.metadata = self.metadata.clone();
        Ok(schema)
    }

    fn read_records(&self) -> IoResult<AttemptTable> {
        Ok(self.table.clone())
    }

    fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Parse attempt records from any delimited source.
///
/// Fails on the first missing column, unparsable field or invariant
/// violation; no partial table is returned.
pub fn read_attempts<R: Read>(source: R, delimiter: u8) -> IoResult<AttemptTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();

    let missing = DataSchema::missing_columns(headers.iter());
    if !missing.is_empty() {
        return Err(IoError::MissingColumn(
            missing.into_iter().map(str::to_string).collect(),
        ));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: AttemptRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| IoError::InvalidRecord {
                line,
                message: e.to_string(),
            })?;
        record
            .validate()
            .map_err(|message| IoError::InvalidRecord { line, message })?;

        records.push(record);
    }

    Ok(AttemptTable::new(records))
}
