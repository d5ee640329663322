//! Record reader trait and common types
//!
//! The `RecordReader` trait provides a uniform interface for loading attempt
//! records, whatever the file format.

use crate::schema::DataSchema;
use crate::table::AttemptTable;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumn(Vec<String>),

    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for loading attempt records from a file
pub trait RecordReader: Send + Sync {
    /// Read the schema (column names, types, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read every record into an immutable table
    fn read_records(&self) -> IoResult<AttemptTable>;

    /// Get metadata as key-value pairs
    fn metadata(&self) -> &HashMap<String, String>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn RecordReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        #[cfg(feature = "csv")]
        "tsv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_delimiter(path, b'\t')?))
        }

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}

/// Open a file and load all of its records
pub fn load_table(path: &str) -> IoResult<AttemptTable> {
    let reader = open_file(path)?;
    let table = reader.read_records()?;
    tracing::info!(
        "Loaded {} records from {} ({})",
        table.len(),
        path,
        reader.format_name()
    );
    Ok(table)
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    let mut extensions = Vec::new();

    #[cfg(feature = "csv")]
    {
        extensions.push("csv");
        extensions.push("tsv");
    }

    extensions
}
