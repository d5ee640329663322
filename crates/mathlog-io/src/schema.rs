//! Schema and column types for the attempt dataset

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names every attempt file must carry, in canonical order
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "student_id",
    "problem",
    "operation",
    "difficulty_level",
    "is_correct",
    "time_spent_seconds",
    "attempts_needed",
    "session_number",
];

/// Schema describing the structure of a loaded dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,

    /// Additional metadata
    pub metadata: HashMap<String, String>,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
            metadata: HashMap::new(),
        }
    }

    /// The schema of a well-formed attempt table with `num_records` rows
    pub fn attempts(num_records: usize) -> Self {
        let columns = REQUIRED_COLUMNS
            .iter()
            .map(|name| ColumnDescriptor::new(*name, ColumnType::for_column(name)))
            .collect();
        Self::new(columns, num_records)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns), the way a dataframe reports its shape
    pub fn shape(&self) -> (usize, usize) {
        (self.num_records, self.num_columns())
    }

    /// Required columns absent from a header row
    pub fn missing_columns<'a, I>(headers: I) -> Vec<&'static str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = headers.into_iter().map(str::trim).collect();
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !present.contains(required))
            .collect()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,

    /// Physical units (if known)
    pub unit: Option<String>,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        let name = name.into();
        let unit = (name == "time_spent_seconds").then(|| "s".to_string());
        Self { name, dtype, unit }
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    Categorical,
    String,
}

impl ColumnType {
    /// The declared type of a known attempt column
    pub fn for_column(name: &str) -> Self {
        match name {
            "time_spent_seconds" => ColumnType::Float64,
            "attempts_needed" | "session_number" => ColumnType::Int64,
            "is_correct" => ColumnType::Bool,
            "operation" | "difficulty_level" => ColumnType::Categorical,
            _ => ColumnType::String,
        }
    }

    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64 | ColumnType::Int64)
    }
}
