//! Pre-formatted report tables
//!
//! Cells are final display strings; rendering only lays them out.

use crate::format;
use comfy_table::{presets::UTF8_FULL, CellAlignment, Table};
use mathlog_io::AttemptRecord;
use mathlog_query::{Field, FieldSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A titled table of display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new<I, S>(title: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column metric/value table
    pub fn key_values<K, V>(title: impl Into<String>, header: [&str; 2], pairs: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new(title, header);
        for (key, value) in pairs {
            table.push_row(vec![key.into(), value.into()]);
        }
        table
    }

    /// Table of whole records, or only the given columns
    pub fn records<'a, I>(title: impl Into<String>, rows: I, fields: &[Field]) -> Self
    where
        I: IntoIterator<Item = &'a AttemptRecord>,
    {
        let fields = if fields.is_empty() { &Field::ALL[..] } else { fields };
        let mut table = Self::new(title, fields.iter().map(|f| f.name()));
        for record in rows {
            table.push_row(fields.iter().map(|f| record_cell(record, *f)).collect());
        }
        table
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column values, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or("", String::as_str))
                .collect(),
        )
    }

    /// Lay the table out for a terminal
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(&self.columns);
        for row in &self.rows {
            table.add_row(row);
        }

        // First column is a label, the rest are values
        for idx in 1..self.columns.len() {
            if let Some(column) = table.column_mut(idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        format!("{}\n{}", self.title, table)
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn record_cell(record: &AttemptRecord, field: Field) -> String {
    match field {
        Field::IsCorrect => format::flag(record.is_correct).to_string(),
        Field::TimeSpentSeconds => format::measure(record.time_spent_seconds),
        _ => record.field_value(field).to_text(),
    }
}
