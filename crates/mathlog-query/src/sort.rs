//! Explicit ordering and extreme-value selection
//!
//! Filtering never reorders rows; sorting is a separate step that always
//! yields a new table.

use crate::ast::Field;
use crate::eval::{number_of, EvalError, EvalResult};
use mathlog_io::{AttemptRecord, AttemptTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Which end of a numeric column to select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

/// Stable sort by a single numeric field.
///
/// Rows with equal keys keep their relative order in both directions.
pub fn sort_by(table: &AttemptTable, field: Field, order: SortOrder) -> EvalResult<AttemptTable> {
    if !field.is_numeric() {
        return Err(EvalError::NotNumeric { field });
    }

    let mut keyed: Vec<(f64, &AttemptRecord)> = table
        .iter()
        .map(|row| number_of(row, field).map(|key| (key, row)))
        .collect::<EvalResult<_>>()?;

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => a.total_cmp(b),
        SortOrder::Descending => b.total_cmp(a),
    });

    Ok(keyed.into_iter().map(|(_, row)| row.clone()).collect())
}

/// Largest value of a numeric field, `None` for an empty table
pub fn max_value(table: &AttemptTable, field: Field) -> EvalResult<Option<f64>> {
    extreme_value(table, field, Extreme::Max)
}

/// Smallest value of a numeric field, `None` for an empty table
pub fn min_value(table: &AttemptTable, field: Field) -> EvalResult<Option<f64>> {
    extreme_value(table, field, Extreme::Min)
}

fn extreme_value(table: &AttemptTable, field: Field, which: Extreme) -> EvalResult<Option<f64>> {
    if !field.is_numeric() {
        return Err(EvalError::NotNumeric { field });
    }

    let mut best: Option<f64> = None;
    for row in table {
        let value = number_of(row, field)?;
        best = Some(match (best, which) {
            (None, _) => value,
            (Some(current), Extreme::Max) => current.max(value),
            (Some(current), Extreme::Min) => current.min(value),
        });
    }
    Ok(best)
}

/// Every row whose field equals the column's extreme, ties included
pub fn extreme_rows(table: &AttemptTable, field: Field, which: Extreme) -> EvalResult<AttemptTable> {
    let Some(target) = extreme_value(table, field, which)? else {
        return Ok(AttemptTable::default());
    };

    let mut rows = Vec::new();
    for row in table {
        if number_of(row, field)?.total_cmp(&target) == Ordering::Equal {
            rows.push(row.clone());
        }
    }
    Ok(AttemptTable::new(rows))
}
