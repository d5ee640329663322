//! Grouped aggregation
//!
//! Splits a table by a key column and applies named reducers to each group.
//! Boolean columns only enter a mean through the explicit 0/1 indicator.

use crate::ast::{Field, FieldKind};
use crate::eval::{EvalError, EvalResult, FieldSource};
use mathlog_io::{AttemptRecord, AttemptTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A per-group reduction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reducer {
    /// Number of rows in the group
    Count,
    /// Arithmetic mean of a numeric or boolean column
    Mean(Field),
    /// Mean × 100
    Percentage(Field),
}

/// A reducer with its output column name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub name: String,
    pub reducer: Reducer,
}

impl Aggregation {
    pub fn new(name: impl Into<String>, reducer: Reducer) -> Self {
        Self {
            name: name.into(),
            reducer,
        }
    }

    pub fn count(name: impl Into<String>) -> Self {
        Self::new(name, Reducer::Count)
    }

    pub fn mean(name: impl Into<String>, field: Field) -> Self {
        Self::new(name, Reducer::Mean(field))
    }

    pub fn percentage(name: impl Into<String>, field: Field) -> Self {
        Self::new(name, Reducer::Percentage(field))
    }
}

/// One output row of a grouped aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    pub key: String,
    pub values: Vec<f64>,
}

/// Result of [`group_by`]: one row per distinct key, ordered by key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedTable {
    pub key: Field,
    pub columns: Vec<String>,
    pub rows: Vec<GroupRow>,
}

impl GroupedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Look up one aggregated value
    pub fn get(&self, key: &str, column: &str) -> Option<f64> {
        let col = self.column_index(column)?;
        self.rows
            .iter()
            .find(|row| row.key == key)
            .and_then(|row| row.values.get(col).copied())
    }

    /// All values of one output column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row.values[col]).collect())
    }
}

/// Read a column as a number for averaging
fn mean_input(row: &AttemptRecord, field: Field) -> EvalResult<f64> {
    let value = row.field_value(field);
    let number = match field.kind() {
        FieldKind::Numeric => value.as_number(),
        FieldKind::Boolean => value.as_indicator(),
        FieldKind::Categorical | FieldKind::Text => None,
    };
    number.ok_or(EvalError::NotNumeric { field })
}

fn check_reducer(reducer: &Reducer) -> EvalResult<()> {
    match reducer {
        Reducer::Count => Ok(()),
        Reducer::Mean(field) | Reducer::Percentage(field) => match field.kind() {
            FieldKind::Numeric | FieldKind::Boolean => Ok(()),
            _ => Err(EvalError::NotNumeric { field: *field }),
        },
    }
}

/// Mean of a column over a set of rows; NaN when there are no rows
pub fn mean_of<'a, I>(rows: I, field: Field) -> EvalResult<f64>
where
    I: IntoIterator<Item = &'a AttemptRecord>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for row in rows {
        sum += mean_input(row, field)?;
        n += 1;
    }
    Ok(if n == 0 { f64::NAN } else { sum / n as f64 })
}

/// Share of rows with `is_correct == true`, × 100; NaN for an empty table
pub fn success_rate(table: &AttemptTable) -> f64 {
    match mean_of(table, Field::IsCorrect) {
        Ok(mean) => mean * 100.0,
        Err(_) => f64::NAN,
    }
}

fn reduce(rows: &[&AttemptRecord], reducer: &Reducer) -> EvalResult<f64> {
    match reducer {
        Reducer::Count => Ok(rows.len() as f64),
        Reducer::Mean(field) => mean_of(rows.iter().copied(), *field),
        Reducer::Percentage(field) => Ok(mean_of(rows.iter().copied(), *field)? * 100.0),
    }
}

/// Group rows by a key column and apply each aggregation per group.
///
/// Every key present in the input gets exactly one output row.
pub fn group_by(
    table: &AttemptTable,
    key: Field,
    aggregations: &[Aggregation],
) -> EvalResult<GroupedTable> {
    if key.is_numeric() {
        return Err(EvalError::InvalidArguments(format!(
            "group key '{}' must be categorical",
            key
        )));
    }
    for agg in aggregations {
        check_reducer(&agg.reducer)?;
    }

    let mut groups: BTreeMap<String, Vec<&AttemptRecord>> = BTreeMap::new();
    for row in table {
        groups
            .entry(row.field_value(key).to_text())
            .or_default()
            .push(row);
    }

    let rows = groups
        .into_iter()
        .map(|(group_key, members)| {
            let values = aggregations
                .iter()
                .map(|agg| reduce(&members, &agg.reducer))
                .collect::<EvalResult<Vec<f64>>>()?;
            Ok(GroupRow {
                key: group_key,
                values,
            })
        })
        .collect::<EvalResult<Vec<GroupRow>>>()?;

    Ok(GroupedTable {
        key,
        columns: aggregations.iter().map(|a| a.name.clone()).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlog_io::{Difficulty, Operation};

    fn row(op: Operation, correct: bool, time: f64, attempts: u32) -> AttemptRecord {
        AttemptRecord {
            student_id: "S1".to_string(),
            problem: "p".to_string(),
            operation: op,
            difficulty_level: Difficulty::Easy,
            is_correct: correct,
            time_spent_seconds: time,
            attempts_needed: attempts,
            session_number: 1,
        }
    }

    fn operation_stats(table: &AttemptTable) -> GroupedTable {
        group_by(
            table,
            Field::Operation,
            &[
                Aggregation::count("total_problems"),
                Aggregation::mean("avg_time", Field::TimeSpentSeconds),
                Aggregation::percentage("success_rate", Field::IsCorrect),
                Aggregation::mean("avg_attempts", Field::AttemptsNeeded),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_group_by_operation() {
        let table = AttemptTable::new(vec![
            row(Operation::Multiplication, true, 10.0, 1),
            row(Operation::Addition, true, 4.0, 1),
            row(Operation::Multiplication, false, 20.0, 3),
            row(Operation::Multiplication, true, 6.0, 2),
        ]);
        let stats = operation_stats(&table);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.rows[0].key, "Addition");
        assert_eq!(stats.get("Multiplication", "total_problems"), Some(3.0));
        assert_eq!(stats.get("Multiplication", "avg_time"), Some(12.0));
        assert_eq!(stats.get("Multiplication", "avg_attempts"), Some(2.0));

        let rate = stats.get("Multiplication", "success_rate").unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-10);
        assert_eq!(stats.get("Addition", "success_rate"), Some(100.0));
    }

    #[test]
    fn test_group_by_empty_table() {
        let stats = operation_stats(&AttemptTable::default());
        assert!(stats.is_empty());
        assert_eq!(stats.columns.len(), 4);
    }

    #[test]
    fn test_group_by_rejects_label_mean() {
        let err = group_by(
            &AttemptTable::default(),
            Field::Operation,
            &[Aggregation::mean("bad", Field::Problem)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            EvalError::NotNumeric {
                field: Field::Problem
            }
        );
    }

    #[test]
    fn test_group_by_rejects_numeric_key() {
        assert!(group_by(&AttemptTable::default(), Field::TimeSpentSeconds, &[]).is_err());
    }

    #[test]
    fn test_success_rate_of_empty_is_undefined() {
        assert!(success_rate(&AttemptTable::default()).is_nan());

        let table = AttemptTable::new(vec![
            row(Operation::Addition, true, 1.0, 1),
            row(Operation::Addition, false, 1.0, 1),
        ]);
        assert_eq!(success_rate(&table), 50.0);
    }
}
