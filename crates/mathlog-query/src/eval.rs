//! Predicate evaluation
//!
//! Predicates are type-checked once, then applied eagerly to every row. The
//! result is always a new [`AttemptTable`]; nothing keeps a lazy view of the
//! source.

use crate::ast::*;
use mathlog_io::{AttemptRecord, AttemptTable};
use thiserror::Error;

/// Evaluation errors
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Field '{field}' is not numeric")]
    NotNumeric { field: Field },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// A borrowed cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Bool(bool),
    Label(&'a str),
}

impl<'a> FieldValue<'a> {
    /// The value of a numeric cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// A boolean cell read as a 0/1 indicator
    pub fn as_indicator(&self) -> Option<f64> {
        match self {
            FieldValue::Bool(true) => Some(1.0),
            FieldValue::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Display text for the cell
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(true) => "True".to_string(),
            FieldValue::Bool(false) => "False".to_string(),
            FieldValue::Label(s) => s.to_string(),
        }
    }
}

/// Provides field values for a single row
pub trait FieldSource {
    fn field_value(&self, field: Field) -> FieldValue<'_>;
}

impl FieldSource for AttemptRecord {
    fn field_value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::StudentId => FieldValue::Label(&self.student_id),
            Field::Problem => FieldValue::Label(&self.problem),
            Field::Operation => FieldValue::Label(self.operation.as_str()),
            Field::DifficultyLevel => FieldValue::Label(self.difficulty_level.as_str()),
            Field::IsCorrect => FieldValue::Bool(self.is_correct),
            Field::TimeSpentSeconds => FieldValue::Number(self.time_spent_seconds),
            Field::AttemptsNeeded => FieldValue::Number(self.attempts_needed as f64),
            Field::SessionNumber => FieldValue::Number(self.session_number as f64),
        }
    }
}

/// Read a numeric field, rejecting non-numeric columns
pub fn number_of<S: FieldSource>(row: &S, field: Field) -> EvalResult<f64> {
    row.field_value(field)
        .as_number()
        .ok_or(EvalError::NotNumeric { field })
}

/// Check that every comparison in a predicate is well-typed
pub fn check(predicate: &Predicate) -> EvalResult<()> {
    match predicate {
        Predicate::And(l, r) | Predicate::Or(l, r) => {
            check(l)?;
            check(r)
        }
        Predicate::Not(inner) => check(inner),
        Predicate::Comparison(cmp) => check_comparison(cmp),
        Predicate::All | Predicate::None => Ok(()),
    }
}

fn check_comparison(cmp: &Comparison) -> EvalResult<()> {
    let ok = match (cmp.field.kind(), &cmp.value) {
        (FieldKind::Numeric, Literal::Number(_)) => true,
        (FieldKind::Boolean, Literal::Bool(_)) => cmp.op.is_equality(),
        (FieldKind::Categorical | FieldKind::Text, Literal::Text(_)) => cmp.op.is_equality(),
        _ => false,
    };

    if ok {
        Ok(())
    } else {
        Err(EvalError::TypeError(format!(
            "cannot evaluate '{}': {} does not support {} with {}",
            cmp,
            cmp.field,
            cmp.op.as_str(),
            cmp.value
        )))
    }
}

/// Evaluate a checked predicate against one row
pub fn evaluate_at<S: FieldSource>(predicate: &Predicate, row: &S) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::None => false,
        Predicate::And(left, right) => evaluate_at(left, row) && evaluate_at(right, row),
        Predicate::Or(left, right) => evaluate_at(left, row) || evaluate_at(right, row),
        Predicate::Not(inner) => !evaluate_at(inner, row),
        Predicate::Comparison(cmp) => evaluate_comparison(cmp, row),
    }
}

fn evaluate_comparison<S: FieldSource>(cmp: &Comparison, row: &S) -> bool {
    match (row.field_value(cmp.field), &cmp.value) {
        (FieldValue::Number(lhs), Literal::Number(rhs)) => cmp.op.evaluate(lhs, *rhs),
        (FieldValue::Bool(lhs), Literal::Bool(rhs)) => match cmp.op {
            ComparisonOp::Ne => lhs != *rhs,
            _ => lhs == *rhs,
        },
        (FieldValue::Label(lhs), Literal::Text(rhs)) => match cmp.op {
            ComparisonOp::Ne => lhs != rhs,
            _ => lhs == rhs,
        },
        // Ruled out by `check`
        _ => false,
    }
}

/// Evaluate a predicate over a table, returning a selection mask
pub fn mask(table: &AttemptTable, predicate: &Predicate) -> EvalResult<Vec<bool>> {
    check(predicate)?;
    Ok(table.iter().map(|row| evaluate_at(predicate, row)).collect())
}

/// Rows satisfying the predicate, in their original relative order
pub fn filter(table: &AttemptTable, predicate: &Predicate) -> EvalResult<AttemptTable> {
    check(predicate)?;
    Ok(table
        .iter()
        .filter(|row| evaluate_at(predicate, *row))
        .cloned()
        .collect())
}

/// Number of rows satisfying the predicate
pub fn count_matching(table: &AttemptTable, predicate: &Predicate) -> EvalResult<usize> {
    mask(table, predicate).map(|m| count_selected(&m))
}

/// Count the number of selected rows
pub fn count_selected(mask: &[bool]) -> usize {
    mask.iter().filter(|&&b| b).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlog_io::{Difficulty, Operation};

    fn row(op: Operation, correct: bool, time: f64, attempts: u32, session: u32) -> AttemptRecord {
        AttemptRecord {
            student_id: format!("S{}", session),
            problem: "p".to_string(),
            operation: op,
            difficulty_level: Difficulty::Hard,
            is_correct: correct,
            time_spent_seconds: time,
            attempts_needed: attempts,
            session_number: session,
        }
    }

    fn table() -> AttemptTable {
        AttemptTable::new(vec![
            row(Operation::Addition, true, 4.0, 1, 1),
            row(Operation::Multiplication, false, 22.0, 3, 2),
            row(Operation::Multiplication, true, 8.0, 1, 6),
            row(Operation::Division, false, 31.0, 4, 12),
            row(Operation::Subtraction, true, 9.5, 2, 14),
        ])
    }

    #[test]
    fn test_evaluate_comparison() {
        let expr = Predicate::from(Comparison::field_gt(Field::TimeSpentSeconds, 20.0));
        let mask = mask(&table(), &expr).unwrap();

        assert_eq!(mask, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let expr = Predicate::from(Comparison::flag_is(Field::IsCorrect, true));
        let result = filter(&table(), &expr).unwrap();

        let sessions: Vec<u32> = result.iter().map(|r| r.session_number).collect();
        assert_eq!(sessions, vec![1, 6, 14]);
    }

    #[test]
    fn test_evaluate_and() {
        let expr = Predicate::all_of([
            Comparison::label_is(Field::Operation, "Multiplication"),
            Comparison::flag_is(Field::IsCorrect, false),
        ]);
        let result = filter(&table(), &expr).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.records()[0].attempts_needed, 3);
    }

    #[test]
    fn test_range_membership() {
        let early = filter(&table(), &Predicate::between(Field::SessionNumber, 1.0, 5.0)).unwrap();
        assert_eq!(early.len(), 2);
    }

    #[test]
    fn test_not_and_or() {
        let expr = Predicate::or(
            Predicate::from(Comparison::label_is(Field::Operation, "Division")),
            Predicate::not(Predicate::from(Comparison::field_lt(Field::SessionNumber, 10.0))),
        );
        assert_eq!(count_matching(&table(), &expr).unwrap(), 2);
    }

    #[test]
    fn test_type_errors_are_reported() {
        let ordering_on_label = Predicate::from(Comparison::new(
            Field::Operation,
            ComparisonOp::Gt,
            Literal::Text("Addition".into()),
        ));
        assert!(matches!(
            filter(&table(), &ordering_on_label),
            Err(EvalError::TypeError(_))
        ));

        let number_on_flag = Predicate::from(Comparison::field_eq(Field::IsCorrect, 1.0));
        assert!(filter(&table(), &number_on_flag).is_err());

        // Checked even when there is nothing to scan
        assert!(filter(&AttemptTable::default(), &number_on_flag).is_err());
    }

    #[test]
    fn test_indicator_is_explicit() {
        let record = row(Operation::Addition, true, 1.0, 1, 1);
        let value = record.field_value(Field::IsCorrect);
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_indicator(), Some(1.0));
        assert!(matches!(
            number_of(&record, Field::IsCorrect),
            Err(EvalError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_count_selected() {
        let mask = vec![true, false, true, false, true];
        assert_eq!(count_selected(&mask), 3);
    }
}
