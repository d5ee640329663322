//! Abstract Syntax Tree for row predicates
//!
//! This module defines the predicate types built programmatically or by the
//! text parser, and evaluated eagerly by [`crate::eval`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of the attempt table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    StudentId,
    Problem,
    Operation,
    DifficultyLevel,
    IsCorrect,
    TimeSpentSeconds,
    AttemptsNeeded,
    SessionNumber,
}

/// How a field's values may be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Boolean,
    Categorical,
    Text,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::StudentId,
        Field::Problem,
        Field::Operation,
        Field::DifficultyLevel,
        Field::IsCorrect,
        Field::TimeSpentSeconds,
        Field::AttemptsNeeded,
        Field::SessionNumber,
    ];

    /// Column name as it appears in the data file
    pub fn name(&self) -> &'static str {
        match self {
            Field::StudentId => "student_id",
            Field::Problem => "problem",
            Field::Operation => "operation",
            Field::DifficultyLevel => "difficulty_level",
            Field::IsCorrect => "is_correct",
            Field::TimeSpentSeconds => "time_spent_seconds",
            Field::AttemptsNeeded => "attempts_needed",
            Field::SessionNumber => "session_number",
        }
    }

    /// Look a field up by its column name
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::TimeSpentSeconds | Field::AttemptsNeeded | Field::SessionNumber => {
                FieldKind::Numeric
            }
            Field::IsCorrect => FieldKind::Boolean,
            Field::Operation | Field::DifficultyLevel => FieldKind::Categorical,
            Field::StudentId | Field::Problem => FieldKind::Text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind() == FieldKind::Numeric
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal on the right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
}

impl ComparisonOp {
    /// Evaluate the comparison for two f64 values
    pub fn evaluate(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOp::Lt => lhs < rhs,
            ComparisonOp::Le => lhs <= rhs,
            ComparisonOp::Gt => lhs > rhs,
            ComparisonOp::Ge => lhs >= rhs,
            ComparisonOp::Eq => (lhs - rhs).abs() < 1e-10,
            ComparisonOp::Ne => (lhs - rhs).abs() >= 1e-10,
        }
    }

    /// Only `==` and `!=` apply to booleans and labels
    pub fn is_equality(&self) -> bool {
        matches!(self, ComparisonOp::Eq | ComparisonOp::Ne)
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Lt => "<",
            ComparisonOp::Le => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Eq => "==",
            ComparisonOp::Ne => "!=",
        }
    }
}

/// A single `field op literal` atom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub field: Field,
    pub op: ComparisonOp,
    pub value: Literal,
}

impl Comparison {
    pub fn new(field: Field, op: ComparisonOp, value: Literal) -> Self {
        Self { field, op, value }
    }

    /// Create a field < value comparison
    pub fn field_lt(field: Field, value: f64) -> Self {
        Self::new(field, ComparisonOp::Lt, Literal::Number(value))
    }

    /// Create a field <= value comparison
    pub fn field_le(field: Field, value: f64) -> Self {
        Self::new(field, ComparisonOp::Le, Literal::Number(value))
    }

    /// Create a field > value comparison
    pub fn field_gt(field: Field, value: f64) -> Self {
        Self::new(field, ComparisonOp::Gt, Literal::Number(value))
    }

    /// Create a field >= value comparison
    pub fn field_ge(field: Field, value: f64) -> Self {
        Self::new(field, ComparisonOp::Ge, Literal::Number(value))
    }

    /// Create a field == number comparison
    pub fn field_eq(field: Field, value: f64) -> Self {
        Self::new(field, ComparisonOp::Eq, Literal::Number(value))
    }

    /// Create a field == true/false comparison
    pub fn flag_is(field: Field, value: bool) -> Self {
        Self::new(field, ComparisonOp::Eq, Literal::Bool(value))
    }

    /// Create a field == 'label' comparison
    pub fn label_is(field: Field, value: impl Into<String>) -> Self {
        Self::new(field, ComparisonOp::Eq, Literal::Text(value.into()))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op.as_str(), self.value)
    }
}

/// A row predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Logical AND of two predicates
    And(Box<Predicate>, Box<Predicate>),

    /// Logical OR of two predicates
    Or(Box<Predicate>, Box<Predicate>),

    /// Logical NOT of a predicate
    Not(Box<Predicate>),

    /// A comparison atom
    Comparison(Comparison),

    /// Every row (constant true)
    All,

    /// No row (constant false)
    None,
}

impl Predicate {
    /// Create an AND predicate
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    /// Create an OR predicate
    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    /// Create a NOT predicate
    pub fn not(predicate: Predicate) -> Self {
        Predicate::Not(Box::new(predicate))
    }

    /// Conjunction of comparison atoms; an empty list selects every row
    pub fn all_of<I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = Comparison>,
    {
        atoms
            .into_iter()
            .map(Predicate::Comparison)
            .reduce(Predicate::and)
            .unwrap_or(Predicate::All)
    }

    /// Range membership: `low <= field <= high`
    pub fn between(field: Field, low: f64, high: f64) -> Self {
        Predicate::and(
            Predicate::Comparison(Comparison::field_ge(field, low)),
            Predicate::Comparison(Comparison::field_le(field, high)),
        )
    }

    /// Number of comparison atoms in the tree
    pub fn atom_count(&self) -> usize {
        match self {
            Predicate::And(l, r) | Predicate::Or(l, r) => l.atom_count() + r.atom_count(),
            Predicate::Not(inner) => inner.atom_count(),
            Predicate::Comparison(_) => 1,
            Predicate::All | Predicate::None => 0,
        }
    }
}

impl From<Comparison> for Predicate {
    fn from(cmp: Comparison) -> Self {
        Predicate::Comparison(cmp)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::And(l, r) => write!(f, "({} && {})", l, r),
            Predicate::Or(l, r) => write!(f, "({} || {})", l, r),
            Predicate::Not(inner) => write!(f, "!{}", inner),
            Predicate::Comparison(cmp) => write!(f, "{}", cmp),
            Predicate::All => f.write_str("all"),
            Predicate::None => f.write_str("none"),
        }
    }
}
