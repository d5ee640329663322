//! mathlog-query - Filter/aggregate engine for attempt tables
//!
//! Row selection is expressed as explicit predicate trees that are applied
//! eagerly, each call returning a new table:
//!
//! - **Predicates**: `session_number >= 1 && session_number <= 5`
//! - **Sorting**: stable, single numeric key, as a separate step
//! - **Extremes**: every row tied at a column's min or max
//! - **Grouping**: count / mean / percentage per categorical key
//!
//! # Examples
//!
//! ```ignore
//! use mathlog_query::{filter, parse_predicate};
//!
//! let wrong_mult = parse_predicate("operation == 'Multiplication' && is_correct == false")?;
//! let rows = filter(&table, &wrong_mult)?;
//! ```

pub mod aggregate;
pub mod ast;
pub mod eval;
pub mod parser;
pub mod sort;

pub use aggregate::*;
pub use ast::*;
pub use eval::*;
pub use parser::*;
pub use sort::*;
