//! mathlog-io - Record store for practice-attempt datasets
//!
//! This crate loads the attempt dataset into strongly-typed records:
//!
//! - **Records**: `AttemptRecord` with closed `Operation`/`Difficulty` enums
//! - **Tables**: `AttemptTable`, an ordered collection that is never mutated
//! - **Readers**: header-driven CSV/TSV loading with schema validation
//!
//! # Design
//!
//! All readers implement the `RecordReader` trait for uniform access.
//! Loading is all-or-nothing: a missing column or a bad row aborts the load.

pub mod reader;
pub mod record;
pub mod schema;
pub mod table;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use reader::*;
pub use record::*;
pub use schema::*;
pub use table::*;
