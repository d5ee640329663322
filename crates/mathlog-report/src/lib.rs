//! mathlog-report - Analysis pipeline for practice-attempt datasets
//!
//! Ties the record store, the query engine and the statistics together into
//! one batch run:
//!
//! 1. Load and explore the dataset
//! 2. Fixed filter, sort and grouping steps
//! 3. Early-versus-late comparison (group statistics, Levene, t-test, CI)
//! 4. Configured ad-hoc queries
//! 5. Per-session trend and its SVG learning curve
//!
//! Every number leaves this crate as a formatted string; undefined values
//! are written as `undefined`.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod report;
pub mod table;

pub use analysis::{run_analysis, run_pipeline, titles, Analysis};
pub use chart::{learning_curve_svg, write_learning_curve, ChartStyle};
pub use config::*;
pub use error::{ReportError, Result};
pub use report::{AnalysisReport, Block, Section};
pub use table::ReportTable;
