//! mathlog-stats - Statistical functions for practice-attempt analysis
//!
//! This crate provides the numeric layer of the analysis:
//!
//! - **Summary**: `describe`-style column summaries
//! - **Group statistics**: N, mean, standard deviation and standard error of
//!   0/1 outcomes
//! - **Hypothesis tests**: Levene's test and the pooled Student's t-test
//! - **Comparison**: the early-versus-late two-sample comparison with its
//!   confidence interval
//! - **Trend**: per-session success rates
//!
//! Nothing here knows about records or tables; callers reduce their rows to
//! plain `f64`/`bool` slices first. Undefined results are NaN, never a
//! substituted number.

pub mod comparison;
pub mod group;
pub mod hypothesis;
pub mod summary;
pub mod trend;

pub use comparison::*;
pub use group::*;
pub use hypothesis::*;
pub use summary::*;
pub use trend::*;
