//! Error types for mathlog-report

use mathlog_io::IoError;
use mathlog_query::{EvalError, ParseError};
use mathlog_stats::ComparisonError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for a pipeline run
#[derive(Error, Debug)]
pub enum ReportError {
    /// Dataset could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] IoError),

    /// Configuration is unreadable or invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A query could not be parsed
    #[error("Query error: {0}")]
    Query(#[from] ParseError),

    /// A query could not be evaluated
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Statistics failed for a reason other than thin groups
    #[error("Statistics error: {0}")]
    Stats(#[from] ComparisonError),

    /// Chart could not be written
    #[error("Failed to write chart to {path}: {source}")]
    Chart {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
