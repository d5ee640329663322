//! Configuration for an analysis run
//!
//! Every setting has a default, so an absent `mathlog.toml` gives the
//! standard early (sessions 1-5) versus late (sessions 11+) analysis of
//! `math_practice_data.csv`.

use mathlog_query::{parse_predicate, Field, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "mathlog.toml";

/// Analysis-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Input dataset
    pub data: DataConfig,
    /// Session bounds of the compared groups
    pub groups: GroupConfig,
    /// Hypothesis test settings
    pub test: TestConfig,
    /// Filter thresholds used by the fixed report steps
    pub thresholds: ThresholdConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Extra ad-hoc queries appended to the report
    pub queries: Vec<QueryConfig>,
}

/// Input dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a CSV or TSV file
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "math_practice_data.csv".to_string(),
        }
    }
}

/// Session bounds of the early and late groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Early group is `session_number <= early_max_session`
    pub early_max_session: u32,
    /// Late group is `session_number >= late_min_session`
    pub late_min_session: u32,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            early_max_session: 5,
            late_min_session: 11,
        }
    }
}

/// Hypothesis test configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Significance level for the two-tailed p-value
    pub alpha: f64,
    /// Confidence level of the mean-difference interval
    pub confidence: f64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            confidence: 0.95,
        }
    }
}

/// Thresholds for the fixed filter steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// "Slow" means strictly more seconds than this
    pub slow_seconds: f64,
    /// "Quick" means strictly fewer seconds than this
    pub quick_seconds: f64,
    /// "Struggling" means strictly more attempts than this
    pub struggle_attempts: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            slow_seconds: 20.0,
            quick_seconds: 10.0,
            struggle_attempts: 2,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the learning-curve SVG is written
    pub chart_path: String,
    /// Rows shown for record listings
    pub preview_rows: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_path: "learning_curve.svg".to_string(),
            preview_rows: 10,
        }
    }
}

/// A named text query, e.g. `operation == 'Division' && is_correct == false`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub name: String,
    pub filter: String,
    /// Numeric column to sort the matches by
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
    /// Maximum rows to list; all matches are still counted
    #[serde(default)]
    pub limit: Option<usize>,
}

impl QueryConfig {
    /// Resolve `sort_by` to a numeric field
    pub fn sort_field(&self) -> Result<Option<Field>, ConfigError> {
        let Some(name) = &self.sort_by else {
            return Ok(None);
        };
        match Field::from_name(name) {
            Some(field) if field.is_numeric() => Ok(Some(field)),
            Some(_) => Err(ConfigError::InvalidQuery {
                name: self.name.clone(),
                message: format!("cannot sort by non-numeric column '{}'", name),
            }),
            None => Err(ConfigError::InvalidQuery {
                name: self.name.clone(),
                message: format!("unknown column '{}'", name),
            }),
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read and validate `path` if it exists, otherwise use the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.path.trim().is_empty() {
            return Err(ConfigError::MissingField("data.path".to_string()));
        }

        if self.groups.early_max_session == 0 {
            return Err(ConfigError::OutOfRange(
                "early_max_session must be at least 1".to_string(),
            ));
        }

        // The compared groups must not overlap
        if self.groups.late_min_session <= self.groups.early_max_session {
            return Err(ConfigError::InvalidThresholds(
                "late_min_session must be greater than early_max_session".to_string(),
            ));
        }

        if !(self.test.alpha > 0.0 && self.test.alpha < 1.0) {
            return Err(ConfigError::OutOfRange(
                "alpha must be between 0.0 and 1.0".to_string(),
            ));
        }

        if !(self.test.confidence > 0.0 && self.test.confidence < 1.0) {
            return Err(ConfigError::OutOfRange(
                "confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        if !(self.thresholds.slow_seconds >= 0.0 && self.thresholds.quick_seconds >= 0.0) {
            return Err(ConfigError::OutOfRange(
                "time thresholds must be non-negative".to_string(),
            ));
        }

        if self.output.preview_rows == 0 {
            return Err(ConfigError::OutOfRange(
                "preview_rows must be positive".to_string(),
            ));
        }

        if self.output.chart_path.trim().is_empty() {
            return Err(ConfigError::MissingField("output.chart_path".to_string()));
        }

        for query in &self.queries {
            if query.name.trim().is_empty() {
                return Err(ConfigError::MissingField("queries.name".to_string()));
            }
            parse_predicate(&query.filter).map_err(|e| ConfigError::InvalidQuery {
                name: query.name.clone(),
                message: e.to_string(),
            })?;
            query.sort_field()?;
        }

        Ok(())
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold values are invalid relative to each other
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A configured query is malformed
    #[error("Invalid query '{name}': {message}")]
    InvalidQuery { name: String, message: String },

    /// The file is not valid TOML for this schema
    #[error("Invalid TOML: {0}")]
    Toml(String),

    /// The file exists but could not be read
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.groups.early_max_session, 5);
        assert_eq!(config.groups.late_min_session, 11);
        assert_eq!(config.test.alpha, 0.05);
        assert_eq!(config.output.preview_rows, 10);
    }

    #[test]
    fn test_json_serialization() {
        let config = AnalysisConfig::default();
        let json = config.to_json().unwrap();
        let parsed = AnalysisConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalysisConfig::from_toml(
            r#"
            [groups]
            late_min_session = 9

            [[queries]]
            name = "slow division"
            filter = "operation == 'Division' && time_spent_seconds > 30"
            sort_by = "time_spent_seconds"
            order = "descending"
            limit = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.groups.early_max_session, 5);
        assert_eq!(config.groups.late_min_session, 9);
        assert_eq!(config.data.path, "math_practice_data.csv");
        assert_eq!(config.queries.len(), 1);
        assert_eq!(config.queries[0].order, SortOrder::Descending);
        assert_eq!(
            config.queries[0].sort_field().unwrap(),
            Some(Field::TimeSpentSeconds)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlapping_groups() {
        let mut config = AnalysisConfig::default();
        config.groups.late_min_session = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_out_of_range() {
        let mut config = AnalysisConfig::default();
        config.test.confidence = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        let mut config = AnalysisConfig::default();
        config.test.alpha = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_query() {
        let mut config = AnalysisConfig::default();
        config.queries.push(QueryConfig {
            name: "bad".to_string(),
            filter: "colour == 'red'".to_string(),
            sort_by: None,
            order: SortOrder::Ascending,
            limit: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidQuery { .. })
        ));

        config.queries[0].filter = "is_correct == true".to_string();
        config.queries[0].sort_by = Some("operation".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE);
        assert_eq!(
            AnalysisConfig::load_or_default(&missing).unwrap(),
            AnalysisConfig::default()
        );

        let mut file = std::fs::File::create(&missing).unwrap();
        writeln!(file, "[test]\nalpha = 0.01").unwrap();
        let loaded = AnalysisConfig::load_or_default(&missing).unwrap();
        assert_eq!(loaded.test.alpha, 0.01);

        std::fs::write(&missing, "[groups]\nearly_max_session = 0\n").unwrap();
        assert!(AnalysisConfig::load_or_default(&missing).is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AnalysisConfig::from_toml("[groups\n"),
            Err(ConfigError::Toml(_))
        ));
    }
}
