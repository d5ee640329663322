//! Summary statistics for numeric columns
//!
//! Provides the `describe`-style summary of a column:
//! - Count, mean, sample standard deviation
//! - Min, max
//! - Quartiles by linear interpolation

use serde::{Deserialize, Serialize};

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN/infinite values that were skipped
    pub missing: usize,
    /// Mean (average)
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator)
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - sorted.len();

        if sorted.is_empty() {
            return Self::empty(missing);
        }

        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;

        Self {
            count,
            missing,
            mean,
            std_dev: sample_variance(&sorted, mean).sqrt(),
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Create empty statistics (all NaN)
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Values in `describe` order: count, mean, std, min, 25%, 50%, 75%, max
    pub fn describe_row(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std_dev,
            self.min,
            self.q1,
            self.median,
            self.q3,
            self.max,
        ]
    }
}

/// Row labels matching [`SummaryStats::describe_row`]
pub const DESCRIBE_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Arithmetic mean; NaN for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance around a known mean; NaN when fewer than two values
pub fn sample_variance(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

/// Median of unsorted data; NaN for an empty slice
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, 0.5)
}

/// Quantile of sorted data using linear interpolation between closest ranks
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}
