//! Early-versus-late two-sample comparison
//!
//! Runs, on the same two groups of 0/1 outcomes:
//! 1. Levene's test (reported only, the t-test does not branch on it)
//! 2. Pooled Student's t-test of late vs. early
//! 3. Mean difference (late - early)
//! 4. Combined standard error `sqrt(SE_early² + SE_late²)`
//! 5. Confidence interval from the t-distribution with the same df
//!
//! The interval is undefined (NaN) when the combined standard error is zero.

use crate::group::GroupStats;
use crate::hypothesis::{levene, require_spread, student_t_test, t_critical, StatsResult, TestResult};
use serde::{Deserialize, Serialize};

/// Complete result of comparing two groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleComparison {
    pub early: GroupStats,
    pub late: GroupStats,
    pub levene: TestResult,
    pub t_test: TestResult,
    pub df: usize,
    pub mean_difference: f64,
    pub se_difference: f64,
    pub confidence: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl TwoSampleComparison {
    /// Compare two groups of indicator values.
    ///
    /// Fails with [`ComparisonError::InsufficientData`](crate::ComparisonError::InsufficientData)
    /// when either group has fewer than two observations.
    pub fn compute(early: &[f64], late: &[f64], confidence: f64) -> StatsResult<Self> {
        require_spread("early", early.len())?;
        require_spread("late", late.len())?;

        let early_stats = GroupStats::from_values(early);
        let late_stats = GroupStats::from_values(late);

        let levene = levene(&[early, late])?;
        let (t_test, df) = student_t_test(late, early)?;

        let mean_difference = late_stats.mean - early_stats.mean;
        let se_difference =
            (early_stats.std_error.powi(2) + late_stats.std_error.powi(2)).sqrt();
        let critical = t_critical(confidence, df as f64)?;
        let (ci_low, ci_high) = if se_difference.is_finite() && se_difference > 0.0 {
            let margin = critical * se_difference;
            (mean_difference - margin, mean_difference + margin)
        } else {
            (f64::NAN, f64::NAN)
        };

        Ok(Self {
            early: early_stats,
            late: late_stats,
            levene,
            t_test,
            df,
            mean_difference,
            se_difference,
            confidence,
            ci_low,
            ci_high,
        })
    }

    /// Whether the two-tailed p-value is below `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.t_test.p_value < alpha
    }

    /// Mean difference in percentage points
    pub fn improvement_points(&self) -> f64 {
        self.mean_difference * 100.0
    }
}
