//! Hypothesis tests
//!
//! - **Levene**: Brown-Forsythe variant (absolute deviations from each
//!   group's median), p-value from F(k-1, N-k)
//! - **Student's t**: independent two-sample test with pooled variance,
//!   two-tailed p-value on n_a + n_b - 2 degrees of freedom

use crate::summary::{mean, median, sample_variance};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use thiserror::Error;

/// Errors from the comparison layer
#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("Insufficient data for comparison: {group} group has {n} observation(s), at least 2 are needed")]
    InsufficientData { group: String, n: usize },

    #[error("Levene's test needs at least two groups, got {0}")]
    TooFewGroups(usize),

    #[error("Confidence level must be in (0, 1), got {0}")]
    InvalidConfidence(f64),

    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type for statistical tests
pub type StatsResult<T> = Result<T, ComparisonError>;

/// Test statistic with its p-value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub statistic: f64,
    pub p_value: f64,
}

pub(crate) fn require_spread(group: &str, n: usize) -> StatsResult<()> {
    if n < 2 {
        return Err(ComparisonError::InsufficientData {
            group: group.to_string(),
            n,
        });
    }
    Ok(())
}

/// Levene's test for equal variances, centred on group medians.
///
/// A zero within-group spread gives a NaN statistic when the groups are
/// also identical in spread, and an infinite one otherwise.
pub fn levene(groups: &[&[f64]]) -> StatsResult<TestResult> {
    let k = groups.len();
    if k < 2 {
        return Err(ComparisonError::TooFewGroups(k));
    }
    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(ComparisonError::InsufficientData {
                group: format!("#{}", i + 1),
                n: 0,
            });
        }
    }

    let total: usize = groups.iter().map(|g| g.len()).sum();
    if total <= k {
        return Err(ComparisonError::InsufficientData {
            group: "pooled".to_string(),
            n: total,
        });
    }

    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|g| {
            let centre = median(g);
            g.iter().map(|x| (x - centre).abs()).collect()
        })
        .collect();

    let group_means: Vec<f64> = deviations.iter().map(|z| mean(z)).collect();
    let grand_mean = deviations.iter().flatten().sum::<f64>() / total as f64;

    let between: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(z, m)| z.len() as f64 * (m - grand_mean).powi(2))
        .sum();
    let within: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(z, m)| z.iter().map(|x| (x - m).powi(2)).sum::<f64>())
        .sum();

    let df1 = (k - 1) as f64;
    let df2 = (total - k) as f64;
    let statistic = (df2 / df1) * (between / within);

    let p_value = if statistic.is_nan() {
        f64::NAN
    } else if statistic.is_infinite() {
        0.0
    } else {
        FisherSnedecor::new(df1, df2)
            .map_err(|e| ComparisonError::Distribution(e.to_string()))?
            .sf(statistic)
    };

    Ok(TestResult { statistic, p_value })
}

/// Pooled-variance t-test of `mean(a) - mean(b)`.
///
/// Returns the test result and the degrees of freedom.
pub fn student_t_test(a: &[f64], b: &[f64]) -> StatsResult<(TestResult, usize)> {
    require_spread("first", a.len())?;
    require_spread("second", b.len())?;

    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let df = a.len() + b.len() - 2;

    let mean_a = mean(a);
    let mean_b = mean(b);
    let pooled = ((n_a - 1.0) * sample_variance(a, mean_a)
        + (n_b - 1.0) * sample_variance(b, mean_b))
        / df as f64;
    let se = (pooled * (1.0 / n_a + 1.0 / n_b)).sqrt();

    let diff = mean_a - mean_b;
    let statistic = if se == 0.0 {
        if diff == 0.0 {
            f64::NAN
        } else {
            diff.signum() * f64::INFINITY
        }
    } else {
        diff / se
    };

    let p_value = two_tailed_p(statistic, df as f64)?;
    Ok((TestResult { statistic, p_value }, df))
}

/// Two-tailed p-value of a t statistic
pub fn two_tailed_p(statistic: f64, df: f64) -> StatsResult<f64> {
    if statistic.is_nan() {
        return Ok(f64::NAN);
    }
    if statistic.is_infinite() {
        return Ok(0.0);
    }
    let dist = t_distribution(df)?;
    Ok((2.0 * dist.sf(statistic.abs())).min(1.0))
}

/// Critical value `t*` with `P(-t* < T < t*) = confidence`
pub fn t_critical(confidence: f64, df: f64) -> StatsResult<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ComparisonError::InvalidConfidence(confidence));
    }
    let dist = t_distribution(df)?;
    Ok(dist.inverse_cdf(0.5 + confidence / 2.0))
}

fn t_distribution(df: f64) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| ComparisonError::Distribution(e.to_string()))
}
