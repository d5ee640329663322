//! Statistics for one group of 0/1 outcomes

use crate::summary::{mean, sample_variance};
use serde::{Deserialize, Serialize};

/// Convert boolean outcomes to 0/1 indicators
///
/// This is the single place where a boolean becomes a number.
pub fn indicators<I>(outcomes: I) -> Vec<f64>
where
    I: IntoIterator<Item = bool>,
{
    outcomes
        .into_iter()
        .map(|b| if b { 1.0 } else { 0.0 })
        .collect()
}

/// N, mean, sample standard deviation and standard error of a group
///
/// `std_dev` and `std_error` are NaN when `n <= 1`; `mean` is NaN when `n == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub std_error: f64,
}

impl GroupStats {
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        let mean = mean(values);
        let std_dev = sample_variance(values, mean).sqrt();
        let std_error = if n > 1 {
            std_dev / (n as f64).sqrt()
        } else {
            f64::NAN
        };

        Self {
            n,
            mean,
            std_dev,
            std_error,
        }
    }

    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self::from_values(&indicators(outcomes))
    }

    /// Whether spread statistics are defined for this group
    pub fn has_spread(&self) -> bool {
        self.n > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_group_stats_known_values() {
        // 3 of 4 correct
        let stats = GroupStats::from_outcomes([true, true, false, true]);
        assert_eq!(stats.n, 4);
        assert_eq!(stats.mean, 0.75);
        // var = (3 * 0.0625 + 0.5625) / 3 = 0.25
        assert!((stats.std_dev - 0.5).abs() < 1e-12);
        assert!((stats.std_error - 0.25).abs() < 1e-12);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_identical_outcomes_have_zero_spread(#[case] value: bool) {
        let stats = GroupStats::from_outcomes(vec![value; 6]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.std_error, 0.0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_degenerate_groups_are_undefined(#[case] n: usize) {
        let stats = GroupStats::from_outcomes(vec![true; n]);
        assert_eq!(stats.n, n);
        assert!(!stats.has_spread());
        assert!(stats.std_dev.is_nan());
        assert!(stats.std_error.is_nan());
        assert_eq!(stats.mean.is_nan(), n == 0);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(indicators([true, false, true]), vec![1.0, 0.0, 1.0]);
    }
}
