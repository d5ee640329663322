//! Per-session success-rate series

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Success rate (percent) of one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub session: u32,
    pub success_rate: f64,
}

/// Ordered series of [`TrendPoint`]s, one per session present, ascending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTrend {
    pub points: Vec<TrendPoint>,
}

impl SessionTrend {
    /// Build the series from `(session, is_correct)` pairs.
    ///
    /// Sessions with no records are absent; nothing is interpolated.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (u32, bool)>,
    {
        let mut tallies: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
        for (session, correct) in outcomes {
            let entry = tallies.entry(session).or_default();
            entry.0 += usize::from(correct);
            entry.1 += 1;
        }

        let points = tallies
            .into_iter()
            .map(|(session, (correct, total))| TrendPoint {
                session,
                success_rate: correct as f64 / total as f64 * 100.0,
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn sessions(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.session).collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.success_rate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trend_is_sorted_without_gaps_filled() {
        let trend = SessionTrend::from_outcomes([
            (3, true),
            (1, false),
            (3, false),
            (7, true),
            (1, true),
            (3, true),
        ]);

        assert_eq!(trend.sessions(), vec![1, 3, 7]);
        let rates = trend.rates();
        assert_eq!(rates[0], 50.0);
        assert!((rates[1] - 200.0 / 3.0).abs() < 1e-10);
        assert_eq!(rates[2], 100.0);
    }

    #[test]
    fn test_empty_trend() {
        let trend = SessionTrend::from_outcomes(Vec::new());
        assert!(trend.is_empty());
    }

    proptest! {
        #[test]
        fn test_one_point_per_distinct_session(
            outcomes in prop::collection::vec((1u32..16, any::<bool>()), 0..100)
        ) {
            let trend = SessionTrend::from_outcomes(outcomes.clone());

            let mut distinct: Vec<u32> = outcomes.iter().map(|(s, _)| *s).collect();
            distinct.sort();
            distinct.dedup();

            prop_assert_eq!(trend.sessions(), distinct);
            prop_assert!(trend.rates().iter().all(|r| (0.0..=100.0).contains(r)));
        }
    }
}
