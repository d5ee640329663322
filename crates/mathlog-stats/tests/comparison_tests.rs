//! End-to-end checks of the early/late comparison on session-labelled outcomes

use mathlog_stats::*;
use rstest::rstest;

/// One outcome per session 1..=15: wrong in 1-5, right in 11-15, alternating in between
fn sessions() -> Vec<(u32, bool)> {
    (1..=15)
        .map(|s| {
            let correct = match s {
                1..=5 => false,
                11..=15 => true,
                _ => s % 2 == 0,
            };
            (s, correct)
        })
        .collect()
}

fn split(outcomes: &[(u32, bool)], early_max: u32, late_min: u32) -> (Vec<f64>, Vec<f64>) {
    let early = indicators(outcomes.iter().filter(|(s, _)| *s <= early_max).map(|(_, c)| *c));
    let late = indicators(outcomes.iter().filter(|(s, _)| *s >= late_min).map(|(_, c)| *c));
    (early, late)
}

#[test]
fn test_fifteen_session_scenario() {
    let (early, late) = split(&sessions(), 5, 11);
    let cmp = TwoSampleComparison::compute(&early, &late, 0.95).unwrap();

    assert_eq!(cmp.early.n, 5);
    assert_eq!(cmp.late.n, 5);
    assert_eq!(cmp.early.mean, 0.0);
    assert_eq!(cmp.late.mean, 1.0);
    assert_eq!(cmp.mean_difference, 1.0);
    assert_eq!(cmp.improvement_points(), 100.0);
    assert_eq!(cmp.df, 8);
    assert!(cmp.t_test.p_value < 0.05);
    assert!(cmp.is_significant(0.05));
    assert!(cmp.ci_low.is_nan() && cmp.ci_high.is_nan());
}

#[test]
fn test_trend_matches_group_rates() {
    let trend = SessionTrend::from_outcomes(sessions());
    assert_eq!(trend.len(), 15);
    assert_eq!(trend.sessions(), (1..=15).collect::<Vec<u32>>());
    assert!(trend.points[..5].iter().all(|p| p.success_rate == 0.0));
    assert!(trend.points[10..].iter().all(|p| p.success_rate == 100.0));
}

#[rstest]
#[case(1, 11)]
#[case(5, 15)]
fn test_thin_groups_are_reported(#[case] early_max: u32, #[case] late_min: u32) {
    let (early, late) = split(&sessions(), early_max, late_min);
    let err = TwoSampleComparison::compute(&early, &late, 0.95).unwrap_err();
    assert!(matches!(err, ComparisonError::InsufficientData { n: 1, .. }));
}

#[test]
fn test_mixed_groups_interval() {
    let early = indicators([true, false, false, true, false, false]);
    let late = indicators([true, true, false, true, true, true]);
    let cmp = TwoSampleComparison::compute(&early, &late, 0.95).unwrap();

    assert!(cmp.ci_low < cmp.mean_difference && cmp.mean_difference < cmp.ci_high);
    let half_width = (cmp.ci_high - cmp.ci_low) / 2.0;
    let crit = t_critical(0.95, cmp.df as f64).unwrap();
    assert!((half_width - crit * cmp.se_difference).abs() < 1e-9);
    assert!(cmp.levene.p_value >= 0.0 && cmp.levene.p_value <= 1.0);
}
