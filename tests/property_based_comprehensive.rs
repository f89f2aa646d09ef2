//! Property-based tests for the statistics engine
//!
//! Mean and standard deviation are cross-checked against statrs; the remaining
//! properties are algebraic invariants that must hold for any input.

use proptest::prelude::*;
use statrs::statistics::Statistics;
use tabstat::aggregator::{all_pairs, analyze, summarize_pairs, summarize_table};
use tabstat::column_stats::{mean, quartiles, standard_deviation};
use tabstat::pairwise::{correlation, covariance};
use tabstat::table::{Table, TableLoader};

fn sample(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, min_len..64)
}

/// Magnitudes near the top of the f64 range, where plain sums overflow
fn huge_sample(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0e300..1.7e308f64, min_len..64)
}

fn paired(min_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (min_len..64usize).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e3..1.0e3f64, n),
            prop::collection::vec(-1.0e3..1.0e3f64, n),
        )
    })
}

fn scale(values: &[f64]) -> f64 {
    values.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_mean_matches_reference(values in sample(1)) {
        let ours = mean(&values).unwrap();
        let reference = values.iter().mean();
        prop_assert!(
            (ours - reference).abs() <= 1e-9 * scale(&values),
            "mean {} vs statrs {}", ours, reference
        );
    }

    #[test]
    fn prop_std_matches_reference(values in sample(2)) {
        let ours = standard_deviation(&values).unwrap();
        let reference = values.iter().std_dev();
        prop_assert!(
            (ours - reference).abs() <= 1e-9 * scale(&values),
            "std {} vs statrs {}", ours, reference
        );
    }

    #[test]
    fn prop_mean_matches_reference_for_huge_values(values in huge_sample(1)) {
        let ours = mean(&values).unwrap();
        let reference = values.iter().mean();
        prop_assert!(
            (ours - reference).abs() <= 1e-9 * scale(&values),
            "mean {} vs statrs {}", ours, reference
        );
    }

    #[test]
    fn prop_std_finite_for_huge_values(values in huge_sample(2)) {
        let sd = standard_deviation(&values).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(sd.is_finite() && sd >= 0.0);
        prop_assert!(sd <= (max - min) * (1.0 + 1e-9), "std {} wider than range", sd);
    }

    #[test]
    fn prop_std_non_negative(values in sample(2)) {
        prop_assert!(standard_deviation(&values).unwrap() >= 0.0);
    }

    #[test]
    fn prop_quartiles_ordered(values in sample(1)) {
        let q = quartiles(&values).unwrap();
        prop_assert!(q.q1 <= q.median, "q1 {} > median {}", q.q1, q.median);
        prop_assert!(q.median <= q.q3, "median {} > q3 {}", q.median, q.q3);
    }

    #[test]
    fn prop_quartiles_within_range(values in sample(1)) {
        let q = quartiles(&values).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(min <= q.q1 && q.q3 <= max);
    }

    #[test]
    fn prop_mean_shift_equivariant(values in prop::collection::vec(-1.0e3..1.0e3f64, 1..64), k in -1.0e3..1.0e3f64) {
        let shifted: Vec<f64> = values.iter().map(|v| v + k).collect();
        let expected = mean(&values).unwrap() + k;
        prop_assert!((mean(&shifted).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_std_shift_invariant(values in prop::collection::vec(-1.0e3..1.0e3f64, 2..64), k in -1.0e3..1.0e3f64) {
        let shifted: Vec<f64> = values.iter().map(|v| v + k).collect();
        let original = standard_deviation(&values).unwrap();
        prop_assert!((standard_deviation(&shifted).unwrap() - original).abs() < 1e-9);
    }

    #[test]
    fn prop_covariance_symmetric((x, y) in paired(2)) {
        prop_assert_eq!(covariance(&x, &y).unwrap(), covariance(&y, &x).unwrap());
    }

    #[test]
    fn prop_correlation_bounded((x, y) in paired(2)) {
        let sx = standard_deviation(&x).unwrap();
        let sy = standard_deviation(&y).unwrap();
        prop_assume!(sx > 0.0 && sy > 0.0);

        let r = correlation(covariance(&x, &y).unwrap(), sx, sy).unwrap();
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r), "correlation {}", r);
    }

    #[test]
    fn prop_self_correlation_is_one(x in prop::collection::vec(-1.0e3..1.0e3f64, 2..64)) {
        let sx = standard_deviation(&x).unwrap();
        prop_assume!(sx > 0.0);
        let r = correlation(covariance(&x, &x).unwrap(), sx, sx).unwrap();
        prop_assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_report_covers_every_column(width in 1usize..6, rows in 2usize..20) {
        let table = Table::from_columns((0..width).map(|c| {
            let values = (0..rows).map(|r| ((r * (c + 2)) % 7) as f64 + r as f64).collect();
            (format!("c{}", c), values)
        }))
        .unwrap();

        let report = summarize_table(&table).unwrap();
        let names: Vec<&str> = report.columns().iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names, table.names().collect::<Vec<_>>());
        prop_assert_eq!(all_pairs(&table).len(), width * (width - 1) / 2);
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_one_to_five() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(mean(&values).unwrap(), 3.0);
    assert!((standard_deviation(&values).unwrap() - 1.5811).abs() < 1e-4);

    let q = quartiles(&values).unwrap();
    assert_eq!((q.q1, q.median, q.q3), (2.0, 3.0, 4.0));
}

#[test]
fn test_perfectly_linear_pair() {
    let x = [1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 6.0];
    let cov = covariance(&x, &y).unwrap();
    assert!(cov > 0.0);

    let r = correlation(
        cov,
        standard_deviation(&x).unwrap(),
        standard_deviation(&y).unwrap(),
    )
    .unwrap();
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn test_constant_columns_fail_correlation() {
    let table =
        Table::from_columns([("A", vec![1.0, 1.0, 1.0]), ("B", vec![2.0, 2.0, 2.0])]).unwrap();

    let err = summarize_pairs(&table, None).unwrap_err();
    assert!(matches!(err.root(), tabstat::StatsError::DivisionByZero));
    assert!(analyze(&table, None).is_err());
}

#[test]
fn test_huge_cells_analyse_to_finite_values() {
    let table = TableLoader::new()
        .load_reader("a,b\n1e308,1\n1e308,2\n1.5e308,3\n".as_bytes())
        .unwrap();
    let report = analyze(&table, None).unwrap();

    let a = report.column("a").unwrap();
    assert!(a.mean.is_finite() && a.standard_deviation.is_finite());
    assert_eq!(a.max, 1.5e308);

    let pair = report.pair("a", "b").unwrap();
    assert!(pair.covariance.is_finite());
    assert!((pair.correlation - 0.75_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_huge_constant_column_fails_correlation() {
    let table = TableLoader::new()
        .load_reader("a,b\n1e308,1\n1e308,2\n1e308,3\n".as_bytes())
        .unwrap();

    let err = analyze(&table, None).unwrap_err();
    assert!(matches!(err.root(), tabstat::StatsError::DivisionByZero));
}

#[test]
fn test_empty_table_fails() {
    let err = summarize_table(&Table::new()).unwrap_err();
    assert!(matches!(err, tabstat::StatsError::EmptyTable));
}
