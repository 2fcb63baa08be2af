//! Concrete alphabet sizes with known answers.

use occupancy_core::{
    config::EngineConfig,
    engine::DistributionEngine,
    error::OccupancyError,
    oracle::{brute_force, expected_coverage},
};

fn engine() -> DistributionEngine {
    DistributionEngine::new(EngineConfig::default())
}

#[test]
fn two_symbols() {
    let dist = engine().run(2).unwrap();
    assert_eq!(dist.unscaled(), vec![1.0, 1.0]);

    let summary = dist.summary();
    assert_eq!(summary.outcomes, 2.0);
    assert_eq!(summary.expectation, 1.5);
    assert_eq!(summary.normalized_percentage, 75.0);
    assert_eq!(dist.probabilities(), vec![0.5, 0.5]);
}

#[test]
fn one_symbol_is_degenerate_but_valid() {
    let dist = engine().run(1).unwrap();
    assert_eq!(dist.cells(), &[1.0]);

    let summary = dist.summary();
    assert_eq!(summary.scale, 1.0);
    assert_eq!(summary.total, 1.0);
    assert_eq!(summary.norm, 1.0);
    assert_eq!(summary.expectation, 1.0);
    assert_eq!(summary.normalized_percentage, 100.0);
}

#[test]
fn zero_symbols_is_a_configuration_error() {
    assert!(matches!(engine().run(0), Err(OccupancyError::InvalidAlphabet { n: 0, .. })));
}

#[test]
fn six_symbols_match_enumeration() {
    let summary = engine().run(6).unwrap().summary();
    let enumeration = brute_force::enumerate(6).unwrap();

    assert!(
        (summary.expectation - enumeration.expectation()).abs() < 1e-9,
        "engine {} vs enumeration {}",
        summary.expectation,
        enumeration.expectation()
    );
    assert!((summary.outcomes - 7776.0).abs() < 1e-6);
    // 1 - (5/6)^6 = 66.51%
    assert!((summary.normalized_percentage - 100.0 * expected_coverage(6)).abs() < 1e-9);
    assert!(summary.normalized_percentage > 64.0 && summary.normalized_percentage < 67.0);
}

#[test]
fn coverage_approaches_one_minus_inverse_e() {
    for n in [100usize, 1000, 5000] {
        let summary = engine().run(n).unwrap().summary();
        let want = expected_coverage(n);
        assert!(
            (summary.coverage() - want).abs() < 1e-9,
            "N={n}: engine {} vs closed form {want}",
            summary.coverage()
        );
    }
}

#[test]
fn probabilities_sum_to_one() {
    let dist = engine().run(777).unwrap();
    let sum: f64 = dist.probabilities().iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum {sum}");
    let peak = 777 * 16 / 25;
    assert!(dist.probability_of(peak) > 0.0);
}
