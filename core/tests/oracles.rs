//! Every oracle against the engine through the common trait.

use occupancy_core::{
    config::{EngineConfig, SamplerConfig},
    error::OccupancyError,
    oracle::{all_oracles, brute_force, expected_coverage, naive, sampler::CoverageSampler},
};

#[test]
fn all_oracles_agree_on_small_alphabet() {
    const N: usize = 8;
    let sampler = SamplerConfig { seed: 1234, repetitions: 400 };
    let mut oracles = all_oracles(N, EngineConfig::default(), sampler);
    assert_eq!(oracles[0].name(), "engine");

    let names: Vec<&str> = oracles.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["engine", "naive", "brute_force", "sampler", "closed_form"]);

    let reference = oracles[0].coverage(N).expect("engine");
    for oracle in oracles.iter_mut().skip(1) {
        let coverage = oracle.coverage(N).expect("oracle");
        // The sampler is statistical; the rest are exact up to rounding.
        let tolerance = if oracle.name() == "sampler" { 0.03 } else { 1e-9 };
        assert!(
            (coverage - reference).abs() < tolerance,
            "{}: {coverage} vs engine {reference}",
            oracle.name()
        );
    }
}

#[test]
fn large_alphabets_skip_slow_oracles() {
    let oracles = all_oracles(100, EngineConfig::default(), SamplerConfig::default());
    let names: Vec<&str> = oracles.iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["engine", "sampler", "closed_form"]);
}

#[test]
fn sampler_converges_to_closed_form() {
    let report = CoverageSampler::new(SamplerConfig { seed: 2023, repetitions: 50 })
        .sample(1000)
        .expect("sample");
    assert_eq!(report.trials.len(), 50);
    assert!(report.trials.iter().all(|&c| c > 0.0 && c <= 1.0));
    assert!(
        (report.mean - expected_coverage(1000)).abs() < 0.01,
        "mean {} vs {}",
        report.mean,
        expected_coverage(1000)
    );
}

#[test]
fn sampler_rejects_bad_input() {
    let sampler = CoverageSampler::new(SamplerConfig { seed: 1, repetitions: 0 });
    assert!(matches!(sampler.sample(10), Err(OccupancyError::InvalidConfig(_))));
    let sampler = CoverageSampler::new(SamplerConfig::default());
    assert!(matches!(sampler.sample(0), Err(OccupancyError::InvalidAlphabet { .. })));
}

#[test]
fn oracles_refuse_oversized_inputs() {
    assert!(matches!(
        brute_force::enumerate(brute_force::MAX_BRUTE_FORCE + 1),
        Err(OccupancyError::OracleLimit { oracle: "brute_force", .. })
    ));
    assert!(matches!(
        naive::naive_counts(naive::MAX_NAIVE + 1),
        Err(OccupancyError::OracleLimit { oracle: "naive", .. })
    ));
}
