//! Independent reference computations used to validate the engine.
//!
//! RULE: The engine never calls into this module.

pub mod bitset;
pub mod brute_force;
pub mod naive;
pub mod sampler;

use crate::{
    config::{EngineConfig, SamplerConfig},
    engine::DistributionEngine,
    error::{OccupancyError, OccupancyResult},
    types::Alphabet,
};

/// Anything that can estimate the expected fraction of the alphabet seen
/// after `N` draws.
pub trait CoverageOracle {
    /// Unique stable name, used in reports.
    fn name(&self) -> &'static str;

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64>;
}

/// Closed form `1 - (1 - 1/N)^N`.
pub fn expected_coverage(n: Alphabet) -> f64 {
    let nf = n as f64;
    1.0 - (1.0 - 1.0 / nf).powf(nf)
}

pub struct ClosedForm;

impl CoverageOracle for ClosedForm {
    fn name(&self) -> &'static str {
        "closed_form"
    }

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64> {
        if n == 0 {
            return Err(OccupancyError::InvalidAlphabet { n, max: usize::MAX });
        }
        Ok(expected_coverage(n))
    }
}

impl CoverageOracle for DistributionEngine {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64> {
        Ok(self.run(n)?.summary().coverage())
    }
}

/// Engine plus every oracle that handles `n` quickly, engine first.
pub fn all_oracles(
    n: Alphabet,
    engine: EngineConfig,
    sampler: SamplerConfig,
) -> Vec<Box<dyn CoverageOracle>> {
    let mut oracles: Vec<Box<dyn CoverageOracle>> = vec![Box::new(DistributionEngine::new(engine))];
    if n <= naive::MAX_NAIVE {
        oracles.push(Box::new(naive::NaiveRecursion));
    }
    if n <= brute_force::SLOW_ALPHABET {
        oracles.push(Box::new(brute_force::BruteForce));
    }
    oracles.push(Box::new(sampler::CoverageSampler::new(sampler)));
    oracles.push(Box::new(ClosedForm));
    oracles
}
