//! Monte-Carlo coverage sampler.
//!
//! One trial draws `N` uniform integers below `N` and measures which
//! fraction of the value space they hit. The mean over many trials converges
//! to the engine's normalized expectation.

use crate::{
    config::SamplerConfig,
    error::{OccupancyError, OccupancyResult},
    oracle::{bitset::SeenSet, CoverageOracle},
    rng::SamplerRng,
    types::Alphabet,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleReport {
    pub n:      Alphabet,
    /// Coverage of each trial, in trial order.
    pub trials: Vec<f64>,
    pub mean:   f64,
}

pub struct CoverageSampler {
    config: SamplerConfig,
}

impl CoverageSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn sample(&self, n: Alphabet) -> OccupancyResult<SampleReport> {
        if n == 0 {
            return Err(OccupancyError::InvalidAlphabet { n, max: usize::MAX });
        }
        if self.config.repetitions == 0 {
            return Err(OccupancyError::InvalidConfig("repetitions must be positive".into()));
        }

        let mut seen = SeenSet::new(n);
        let mut trials = Vec::with_capacity(self.config.repetitions);
        for trial in 0..self.config.repetitions {
            let mut rng = SamplerRng::new(self.config.seed, trial as u64);
            seen.clear();
            for _ in 0..n {
                seen.insert(rng.next_below(n as u64) as usize);
            }
            let coverage = seen.count() as f64 / n as f64;
            log::debug!(
                "stream {}: {} of {n} values hit ({:.2}%)",
                rng.stream,
                seen.count(),
                100.0 * coverage
            );
            trials.push(coverage);
        }

        let mean = trials.iter().sum::<f64>() / trials.len() as f64;
        Ok(SampleReport { n, trials, mean })
    }
}

impl CoverageOracle for CoverageSampler {
    fn name(&self) -> &'static str {
        "sampler"
    }

    fn coverage(&mut self, n: Alphabet) -> OccupancyResult<f64> {
        Ok(self.sample(n)?.mean)
    }
}
