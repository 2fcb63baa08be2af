//! Deterministic random number generation for the empirical sampler.
//!
//! RULE: Nothing in the library may call any platform RNG.
//! All randomness flows through SamplerRng instances derived from a
//! single master seed.
//!
//! Each trial gets its own stream, seeded from (master_seed XOR stream).
//! Running more repetitions never changes the draws of earlier trials.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct SamplerRng {
    pub stream: u64,
    inner:      Pcg64Mcg,
}

impl SamplerRng {
    pub fn new(master_seed: u64, stream: u64) -> Self {
        let derived_seed = master_seed ^ (stream.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            stream,
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Uniform integer in [0, n), free of modulo bias.
    pub fn next_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }
}
