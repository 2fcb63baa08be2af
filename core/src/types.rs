//! Shared primitive types used across the engine and the oracles.

/// Alphabet size. Also the number of draws per experiment.
pub type Alphabet = usize;

/// One draw beyond the first. Layers run from 1 to N-1.
pub type Step = usize;

/// Count of distinct values seen so far (1-based).
pub type Variety = usize;

/// Unnormalized probability mass.
pub type Mass = f64;
