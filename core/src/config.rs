//! Engine and sampler configuration.
//!
//! Every algorithm variant the engine knows about is a runtime flag here.
//! All combinations produce the same distribution up to floating-point
//! rounding; they only differ in how much arithmetic is performed.

use crate::error::{OccupancyError, OccupancyResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layers between two progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1024;

/// Largest alphabet accepted by default. Counters and the `(N - v)` weights
/// stay exactly representable in an `f64` far beyond this.
pub const DEFAULT_MAX_ALPHABET: usize = u32::MAX as usize;

/// Relative tolerance of the total-mass self-check (0.1%).
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Which cells the band tracker treats as empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    /// Only `0.0` is empty.
    Exact,
    /// `0.0` and every subnormal value are empty.
    #[default]
    Subnormal,
}

impl ZeroPolicy {
    pub fn is_zero(self, value: f64) -> bool {
        match self {
            ZeroPolicy::Exact     => value == 0.0,
            ZeroPolicy::Subnormal => !value.is_normal() && value.is_finite(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Branch-free loop over the known band followed by a zero-checked
    /// frontier loop. When off, every layer runs over `[1, step]`.
    pub split_loop:        bool,
    /// Apply `scale^8` every eighth layer instead of `scale` every layer.
    pub batch_rescale:     bool,
    /// Round the band edges outward so the worked range has even length.
    pub force_even_band:   bool,
    pub zero_policy:       ZeroPolicy,
    /// `0` disables progress logging.
    pub progress_interval: usize,
    pub max_alphabet:      usize,
    pub tolerance:         f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            split_loop:        true,
            batch_rescale:     false,
            force_even_band:   false,
            zero_policy:       ZeroPolicy::Subnormal,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_alphabet:      DEFAULT_MAX_ALPHABET,
            tolerance:         DEFAULT_TOLERANCE,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> OccupancyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OccupancyResult<()> {
        if self.max_alphabet == 0 {
            return Err(OccupancyError::InvalidConfig(
                "max_alphabet must be positive".into(),
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(OccupancyError::InvalidConfig(format!(
                "tolerance {} outside (0, 1)",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Every combination of the three loop-shape flags, for cross-checking.
    pub fn variants() -> Vec<EngineConfig> {
        let mut out = Vec::with_capacity(8);
        for bits in 0u8..8 {
            out.push(EngineConfig {
                split_loop:      bits & 1 == 0,
                batch_rescale:   bits & 2 != 0,
                force_even_band: bits & 4 != 0,
                ..EngineConfig::default()
            });
        }
        out
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SamplerConfig {
    pub seed:        u64,
    pub repetitions: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: 42, repetitions: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnormal_policy_treats_tiny_values_as_zero() {
        let tiny = f64::MIN_POSITIVE / 4.0;
        assert!(tiny > 0.0);
        assert!(ZeroPolicy::Subnormal.is_zero(tiny));
        assert!(!ZeroPolicy::Exact.is_zero(tiny));
        assert!(ZeroPolicy::Exact.is_zero(0.0));
        assert!(ZeroPolicy::Subnormal.is_zero(-0.0));
        assert!(!ZeroPolicy::Subnormal.is_zero(f64::MIN_POSITIVE));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "batch_rescale": true, "zero_policy": "exact" }"#).unwrap();
        assert!(config.batch_rescale);
        assert!(config.split_loop);
        assert_eq!(config.zero_policy, ZeroPolicy::Exact);
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
    }

    #[test]
    fn variants_cover_all_flag_combinations() {
        let variants = EngineConfig::variants();
        assert_eq!(variants.len(), 8);
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("occupancy-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_reads_partial_file() {
        let path = write_temp("partial.json", r#"{ "force_even_band": true }"#);
        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(config.force_even_band);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let path = std::env::temp_dir().join("occupancy-no-such-config.json");
        match EngineConfig::load(&path) {
            Err(OccupancyError::Other(e)) => {
                let msg = e.to_string();
                assert!(msg.starts_with("Cannot read"), "unexpected message: {msg}");
                assert!(msg.contains("occupancy-no-such-config.json"), "path missing: {msg}");
            }
            other => panic!("expected read failure, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_json_is_a_serialization_error() {
        let path = write_temp("malformed.json", r#"{ "split_loop": "#);
        let result = EngineConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(
            matches!(result, Err(OccupancyError::Serialization(_))),
            "got {result:?}"
        );
    }

    #[test]
    fn load_validates_values() {
        let path = write_temp("invalid.json", r#"{ "tolerance": 2.0 }"#);
        let result = EngineConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(OccupancyError::InvalidConfig(_))), "got {result:?}");
    }

    #[test]
    fn rejects_bad_tolerance() {
        let config = EngineConfig { tolerance: 0.0, ..EngineConfig::default() };
        assert!(config.validate().is_err());
    }
}
