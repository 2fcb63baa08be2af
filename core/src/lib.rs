//! Occupancy distribution engine.
//!
//! Draw `N` values uniformly from an alphabet of `N` symbols. How many
//! distinct values show up? [`engine::DistributionEngine`] answers with the
//! full distribution in `O(N)` space and `O(N^2)` time; the [`oracle`]
//! module holds slow independent computations used to validate it.
//!
//! ```rust
//! use occupancy_core::{config::EngineConfig, engine::DistributionEngine};
//!
//! let dist = DistributionEngine::new(EngineConfig::default()).run(2).unwrap();
//! let summary = dist.summary();
//! assert_eq!(summary.expectation, 1.5);
//! assert_eq!(summary.normalized_percentage, 75.0);
//! ```

pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod rng;
pub mod scale;
pub mod summary;
pub mod types;

pub use config::{EngineConfig, SamplerConfig, ZeroPolicy};
pub use distribution::Distribution;
pub use engine::DistributionEngine;
pub use error::{OccupancyError, OccupancyResult};
pub use summary::Summary;
