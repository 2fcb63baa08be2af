use thiserror::Error;

#[derive(Error, Debug)]
pub enum OccupancyError {
    #[error("Invalid alphabet size {n}: must be between 1 and {max}")]
    InvalidAlphabet { n: usize, max: usize },

    #[error("Cannot allocate distribution vector of {n} cells")]
    AllocationFailed { n: usize },

    #[error(
        "Distribution diverged: total {total:e} vs expected {expected:e} \
         (relative error {relative_error:e} > tolerance {tolerance:e})"
    )]
    Divergence {
        total:          f64,
        expected:       f64,
        relative_error: f64,
        tolerance:      f64,
    },

    #[error("Oracle '{oracle}' cannot handle N = {n} (limit {max})")]
    OracleLimit { oracle: &'static str, n: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type OccupancyResult<T> = Result<T, OccupancyError>;
