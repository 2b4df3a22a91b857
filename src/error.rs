// src/error.rs

use thiserror::Error;

/// Rejected construction parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("horizon must be at least one day")]
    ZeroHorizon,
    #[error("the pool needs at least one machine")]
    NoMachines,
    #[error("failure probability {0} is outside [0, 1]")]
    FailureProbabilityOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid visit distribution: {0}")]
    Distribution(#[from] rand_distr::BinomialError),
}
