// src/simulation/config.rs

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub horizon: usize,
    pub machine_count: usize,
    pub per_machine_capacity: usize,
    /// Daily chance that a machine breaks down at the end of the shift.
    pub failure_probability: f64,
    pub profit_per_order: i64,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: 365,
            machine_count: 7,
            per_machine_capacity: 257,
            failure_probability: 0.05,
            profit_per_order: 20_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if self.machine_count == 0 {
            return Err(ConfigError::NoMachines);
        }
        if !(0.0..=1.0).contains(&self.failure_probability) {
            return Err(ConfigError::FailureProbabilityOutOfRange(
                self.failure_probability,
            ));
        }
        Ok(())
    }
}
