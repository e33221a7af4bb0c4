use serde::{Deserialize, Serialize};

use super::defaults;

/// Monte Carlo simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Samples drawn per simulation.
    pub sample_count: usize,
    /// Fixed seed. When set, every simulation is reproducible.
    pub seed: Option<u64>,
    /// Sample counts at or above this run on the blocking thread pool.
    pub off_thread_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_count: defaults::DEFAULT_SAMPLE_COUNT,
            seed: None,
            off_thread_threshold: defaults::DEFAULT_OFF_THREAD_THRESHOLD,
        }
    }
}
