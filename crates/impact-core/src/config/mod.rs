//! Configuration loaded from TOML. Every section falls back to the values
//! in [`defaults`] when omitted.

pub mod defaults;
mod formatting_config;
mod observability_config;
mod simulation_config;
mod storage_config;
mod threshold_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ImpactResult};

pub use formatting_config::FormattingConfig;
pub use observability_config::ObservabilityConfig;
pub use simulation_config::SimulationConfig;
pub use storage_config::StorageConfig;
pub use threshold_config::ThresholdConfig;

/// Root configuration for the impact engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    pub simulation: SimulationConfig,
    pub thresholds: ThresholdConfig,
    pub storage: StorageConfig,
    pub formatting: FormattingConfig,
    pub observability: ObservabilityConfig,
}

impl ImpactConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> ImpactResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file from disk.
    pub fn from_file(path: &Path) -> ImpactResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), "loaded impact config");
        Ok(config)
    }

    /// Reject values no computation can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.sample_count == 0 {
            return Err(invalid("simulation.sample_count", "must be at least 1"));
        }
        let t = &self.thresholds;
        if !(t.erosion_low_pp.is_finite() && t.erosion_medium_pp.is_finite()) {
            return Err(invalid("thresholds.erosion_*_pp", "must be finite"));
        }
        if t.erosion_low_pp > t.erosion_medium_pp {
            return Err(invalid(
                "thresholds.erosion_low_pp",
                "must not exceed thresholds.erosion_medium_pp",
            ));
        }
        if !(t.cost_severity_reference_fraction.is_finite()
            && t.cost_severity_reference_fraction > 0.0)
        {
            return Err(invalid(
                "thresholds.cost_severity_reference_fraction",
                "must be a positive number",
            ));
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(invalid("storage.db_path", "must not be empty"));
        }
        if self.formatting.decimals > 6 {
            return Err(invalid("formatting.decimals", "must be at most 6"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}
