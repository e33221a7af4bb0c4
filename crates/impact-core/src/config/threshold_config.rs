use serde::{Deserialize, Serialize};

use super::defaults;

/// Banding and normalization thresholds used by the impact calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Erosion below this many percentage points is "low".
    pub erosion_low_pp: f64,
    /// Erosion below this many percentage points is "medium"; above is "high".
    pub erosion_medium_pp: f64,
    /// Fraction of contract value that maps to a full cost severity of 10.
    pub cost_severity_reference_fraction: f64,
    /// Margin (%) at or above which the impacted profit is considered healthy.
    pub healthy_margin_pct: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            erosion_low_pp: defaults::DEFAULT_EROSION_LOW_PP,
            erosion_medium_pp: defaults::DEFAULT_EROSION_MEDIUM_PP,
            cost_severity_reference_fraction: defaults::DEFAULT_COST_SEVERITY_REFERENCE_FRACTION,
            healthy_margin_pct: defaults::DEFAULT_HEALTHY_MARGIN_PCT,
        }
    }
}
