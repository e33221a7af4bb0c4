use serde::{Deserialize, Serialize};

/// Inputs to one margin-erosion analysis.
///
/// All amounts are assumed already validated as non-negative by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactInputs {
    pub contract_value: f64,
    /// Original margin in percent, 0–100.
    pub original_margin_pct: f64,
    /// Sum of the program's ledger subtotals.
    pub accrued_extra_cost: f64,
}

impl ImpactInputs {
    pub fn new(contract_value: f64, original_margin_pct: f64, accrued_extra_cost: f64) -> Self {
        Self {
            contract_value,
            original_margin_pct,
            accrued_extra_cost,
        }
    }
}

/// Margin before and after the extra cost.
///
/// Margin is always measured against the original contract value: the
/// extra cost comes out of profit and does not raise the price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginImpact {
    pub margin_before: f64,
    pub margin_after: f64,
    /// `margin_before - margin_after`, in percentage points.
    pub erosion_points: f64,
    /// Contract value plus extra cost ("impacted contract value").
    pub final_value: f64,
    pub original_profit: f64,
    pub new_profit: f64,
}

/// Cosmetic banding of margin erosion, used for risk labels and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErosionBand {
    Low,
    Medium,
    High,
}

impl ErosionBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
