use impact_core::config::ThresholdConfig;
use impact_core::models::{ErosionBand, ImpactInputs, MarginImpact};

/// Margin before and after absorbing `extra_cost`.
///
/// ```text
/// original_profit = contract_value * original_margin_pct / 100
/// new_profit      = original_profit - extra_cost
/// margin_after    = new_profit / contract_value * 100   (0 when contract_value <= 0)
/// erosion_points  = margin_before - margin_after
/// final_value     = contract_value + extra_cost
/// ```
///
/// Margin is measured against the original contract value.
pub fn compute_impact(contract_value: f64, original_margin_pct: f64, extra_cost: f64) -> MarginImpact {
    let margin_before = original_margin_pct;
    let original_profit = contract_value * original_margin_pct / 100.0;
    let new_profit = original_profit - extra_cost;
    let margin_after = if contract_value > 0.0 {
        new_profit / contract_value * 100.0
    } else {
        0.0
    };

    MarginImpact {
        margin_before,
        margin_after,
        erosion_points: margin_before - margin_after,
        final_value: contract_value + extra_cost,
        original_profit,
        new_profit,
    }
}

/// [`compute_impact`] over an [`ImpactInputs`] snapshot.
pub fn compute_impact_from(inputs: &ImpactInputs) -> MarginImpact {
    compute_impact(
        inputs.contract_value,
        inputs.original_margin_pct,
        inputs.accrued_extra_cost,
    )
}

/// Band erosion for risk labels: below `erosion_low_pp` is low, below
/// `erosion_medium_pp` is medium, anything else is high.
pub fn erosion_band(erosion_points: f64, thresholds: &ThresholdConfig) -> ErosionBand {
    if erosion_points < thresholds.erosion_low_pp {
        ErosionBand::Low
    } else if erosion_points < thresholds.erosion_medium_pp {
        ErosionBand::Medium
    } else {
        ErosionBand::High
    }
}
