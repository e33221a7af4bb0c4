use impact_core::constants::MAX_SEVERITY;
use impact_core::models::{RiskRadarVector, Severity};

/// Cost axis of the risk radar.
///
/// Extra cost is measured against `reference_fraction` of the contract
/// value (10% by default) and scaled onto 0–10: spending the whole
/// reference scores 10, anything beyond stays at 10. A zero reference is
/// replaced by 1.
pub fn cost_severity(extra_cost: f64, contract_value: f64, reference_fraction: f64) -> Severity {
    let reference = reference_fraction * contract_value;
    let reference = if reference > 0.0 { reference } else { 1.0 };
    Severity::new((extra_cost / reference * MAX_SEVERITY).min(MAX_SEVERITY))
}

/// Assemble the radar from the two user-supplied axes and the derived cost axis.
pub fn build_radar(
    scope_severity: f64,
    extra_cost: f64,
    contract_value: f64,
    schedule_severity: f64,
    reference_fraction: f64,
) -> RiskRadarVector {
    RiskRadarVector {
        scope_severity: Severity::user(scope_severity),
        cost_severity: cost_severity(extra_cost, contract_value, reference_fraction),
        schedule_severity: Severity::user(schedule_severity),
    }
}
