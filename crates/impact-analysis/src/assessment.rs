use chrono::{DateTime, Utc};

use impact_core::models::AssessmentRecord;

use crate::engine::ImpactAnalysis;

/// Snapshot an analysis as an immutable record stamped `created_at`.
///
/// `analysis` carries the identification, impact inputs, justification,
/// both PERT results, the Monte Carlo result, and the radar vector; each is
/// copied into the record unchanged.
///
/// No validation beyond what the types guarantee: the record carries every
/// figure needed to regenerate the report.
pub fn build_assessment(analysis: &ImpactAnalysis, created_at: DateTime<Utc>) -> AssessmentRecord {
    AssessmentRecord {
        identification: analysis.identification.clone(),
        justification: analysis.justification.clone(),
        inputs: analysis.inputs,
        total_hours: analysis.total_hours,
        margin: analysis.margin,
        cost_estimate: analysis.cost_estimate,
        pert_cost: analysis.pert_cost,
        schedule_estimate: analysis.schedule_estimate,
        pert_schedule: analysis.pert_schedule,
        monte_carlo: analysis.monte_carlo,
        radar: analysis.radar,
        created_at,
    }
}
