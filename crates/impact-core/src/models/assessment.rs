use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Identification, ImpactInputs, MarginImpact, MonteCarloResult, PertResult, RiskRadarVector,
    ThreePointEstimate,
};

/// Immutable snapshot of one finalized analysis.
///
/// Carries everything needed to regenerate a report without going back to
/// the resource ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub identification: Identification,
    pub justification: String,
    pub inputs: ImpactInputs,
    /// Sum of the program's ledger hours at finalize time.
    pub total_hours: u64,
    pub margin: MarginImpact,
    pub cost_estimate: ThreePointEstimate,
    pub pert_cost: PertResult,
    pub schedule_estimate: ThreePointEstimate,
    pub pert_schedule: PertResult,
    pub monte_carlo: MonteCarloResult,
    pub radar: RiskRadarVector,
    pub created_at: DateTime<Utc>,
}

/// A record as stored in the case archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedAssessment {
    pub id: i64,
    pub record: AssessmentRecord,
}
