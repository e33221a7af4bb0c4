use crate::errors::ImpactResult;
use crate::models::{ArchivedAssessment, AssessmentRecord};

/// Append-only history of finalized assessments.
pub trait ICaseArchive: Send + Sync {
    /// Persist a record and return its id.
    fn save(&self, record: &AssessmentRecord) -> ImpactResult<i64>;
    fn get(&self, id: i64) -> ImpactResult<Option<ArchivedAssessment>>;
    /// All records, newest first.
    fn list(&self) -> ImpactResult<Vec<ArchivedAssessment>>;
}
