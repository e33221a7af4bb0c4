//! Data model shared by the estimators, the calculator, and the collaborators.

mod assessment;
mod estimate;
mod identification;
mod impact;
mod ledger;
mod radar;
mod report;

pub use assessment::{ArchivedAssessment, AssessmentRecord};
pub use estimate::{MonteCarloResult, PertResult, ThreePointEstimate};
pub use identification::{normalize_program, DeviationCategory, Identification};
pub use impact::{ErosionBand, ImpactInputs, MarginImpact};
pub use ledger::{LineItemUpdate, NewLineItem, ResourceLineItem, ResourceProfile};
pub use radar::{RiskRadarVector, Severity};
pub use report::ReportSummary;
