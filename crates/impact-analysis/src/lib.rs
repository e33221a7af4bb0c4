//! # impact-analysis
//!
//! Margin-erosion engine. Combines a program's accrued ledger cost with the
//! contract inputs, runs the PERT and Monte Carlo estimators, scores the risk
//! radar, and assembles the immutable assessment record.

pub mod assessment;
pub mod calculator;
pub mod engine;
pub mod radar;
pub mod scenario;
pub mod summary;

pub use assessment::build_assessment;
pub use calculator::{compute_impact, erosion_band};
pub use engine::{AnalysisRequest, ImpactAnalysis, ImpactEngine};
pub use radar::{build_radar, cost_severity};
pub use scenario::{ScenarioComparison, ScenarioFigures};
pub use summary::executive_summary;
