//! # impact-core
//!
//! Foundation crate for the scope-change impact engine.
//! Defines the data model, collaborator traits, errors, config, constants,
//! currency formatting, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ImpactConfig;
pub use errors::{ImpactError, ImpactResult};
pub use models::{
    AssessmentRecord, DeviationCategory, Identification, ImpactInputs, MarginImpact,
    MonteCarloResult, PertResult, ResourceLineItem, RiskRadarVector, ThreePointEstimate,
};
