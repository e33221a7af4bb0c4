use super::{ConfigError, StorageError, ValidationError};

/// Top-level error for every fallible engine operation.
#[derive(Debug, thiserror::Error)]
pub enum ImpactError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("resource line item not found: {id}")]
    LineItemNotFound { id: i64 },

    #[error("assessment not found: {id}")]
    AssessmentNotFound { id: i64 },

    #[error("program {program} has no accrued extra cost; record resources first")]
    NoAccruedCost { program: String },

    #[error("simulation failed: {reason}")]
    SimulationFailed { reason: String },

    #[error("report rendering failed: {reason}")]
    RenderFailed { reason: String },
}

pub type ImpactResult<T> = Result<T, ImpactError>;
