//! # impact-storage
//!
//! SQLite persistence for the two collaborators of the impact engine:
//! the per-program resource ledger and the append-only case archive.
//! Schema changes go through numbered migrations tracked in `user_version`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use impact_core::errors::{ImpactError, StorageError};

/// Wrap a SQLite failure message as an [`ImpactError`].
pub(crate) fn to_storage_err(message: impl Into<String>) -> ImpactError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

/// Wrap a row that could not be mapped back to a model.
pub(crate) fn to_decode_err(table: &str, reason: impl Into<String>) -> ImpactError {
    StorageError::RowDecodeFailed {
        table: table.to_string(),
        reason: reason.into(),
    }
    .into()
}
