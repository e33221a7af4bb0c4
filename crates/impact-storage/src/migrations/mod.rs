//! Schema migrations tracked in `PRAGMA user_version`.

pub mod v001_resource_ledger;
pub mod v002_case_archive;

use rusqlite::Connection;

use impact_core::errors::{ImpactResult, StorageError};

use crate::to_storage_err;

/// Highest schema version this build knows how to create.
pub const LATEST_VERSION: u32 = 2;

/// Run all pending migrations, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> ImpactResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_resource_ledger::MIGRATION_SQL, 1),
        (v002_case_archive::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current >= *version {
            continue;
        }
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        };

        let tx = conn.unchecked_transaction().map_err(failed)?;
        tx.execute_batch(sql).map_err(failed)?;
        tx.pragma_update(None, "user_version", version)
            .map_err(failed)?;
        tx.commit().map_err(failed)?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> ImpactResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
