//! StorageEngine: owns the connection pool, runs migrations at startup, and
//! implements both IResourceLedger and ICaseArchive.

use std::path::Path;

use rusqlite::Connection;

use impact_core::config::StorageConfig;
use impact_core::errors::ImpactResult;
use impact_core::models::{
    ArchivedAssessment, AssessmentRecord, LineItemUpdate, NewLineItem, ResourceLineItem,
};
use impact_core::traits::{ICaseArchive, IResourceLedger};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{archive_ops, ledger_ops};

/// SQLite-backed ledger and archive.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> ImpactResult<Self> {
        Self::open_with_readers(path, StorageConfig::default().read_pool_size)
    }

    /// Open the database named in `config`.
    pub fn from_config(config: &StorageConfig) -> ImpactResult<Self> {
        Self::open_with_readers(Path::new(&config.db_path), config.read_pool_size)
    }

    fn open_with_readers(path: &Path, read_pool_size: usize) -> ImpactResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> ImpactResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> ImpactResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> ImpactResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// File-backed: read pool. In-memory: the writer.
    fn with_reader<F, T>(&self, f: F) -> ImpactResult<T>
    where
        F: FnOnce(&Connection) -> ImpactResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }
}

impl IResourceLedger for StorageEngine {
    fn add_item(&self, item: &NewLineItem) -> ImpactResult<ResourceLineItem> {
        let stored = self
            .pool
            .writer
            .with_conn(|conn| ledger_ops::insert_item(conn, item))?;
        tracing::info!(
            id = stored.id,
            program = %stored.program,
            subtotal = stored.subtotal,
            "resource line recorded"
        );
        Ok(stored)
    }

    fn update_item(&self, id: i64, update: &LineItemUpdate) -> ImpactResult<ResourceLineItem> {
        let stored = self
            .pool
            .writer
            .with_conn(|conn| ledger_ops::update_item(conn, id, update))?;
        tracing::info!(id, subtotal = stored.subtotal, "resource line updated");
        Ok(stored)
    }

    fn delete_item(&self, id: i64) -> ImpactResult<()> {
        self.pool
            .writer
            .with_conn(|conn| ledger_ops::delete_item(conn, id))?;
        tracing::info!(id, "resource line deleted");
        Ok(())
    }

    fn items_for_program(&self, program: &str) -> ImpactResult<Vec<ResourceLineItem>> {
        self.with_reader(|conn| ledger_ops::items_for_program(conn, program))
    }

    fn sum_subtotals(&self, program: &str) -> ImpactResult<f64> {
        self.with_reader(|conn| ledger_ops::sum_subtotals(conn, program))
    }

    fn total_hours(&self, program: &str) -> ImpactResult<u64> {
        self.with_reader(|conn| ledger_ops::total_hours(conn, program))
    }
}

impl ICaseArchive for StorageEngine {
    fn save(&self, record: &AssessmentRecord) -> ImpactResult<i64> {
        let id = self
            .pool
            .writer
            .with_conn(|conn| archive_ops::insert_record(conn, record))?;
        tracing::info!(id, program = %record.identification.program, "assessment saved");
        Ok(id)
    }

    fn get(&self, id: i64) -> ImpactResult<Option<ArchivedAssessment>> {
        self.with_reader(|conn| archive_ops::get_record(conn, id))
    }

    fn list(&self) -> ImpactResult<Vec<ArchivedAssessment>> {
        self.with_reader(archive_ops::list_records)
    }
}
