//! Connection pool managing the write connection and read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use impact_core::errors::ImpactResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Owns the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize) -> ImpactResult<Self> {
        let writer = Arc::new(WriteConnection::open(path)?);
        let readers = Arc::new(ReadPool::open(path, read_pool_size)?);
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    /// In-memory connections cannot share a database, so there are no
    /// readers and every read goes through the writer.
    pub fn open_in_memory() -> ImpactResult<Self> {
        Ok(Self {
            writer: Arc::new(WriteConnection::open_in_memory()?),
            readers: None,
            db_path: None,
        })
    }
}
