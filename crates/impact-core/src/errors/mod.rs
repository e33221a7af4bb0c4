//! Error taxonomy. The numeric core is total; errors only surface at the
//! ledger, archive, config, and render boundaries.

mod config_error;
mod impact_error;
mod storage_error;
mod validation_error;

pub use config_error::ConfigError;
pub use impact_error::{ImpactError, ImpactResult};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
