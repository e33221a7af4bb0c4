//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging with the default level from [`ObservabilityConfig`].
///
/// Reads the `IMPACT_LOG` environment variable for per-crate log levels.
/// Format: `IMPACT_LOG=impact_analysis=debug,impact_storage=warn`
pub fn init_tracing() {
    init_tracing_with_level(&ObservabilityConfig::default().log_level);
}

/// Initialize logging, falling back to `level` when `IMPACT_LOG` is not set
/// or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_with_level(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "impact_core={level},impact_estimation={level},impact_analysis={level},impact_storage={level}"
            ))
        });

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
