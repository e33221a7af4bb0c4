/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of the most-likely value in the PERT weighted average.
pub const PERT_MODE_WEIGHT: f64 = 4.0;

/// Divisor of the PERT weighted average and standard-deviation proxy.
pub const PERT_DIVISOR: f64 = 6.0;

/// Percentile reported by the Monte Carlo simulator.
pub const RISK_PERCENTILE: f64 = 95.0;

/// Upper bound of every risk radar axis.
pub const MAX_SEVERITY: f64 = 10.0;

/// Lower bound of the user-supplied radar axes (scope, schedule).
pub const MIN_USER_SEVERITY: f64 = 1.0;

/// Environment variable read by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "IMPACT_LOG";
