// Single source of truth for all default values.

// --- Simulation ---
pub const DEFAULT_SAMPLE_COUNT: usize = 2_000;
pub const DEFAULT_OFF_THREAD_THRESHOLD: usize = 50_000;

// --- Thresholds ---
pub const DEFAULT_EROSION_LOW_PP: f64 = 5.0;
pub const DEFAULT_EROSION_MEDIUM_PP: f64 = 15.0;
pub const DEFAULT_COST_SEVERITY_REFERENCE_FRACTION: f64 = 0.1;
pub const DEFAULT_HEALTHY_MARGIN_PCT: f64 = 10.0;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "impact.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Formatting ---
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";
pub const DEFAULT_DECIMALS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
