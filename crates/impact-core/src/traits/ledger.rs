use crate::errors::ImpactResult;
use crate::models::{LineItemUpdate, NewLineItem, ResourceLineItem};

/// Per-program store of extra-effort line items.
///
/// Program arguments are matched after normalization (trimmed, upper-cased).
/// Implementations wrap every operation in its own transaction.
pub trait IResourceLedger: Send + Sync {
    // --- Writes ---
    fn add_item(&self, item: &NewLineItem) -> ImpactResult<ResourceLineItem>;
    /// Edit a line; the subtotal is recomputed.
    fn update_item(&self, id: i64, update: &LineItemUpdate) -> ImpactResult<ResourceLineItem>;
    fn delete_item(&self, id: i64) -> ImpactResult<()>;

    // --- Reads ---
    /// Lines for a program in insertion order.
    fn items_for_program(&self, program: &str) -> ImpactResult<Vec<ResourceLineItem>>;

    // --- Aggregation ---
    /// Sum of subtotals; `0.0` for an unknown program.
    fn sum_subtotals(&self, program: &str) -> ImpactResult<f64>;
    /// Sum of hours; `0` for an unknown program.
    fn total_hours(&self, program: &str) -> ImpactResult<u64>;
}
