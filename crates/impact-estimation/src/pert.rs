use impact_core::constants::{PERT_DIVISOR, PERT_MODE_WEIGHT};
use impact_core::models::{PertResult, ThreePointEstimate};

/// PERT three-point estimate.
///
/// ```text
/// expected = (O + 4M + P) / 6
/// std_dev  = (P - O) / 6
/// ```
///
/// Total over any triple: ordering is not checked and an all-zero triple
/// simply yields a zero estimate.
pub fn pert(estimate: &ThreePointEstimate) -> PertResult {
    let ThreePointEstimate {
        optimistic: o,
        most_likely: m,
        pessimistic: p,
    } = *estimate;

    if !estimate.is_ordered() {
        tracing::debug!(o, m, p, "PERT estimate on an unordered triple");
    }

    PertResult {
        expected: (o + PERT_MODE_WEIGHT * m + p) / PERT_DIVISOR,
        std_dev: (p - o) / PERT_DIVISOR,
    }
}
