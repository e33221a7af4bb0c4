use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Triangular;
use statrs::statistics::Statistics;

use impact_core::constants::RISK_PERCENTILE;
use impact_core::models::{MonteCarloResult, ThreePointEstimate};

use super::percentile::percentile;

/// Draw `n` samples from triangular(O, M, P) and reduce them to a mean and
/// a 95th percentile.
///
/// When `optimistic >= pessimistic`, or the width is not finite, the result
/// collapses to `most_likely` for both statistics. A mode outside the
/// support is clamped into it. `n = 0` draws a single sample.
pub fn monte_carlo<R: Rng + ?Sized>(
    estimate: &ThreePointEstimate,
    n: usize,
    rng: &mut R,
) -> MonteCarloResult {
    let ThreePointEstimate {
        optimistic: low,
        most_likely: mode,
        pessimistic: high,
    } = *estimate;

    // Also catches NaN bounds (any comparison with NaN is false) and widths
    // that overflow to infinity.
    if !(low < high) || !(high - low).is_finite() {
        tracing::warn!(
            optimistic = low,
            pessimistic = high,
            "degenerate triangular support; falling back to most likely"
        );
        return MonteCarloResult::degenerate(mode);
    }

    let clamped_mode = if mode.is_nan() {
        (low + high) / 2.0
    } else {
        mode.clamp(low, high)
    };
    if clamped_mode != mode {
        tracing::warn!(mode, clamped_mode, "mode outside [optimistic, pessimistic]; clamped");
    }

    let dist = match Triangular::new(low, high, clamped_mode) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!(error = %e, "triangular distribution rejected parameters");
            return MonteCarloResult::degenerate(mode);
        }
    };

    let n = n.max(1);
    let mut samples: Vec<f64> = (0..n).map(|_| dist.sample(rng)).collect();
    let mean = samples.iter().mean();
    samples.sort_by(|a, b| a.total_cmp(b));
    let p95 = percentile(&samples, RISK_PERCENTILE);

    tracing::debug!(samples = n, mean, p95, "monte carlo complete");

    MonteCarloResult {
        mean,
        p95,
        samples: n,
    }
}

/// [`monte_carlo`] with a fresh generator seeded from `seed`.
pub fn monte_carlo_with_seed(estimate: &ThreePointEstimate, n: usize, seed: u64) -> MonteCarloResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    monte_carlo(estimate, n, &mut rng)
}
