use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use impact_core::config::SimulationConfig;
use impact_core::errors::{ImpactError, ImpactResult};
use impact_core::models::{MonteCarloResult, ThreePointEstimate};

use super::sampler::monte_carlo;

/// Configured Monte Carlo runner.
///
/// Every run gets its own generator: seeded from `seed` when set (identical
/// inputs give identical results), otherwise from OS entropy. Concurrent
/// callers never share random state.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    sample_count: usize,
    seed: Option<u64>,
    off_thread_threshold: usize,
}

impl MonteCarloSimulator {
    pub fn new(sample_count: usize) -> Self {
        Self {
            sample_count: sample_count.max(1),
            seed: None,
            off_thread_threshold: SimulationConfig::default().off_thread_threshold,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            sample_count: config.sample_count.max(1),
            seed: config.seed,
            off_thread_threshold: config.off_thread_threshold,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether a run is large enough to move off the caller's thread.
    pub fn should_run_off_thread(&self) -> bool {
        self.sample_count >= self.off_thread_threshold
    }

    /// Run with a generator derived from the configured seed.
    pub fn run(&self, estimate: &ThreePointEstimate) -> MonteCarloResult {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        monte_carlo(estimate, self.sample_count, &mut rng)
    }

    /// Run with a caller-supplied generator.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        estimate: &ThreePointEstimate,
        rng: &mut R,
    ) -> MonteCarloResult {
        monte_carlo(estimate, self.sample_count, rng)
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Run a simulation on tokio's blocking pool so an interactive caller's
/// thread stays responsive. Small runs execute inline.
pub async fn simulate_off_thread(
    simulator: &MonteCarloSimulator,
    estimate: ThreePointEstimate,
) -> ImpactResult<MonteCarloResult> {
    if !simulator.should_run_off_thread() {
        return Ok(simulator.run(&estimate));
    }
    let simulator = simulator.clone();
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        simulator.run(&estimate)
    })
        .await
        .map_err(|e| ImpactError::SimulationFailed {
            reason: e.to_string(),
        })
}
