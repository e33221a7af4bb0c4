//! Triangular Monte Carlo simulation.

mod percentile;
mod sampler;
mod simulator;

pub use percentile::percentile;
pub use sampler::{monte_carlo, monte_carlo_with_seed};
pub use simulator::{simulate_off_thread, MonteCarloSimulator};
