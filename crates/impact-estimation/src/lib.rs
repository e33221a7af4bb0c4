//! # impact-estimation
//!
//! Uncertainty modeling for cost and schedule ranges.
//! PERT gives a closed-form expected value; the Monte Carlo simulator samples
//! a triangular distribution and reduces the draws to a mean and a p95.

pub mod monte_carlo;
pub mod pert;

pub use monte_carlo::{
    monte_carlo, monte_carlo_with_seed, percentile, simulate_off_thread, MonteCarloSimulator,
};
pub use pert::pert;
