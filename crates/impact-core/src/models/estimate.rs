use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Optimistic / most-likely / pessimistic triple for a cost or a duration.
///
/// Conventionally `optimistic <= most_likely <= pessimistic`, but nothing
/// downstream requires it: the estimators are total over any triple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
}

impl ThreePointEstimate {
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }

    /// All three points equal to `value`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub fn is_ordered(&self) -> bool {
        self.optimistic <= self.most_likely && self.most_likely <= self.pessimistic
    }

    /// Advisory check for callers that want to reject inverted triples.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_ordered() {
            Ok(())
        } else {
            Err(ValidationError::InvertedEstimate {
                optimistic: self.optimistic,
                most_likely: self.most_likely,
                pessimistic: self.pessimistic,
            })
        }
    }
}

/// PERT expected value and standard-deviation proxy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PertResult {
    /// `(O + 4M + P) / 6`
    pub expected: f64,
    /// `(P - O) / 6`
    pub std_dev: f64,
}

/// Summary of a triangular Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub mean: f64,
    /// Value below which 95% of the simulated outcomes fall.
    pub p95: f64,
    /// Samples actually drawn; zero when the distribution was degenerate.
    pub samples: usize,
}

impl MonteCarloResult {
    /// Fallback for a distribution with no positive-width support.
    pub fn degenerate(most_likely: f64) -> Self {
        Self {
            mean: most_likely,
            p95: most_likely,
            samples: 0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.samples == 0
    }
}
