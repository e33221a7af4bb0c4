use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_SEVERITY, MIN_USER_SEVERITY};

/// Severity score on one radar axis, clamped to [0.0, 10.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Severity(f64);

impl Severity {
    /// Create a severity, clamping to [0.0, 10.0]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_SEVERITY))
    }

    /// Create a user-supplied severity, clamping to [1.0, 10.0].
    pub fn user(value: f64) -> Self {
        if value.is_nan() {
            return Self(MIN_USER_SEVERITY);
        }
        Self(value.clamp(MIN_USER_SEVERITY, MAX_SEVERITY))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_max(self) -> bool {
        self.0 >= MAX_SEVERITY
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<Severity> for f64 {
    fn from(s: Severity) -> Self {
        s.0
    }
}

/// Three-axis summary of deviation impact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskRadarVector {
    /// User-supplied, 1–10.
    pub scope_severity: Severity,
    /// Derived from extra cost relative to contract value, 0–10.
    pub cost_severity: Severity,
    /// User-supplied, 1–10.
    pub schedule_severity: Severity,
}

impl RiskRadarVector {
    /// Axes in radar order: scope, cost, schedule.
    pub fn axes(&self) -> [(&'static str, f64); 3] {
        [
            ("scope", self.scope_severity.value()),
            ("cost", self.cost_severity.value()),
            ("schedule", self.schedule_severity.value()),
        ]
    }
}
