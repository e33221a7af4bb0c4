use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::identification::normalize_program;

/// Staffing profile of a ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceProfile {
    Consultant,
    Analyst,
    Developer,
    Manager,
}

impl ResourceProfile {
    pub const ALL: [ResourceProfile; 4] = [
        Self::Consultant,
        Self::Analyst,
        Self::Developer,
        Self::Manager,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Consultant => "consultant",
            Self::Analyst => "analyst",
            Self::Developer => "developer",
            Self::Manager => "manager",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// One extra-effort line recorded against a program.
///
/// `subtotal` is cached; the ledger recomputes it on every create and update
/// so that `subtotal == hourly_rate * hours` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLineItem {
    pub id: i64,
    pub program: String,
    pub manager: String,
    /// Name of the person or role doing the work.
    pub role: String,
    pub profile: ResourceProfile,
    pub hourly_rate: f64,
    pub hours: u32,
    pub subtotal: f64,
    pub recorded_at: DateTime<Utc>,
}

impl ResourceLineItem {
    pub fn compute_subtotal(hourly_rate: f64, hours: u32) -> f64 {
        hourly_rate * f64::from(hours)
    }

    /// Whether the cached subtotal matches rate × hours.
    pub fn subtotal_is_consistent(&self) -> bool {
        self.subtotal == Self::compute_subtotal(self.hourly_rate, self.hours)
    }
}

/// A line item as entered, before the ledger assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub program: String,
    pub manager: String,
    pub role: String,
    pub profile: ResourceProfile,
    pub hourly_rate: f64,
    pub hours: u32,
    pub recorded_at: DateTime<Utc>,
}

impl NewLineItem {
    pub fn new(
        program: impl Into<String>,
        manager: impl Into<String>,
        role: impl Into<String>,
        profile: ResourceProfile,
        hourly_rate: f64,
        hours: u32,
    ) -> Self {
        Self {
            program: program.into(),
            manager: manager.into(),
            role: role.into(),
            profile,
            hourly_rate,
            hours,
            recorded_at: Utc::now(),
        }
    }

    /// Form-layer checks: program and role are required, the rate must be
    /// a finite non-negative amount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if normalize_program(&self.program).is_empty() {
            return Err(ValidationError::EmptyField {
                field: "program".into(),
            });
        }
        if self.role.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "role".into(),
            });
        }
        validate_rate(self.hourly_rate)
    }

    pub fn subtotal(&self) -> f64 {
        ResourceLineItem::compute_subtotal(self.hourly_rate, self.hours)
    }
}

/// Explicit edit of an existing line. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemUpdate {
    pub role: Option<String>,
    pub profile: Option<ResourceProfile>,
    pub hourly_rate: Option<f64>,
    pub hours: Option<u32>,
}

impl LineItemUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(role) = &self.role {
            if role.trim().is_empty() {
                return Err(ValidationError::EmptyField {
                    field: "role".into(),
                });
            }
        }
        match self.hourly_rate {
            Some(rate) => validate_rate(rate),
            None => Ok(()),
        }
    }

    /// Apply the edit, recomputing the cached subtotal.
    pub fn apply(&self, item: &mut ResourceLineItem) {
        if let Some(role) = &self.role {
            item.role = role.trim().to_string();
        }
        if let Some(profile) = self.profile {
            item.profile = profile;
        }
        if let Some(rate) = self.hourly_rate {
            item.hourly_rate = rate;
        }
        if let Some(hours) = self.hours {
            item.hours = hours;
        }
        item.subtotal = ResourceLineItem::compute_subtotal(item.hourly_rate, item.hours);
    }
}

fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    if !rate.is_finite() {
        return Err(ValidationError::NonFiniteValue {
            field: "hourly_rate".into(),
        });
    }
    if rate < 0.0 {
        return Err(ValidationError::NegativeValue {
            field: "hourly_rate".into(),
            value: rate,
        });
    }
    Ok(())
}
