use serde::{Deserialize, Serialize};

/// Canonical program key: trimmed and upper-cased.
pub fn normalize_program(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Why the program's scope changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationCategory {
    GoLiveChange,
    Retraining,
    FunctionalChange,
    Infrastructure,
    ProductVersion,
}

impl DeviationCategory {
    pub const ALL: [DeviationCategory; 5] = [
        Self::GoLiveChange,
        Self::Retraining,
        Self::FunctionalChange,
        Self::Infrastructure,
        Self::ProductVersion,
    ];

    /// Human-readable label used in reports and the archive's text column.
    pub fn label(self) -> &'static str {
        match self {
            Self::GoLiveChange => "Go-Live Change",
            Self::Retraining => "Retraining",
            Self::FunctionalChange => "Functional Change",
            Self::Infrastructure => "Infrastructure",
            Self::ProductVersion => "Product Version",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Who and what an assessment is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    pub program: String,
    pub manager: String,
    pub deviation_categories: Vec<DeviationCategory>,
}

impl Identification {
    pub fn new(
        program: &str,
        manager: impl Into<String>,
        deviation_categories: Vec<DeviationCategory>,
    ) -> Self {
        Self {
            program: normalize_program(program),
            manager: manager.into(),
            deviation_categories,
        }
    }

    /// Categories joined for display, e.g. `"Retraining, Infrastructure"`.
    pub fn categories_text(&self) -> String {
        self.deviation_categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
