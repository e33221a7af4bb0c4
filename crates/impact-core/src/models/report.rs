use serde::{Deserialize, Serialize};

/// Narrative and pre-formatted figures supplied to the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub title: String,
    /// "Program: X | Manager: Y" line.
    pub subtitle: String,
    /// Executive summary paragraph(s).
    pub narrative: String,
    pub contract_value: String,
    pub final_value: String,
    pub extra_cost: String,
    pub margin_before: String,
    pub margin_after: String,
    /// Risk label from the erosion band ("low", "medium", "high").
    pub risk_label: String,
    /// Suggested file name, e.g. `ASSESSMENT_ALPHA.pdf`.
    pub file_name: String,
}
