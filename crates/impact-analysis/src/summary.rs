use impact_core::config::ThresholdConfig;
use impact_core::format::CurrencyFormatter;
use impact_core::models::{AssessmentRecord, ReportSummary};

use crate::calculator::erosion_band;

/// Build the narrative and formatted figures for the report renderer.
pub fn executive_summary(
    record: &AssessmentRecord,
    fmt: &CurrencyFormatter,
    thresholds: &ThresholdConfig,
) -> ReportSummary {
    let id = &record.identification;
    let inputs = &record.inputs;
    let margin = &record.margin;

    let contract_value = fmt.currency(inputs.contract_value);
    let final_value = fmt.currency(margin.final_value);
    let extra_cost = fmt.currency_delta(inputs.accrued_extra_cost);
    let margin_before = fmt.percent(margin.margin_before);
    let margin_after = fmt.percent(margin.margin_after);
    let categories = match id.categories_text() {
        text if text.is_empty() => "unspecified reasons".to_string(),
        text => text,
    };

    let mut narrative = format!(
        "Program {program}, managed by {manager}, changed due to: {categories}.\n\n\
         The original contract value of {contract_value} became {final_value} ({extra_cost}). \
         Margin reduced from {margin_before} to {margin_after}.",
        program = id.program,
        manager = id.manager,
    );
    narrative.push_str(&format!(
        "\n\nPERT expected extra cost is {} (std. dev. {}); expected schedule impact is {:.1} days. \
         Monte Carlo 95th percentile cost exposure is {}.",
        fmt.currency(record.pert_cost.expected),
        fmt.currency(record.pert_cost.std_dev),
        record.pert_schedule.expected,
        fmt.currency(record.monte_carlo.p95),
    ));
    if !record.justification.trim().is_empty() {
        narrative.push_str("\n\nJustification and action plan: ");
        narrative.push_str(record.justification.trim());
    }

    ReportSummary {
        title: "SCOPE CHANGE IMPACT ASSESSMENT".to_string(),
        subtitle: format!("Program: {} | Manager: {}", id.program, id.manager),
        narrative,
        contract_value,
        final_value,
        extra_cost,
        margin_before,
        margin_after,
        risk_label: erosion_band(margin.erosion_points, thresholds)
            .label()
            .to_string(),
        file_name: format!("ASSESSMENT_{}.pdf", id.program.replace(' ', "_")),
    }
}
