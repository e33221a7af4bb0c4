//! ImpactEngine: ledger totals → calculator → estimators → assessment record.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use impact_core::config::{ImpactConfig, ThresholdConfig};
use impact_core::constants::{MAX_SEVERITY, MIN_USER_SEVERITY};
use impact_core::errors::{ImpactError, ImpactResult, ValidationError};
use impact_core::format::CurrencyFormatter;
use impact_core::models::{
    normalize_program, ArchivedAssessment, AssessmentRecord, ErosionBand, Identification,
    ImpactInputs, MarginImpact, MonteCarloResult, PertResult, ReportSummary, RiskRadarVector,
    ThreePointEstimate,
};
use impact_core::traits::{ChartImage, ICaseArchive, IReportRenderer, IResourceLedger, RenderedReport};
use impact_estimation::{pert, simulate_off_thread, MonteCarloSimulator};

use crate::assessment::build_assessment;
use crate::calculator::{compute_impact, erosion_band};
use crate::radar::build_radar;
use crate::scenario::ScenarioComparison;
use crate::summary::executive_summary;

/// What the user entered for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub identification: Identification,
    pub justification: String,
    pub contract_value: f64,
    /// 0–100.
    pub original_margin_pct: f64,
    /// Three-point range for the extra cost.
    pub cost_estimate: ThreePointEstimate,
    /// Three-point range for the schedule slip (days).
    pub schedule_estimate: ThreePointEstimate,
    /// 1–10.
    pub scope_severity: f64,
    /// 1–10.
    pub schedule_severity: f64,
}

impl AnalysisRequest {
    /// Form-layer checks. The engine itself accepts any request; callers
    /// that want to reject bad input before analysis run this first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.identification.program.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "program".into(),
            });
        }
        if !self.contract_value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "contract_value".into(),
            });
        }
        if self.contract_value < 0.0 {
            return Err(ValidationError::NegativeValue {
                field: "contract_value".into(),
                value: self.contract_value,
            });
        }
        in_range("original_margin_pct", self.original_margin_pct, 0.0, 100.0)?;
        in_range("scope_severity", self.scope_severity, MIN_USER_SEVERITY, MAX_SEVERITY)?;
        in_range(
            "schedule_severity",
            self.schedule_severity,
            MIN_USER_SEVERITY,
            MAX_SEVERITY,
        )
    }
}

fn in_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

/// Everything computed for one request. Not yet archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalysis {
    pub identification: Identification,
    pub justification: String,
    pub inputs: ImpactInputs,
    pub total_hours: u64,
    pub margin: MarginImpact,
    pub erosion_band: ErosionBand,
    pub scenario: ScenarioComparison,
    pub cost_estimate: ThreePointEstimate,
    pub pert_cost: PertResult,
    pub schedule_estimate: ThreePointEstimate,
    pub pert_schedule: PertResult,
    pub monte_carlo: MonteCarloResult,
    pub radar: RiskRadarVector,
}

fn analyze_span(request: &AnalysisRequest) -> tracing::Span {
    tracing::info_span!(
        "impact.analyze",
        program = %normalize_program(&request.identification.program)
    )
}

/// Orchestrates one analysis against a resource ledger and a case archive.
pub struct ImpactEngine {
    ledger: Arc<dyn IResourceLedger>,
    archive: Arc<dyn ICaseArchive>,
    simulator: MonteCarloSimulator,
    thresholds: ThresholdConfig,
    formatter: CurrencyFormatter,
}

impl ImpactEngine {
    pub fn new(
        ledger: Arc<dyn IResourceLedger>,
        archive: Arc<dyn ICaseArchive>,
        config: &ImpactConfig,
    ) -> Self {
        Self {
            ledger,
            archive,
            simulator: MonteCarloSimulator::from_config(&config.simulation),
            thresholds: config.thresholds.clone(),
            formatter: CurrencyFormatter::from_config(&config.formatting),
        }
    }

    pub fn simulator(&self) -> &MonteCarloSimulator {
        &self.simulator
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Run an analysis with the configured simulator.
    pub fn analyze(&self, request: &AnalysisRequest) -> ImpactResult<ImpactAnalysis> {
        let span = analyze_span(request);
        let _guard = span.enter();

        let monte_carlo = self.simulator.run(&request.cost_estimate);
        self.assemble(request, monte_carlo)
    }

    /// Run an analysis drawing Monte Carlo samples from `rng`.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        request: &AnalysisRequest,
        rng: &mut R,
    ) -> ImpactResult<ImpactAnalysis> {
        let span = analyze_span(request);
        let _guard = span.enter();

        let monte_carlo = self.simulator.run_with_rng(&request.cost_estimate, rng);
        self.assemble(request, monte_carlo)
    }

    /// Like [`Self::analyze`], with large simulations moved to the blocking pool.
    pub async fn analyze_async(&self, request: &AnalysisRequest) -> ImpactResult<ImpactAnalysis> {
        let span = analyze_span(request);
        let monte_carlo = simulate_off_thread(&self.simulator, request.cost_estimate)
            .instrument(span.clone())
            .await?;

        let _guard = span.enter();
        self.assemble(request, monte_carlo)
    }

    /// Runs inside the caller's `impact.analyze` span.
    fn assemble(
        &self,
        request: &AnalysisRequest,
        monte_carlo: MonteCarloResult,
    ) -> ImpactResult<ImpactAnalysis> {
        let mut identification = request.identification.clone();
        identification.program = normalize_program(&identification.program);
        let program = &identification.program;

        let accrued_extra_cost = self.ledger.sum_subtotals(program)?;
        let total_hours = self.ledger.total_hours(program)?;
        let inputs = ImpactInputs::new(
            request.contract_value,
            request.original_margin_pct,
            accrued_extra_cost,
        );

        let margin = compute_impact(
            inputs.contract_value,
            inputs.original_margin_pct,
            inputs.accrued_extra_cost,
        );
        let band = erosion_band(margin.erosion_points, &self.thresholds);
        let scenario = ScenarioComparison::from_impact(
            inputs.contract_value,
            &margin,
            self.thresholds.healthy_margin_pct,
        );

        for (name, estimate) in [
            ("cost", &request.cost_estimate),
            ("schedule", &request.schedule_estimate),
        ] {
            if !estimate.is_ordered() {
                tracing::warn!(
                    estimate = name,
                    optimistic = estimate.optimistic,
                    most_likely = estimate.most_likely,
                    pessimistic = estimate.pessimistic,
                    "three-point estimate is not ordered"
                );
            }
        }
        let pert_cost = pert(&request.cost_estimate);
        let pert_schedule = pert(&request.schedule_estimate);

        let radar = build_radar(
            request.scope_severity,
            inputs.accrued_extra_cost,
            inputs.contract_value,
            request.schedule_severity,
            self.thresholds.cost_severity_reference_fraction,
        );

        tracing::debug!(
            extra_cost = inputs.accrued_extra_cost,
            total_hours,
            margin_after = margin.margin_after,
            erosion = margin.erosion_points,
            band = band.label(),
            "analysis computed"
        );

        Ok(ImpactAnalysis {
            identification,
            justification: request.justification.clone(),
            inputs,
            total_hours,
            margin,
            erosion_band: band,
            scenario,
            cost_estimate: request.cost_estimate,
            pert_cost,
            schedule_estimate: request.schedule_estimate,
            pert_schedule,
            monte_carlo,
            radar,
        })
    }

    /// Freeze an analysis into the archive. Refused while the program has no
    /// accrued extra cost.
    pub fn finalize(
        &self,
        analysis: &ImpactAnalysis,
        created_at: DateTime<Utc>,
    ) -> ImpactResult<ArchivedAssessment> {
        let program = &analysis.identification.program;
        let span = tracing::info_span!("impact.finalize", program = %program);
        let _guard = span.enter();

        if analysis.inputs.accrued_extra_cost <= 0.0 {
            return Err(ImpactError::NoAccruedCost {
                program: program.clone(),
            });
        }

        let record = build_assessment(analysis, created_at);
        let id = self.archive.save(&record)?;
        tracing::info!(id, "assessment archived");
        Ok(ArchivedAssessment { id, record })
    }

    /// Archived assessments, newest first.
    pub fn history(&self) -> ImpactResult<Vec<ArchivedAssessment>> {
        self.archive.list()
    }

    pub fn assessment(&self, id: i64) -> ImpactResult<ArchivedAssessment> {
        self.archive
            .get(id)?
            .ok_or(ImpactError::AssessmentNotFound { id })
    }

    pub fn summary(&self, record: &AssessmentRecord) -> ReportSummary {
        executive_summary(record, &self.formatter, &self.thresholds)
    }

    /// Regenerate the report for an archived assessment. Reads only the
    /// archive; the ledger is not consulted.
    pub fn render_report(
        &self,
        id: i64,
        renderer: &dyn IReportRenderer,
        charts: &[ChartImage],
    ) -> ImpactResult<RenderedReport> {
        let span = tracing::info_span!("impact.render", id);
        let _guard = span.enter();

        let archived = self.assessment(id)?;
        let summary = self.summary(&archived.record);
        let report = renderer.render(&archived.record, &summary, charts)?;
        tracing::info!(file = %report.file_name, bytes = report.bytes.len(), "report rendered");
        Ok(report)
    }
}
