//! Append and read finalized assessments.

use rusqlite::{params, Connection, OptionalExtension, Row};

use impact_core::errors::ImpactResult;
use impact_core::models::{
    normalize_program, ArchivedAssessment, AssessmentRecord, DeviationCategory, Identification,
    ImpactInputs, MarginImpact, MonteCarloResult, PertResult, RiskRadarVector, Severity,
    ThreePointEstimate,
};

use super::{timestamp_from_sql, timestamp_to_sql};
use crate::{to_decode_err, to_storage_err};

const TABLE: &str = "case_archive";

const SELECT_COLUMNS: &str = "SELECT id, program, manager, deviation_categories, justification,
        contract_value, original_margin_pct, extra_cost, total_hours,
        margin_before, margin_after, erosion_points, final_value, original_profit, new_profit,
        cost_optimistic, cost_most_likely, cost_pessimistic, pert_cost_expected, pert_cost_std_dev,
        schedule_optimistic, schedule_most_likely, schedule_pessimistic,
        pert_schedule_expected, pert_schedule_std_dev,
        mc_mean, mc_p95, mc_samples,
        scope_severity, cost_severity, schedule_severity, emitted_at
 FROM case_archive";

/// Insert a record and return its id. The program is normalized here, as
/// in the ledger, so both stores key on the same name.
pub fn insert_record(conn: &Connection, record: &AssessmentRecord) -> ImpactResult<i64> {
    let id = &record.identification;
    let program = normalize_program(&id.program);
    let categories = serde_json::to_string(&id.deviation_categories)?;
    let total_hours = i64::try_from(record.total_hours)
        .map_err(|_| to_storage_err(format!("total_hours too large: {}", record.total_hours)))?;
    let mc_samples = i64::try_from(record.monte_carlo.samples).map_err(|_| {
        to_storage_err(format!("mc_samples too large: {}", record.monte_carlo.samples))
    })?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_record begin: {e}")))?;

    tx.execute(
        "INSERT INTO case_archive (
            program, manager, deviation_categories, deviation_text, justification,
            contract_value, original_margin_pct, extra_cost, total_hours,
            margin_before, margin_after, erosion_points, final_value, original_profit, new_profit,
            cost_optimistic, cost_most_likely, cost_pessimistic,
            pert_cost_expected, pert_cost_std_dev,
            schedule_optimistic, schedule_most_likely, schedule_pessimistic,
            pert_schedule_expected, pert_schedule_std_dev,
            mc_mean, mc_p95, mc_samples,
            scope_severity, cost_severity, schedule_severity, emitted_at
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
            ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32
        )",
        params![
            program,
            id.manager,
            categories,
            id.categories_text(),
            record.justification,
            record.inputs.contract_value,
            record.inputs.original_margin_pct,
            record.inputs.accrued_extra_cost,
            total_hours,
            record.margin.margin_before,
            record.margin.margin_after,
            record.margin.erosion_points,
            record.margin.final_value,
            record.margin.original_profit,
            record.margin.new_profit,
            record.cost_estimate.optimistic,
            record.cost_estimate.most_likely,
            record.cost_estimate.pessimistic,
            record.pert_cost.expected,
            record.pert_cost.std_dev,
            record.schedule_estimate.optimistic,
            record.schedule_estimate.most_likely,
            record.schedule_estimate.pessimistic,
            record.pert_schedule.expected,
            record.pert_schedule.std_dev,
            record.monte_carlo.mean,
            record.monte_carlo.p95,
            mc_samples,
            record.radar.scope_severity.value(),
            record.radar.cost_severity.value(),
            record.radar.schedule_severity.value(),
            timestamp_to_sql(&record.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    let row_id = tx.last_insert_rowid();

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_record commit: {e}")))?;
    Ok(row_id)
}

/// Get one archived record by id.
pub fn get_record(conn: &Connection, id: i64) -> ImpactResult<Option<ArchivedAssessment>> {
    let row = conn
        .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(decode).transpose()
}

/// All archived records, newest first.
pub fn list_records(conn: &Connection) -> ImpactResult<Vec<ArchivedAssessment>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY emitted_at DESC, id DESC"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(decode(row.map_err(|e| to_storage_err(e.to_string()))?)?);
    }
    Ok(records)
}

/// Row with every numeric column mapped; the text columns that can fail
/// to decode are converted in [`decode`].
struct ArchiveRow {
    id: i64,
    program: String,
    manager: String,
    categories: String,
    justification: String,
    inputs: ImpactInputs,
    total_hours: i64,
    margin: MarginImpact,
    cost_estimate: ThreePointEstimate,
    pert_cost: PertResult,
    schedule_estimate: ThreePointEstimate,
    pert_schedule: PertResult,
    mc_mean: f64,
    mc_p95: f64,
    mc_samples: i64,
    radar: RiskRadarVector,
    emitted_at: String,
}

/// SQLite stores NaN as NULL; read it back as NaN.
fn real(row: &Row<'_>, idx: usize) -> rusqlite::Result<f64> {
    Ok(row.get::<_, Option<f64>>(idx)?.unwrap_or(f64::NAN))
}

fn estimate(row: &Row<'_>, first: usize) -> rusqlite::Result<ThreePointEstimate> {
    Ok(ThreePointEstimate::new(
        real(row, first)?,
        real(row, first + 1)?,
        real(row, first + 2)?,
    ))
}

fn pert_result(row: &Row<'_>, first: usize) -> rusqlite::Result<PertResult> {
    Ok(PertResult {
        expected: real(row, first)?,
        std_dev: real(row, first + 1)?,
    })
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<ArchiveRow> {
    Ok(ArchiveRow {
        id: row.get(0)?,
        program: row.get(1)?,
        manager: row.get(2)?,
        categories: row.get(3)?,
        justification: row.get(4)?,
        inputs: ImpactInputs::new(real(row, 5)?, real(row, 6)?, real(row, 7)?),
        total_hours: row.get(8)?,
        margin: MarginImpact {
            margin_before: real(row, 9)?,
            margin_after: real(row, 10)?,
            erosion_points: real(row, 11)?,
            final_value: real(row, 12)?,
            original_profit: real(row, 13)?,
            new_profit: real(row, 14)?,
        },
        cost_estimate: estimate(row, 15)?,
        pert_cost: pert_result(row, 18)?,
        schedule_estimate: estimate(row, 20)?,
        pert_schedule: pert_result(row, 23)?,
        mc_mean: real(row, 25)?,
        mc_p95: real(row, 26)?,
        mc_samples: row.get(27)?,
        radar: RiskRadarVector {
            scope_severity: Severity::new(real(row, 28)?),
            cost_severity: Severity::new(real(row, 29)?),
            schedule_severity: Severity::new(real(row, 30)?),
        },
        emitted_at: row.get(31)?,
    })
}

fn decode(row: ArchiveRow) -> ImpactResult<ArchivedAssessment> {
    let deviation_categories: Vec<DeviationCategory> = serde_json::from_str(&row.categories)
        .map_err(|e| to_decode_err(TABLE, format!("bad deviation categories: {e}")))?;
    let total_hours = u64::try_from(row.total_hours)
        .map_err(|_| to_decode_err(TABLE, format!("negative total_hours: {}", row.total_hours)))?;
    let samples = usize::try_from(row.mc_samples)
        .map_err(|_| to_decode_err(TABLE, format!("negative mc_samples: {}", row.mc_samples)))?;

    let record = AssessmentRecord {
        identification: Identification {
            program: row.program,
            manager: row.manager,
            deviation_categories,
        },
        justification: row.justification,
        inputs: row.inputs,
        total_hours,
        margin: row.margin,
        cost_estimate: row.cost_estimate,
        pert_cost: row.pert_cost,
        schedule_estimate: row.schedule_estimate,
        pert_schedule: row.pert_schedule,
        monte_carlo: MonteCarloResult {
            mean: row.mc_mean,
            p95: row.mc_p95,
            samples,
        },
        radar: row.radar,
        created_at: timestamp_from_sql(TABLE, &row.emitted_at)?,
    };

    Ok(ArchivedAssessment { id: row.id, record })
}
