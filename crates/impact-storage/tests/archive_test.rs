//! Case archive round-trips and ordering.

use chrono::{Duration, TimeZone, Utc};
use impact_core::models::{
    AssessmentRecord, DeviationCategory, Identification, ImpactInputs, MarginImpact,
    MonteCarloResult, PertResult, RiskRadarVector, Severity, ThreePointEstimate,
};
use impact_core::traits::ICaseArchive;
use impact_storage::StorageEngine;

fn record(program: &str, created_at: chrono::DateTime<Utc>) -> AssessmentRecord {
    AssessmentRecord {
        identification: Identification::new(
            program,
            "Maria Souza",
            vec![DeviationCategory::Retraining, DeviationCategory::Infrastructure],
        ),
        justification: "Extra training round after the go-live slip.".into(),
        inputs: ImpactInputs::new(1_000_000.0, 30.0, 100_000.0),
        total_hours: 640,
        margin: MarginImpact {
            margin_before: 30.0,
            margin_after: 20.0,
            erosion_points: 10.0,
            final_value: 1_100_000.0,
            original_profit: 300_000.0,
            new_profit: 200_000.0,
        },
        cost_estimate: ThreePointEstimate::new(100.0, 200.0, 300.0),
        pert_cost: PertResult {
            expected: 200.0,
            std_dev: 100.0 / 3.0,
        },
        schedule_estimate: ThreePointEstimate::new(10.0, 12.5, 20.0),
        pert_schedule: PertResult {
            expected: 13.333_333_333_333_334,
            std_dev: 10.0 / 6.0,
        },
        monte_carlo: MonteCarloResult {
            mean: 200.123_456_789,
            p95: 261.270_166_537_925_8,
            samples: 2000,
        },
        radar: RiskRadarVector {
            scope_severity: Severity::user(7.0),
            cost_severity: Severity::new(10.0),
            schedule_severity: Severity::user(3.5),
        },
        created_at,
    }
}

#[test]
fn saved_record_round_trips_exactly() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let original = record("alpha", Utc::now());

    let id = storage.save(&original).unwrap();
    let loaded = storage.get(id).unwrap().expect("record exists");

    assert_eq!(loaded.id, id);
    assert_eq!(loaded.record, original);
    assert_eq!(loaded.record.identification.program, "ALPHA");
}

#[test]
fn missing_id_is_none() {
    let storage = StorageEngine::open_in_memory().unwrap();
    assert!(storage.get(7).unwrap().is_none());
}

#[test]
fn list_is_newest_first() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    // Saved out of chronological order on purpose.
    storage.save(&record("middle", base + Duration::days(1))).unwrap();
    storage.save(&record("oldest", base)).unwrap();
    storage.save(&record("newest", base + Duration::days(2))).unwrap();

    let programs: Vec<String> = storage
        .list()
        .unwrap()
        .into_iter()
        .map(|a| a.record.identification.program)
        .collect();
    assert_eq!(programs, vec!["NEWEST", "MIDDLE", "OLDEST"]);
}

#[test]
fn sub_second_timestamps_keep_their_order() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    storage.save(&record("later", base + Duration::milliseconds(5))).unwrap();
    storage.save(&record("earlier", base + Duration::nanoseconds(900))).unwrap();

    let list = storage.list().unwrap();
    assert_eq!(list[0].record.identification.program, "LATER");
    assert_eq!(list[1].record.identification.program, "EARLIER");
}

#[test]
fn same_timestamp_falls_back_to_insertion_order() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let first = storage.save(&record("a", at)).unwrap();
    let second = storage.save(&record("b", at)).unwrap();

    let ids: Vec<i64> = storage.list().unwrap().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn degenerate_simulation_and_empty_categories_round_trip() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let mut rec = record("flat", Utc::now());
    rec.identification.deviation_categories.clear();
    rec.justification.clear();
    rec.monte_carlo = MonteCarloResult::degenerate(200.0);
    rec.cost_estimate = ThreePointEstimate::point(200.0);

    let id = storage.save(&rec).unwrap();
    let loaded = storage.get(id).unwrap().unwrap();

    assert!(loaded.record.monte_carlo.is_degenerate());
    assert_eq!(loaded.record, rec);
}

#[test]
fn archive_is_independent_of_the_ledger() {
    use impact_core::models::{NewLineItem, ResourceProfile};
    use impact_core::traits::IResourceLedger;

    let storage = StorageEngine::open_in_memory().unwrap();
    let item = storage
        .add_item(&NewLineItem::new("ALPHA", "M", "a", ResourceProfile::Analyst, 100.0, 10))
        .unwrap();
    let id = storage.save(&record("alpha", Utc::now())).unwrap();

    storage.delete_item(item.id).unwrap();

    let loaded = storage.get(id).unwrap().unwrap();
    assert_eq!(loaded.record.inputs.accrued_extra_cost, 100_000.0);
    assert_eq!(loaded.record.total_hours, 640);
}

#[test]
fn program_name_is_normalized_on_save() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let mut rec = record("alpha", Utc::now());
    // Built without Identification::new, as a deserialized record would be.
    rec.identification.program = "  alpha  ".into();

    let id = storage.save(&rec).unwrap();

    assert_eq!(storage.get(id).unwrap().unwrap().record.identification.program, "ALPHA");
    assert_eq!(storage.list().unwrap()[0].record.identification.program, "ALPHA");
}
