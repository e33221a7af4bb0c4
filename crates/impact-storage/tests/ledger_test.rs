//! Resource ledger CRUD and aggregation.

use impact_core::errors::{ImpactError, ValidationError};
use impact_core::models::{LineItemUpdate, NewLineItem, ResourceProfile};
use impact_core::traits::IResourceLedger;
use impact_storage::StorageEngine;

fn storage() -> StorageEngine {
    StorageEngine::open_in_memory().expect("in-memory storage")
}

#[test]
fn add_item_computes_subtotal_and_normalizes_program() {
    let storage = storage();
    let item = NewLineItem::new(
        "  alpha  ",
        "Maria",
        "Ana",
        ResourceProfile::Consultant,
        150.0,
        40,
    );

    let stored = storage.add_item(&item).unwrap();

    assert!(stored.id > 0);
    assert_eq!(stored.program, "ALPHA");
    assert_eq!(stored.subtotal, 6000.0);
    assert!(stored.subtotal_is_consistent());
    assert_eq!(stored.profile, ResourceProfile::Consultant);
}

#[test]
fn sums_are_scoped_to_the_program() {
    let storage = storage();
    storage
        .add_item(&NewLineItem::new("ALPHA", "M", "a", ResourceProfile::Analyst, 100.0, 10))
        .unwrap();
    storage
        .add_item(&NewLineItem::new("alpha", "M", "b", ResourceProfile::Developer, 50.0, 4))
        .unwrap();
    storage
        .add_item(&NewLineItem::new("BETA", "M", "c", ResourceProfile::Manager, 999.0, 1))
        .unwrap();

    assert_eq!(storage.sum_subtotals("Alpha").unwrap(), 1200.0);
    assert_eq!(storage.total_hours("ALPHA").unwrap(), 14);
    assert_eq!(storage.items_for_program("alpha").unwrap().len(), 2);
    assert_eq!(storage.sum_subtotals("BETA").unwrap(), 999.0);
}

#[test]
fn unknown_program_has_zero_totals() {
    let storage = storage();
    assert_eq!(storage.sum_subtotals("NOBODY").unwrap(), 0.0);
    assert_eq!(storage.total_hours("NOBODY").unwrap(), 0);
    assert!(storage.items_for_program("NOBODY").unwrap().is_empty());
}

#[test]
fn items_come_back_in_insertion_order() {
    let storage = storage();
    for role in ["first", "second", "third"] {
        storage
            .add_item(&NewLineItem::new("P", "M", role, ResourceProfile::Analyst, 10.0, 1))
            .unwrap();
    }
    let roles: Vec<String> = storage
        .items_for_program("P")
        .unwrap()
        .into_iter()
        .map(|i| i.role)
        .collect();
    assert_eq!(roles, vec!["first", "second", "third"]);
}

#[test]
fn update_recomputes_subtotal() {
    let storage = storage();
    let stored = storage
        .add_item(&NewLineItem::new("P", "M", "dev", ResourceProfile::Developer, 100.0, 10))
        .unwrap();

    let update = LineItemUpdate {
        hours: Some(25),
        ..Default::default()
    };
    let updated = storage.update_item(stored.id, &update).unwrap();

    assert_eq!(updated.hours, 25);
    assert_eq!(updated.subtotal, 2500.0);
    assert!(updated.subtotal_is_consistent());
    assert_eq!(storage.sum_subtotals("P").unwrap(), 2500.0);

    let rate = LineItemUpdate {
        hourly_rate: Some(80.0),
        profile: Some(ResourceProfile::Consultant),
        ..Default::default()
    };
    let updated = storage.update_item(stored.id, &rate).unwrap();
    assert_eq!(updated.subtotal, 2000.0);
    assert_eq!(updated.profile, ResourceProfile::Consultant);
    assert_eq!(storage.items_for_program("P").unwrap()[0], updated);
}

#[test]
fn update_missing_item_is_not_found() {
    let storage = storage();
    let err = storage
        .update_item(42, &LineItemUpdate::default())
        .unwrap_err();
    assert!(matches!(err, ImpactError::LineItemNotFound { id: 42 }));
}

#[test]
fn delete_removes_the_line_from_the_sum() {
    let storage = storage();
    let keep = storage
        .add_item(&NewLineItem::new("P", "M", "a", ResourceProfile::Analyst, 10.0, 10))
        .unwrap();
    let drop = storage
        .add_item(&NewLineItem::new("P", "M", "b", ResourceProfile::Analyst, 20.0, 10))
        .unwrap();

    storage.delete_item(drop.id).unwrap();

    assert_eq!(storage.sum_subtotals("P").unwrap(), keep.subtotal);
    let err = storage.delete_item(drop.id).unwrap_err();
    assert!(matches!(err, ImpactError::LineItemNotFound { .. }));
}

#[test]
fn invalid_items_are_rejected_before_insert() {
    let storage = storage();

    let blank_program = NewLineItem::new("   ", "M", "a", ResourceProfile::Analyst, 10.0, 1);
    assert!(matches!(
        storage.add_item(&blank_program).unwrap_err(),
        ImpactError::Validation(ValidationError::EmptyField { .. })
    ));

    let negative_rate = NewLineItem::new("P", "M", "a", ResourceProfile::Analyst, -1.0, 1);
    assert!(matches!(
        storage.add_item(&negative_rate).unwrap_err(),
        ImpactError::Validation(ValidationError::NegativeValue { .. })
    ));

    assert_eq!(storage.sum_subtotals("P").unwrap(), 0.0);
}

#[test]
fn zero_hours_is_a_valid_line() {
    let storage = storage();
    let stored = storage
        .add_item(&NewLineItem::new("P", "M", "idle", ResourceProfile::Manager, 300.0, 0))
        .unwrap();
    assert_eq!(stored.subtotal, 0.0);
    assert_eq!(storage.total_hours("P").unwrap(), 0);
}
