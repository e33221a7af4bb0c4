//! Schema versioning.

use impact_storage::migrations::{self, LATEST_VERSION};
use impact_storage::StorageEngine;

#[test]
fn fresh_database_is_at_latest_version() {
    let storage = StorageEngine::open_in_memory().unwrap();
    assert_eq!(storage.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn rerunning_migrations_is_a_no_op() {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage
        .pool()
        .writer
        .with_conn(migrations::run_migrations)
        .unwrap();
    assert_eq!(storage.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn both_tables_exist() {
    let storage = StorageEngine::open_in_memory().unwrap();
    let tables: Vec<String> = storage
        .pool()
        .writer
        .with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .unwrap();
            let names = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<Vec<String>, _>>()
                .unwrap();
            Ok(names)
        })
        .unwrap();
    assert!(tables.contains(&"case_archive".to_string()));
    assert!(tables.contains(&"resource_line_items".to_string()));
}
