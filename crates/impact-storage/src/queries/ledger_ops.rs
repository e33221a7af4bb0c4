//! Insert, update, delete, list, and aggregate resource line items.

use rusqlite::{params, Connection, OptionalExtension, Row};

use impact_core::errors::{ImpactError, ImpactResult};
use impact_core::models::{
    normalize_program, LineItemUpdate, NewLineItem, ResourceLineItem, ResourceProfile,
};

use super::{timestamp_from_sql, timestamp_to_sql};
use crate::{to_decode_err, to_storage_err};

const TABLE: &str = "resource_line_items";

const SELECT_COLUMNS: &str = "SELECT id, program, manager, role, profile, hourly_rate, hours,
        subtotal, recorded_at
 FROM resource_line_items";

/// Raw row, decoded into a model outside the rusqlite closure.
struct LineItemRow {
    id: i64,
    program: String,
    manager: String,
    role: String,
    profile: String,
    hourly_rate: f64,
    hours: i64,
    subtotal: f64,
    recorded_at: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<LineItemRow> {
    Ok(LineItemRow {
        id: row.get(0)?,
        program: row.get(1)?,
        manager: row.get(2)?,
        role: row.get(3)?,
        profile: row.get(4)?,
        hourly_rate: row.get(5)?,
        hours: row.get(6)?,
        subtotal: row.get(7)?,
        recorded_at: row.get(8)?,
    })
}

fn decode(row: LineItemRow) -> ImpactResult<ResourceLineItem> {
    let profile = ResourceProfile::parse(&row.profile)
        .ok_or_else(|| to_decode_err(TABLE, format!("unknown profile {:?}", row.profile)))?;
    let hours = u32::try_from(row.hours)
        .map_err(|_| to_decode_err(TABLE, format!("hours out of range: {}", row.hours)))?;
    Ok(ResourceLineItem {
        id: row.id,
        program: row.program,
        manager: row.manager,
        role: row.role,
        profile,
        hourly_rate: row.hourly_rate,
        hours,
        subtotal: row.subtotal,
        recorded_at: timestamp_from_sql(TABLE, &row.recorded_at)?,
    })
}

/// Insert a line item. The program is normalized and the subtotal computed
/// here, in the same transaction as the insert.
pub fn insert_item(conn: &Connection, item: &NewLineItem) -> ImpactResult<ResourceLineItem> {
    item.validate()?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_item begin: {e}")))?;

    let program = normalize_program(&item.program);
    let subtotal = item.subtotal();
    tx.execute(
        "INSERT INTO resource_line_items (
            program, manager, role, profile, hourly_rate, hours, subtotal, recorded_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            program,
            item.manager.trim(),
            item.role.trim(),
            item.profile.as_str(),
            item.hourly_rate,
            i64::from(item.hours),
            subtotal,
            timestamp_to_sql(&item.recorded_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    let id = tx.last_insert_rowid();

    let stored = get_item(&tx, id)?.ok_or(ImpactError::LineItemNotFound { id })?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_item commit: {e}")))?;
    Ok(stored)
}

/// Get a single line item by id.
pub fn get_item(conn: &Connection, id: i64) -> ImpactResult<Option<ResourceLineItem>> {
    let row = conn
        .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(decode).transpose()
}

/// Apply an edit and recompute the subtotal, atomically.
pub fn update_item(
    conn: &Connection,
    id: i64,
    update: &LineItemUpdate,
) -> ImpactResult<ResourceLineItem> {
    update.validate()?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("update_item begin: {e}")))?;

    let mut item = get_item(&tx, id)?.ok_or(ImpactError::LineItemNotFound { id })?;
    update.apply(&mut item);

    tx.execute(
        "UPDATE resource_line_items
         SET role = ?2, profile = ?3, hourly_rate = ?4, hours = ?5, subtotal = ?6
         WHERE id = ?1",
        params![
            id,
            item.role,
            item.profile.as_str(),
            item.hourly_rate,
            i64::from(item.hours),
            item.subtotal,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("update_item commit: {e}")))?;
    Ok(item)
}

/// Delete a line item.
pub fn delete_item(conn: &Connection, id: i64) -> ImpactResult<()> {
    let deleted = conn
        .execute("DELETE FROM resource_line_items WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    if deleted == 0 {
        return Err(ImpactError::LineItemNotFound { id });
    }
    Ok(())
}

/// All line items of a program, in insertion order.
pub fn items_for_program(conn: &Connection, program: &str) -> ImpactResult<Vec<ResourceLineItem>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} WHERE program = ?1 ORDER BY id ASC"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![normalize_program(program)], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut items = Vec::new();
    for row in rows {
        items.push(decode(row.map_err(|e| to_storage_err(e.to_string()))?)?);
    }
    Ok(items)
}

/// Sum of subtotals for a program; 0.0 when it has no lines.
pub fn sum_subtotals(conn: &Connection, program: &str) -> ImpactResult<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(subtotal), 0.0) FROM resource_line_items WHERE program = ?1",
        params![normalize_program(program)],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Sum of hours for a program; 0 when it has no lines.
pub fn total_hours(conn: &Connection, program: &str) -> ImpactResult<u64> {
    let total: i64 = conn
        .query_row(
            "SELECT COALESCE(SUM(hours), 0) FROM resource_line_items WHERE program = ?1",
            params![normalize_program(program)],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    u64::try_from(total).map_err(|_| to_decode_err(TABLE, format!("negative hour total: {total}")))
}
