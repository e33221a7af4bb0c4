//! SQL for the ledger and archive tables.

pub mod archive_ops;
pub mod ledger_ops;

use chrono::{DateTime, SecondsFormat, Utc};

use impact_core::errors::ImpactResult;

use crate::to_decode_err;

/// Fixed-width RFC 3339 so that text order equals time order.
pub(crate) fn timestamp_to_sql(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn timestamp_from_sql(table: &str, raw: &str) -> ImpactResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_decode_err(table, format!("bad timestamp {raw:?}: {e}")))
}
