//! v001: resource_line_items.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS resource_line_items (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    program      TEXT NOT NULL,
    manager      TEXT NOT NULL DEFAULT '',
    role         TEXT NOT NULL,
    profile      TEXT NOT NULL,
    hourly_rate  REAL NOT NULL CHECK (hourly_rate >= 0),
    hours        INTEGER NOT NULL CHECK (hours >= 0),
    subtotal     REAL NOT NULL,
    recorded_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_line_items_program ON resource_line_items(program);
";
