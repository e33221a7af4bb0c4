//! v002: case_archive, one row per finalized assessment, every figure in
//! its own column so numeric fields round-trip exactly.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS case_archive (
    id                      INTEGER PRIMARY KEY AUTOINCREMENT,
    program                 TEXT NOT NULL,
    manager                 TEXT NOT NULL,
    deviation_categories    TEXT NOT NULL DEFAULT '[]',
    deviation_text          TEXT NOT NULL DEFAULT '',
    justification           TEXT NOT NULL DEFAULT '',
    contract_value          REAL NOT NULL,
    original_margin_pct     REAL NOT NULL,
    extra_cost              REAL NOT NULL,
    total_hours             INTEGER NOT NULL DEFAULT 0,
    margin_before           REAL,
    margin_after            REAL,
    erosion_points          REAL,
    final_value             REAL,
    original_profit         REAL,
    new_profit              REAL,
    cost_optimistic         REAL,
    cost_most_likely        REAL,
    cost_pessimistic        REAL,
    pert_cost_expected      REAL,
    pert_cost_std_dev       REAL,
    schedule_optimistic     REAL,
    schedule_most_likely    REAL,
    schedule_pessimistic    REAL,
    pert_schedule_expected  REAL,
    pert_schedule_std_dev   REAL,
    mc_mean                 REAL,
    mc_p95                  REAL,
    mc_samples              INTEGER NOT NULL DEFAULT 0,
    scope_severity          REAL,
    cost_severity           REAL,
    schedule_severity       REAL,
    emitted_at              TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_case_archive_emitted ON case_archive(emitted_at);
CREATE INDEX IF NOT EXISTS idx_case_archive_program ON case_archive(program);
";
