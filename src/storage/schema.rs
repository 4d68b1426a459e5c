//! Database schema definitions for TierLadder.
//!
//! Each entry in [`MIGRATIONS`] moves the schema up by one version and is
//! applied at most once.

/// Version 1: progression record store and the athlete's tier pointer.
const V1_PROGRESSION: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    key TEXT PRIMARY KEY,
    value_json TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS athlete (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    current_tier_level INTEGER NOT NULL DEFAULT 0 CHECK (current_tier_level >= 0),
    updated_at TEXT NOT NULL
);
"#;

/// Version 2: append-only log of accepted workouts.
const V2_WORKOUT_LOG: &str = r#"
CREATE TABLE IF NOT EXISTS workout_log (
    id TEXT PRIMARY KEY,
    workout_type TEXT NOT NULL,
    reps INTEGER,
    time_minutes INTEGER,
    tier_level INTEGER NOT NULL,
    milestone_type TEXT NOT NULL,
    completed_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workout_log_completed_at ON workout_log(completed_at);
"#;

/// Ordered schema migrations as `(version, sql)`.
pub const MIGRATIONS: &[(i32, &str)] = &[(1, V1_PROGRESSION), (2, V2_WORKOUT_LOG)];

/// Schema version tracking table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 2;
