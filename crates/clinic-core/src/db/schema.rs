//! SQLite schema definition.

/// Complete database schema for the clinic store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients (immutable once created)
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    age INTEGER NOT NULL CHECK (age BETWEEN 0 AND 150),
    height REAL NOT NULL CHECK (height > 0 AND height <= 300),
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Visits (append-only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER NOT NULL REFERENCES patients(id),
    visit_date TEXT NOT NULL,                    -- YYYY-MM-DD
    observations TEXT NOT NULL CHECK (length(trim(observations)) > 0),
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_visits_patient_date ON visits(patient_id, visit_date);
"#;
