//! Patient database operations.

use rusqlite::{params, Row};

use super::{classify_write_error, Database, DbResult};
use crate::models::{NewPatient, PatientVisitRow};

const PATIENT_VISIT_ROWS: &str = r#"
    SELECT p.id, p.name, p.age, p.height, v.id, v.visit_date, v.observations
    FROM patients p
    LEFT JOIN visits v ON v.patient_id = p.id
"#;

impl Database {
    /// Insert a validated patient and return its store-assigned id.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO patients (name, age, height, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    patient.name,
                    patient.age,
                    patient.height,
                    chrono::Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| classify_write_error(e, None))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Every patient left-joined with their visits, ordered by patient id
    /// then visit date descending.
    pub fn list_patient_visit_rows(&self) -> DbResult<Vec<PatientVisitRow>> {
        let sql = format!("{PATIENT_VISIT_ROWS} ORDER BY p.id, v.visit_date DESC, v.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], patient_visit_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Joined rows for a single patient. Empty when the patient does not exist.
    pub fn patient_visit_rows(&self, patient_id: i64) -> DbResult<Vec<PatientVisitRow>> {
        let sql = format!("{PATIENT_VISIT_ROWS} WHERE p.id = ? ORDER BY v.visit_date DESC, v.id");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([patient_id], patient_visit_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn patient_visit_row(row: &Row<'_>) -> rusqlite::Result<PatientVisitRow> {
    Ok(PatientVisitRow {
        patient_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        height: row.get(3)?,
        visit_id: row.get(4)?,
        visit_date: row.get(5)?,
        observations: row.get(6)?,
    })
}
