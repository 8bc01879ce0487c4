//! Visit database operations.

use rusqlite::params;

use super::{classify_write_error, Database, DbResult};
use crate::models::NewVisit;

impl Database {
    /// Insert a validated visit and return its store-assigned id.
    ///
    /// Fails with [`DbError::MissingPatient`](super::DbError::MissingPatient)
    /// when the referenced patient does not exist.
    pub fn insert_visit(&self, visit: &NewVisit) -> DbResult<i64> {
        self.conn
            .execute(
                r#"
                INSERT INTO visits (patient_id, visit_date, observations, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    visit.patient_id,
                    visit.visit_date,
                    visit.observations,
                    chrono::Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| classify_write_error(e, Some(visit.patient_id)))?;
        Ok(self.conn.last_insert_rowid())
    }
}
