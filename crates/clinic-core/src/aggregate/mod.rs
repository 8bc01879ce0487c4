//! Visit aggregation.
//!
//! Collapses the flat rows of the patients-left-join-visits query into one
//! [`PatientRecord`] per patient, each carrying its visits newest first.
//!
//! ```text
//! (1, A, -)            ┌─ 1 A  visits: []
//! (2, B, 9, 2024-01)   │
//! (2, B, 10, 2024-03) ─┴─ 2 B  visits: [10 2024-03, 9 2024-01]
//! ```
//!
//! Patients keep first-seen order. Visit order does not depend on the order
//! the store returned the rows in.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use crate::models::{PatientRecord, PatientVisitRow, VisitEntry};

/// Data-integrity faults found in joined rows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityError {
    #[error("visit {visit_id} appears more than once (patient {first_patient_id}, then patient {patient_id})")]
    DuplicateVisit {
        visit_id: i64,
        first_patient_id: i64,
        patient_id: i64,
    },

    #[error("patient {patient_id} has a partial visit row (id: {has_id}, date: {has_date}, observations: {has_observations})")]
    PartialVisitRow {
        patient_id: i64,
        has_id: bool,
        has_date: bool,
        has_observations: bool,
    },

    #[error("patient {0} has conflicting fields across joined rows")]
    ConflictingPatient(i64),
}

pub type AggregateResult<T> = Result<T, IntegrityError>;

/// Group joined rows into patients with nested visit histories.
pub fn aggregate_visits<I>(rows: I) -> AggregateResult<Vec<PatientRecord>>
where
    I: IntoIterator<Item = PatientVisitRow>,
{
    let mut records: Vec<PatientRecord> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut visit_owner: HashMap<i64, i64> = HashMap::new();

    for row in rows {
        let slot = match index.entry(row.patient_id) {
            Entry::Occupied(entry) => {
                let slot = *entry.get();
                let existing = &records[slot];
                if existing.name != row.name || existing.age != row.age || existing.height != row.height {
                    return Err(IntegrityError::ConflictingPatient(row.patient_id));
                }
                slot
            }
            Entry::Vacant(entry) => {
                records.push(PatientRecord {
                    id: row.patient_id,
                    name: row.name.clone(),
                    age: row.age,
                    height: row.height,
                    visits: Vec::new(),
                });
                *entry.insert(records.len() - 1)
            }
        };

        let Some(visit) = visit_entry(&row)? else {
            continue;
        };

        if let Some(&first_patient_id) = visit_owner.get(&visit.id) {
            return Err(IntegrityError::DuplicateVisit {
                visit_id: visit.id,
                first_patient_id,
                patient_id: row.patient_id,
            });
        }
        visit_owner.insert(visit.id, row.patient_id);
        records[slot].visits.push(visit);
    }

    // Stable: equal dates keep input order
    for record in &mut records {
        record.visits.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
    }

    Ok(records)
}

/// Extract the visit half of a row, if it has one.
fn visit_entry(row: &PatientVisitRow) -> AggregateResult<Option<VisitEntry>> {
    match (&row.visit_id, &row.visit_date, &row.observations) {
        (Some(id), Some(date), Some(observations)) => Ok(Some(VisitEntry {
            id: *id,
            visit_date: *date,
            observations: observations.clone(),
        })),
        (None, None, None) => Ok(None),
        (id, date, observations) => Err(IntegrityError::PartialVisitRow {
            patient_id: row.patient_id,
            has_id: id.is_some(),
            has_date: date.is_some(),
            has_observations: observations.is_some(),
        }),
    }
}
