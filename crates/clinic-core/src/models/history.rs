//! Joined rows and the nested patient/visit-history view built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the patients-left-join-visits query.
///
/// The visit columns are either all present or all absent; the aggregator
/// treats any other combination as an integrity fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientVisitRow {
    pub patient_id: i64,
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub visit_id: Option<i64>,
    pub visit_date: Option<NaiveDate>,
    pub observations: Option<String>,
}

impl PatientVisitRow {
    /// A row for a patient with no matching visit.
    pub fn without_visit(patient_id: i64, name: impl Into<String>, age: u32, height: f64) -> Self {
        Self {
            patient_id,
            name: name.into(),
            age,
            height,
            visit_id: None,
            visit_date: None,
            observations: None,
        }
    }

    /// Attach a visit to this row.
    pub fn with_visit(mut self, visit_id: i64, visit_date: NaiveDate, observations: impl Into<String>) -> Self {
        self.visit_id = Some(visit_id);
        self.visit_date = Some(visit_date);
        self.observations = Some(observations.into());
        self
    }
}

/// A patient with their visit history, most recent visit first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub visits: Vec<VisitEntry>,
}

/// A single visit inside a [`PatientRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitEntry {
    pub id: i64,
    pub visit_date: NaiveDate,
    pub observations: String,
}
