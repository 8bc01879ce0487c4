//! Visit models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{non_empty, required, ValidationError};

/// Wire and storage format of a visit date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw create-visit payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewVisitInput {
    pub patient_id: Option<i64>,
    pub visit_date: Option<String>,
    pub observations: Option<String>,
}

/// A validated visit ready for insertion. The patient reference is checked by
/// the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisit {
    pub patient_id: i64,
    pub visit_date: NaiveDate,
    pub observations: String,
}

impl NewVisitInput {
    pub fn new(patient_id: i64, visit_date: impl Into<String>, observations: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id),
            visit_date: Some(visit_date.into()),
            observations: Some(observations.into()),
        }
    }

    /// Validate against the local calendar date.
    pub fn validate(self) -> Result<NewVisit, ValidationError> {
        self.validate_as_of(chrono::Local::now().date_naive())
    }

    /// Validate, rejecting visits dated after `today`.
    pub fn validate_as_of(self, today: NaiveDate) -> Result<NewVisit, ValidationError> {
        let patient_id = required(self.patient_id, "patient_id")?;

        let raw_date = required(self.visit_date, "visit_date")?;
        let visit_date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw_date.clone()))?;
        if visit_date > today {
            return Err(ValidationError::FutureDate(visit_date.to_string()));
        }

        let observations = non_empty(required(self.observations, "observations")?, "observations")?;

        Ok(NewVisit {
            patient_id,
            visit_date,
            observations,
        })
    }
}
