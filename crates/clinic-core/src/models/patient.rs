//! Patient models.

use serde::{Deserialize, Serialize};

use super::validation::{non_empty, required, ValidationError, MAX_AGE, MAX_HEIGHT_CM, MIN_AGE};

/// Raw create-patient payload. Every field is optional so that a missing
/// field is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPatientInput {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub height: Option<f64>,
}

/// A validated patient ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub height: f64,
}

impl NewPatientInput {
    pub fn new(name: impl Into<String>, age: i64, height: f64) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            height: Some(height),
        }
    }

    /// Check required fields and ranges.
    pub fn validate(self) -> Result<NewPatient, ValidationError> {
        let name = non_empty(required(self.name, "name")?, "name")?;

        let age = required(self.age, "age")?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::OutOfRange {
                field: "age",
                min: MIN_AGE.to_string(),
                max: MAX_AGE.to_string(),
            });
        }

        let height = required(self.height, "height")?;
        // NaN fails both comparisons and is rejected here too
        if !(height > 0.0 && height <= MAX_HEIGHT_CM) {
            return Err(ValidationError::OutOfRange {
                field: "height",
                min: "0 (exclusive)".to_string(),
                max: MAX_HEIGHT_CM.to_string(),
            });
        }

        Ok(NewPatient {
            name,
            age: age as u32,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_patient() {
        let patient = NewPatientInput::new("  Ada Lovelace ", 36, 165.5)
            .validate()
            .unwrap();
        assert_eq!(patient.name, "Ada Lovelace");
        assert_eq!(patient.age, 36);
        assert_eq!(patient.height, 165.5);
    }

    #[test]
    fn test_missing_fields() {
        let input = NewPatientInput {
            name: Some("Ada".into()),
            age: None,
            height: Some(160.0),
        };
        assert_eq!(input.validate(), Err(ValidationError::MissingField("age")));

        assert_eq!(
            NewPatientInput::default().validate(),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = NewPatientInput::new("   ", 30, 170.0).validate().unwrap_err();
        assert_eq!(err, ValidationError::Empty("name"));
    }

    #[test]
    fn test_age_bounds() {
        assert!(NewPatientInput::new("A", 0, 50.0).validate().is_ok());
        assert!(NewPatientInput::new("A", 150, 170.0).validate().is_ok());
        assert_eq!(
            NewPatientInput::new("A", 151, 170.0)
                .validate()
                .unwrap_err()
                .field(),
            "age"
        );
        assert!(NewPatientInput::new("A", -1, 170.0).validate().is_err());
    }

    #[test]
    fn test_height_bounds() {
        assert!(NewPatientInput::new("A", 30, 300.0).validate().is_ok());
        assert!(NewPatientInput::new("A", 30, 0.0).validate().is_err());
        assert!(NewPatientInput::new("A", 30, 300.5).validate().is_err());
        assert!(NewPatientInput::new("A", 30, f64::NAN).validate().is_err());
    }
}
