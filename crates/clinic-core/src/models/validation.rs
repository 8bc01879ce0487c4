//! Field validation errors shared by the patient and visit inputs.

use thiserror::Error;

/// Youngest accepted patient age, in years.
pub const MIN_AGE: i64 = 0;
/// Oldest accepted patient age, in years.
pub const MAX_AGE: i64 = 150;
/// Tallest accepted patient height, in centimeters. Heights must be strictly positive.
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// A request field that failed validation before reaching the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
    },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("visit date {0} is in the future")]
    FutureDate(String),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::Empty(field)
            | ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidDate(_) | ValidationError::FutureDate(_) => "visit_date",
        }
    }
}

pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Trim a text field and reject it when nothing is left.
pub(crate) fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  Ada  ".into(), "name").unwrap(), "Ada");
        assert_eq!(
            non_empty(" \t ".into(), "name"),
            Err(ValidationError::Empty("name"))
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::MissingField("age").field(), "age");
        assert_eq!(
            ValidationError::InvalidDate("yesterday".into()).field(),
            "visit_date"
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::OutOfRange {
            field: "age",
            min: "0".into(),
            max: "150".into(),
        };
        assert_eq!(err.to_string(), "age must be between 0 and 150");
    }
}
