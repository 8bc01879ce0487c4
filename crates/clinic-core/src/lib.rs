//! Clinic Core Library
//!
//! Patient and visit record store with a nested visit-history view.
//!
//! # Architecture
//!
//! ```text
//!   create patient ──► validate ──► INSERT patients
//!   create visit   ──► validate ──► INSERT visits (FK → patients)
//!
//!   list patients  ──► patients LEFT JOIN visits
//!                              │ flat rows
//!                              ▼
//!                      aggregate_visits
//!                              │
//!                              ▼
//!                 [PatientRecord { visits: newest first }]
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types and field validation
//! - [`aggregate`]: Grouping of joined rows into patient records

pub mod aggregate;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use aggregate::{aggregate_visits, IntegrityError};
pub use db::{Database, DbError};
pub use models::{
    NewPatient, NewPatientInput, NewVisit, NewVisitInput, PatientRecord, PatientVisitRow,
    ValidationError, VisitEntry,
};

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Patient {0} does not exist")]
    Reference(i64),

    #[error("Database error: {0}")]
    Store(DbError),

    #[error("Data integrity fault: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<DbError> for ClinicError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::MissingPatient(id) => ClinicError::Reference(id),
            other => ClinicError::Store(other),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::LockPoisoned(e.to_string())
    }
}

impl ClinicError {
    /// Whether the caller can fix the request and resubmit.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ClinicError::Validation(_) | ClinicError::Reference(_))
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe handle over the record store.
#[derive(Clone)]
pub struct ClinicCore {
    db: Arc<Mutex<Database>>,
}

impl ClinicCore {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> ClinicResult<Self> {
        Ok(Self::from_database(Database::open(path)?))
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> ClinicResult<Self> {
        Ok(Self::from_database(Database::open_in_memory()?))
    }

    pub fn from_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Validate and store a new patient.
    pub fn create_patient(&self, input: NewPatientInput) -> ClinicResult<i64> {
        let patient = input.validate()?;
        let db = self.db.lock()?;
        Ok(db.insert_patient(&patient)?)
    }

    /// Every patient with their visit history, in patient id order.
    pub fn list_patients(&self) -> ClinicResult<Vec<PatientRecord>> {
        let rows = {
            let db = self.db.lock()?;
            db.list_patient_visit_rows()?
        };
        Ok(aggregate_visits(rows)?)
    }

    /// One patient with their visit history.
    pub fn get_patient(&self, id: i64) -> ClinicResult<Option<PatientRecord>> {
        let rows = {
            let db = self.db.lock()?;
            db.patient_visit_rows(id)?
        };
        Ok(aggregate_visits(rows)?.into_iter().next())
    }

    // =========================================================================
    // Visit Operations
    // =========================================================================

    /// Validate and store a new visit for an existing patient.
    pub fn create_visit(&self, input: NewVisitInput) -> ClinicResult<i64> {
        let visit = input.validate()?;
        let db = self.db.lock()?;
        Ok(db.insert_visit(&visit)?)
    }
}
