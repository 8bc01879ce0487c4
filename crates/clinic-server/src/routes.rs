//! REST endpoints for patients and visits.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clinic_core::{ClinicCore, ClinicResult, NewPatientInput, NewVisitInput, PatientRecord};
use serde::Serialize;

use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub core: ClinicCore,
}

impl AppState {
    pub fn new(core: ClinicCore) -> Self {
        Self { core }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCreated {
    pub message: &'static str,
    pub patient_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitCreated {
    pub message: &'static str,
    pub visit_id: i64,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/:id", get(get_patient))
        .route("/visits", post(create_visit))
        .with_state(state)
}

/// Run a store operation on the blocking pool.
async fn blocking<T, F>(core: ClinicCore, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&ClinicCore) -> ClinicResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&core))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
        .map_err(ApiError::from)
}

async fn health() -> &'static str {
    "ok"
}

/// POST /patients
async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<NewPatientInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientCreated>), ApiError> {
    let Json(input) = payload?;
    let patient_id = blocking(state.core, move |core| core.create_patient(input)).await?;
    tracing::info!(patient_id, "patient added");

    Ok((
        StatusCode::CREATED,
        Json(PatientCreated {
            message: "Patient added",
            patient_id,
        }),
    ))
}

/// POST /visits
async fn create_visit(
    State(state): State<AppState>,
    payload: Result<Json<NewVisitInput>, JsonRejection>,
) -> Result<(StatusCode, Json<VisitCreated>), ApiError> {
    let Json(input) = payload?;
    let visit_id = blocking(state.core, move |core| core.create_visit(input)).await?;
    tracing::info!(visit_id, "visit added");

    Ok((
        StatusCode::CREATED,
        Json(VisitCreated {
            message: "Visit added",
            visit_id,
        }),
    ))
}

/// GET /patients
async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<PatientRecord>>, ApiError> {
    let patients = blocking(state.core, |core| core.list_patients()).await?;
    tracing::debug!(count = patients.len(), "listed patients");
    Ok(Json(patients))
}

/// GET /patients/:id
async fn get_patient(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PatientRecord>, ApiError> {
    let Path(id) = path?;
    blocking(state.core, move |core| core.get_patient(id))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("patient {id} does not exist")))
}
