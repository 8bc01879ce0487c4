//! HTTP error mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clinic_core::ClinicError;
use serde::Serialize;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Request failure, classified by who has to act on it.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or invalid request body
    BadRequest { error: String, details: Option<String> },
    /// Referenced record does not exist
    NotFound(String),
    /// Store or integrity failure; the detail is logged, never returned
    Internal(String),
}

impl From<ClinicError> for ApiError {
    fn from(e: ClinicError) -> Self {
        if !e.is_client_error() {
            return ApiError::Internal(e.to_string());
        }
        match e {
            ClinicError::Validation(err) => ApiError::BadRequest {
                error: "validation failed".to_string(),
                details: Some(err.to_string()),
            },
            ClinicError::Reference(id) => ApiError::NotFound(format!("patient {id} does not exist")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            error: "invalid request body".to_string(),
            details: Some(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            error: "invalid path parameter".to_string(),
            details: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { error, details } => {
                tracing::warn!(%error, details = details.as_deref().unwrap_or(""), "rejected request");
                (StatusCode::BAD_REQUEST, ErrorResponse { error, details })
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(%msg, "reference to missing record");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: msg,
                        details: None,
                    },
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "internal server error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
