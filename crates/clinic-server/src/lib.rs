//! Clinic Server
//!
//! HTTP front end over [`clinic_core`]:
//!
//! - `POST /patients`: add a patient
//! - `POST /visits`: add a visit for an existing patient
//! - `GET /patients`: every patient with their visit history
//! - `GET /patients/:id`: one patient with their visit history
//!
//! # Modules
//!
//! - [`config`]: Environment configuration
//! - [`error`]: Error to status-code mapping
//! - [`routes`]: Request handlers
//! - [`telemetry`]: Logging setup

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::path::Path;

use axum::http::Method;
use axum::Router;
use clinic_core::ClinicCore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use routes::AppState;

/// Build the application router. When `static_dir` is set, paths that match
/// no API route are served from it.
pub fn app(core: ClinicCore, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let mut router = routes::routes(AppState::new(core));
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}
