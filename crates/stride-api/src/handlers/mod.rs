//! HTTP API handlers — exposes the estimate and workout operations as JSON.

pub mod estimate;
pub mod status;
pub mod workouts;

use std::time::Instant;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use stride_core::error::{Error, ErrorKind};
use stride_services::WorkoutStore;

#[derive(Clone)]
pub struct ApiState {
    pub workouts: WorkoutStore,
    /// When the daemon came up — reported by /status.
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(workouts: WorkoutStore) -> Self {
        Self {
            workouts,
            started_at: Instant::now(),
        }
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// JSON error body; `error` carries the human-readable cause.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorBody>);

/// Map the core taxonomy onto HTTP status codes.
pub(crate) fn api_error(err: Error) -> ApiError {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
    };
    (status, Json(ErrorBody { error: err.to_string() }))
}

/// Round for the wire. Internal accumulation keeps full precision.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Normalize an optional free-form string field (sex): trim + lowercase.
pub(crate) fn normalize_opt(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase())
}

// Re-export handler functions for use in router setup.
pub use estimate::handle_estimate;
pub use status::{handle_health, handle_status};
pub use workouts::{
    handle_workout_end, handle_workout_get, handle_workout_start, handle_workout_update,
};
