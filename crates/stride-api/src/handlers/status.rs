//! /health and /status handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use stride_services::WorkoutCounts;

use super::ApiState;

// ── /health ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ── /status ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_secs: u64,
    pub workouts: WorkoutCounts,
}

pub async fn handle_status(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        uptime_secs: state.started_at.elapsed().as_secs(),
        workouts: state.workouts.counts(),
    })
}
