//! /workouts handlers — session lifecycle: start, update, inspect, end.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use stride_core::activity::Activity;
use stride_services::{UpdateRequest, WorkoutSession};

use super::{api_error, normalize_opt, round2, round4, ApiError, ApiState};

// ── /workouts/start (POST) ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StartRequest {
    pub activity: String,
    pub weight_kg: f64,
    pub age_years: Option<u32>,
    pub sex: Option<String>,
}

#[derive(Serialize)]
pub struct StartResponse {
    pub workout_id: String,
}

pub async fn handle_workout_start(
    State(state): State<ApiState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let activity = Activity::parse(&req.activity).map_err(api_error)?;

    let workout_id = state
        .workouts
        .start(activity, req.weight_kg, req.age_years, normalize_opt(req.sex))
        .map_err(api_error)?;

    Ok(Json(StartResponse { workout_id }))
}

// ── /workouts/{id}/update (POST) ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateBody {
    /// Cumulative elapsed seconds since the workout started.
    pub elapsed_sec: f64,
    /// Cumulative distance since the workout started.
    pub distance_km: f64,
    pub weight_kg: Option<f64>,
}

#[derive(Serialize)]
pub struct UpdateResponse {
    pub workout_id: String,
    pub current_kcal: f64,
    pub details: UpdateDetails,
}

#[derive(Serialize)]
pub struct UpdateDetails {
    pub activity: Activity,
    pub elapsed_sec: f64,
    pub distance_km: f64,
    pub weight_kg: f64,
    pub interval_sec: f64,
    pub interval_distance_km: f64,
    pub speed_kmh: f64,
    pub met: f64,
    pub met_bucket: &'static str,
    pub kcal_added: f64,
}

pub async fn handle_workout_update(
    State(state): State<ApiState>,
    Path(workout_id): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let req = UpdateRequest {
        elapsed_sec: body.elapsed_sec,
        distance_km: body.distance_km,
        weight_kg: body.weight_kg,
    };
    let out = state.workouts.update(&workout_id, &req).map_err(api_error)?;

    Ok(Json(UpdateResponse {
        workout_id,
        current_kcal: round2(out.total_kcal),
        details: UpdateDetails {
            activity: out.activity,
            elapsed_sec: round2(body.elapsed_sec),
            distance_km: round4(body.distance_km),
            weight_kg: round2(out.weight_kg),
            interval_sec: round2(out.interval_sec),
            interval_distance_km: round4(out.interval_km),
            speed_kmh: round2(out.speed_kmh),
            met: out.met,
            met_bucket: out.bucket,
            kcal_added: round2(out.kcal_delta),
        },
    }))
}

// ── /workouts/{id} (GET) ──────────────────────────────────────────────────────

pub async fn handle_workout_get(
    State(state): State<ApiState>,
    Path(workout_id): Path<String>,
) -> Result<Json<WorkoutSession>, ApiError> {
    let snapshot = state.workouts.snapshot(&workout_id).map_err(api_error)?;
    Ok(Json(snapshot))
}

// ── /workouts/{id}/end (POST) ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EndResponse {
    pub workout_id: String,
    pub final_kcal: f64,
}

pub async fn handle_workout_end(
    State(state): State<ApiState>,
    Path(workout_id): Path<String>,
) -> Result<Json<EndResponse>, ApiError> {
    let final_kcal = state.workouts.end(&workout_id).map_err(api_error)?;

    Ok(Json(EndResponse {
        workout_id,
        final_kcal: round2(final_kcal),
    }))
}
