//! /kcal/activity handler — one-shot estimate for a completed activity.

use axum::Json;
use serde::{Deserialize, Serialize};

use stride_core::activity::Activity;
use stride_core::energy;
use stride_core::error::Error;

use super::{api_error, normalize_opt, round2, round4, ApiError};

#[derive(Deserialize)]
pub struct EstimateRequest {
    pub activity: String,
    /// Either duration field may be supplied; seconds win if both are.
    pub duration_sec: Option<f64>,
    pub duration_min: Option<f64>,
    pub distance_km: f64,
    pub weight_kg: f64,
    pub age_years: Option<u32>,
    pub sex: Option<String>,
}

#[derive(Serialize)]
pub struct EstimateResponse {
    pub kcal: f64,
    pub details: EstimateDetails,
}

#[derive(Serialize)]
pub struct EstimateDetails {
    pub activity: Activity,
    pub duration_sec: f64,
    pub distance_km: f64,
    pub weight_kg: f64,
    pub speed_kmh: f64,
    pub met: f64,
    pub met_bucket: &'static str,
    pub age_years: Option<u32>,
    pub sex: Option<String>,
}

pub async fn handle_estimate(
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let activity = Activity::parse(&req.activity).map_err(api_error)?;

    let duration_sec = match (req.duration_sec, req.duration_min) {
        (Some(sec), _) => sec,
        (None, Some(min)) => min * 60.0,
        (None, None) => return Err(api_error(Error::MissingDuration)),
    };

    let est = energy::estimate(activity, duration_sec, req.distance_km, req.weight_kg)
        .map_err(api_error)?;

    Ok(Json(EstimateResponse {
        kcal: round2(est.kcal),
        details: EstimateDetails {
            activity,
            duration_sec: round2(duration_sec),
            distance_km: round4(req.distance_km),
            weight_kg: round2(req.weight_kg),
            speed_kmh: round2(est.speed_kmh),
            met: est.met,
            met_bucket: est.bucket,
            age_years: req.age_years,
            sex: normalize_opt(req.sex),
        },
    }))
}
