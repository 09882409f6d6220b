//! Workout session record and the interval-accumulation state machine.
//!
//! Clients post cumulative totals (elapsed seconds, distance) at irregular
//! intervals; each accepted update accounts the kcal of the delta since the
//! previous one. The running total is therefore a sum of non-negative
//! interval contributions — it never drifts when weight changes mid-session
//! and never decreases.

use serde::Serialize;

use stride_core::activity::{met_for_speed, Activity, BUCKET_STOPPED, MAX_REALISTIC_SPEED_KMH};
use stride_core::energy::kcal_from_met;
use stride_core::error::Error;

/// One in-progress or ended workout.
///
/// `last_elapsed_sec`, `last_distance_km`, and `last_kcal` are non-decreasing
/// for the session's lifetime. Once `ended` is set the record is frozen.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutSession {
    pub workout_id: String,
    pub activity: Activity,
    pub weight_kg: f64,
    pub age_years: Option<u32>,
    pub sex: Option<String>,

    pub last_elapsed_sec: f64,
    pub last_distance_km: f64,
    pub last_kcal: f64,
    pub last_speed_kmh: f64,
    pub last_met: f64,
    pub last_bucket: &'static str,

    /// Unix milliseconds.
    pub created_ts: u64,
    pub updated_ts: u64,
    pub ended: bool,
}

/// Cumulative totals reported by the client for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub elapsed_sec: f64,
    pub distance_km: f64,
    pub weight_kg: Option<f64>,
}

/// What one accepted (or idempotently ignored) update produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub activity: Activity,
    /// Running kcal total after this update.
    pub total_kcal: f64,
    /// Kcal contributed by this interval. Zero for no-op and stopped intervals.
    pub kcal_delta: f64,
    pub interval_sec: f64,
    pub interval_km: f64,
    pub speed_kmh: f64,
    pub met: f64,
    pub bucket: &'static str,
    /// Weight in effect after the update.
    pub weight_kg: f64,
}

impl WorkoutSession {
    pub fn new(
        workout_id: String,
        activity: Activity,
        weight_kg: f64,
        age_years: Option<u32>,
        sex: Option<String>,
        now_ms: u64,
    ) -> Self {
        Self {
            workout_id,
            activity,
            weight_kg,
            age_years,
            sex,
            last_elapsed_sec: 0.0,
            last_distance_km: 0.0,
            last_kcal: 0.0,
            last_speed_kmh: 0.0,
            last_met: 0.0,
            last_bucket: "",
            created_ts: now_ms,
            updated_ts: now_ms,
            ended: false,
        }
    }

    /// Apply one cumulative update.
    ///
    /// Everything is validated before anything is stored: a rejected update
    /// leaves the record exactly as it was, including weight.
    pub fn apply_update(&mut self, req: &UpdateRequest, now_ms: u64) -> Result<UpdateOutcome, Error> {
        if self.ended {
            return Err(Error::WorkoutEnded);
        }
        if req.elapsed_sec <= 0.0 {
            return Err(Error::NonPositive("elapsed_sec"));
        }
        if req.distance_km < 0.0 {
            return Err(Error::Negative("distance_km"));
        }
        let weight_kg = match req.weight_kg {
            Some(w) if w <= 0.0 => return Err(Error::NonPositive("weight_kg")),
            Some(w) => w,
            None => self.weight_kg,
        };

        let dt = req.elapsed_sec - self.last_elapsed_sec;
        let dd = req.distance_km - self.last_distance_km;
        if dt < 0.0 {
            return Err(Error::WentBackwards("elapsed_sec"));
        }
        if dd < 0.0 {
            return Err(Error::WentBackwards("distance_km"));
        }

        if dt == 0.0 {
            // Duplicate/retry of the last sample: nothing to account.
            return Ok(UpdateOutcome {
                activity: self.activity,
                total_kcal: self.last_kcal,
                kcal_delta: 0.0,
                interval_sec: 0.0,
                interval_km: 0.0,
                speed_kmh: self.last_speed_kmh,
                met: self.last_met,
                bucket: self.last_bucket,
                weight_kg: self.weight_kg,
            });
        }

        let (speed_kmh, met, bucket) = if dd == 0.0 {
            // Time passed, no distance: the client stood still.
            (0.0, 0.0, BUCKET_STOPPED)
        } else {
            let speed = dd / (dt / 3600.0);
            if speed <= 0.0 || speed > MAX_REALISTIC_SPEED_KMH {
                return Err(Error::UnrealisticSpeed(speed));
            }
            let (met, bucket) = met_for_speed(self.activity, speed);
            (speed, met, bucket)
        };

        let kcal_delta = kcal_from_met(met, weight_kg, dt);

        self.weight_kg = weight_kg;
        self.last_kcal += kcal_delta;
        self.last_elapsed_sec = req.elapsed_sec;
        self.last_distance_km = req.distance_km;
        self.last_speed_kmh = speed_kmh;
        self.last_met = met;
        self.last_bucket = bucket;
        self.updated_ts = now_ms;

        Ok(UpdateOutcome {
            activity: self.activity,
            total_kcal: self.last_kcal,
            kcal_delta,
            interval_sec: dt,
            interval_km: dd,
            speed_kmh,
            met,
            bucket,
            weight_kg,
        })
    }

    /// Mark the workout ended and return the final kcal total.
    ///
    /// Idempotent: repeat calls return the cached total without re-stamping
    /// `updated_ts`.
    pub fn finish(&mut self, now_ms: u64) -> f64 {
        if !self.ended {
            self.ended = true;
            self.updated_ts = now_ms;
        }
        self.last_kcal
    }
}
