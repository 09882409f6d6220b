//! In-memory workout store shared across request handlers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde::Serialize;

use stride_core::activity::Activity;
use stride_core::error::Error;
use stride_core::id::new_workout_id;

use crate::session::{UpdateOutcome, UpdateRequest, WorkoutSession};

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Aggregate counts for /status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutCounts {
    pub total: usize,
    pub active: usize,
    pub ended: usize,
}

/// In-memory store of workout sessions.
///
/// Mutation goes through `DashMap::get_mut`, which holds the entry's write
/// lock for the duration of the call — two concurrent updates on the same
/// workout_id cannot interleave their read-modify-write. Sessions are
/// independent, so there is no cross-session locking. Records live until
/// process exit; no delete is exposed.
#[derive(Clone, Default)]
pub struct WorkoutStore {
    /// workout_id → session
    workouts: Arc<DashMap<String, WorkoutSession>>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self {
            workouts: Arc::new(DashMap::new()),
        }
    }

    /// Create a new active session. Returns its id.
    pub fn start(
        &self,
        activity: Activity,
        weight_kg: f64,
        age_years: Option<u32>,
        sex: Option<String>,
    ) -> Result<String, Error> {
        if weight_kg <= 0.0 {
            return Err(Error::NonPositive("weight_kg"));
        }
        let workout_id = new_workout_id();
        let now = now_ms();
        self.workouts.insert(
            workout_id.clone(),
            WorkoutSession::new(workout_id.clone(), activity, weight_kg, age_years, sex, now),
        );
        tracing::info!(workout_id = %workout_id, activity = %activity, weight_kg, "workout started");
        Ok(workout_id)
    }

    /// Clone-out read of a session.
    pub fn snapshot(&self, workout_id: &str) -> Result<WorkoutSession, Error> {
        self.workouts
            .get(workout_id)
            .map(|s| s.clone())
            .ok_or(Error::UnknownWorkout)
    }

    /// Run the update state machine against a session, serialized per entry.
    pub fn update(&self, workout_id: &str, req: &UpdateRequest) -> Result<UpdateOutcome, Error> {
        let mut entry = self.workouts.get_mut(workout_id).ok_or(Error::UnknownWorkout)?;
        entry.value_mut().apply_update(req, now_ms())
    }

    /// End a session, returning its final kcal total. Idempotent.
    pub fn end(&self, workout_id: &str) -> Result<f64, Error> {
        let mut entry = self.workouts.get_mut(workout_id).ok_or(Error::UnknownWorkout)?;
        let final_kcal = entry.value_mut().finish(now_ms());
        tracing::info!(workout_id = %workout_id, final_kcal, "workout ended");
        Ok(final_kcal)
    }

    pub fn counts(&self) -> WorkoutCounts {
        let total = self.workouts.len();
        let ended = self.workouts.iter().filter(|s| s.ended).count();
        WorkoutCounts {
            total,
            active: total - ended,
            ended,
        }
    }
}
