//! stride-core — activity model, MET tables, energy arithmetic, and config.
//! All other Stride crates depend on this one.

pub mod activity;
pub mod config;
pub mod energy;
pub mod error;
pub mod id;

pub use activity::{met_for_speed, Activity, BUCKET_STOPPED, MAX_REALISTIC_SPEED_KMH};
pub use energy::{estimate, kcal_from_met, Estimate};
pub use error::{Error, ErrorKind};
pub use id::new_workout_id;
