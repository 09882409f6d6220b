//! stride-services — stateful pieces of the Stride daemon: the workout
//! session record, its update state machine, and the concurrent store.

pub mod session;
pub mod store;

pub use session::{UpdateOutcome, UpdateRequest, WorkoutSession};
pub use store::{WorkoutCounts, WorkoutStore};
