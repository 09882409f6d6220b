//! Error taxonomy shared by every Stride crate.

/// Errors produced by the estimate path and the workout state machine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("field 'activity' must be one of: walk, run, cycle (got '{0}')")]
    UnsupportedActivity(String),

    #[error("{0} must be > 0")]
    NonPositive(&'static str),

    #[error("{0} must be >= 0")]
    Negative(&'static str),

    #[error("unrealistic speed computed ({0:.2} km/h), check inputs")]
    UnrealisticSpeed(f64),

    #[error("provide either 'duration_sec' or 'duration_min'")]
    MissingDuration,

    #[error("unknown workout_id")]
    UnknownWorkout,

    #[error("workout already ended")]
    WorkoutEnded,

    #[error("{0} went backwards")]
    WentBackwards(&'static str),
}

/// Coarse classification used by the transport layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad, missing, or out-of-range input.
    Validation,
    /// Unknown workout identifier.
    NotFound,
    /// Update on an ended workout, or time/distance regression.
    Conflict,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedActivity(_)
            | Error::NonPositive(_)
            | Error::Negative(_)
            | Error::UnrealisticSpeed(_)
            | Error::MissingDuration => ErrorKind::Validation,
            Error::UnknownWorkout => ErrorKind::NotFound,
            Error::WorkoutEnded | Error::WentBackwards(_) => ErrorKind::Conflict,
        }
    }
}
