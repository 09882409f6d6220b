//! Activity kinds and MET lookup.
//!
//! MET values are keyed by (activity, speed) using fixed speed-threshold
//! tables. Thresholds are inclusive on the lower bound and exclusive on the
//! upper bound, so a walker at exactly 3.2 km/h lands in "moderate".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ── Limits ────────────────────────────────────────────────────────────────────

/// Plausibility ceiling for any computed speed, in km/h.
/// Applies to one-shot averages and per-interval speeds alike.
pub const MAX_REALISTIC_SPEED_KMH: f64 = 100.0;

/// Bucket reported for an interval with elapsed time but no distance.
pub const BUCKET_STOPPED: &str = "stopped";

// ── Activity ──────────────────────────────────────────────────────────────────

/// Supported aerobic activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Walk,
    Run,
    Cycle,
}

impl Activity {
    /// Parse a raw activity string. Normalizes (trim + ascii-lowercase)
    /// before matching, so clients may send any casing.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(Activity::Walk),
            "run" => Ok(Activity::Run),
            "cycle" => Ok(Activity::Cycle),
            other => Err(Error::UnsupportedActivity(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Walk => "walk",
            Activity::Run => "run",
            Activity::Cycle => "cycle",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MET lookup ────────────────────────────────────────────────────────────────

/// Look up the MET value and intensity bucket for an activity at a speed.
///
/// Pure and total: every non-negative speed falls into exactly one bucket.
/// Speed plausibility is the caller's concern.
pub fn met_for_speed(activity: Activity, speed_kmh: f64) -> (f64, &'static str) {
    match activity {
        Activity::Walk => {
            if speed_kmh < 3.2 {
                (2.5, "very_easy")
            } else if speed_kmh < 4.8 {
                (3.3, "moderate")
            } else if speed_kmh < 6.4 {
                (4.3, "brisk")
            } else {
                (5.5, "very_brisk")
            }
        }
        Activity::Run => {
            if speed_kmh < 8.0 {
                (7.0, "easy")
            } else if speed_kmh < 9.7 {
                (9.8, "moderate")
            } else if speed_kmh < 11.3 {
                (11.0, "steady")
            } else if speed_kmh < 12.9 {
                (11.8, "fast")
            } else {
                (12.8, "very_fast")
            }
        }
        Activity::Cycle => {
            if speed_kmh < 16.0 {
                (4.0, "leisure")
            } else if speed_kmh < 19.0 {
                (6.8, "moderate")
            } else if speed_kmh < 22.5 {
                (8.0, "vigorous")
            } else {
                (10.0, "racing")
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
