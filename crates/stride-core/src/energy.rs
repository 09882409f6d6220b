//! Energy arithmetic — MET to kcal, and the one-shot activity estimate.

use crate::activity::{met_for_speed, Activity, MAX_REALISTIC_SPEED_KMH};
use crate::error::Error;

/// Convert a MET value into kilocalories burned.
///
/// `MET × weight_kg × hours`. Callers guarantee positive weight and
/// non-negative duration.
pub fn kcal_from_met(met: f64, weight_kg: f64, duration_sec: f64) -> f64 {
    met * weight_kg * (duration_sec / 3600.0)
}

/// Result of a one-shot estimate, with the derived quantities exposed so the
/// transport can echo a full breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub kcal: f64,
    pub speed_kmh: f64,
    pub met: f64,
    pub bucket: &'static str,
}

/// Estimate kcal for a completed activity from its totals.
pub fn estimate(
    activity: Activity,
    duration_sec: f64,
    distance_km: f64,
    weight_kg: f64,
) -> Result<Estimate, Error> {
    if duration_sec <= 0.0 {
        return Err(Error::NonPositive("duration_sec"));
    }
    if distance_km <= 0.0 {
        return Err(Error::NonPositive("distance_km"));
    }
    if weight_kg <= 0.0 {
        return Err(Error::NonPositive("weight_kg"));
    }

    let speed_kmh = distance_km / (duration_sec / 3600.0);
    if speed_kmh <= 0.0 || speed_kmh > MAX_REALISTIC_SPEED_KMH {
        return Err(Error::UnrealisticSpeed(speed_kmh));
    }

    let (met, bucket) = met_for_speed(activity, speed_kmh);
    Ok(Estimate {
        kcal: kcal_from_met(met, weight_kg, duration_sec),
        speed_kmh,
        met,
        bucket,
    })
}
