//! Elevation gain/loss and a distance-vs-altitude profile.

use serde::{Deserialize, Serialize};

use crate::track::Track;

/// A point of the elevation profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationPoint {
    /// Cumulative distance in meters
    pub distance_meters: f64,
    /// Altitude above the run's lowest point, in meters (never negative)
    pub relative_altitude: f64,
}

/// Elevation summary of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationSummary {
    pub gain_meters: f64,
    pub loss_meters: f64,
    pub min_altitude: Option<f64>,
    pub max_altitude: Option<f64>,
    pub profile: Vec<ElevationPoint>,
}

/// Sum positive and negative altitude changes between consecutive values.
///
/// Deltas touching a non-finite altitude are skipped.
pub fn gain_and_loss(altitudes: &[f64]) -> (f64, f64) {
    altitudes
        .windows(2)
        .fold((0.0, 0.0), |(gain, loss), w| {
            let delta = w[1] - w[0];
            if !delta.is_finite() {
                (gain, loss)
            } else if delta > 0.0 {
                (gain + delta, loss)
            } else {
                (gain, loss - delta)
            }
        })
}

/// Analyze the elevation of `track`.
///
/// A track with fewer than two samples has zero gain/loss and no profile.
pub fn analyze_elevation(track: &Track) -> ElevationSummary {
    if track.len() < 2 {
        return ElevationSummary::default();
    }

    let altitudes: Vec<f64> = track.samples().iter().map(|s| s.altitude).collect();
    let (gain_meters, loss_meters) = gain_and_loss(&altitudes);

    let finite = || altitudes.iter().copied().filter(|a| a.is_finite());
    let min = finite().fold(f64::INFINITY, f64::min);
    let max = finite().fold(f64::NEG_INFINITY, f64::max);
    let has_altitude = min.is_finite();

    let profile = track
        .cumulative_distances()
        .iter()
        .zip(&altitudes)
        .map(|(&distance_meters, &altitude)| ElevationPoint {
            distance_meters,
            relative_altitude: if altitude.is_finite() { altitude - min } else { 0.0 },
        })
        .collect();

    ElevationSummary {
        gain_meters,
        loss_meters,
        min_altitude: has_altitude.then_some(min),
        max_altitude: has_altitude.then_some(max),
        profile,
    }
}
