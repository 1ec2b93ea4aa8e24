//! Fixed-distance split segmentation.
//!
//! Walks the cumulative distance sequence. Each time it crosses a multiple of
//! the split distance inside a segment, the crossing time is interpolated
//! linearly within that segment. A single long segment (e.g. a GPS jump) may
//! cross several boundaries, so crossings are consumed in a loop. Distance
//! left over after the last full split becomes one final partial split.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SplitConfig;
use crate::track::Track;

/// Leftover distance below this is floating-point noise, not a partial split.
const PARTIAL_SPLIT_EPSILON_METERS: f64 = 1e-6;

/// One split of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// 1-based
    pub split_number: u32,
    pub distance_meters: f64,
    pub split_time_seconds: f64,
    pub pace_sec_per_km: f64,
}

impl Split {
    fn new(split_number: u32, distance_meters: f64, split_time_seconds: f64) -> Self {
        Self {
            split_number,
            distance_meters,
            split_time_seconds,
            pace_sec_per_km: split_time_seconds / (distance_meters / 1000.0),
        }
    }

    /// Whether this split is shorter than a full split.
    pub fn is_partial(&self, config: &SplitConfig) -> bool {
        self.distance_meters < config.split_distance_meters - PARTIAL_SPLIT_EPSILON_METERS
    }
}

/// Partition `track` into splits of `config.split_distance_meters`.
///
/// Tracks with fewer than two samples yield no splits.
pub fn compute_splits(track: &Track, config: &SplitConfig) -> Vec<Split> {
    let split_distance = config.split_distance_meters;
    if track.len() < 2 || !(split_distance > 0.0) {
        return Vec::new();
    }

    let samples = track.samples();
    let cumulative = track.cumulative_distances();

    let mut splits = Vec::new();
    let mut next_boundary = split_distance;
    let mut last_boundary_time = samples[0].timestamp;

    for i in 1..samples.len() {
        let distance_before = cumulative[i - 1];
        let distance_after = cumulative[i];
        let segment_distance = distance_after - distance_before;
        if segment_distance <= 0.0 {
            continue;
        }

        let t0 = samples[i - 1].timestamp;
        let t1 = samples[i].timestamp;

        while next_boundary <= distance_after {
            let fraction = (next_boundary - distance_before) / segment_distance;
            let boundary_time = t0 + fraction * (t1 - t0);

            splits.push(Split::new(
                splits.len() as u32 + 1,
                split_distance,
                boundary_time - last_boundary_time,
            ));

            last_boundary_time = boundary_time;
            next_boundary += split_distance;
        }
    }

    let covered = next_boundary - split_distance;
    let remaining = track.total_distance() - covered;
    if remaining > PARTIAL_SPLIT_EPSILON_METERS {
        let end_time = samples[samples.len() - 1].timestamp;
        splits.push(Split::new(
            splits.len() as u32 + 1,
            remaining,
            end_time - last_boundary_time,
        ));
    }

    debug!(
        "[Splits] {} splits over {:.0}m",
        splits.len(),
        track.total_distance()
    );
    splits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_utils::offset_east;
    use crate::{GeoSample, GpsPoint};

    // Samples along the equator at (meters from origin, seconds)
    fn track_from(points: &[(f64, f64)]) -> Track {
        let origin = GpsPoint::new(0.0, 0.0);
        Track::from_samples(
            points
                .iter()
                .map(|&(m, t)| GeoSample::new(offset_east(&origin, m), t, 0.0)),
        )
    }

    #[test]
    fn test_degenerate_tracks() {
        let config = SplitConfig::default();
        assert!(compute_splits(&Track::new(), &config).is_empty());
        assert!(compute_splits(&track_from(&[(0.0, 0.0)]), &config).is_empty());
    }

    #[test]
    fn test_single_segment_crosses_two_boundaries() {
        let track = track_from(&[(0.0, 0.0), (2400.0, 240.0)]);
        let splits = compute_splits(&track, &SplitConfig::default());

        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].split_number, 1);
        assert_eq!(splits[1].split_number, 2);
        assert_eq!(splits[2].split_number, 3);

        assert_eq!(splits[0].distance_meters, 1000.0);
        assert_eq!(splits[1].distance_meters, 1000.0);
        assert!((splits[2].distance_meters - 400.0).abs() < 1e-6);

        // Cumulative boundary times 100s, 200s, 240s
        assert!((splits[0].split_time_seconds - 100.0).abs() < 1e-6);
        assert!((splits[1].split_time_seconds - 100.0).abs() < 1e-6);
        assert!((splits[2].split_time_seconds - 40.0).abs() < 1e-6);
        assert!(splits[2].is_partial(&SplitConfig::default()));
    }

    #[test]
    fn test_exact_boundary_has_no_partial() {
        let track = track_from(&[(0.0, 0.0), (500.0, 150.0), (1000.0, 300.0)]);
        let splits = compute_splits(&track, &SplitConfig::default());
        // Floating point may leave the boundary a hair beyond the last sample
        let full: Vec<_> = splits.iter().filter(|s| s.distance_meters > 1.0).collect();
        assert_eq!(full.len(), 1);
        assert!((full[0].split_time_seconds - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_distance_is_conserved() {
        let track = track_from(&[
            (0.0, 0.0),
            (730.0, 200.0),
            (1650.0, 470.0),
            (1700.0, 490.0),
            (3100.0, 900.0),
            (3321.5, 960.0),
        ]);
        let splits = compute_splits(&track, &SplitConfig::default());
        let total: f64 = splits.iter().map(|s| s.distance_meters).sum();
        assert!((total - track.total_distance()).abs() / track.total_distance() < 1e-3);

        let time: f64 = splits.iter().map(|s| s.split_time_seconds).sum();
        assert!((time - track.total_elapsed()).abs() < 1e-6);

        let numbers: Vec<u32> = splits.iter().map(|s| s.split_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_custom_split_distance() {
        let track = track_from(&[(0.0, 0.0), (3218.68, 900.0)]);
        let config = SplitConfig {
            split_distance_meters: 1609.34,
        };
        let splits = compute_splits(&track, &config);
        assert_eq!(splits.len(), 2);
        assert!((splits[0].split_time_seconds - 450.0).abs() < 1e-3);
    }

    #[test]
    fn test_split_pace() {
        let track = track_from(&[(0.0, 0.0), (2000.0, 600.0)]);
        let splits = compute_splits(&track, &SplitConfig::default());
        assert!((splits[0].pace_sec_per_km - 300.0).abs() < 1e-6);
    }
}
