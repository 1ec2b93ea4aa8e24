//! Pace analysis.
//!
//! Three levels of output per segment:
//! - **instantaneous** pace: `duration / (distance / 1000)`, undefined for
//!   zero-distance segments, which fall back to the run's average pace
//! - **smoothed** pace: unweighted mean of the instantaneous paces at
//!   `i-1, i, i+1`, clamped at the ends (first/last average two values)
//! - **classification fraction** in `[0, 1]`: 0 at or below
//!   `average - band_delta`, 1 at or above `average + band_delta`, linear in
//!   between. Consumers map it onto a gradient; it carries no colour itself.
//!
//! ## Example
//! ```rust
//! use pacetrack::pace::format_pace;
//!
//! assert_eq!(format_pace(330.0), "5:30/km");
//! assert_eq!(format_pace(f64::INFINITY), "--:--/km");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::PaceConfig;
use crate::track::Track;

/// Fraction reported when a run has no defined average pace.
const NEUTRAL_FRACTION: f64 = 0.5;

/// Pace details for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPace {
    pub index: usize,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Seconds per km, `None` for a zero-distance segment
    pub instantaneous: Option<f64>,
    /// 3-wide moving average (seconds per km)
    pub smoothed: f64,
    /// Position in the good..bad band, always within `[0, 1]`
    pub fraction: f64,
}

/// Result of pace analysis over a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceAnalysis {
    /// Seconds per km over the whole run, `None` when no distance was covered
    pub average_pace: Option<f64>,
    pub good_threshold: Option<f64>,
    pub bad_threshold: Option<f64>,
    pub segments: Vec<SegmentPace>,
}

impl PaceAnalysis {
    /// Classification fractions in segment order.
    pub fn fractions(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.fraction).collect()
    }
}

/// Average pace in seconds per km, `None` when no distance or time elapsed.
pub fn average_pace(distance_meters: f64, elapsed_seconds: f64) -> Option<f64> {
    if distance_meters > 0.0 && elapsed_seconds > 0.0 {
        Some(elapsed_seconds / (distance_meters / 1000.0))
    } else {
        None
    }
}

/// 3-wide moving average, clamped at the ends.
pub fn smooth_paces(paces: &[f64]) -> Vec<f64> {
    (0..paces.len())
        .map(|i| {
            let start = i.saturating_sub(1);
            let end = (i + 2).min(paces.len());
            let window = &paces[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Map a pace onto the `[0, 1]` performance band around `average`.
pub fn classify_pace(pace: f64, average: f64, band_delta_seconds: f64) -> f64 {
    if pace.is_nan() || average.is_nan() {
        return NEUTRAL_FRACTION;
    }
    if band_delta_seconds <= 0.0 {
        return if pace <= average { 0.0 } else { 1.0 };
    }

    let good = average - band_delta_seconds;
    let bad = average + band_delta_seconds;
    ((pace - good) / (bad - good)).clamp(0.0, 1.0)
}

/// Analyze the pace of every segment of `track`.
///
/// A track with fewer than two samples yields no segments.
pub fn analyze_pace(track: &Track, config: &PaceConfig) -> PaceAnalysis {
    let segments = track.segments();
    let average = average_pace(track.total_distance(), track.total_elapsed());

    let Some(average) = average else {
        // Nothing covered: no segment has a defined pace to classify
        return PaceAnalysis {
            average_pace: None,
            good_threshold: None,
            bad_threshold: None,
            segments: segments
                .iter()
                .enumerate()
                .map(|(index, s)| SegmentPace {
                    index,
                    distance_meters: s.distance_meters,
                    duration_seconds: s.duration_seconds,
                    instantaneous: None,
                    smoothed: 0.0,
                    fraction: NEUTRAL_FRACTION,
                })
                .collect(),
        };
    };

    let resolved: Vec<f64> = segments
        .iter()
        .map(|s| s.pace_sec_per_km.unwrap_or(average))
        .collect();
    let smoothed = smooth_paces(&resolved);

    let segments = segments
        .iter()
        .zip(smoothed)
        .enumerate()
        .map(|(index, (s, smoothed))| SegmentPace {
            index,
            distance_meters: s.distance_meters,
            duration_seconds: s.duration_seconds,
            instantaneous: s.pace_sec_per_km,
            smoothed,
            fraction: classify_pace(smoothed, average, config.band_delta_seconds),
        })
        .collect();

    PaceAnalysis {
        average_pace: Some(average),
        good_threshold: Some(average - config.band_delta_seconds),
        bad_threshold: Some(average + config.band_delta_seconds),
        segments,
    }
}

/// Render a pace in seconds per km as `M:SS/km`.
pub fn format_pace(sec_per_km: f64) -> String {
    if !sec_per_km.is_finite() || sec_per_km <= 0.0 {
        return "--:--/km".to_string();
    }
    let total = sec_per_km.round() as u64;
    format!("{}:{:02}/km", total / 60, total % 60)
}

/// Live pace string from distance covered and elapsed time.
pub fn live_pace_string(distance_meters: f64, elapsed_seconds: f64) -> String {
    match average_pace(distance_meters, elapsed_seconds) {
        Some(pace) => format_pace(pace),
        None => format_pace(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoSample, GpsPoint};

    // One sample every `dt` seconds, `step` degrees of longitude apart at the equator
    fn track_with(steps: &[(f64, f64)]) -> Track {
        let mut track = Track::new();
        let mut lng = 0.0;
        let mut t = 0.0;
        track.append(GeoSample::new(GpsPoint::new(0.0, lng), t, 0.0));
        for &(step, dt) in steps {
            lng += step;
            t += dt;
            track.append(GeoSample::new(GpsPoint::new(0.0, lng), t, 0.0));
        }
        track
    }

    #[test]
    fn test_smoothing_boundaries_use_two_values() {
        let smoothed = smooth_paces(&[300.0, 330.0, 360.0, 390.0]);
        assert_eq!(smoothed[0], 315.0);
        assert_eq!(smoothed[1], 330.0);
        assert_eq!(smoothed[2], 360.0);
        assert_eq!(smoothed[3], 375.0);
    }

    #[test]
    fn test_smoothing_single_value() {
        assert_eq!(smooth_paces(&[300.0]), vec![300.0]);
        assert!(smooth_paces(&[]).is_empty());
    }

    #[test]
    fn test_classify_band() {
        assert_eq!(classify_pace(290.0, 300.0, 10.0), 0.0);
        assert_eq!(classify_pace(280.0, 300.0, 10.0), 0.0);
        assert_eq!(classify_pace(300.0, 300.0, 10.0), 0.5);
        assert_eq!(classify_pace(310.0, 300.0, 10.0), 1.0);
        assert_eq!(classify_pace(305.0, 300.0, 10.0), 0.75);
    }

    #[test]
    fn test_classify_extremes_stay_in_bounds() {
        for pace in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1e12, -1e12, 0.0] {
            let f = classify_pace(pace, 300.0, 10.0);
            assert!((0.0..=1.0).contains(&f), "pace {} -> {}", pace, f);
        }
        assert_eq!(classify_pace(299.0, 300.0, 0.0), 0.0);
        assert_eq!(classify_pace(301.0, 300.0, 0.0), 1.0);
    }

    #[test]
    fn test_analyze_degenerate_tracks() {
        let config = PaceConfig::default();
        let empty = analyze_pace(&Track::new(), &config);
        assert!(empty.segments.is_empty());
        assert_eq!(empty.average_pace, None);

        let single = analyze_pace(&track_with(&[]), &config);
        assert!(single.segments.is_empty());
    }

    #[test]
    fn test_zero_distance_segment_falls_back_to_average() {
        let track = track_with(&[(0.01, 300.0), (0.0, 30.0), (0.01, 300.0)]);
        let analysis = analyze_pace(&track, &PaceConfig::default());
        let average = analysis.average_pace.unwrap();

        assert_eq!(analysis.segments.len(), 3);
        assert_eq!(analysis.segments[1].instantaneous, None);
        let first = analysis.segments[0].instantaneous.unwrap();
        let expected_middle = (first + average + first) / 3.0;
        assert!((analysis.segments[1].smoothed - expected_middle).abs() < 1e-9);
    }

    #[test]
    fn test_even_pace_is_mid_band() {
        let track = track_with(&[(0.01, 300.0), (0.01, 300.0), (0.01, 300.0)]);
        let analysis = analyze_pace(&track, &PaceConfig::default());
        for segment in &analysis.segments {
            assert!((segment.fraction - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fast_and_slow_segments() {
        // Two fast kilometres then two slow ones
        let track = track_with(&[(0.01, 200.0), (0.01, 200.0), (0.01, 400.0), (0.01, 400.0)]);
        let analysis = analyze_pace(&track, &PaceConfig::default());
        let fractions = analysis.fractions();
        assert_eq!(fractions, vec![0.0, 0.0, 1.0, 1.0]);

        // The second segment's smoothed pace blends in the first slow segment
        let s = &analysis.segments;
        let expected = (s[0].instantaneous.unwrap() * 2.0 + s[2].instantaneous.unwrap()) / 3.0;
        assert!((s[1].smoothed - expected).abs() < 1e-9);
    }

    #[test]
    fn test_stationary_track_is_neutral() {
        let track = track_with(&[(0.0, 10.0), (0.0, 10.0)]);
        let analysis = analyze_pace(&track, &PaceConfig::default());
        assert_eq!(analysis.average_pace, None);
        assert_eq!(analysis.fractions(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(330.0), "5:30/km");
        assert_eq!(format_pace(359.6), "6:00/km");
        assert_eq!(format_pace(65.0), "1:05/km");
        assert_eq!(format_pace(0.0), "--:--/km");
        assert_eq!(live_pace_string(0.0, 10.0), "--:--/km");
        assert_eq!(live_pace_string(1000.0, 300.0), "5:00/km");
    }
}
