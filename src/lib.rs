//! # Pacetrack
//!
//! Run telemetry analytics and ghost replay for GPS running sessions.
//!
//! This library provides:
//! - Filtering of raw, irregularly-sampled GPS fixes
//! - Track accumulation with cumulative haversine distance
//! - Pace analysis (instantaneous, smoothed, relative performance banding)
//! - Kilometre splits with boundary interpolation
//! - Elevation gain/loss and a chartable profile
//! - Heart-rate zones, TRIMP and a Training Effect score
//! - A run session state machine that replays reference runs ("ghosts")
//!   against the live clock
//!
//! ## Features
//!
//! - **`runtime`** - Drive a live session with a tokio 1 Hz ticker (default)
//! - **`synthetic`** - Seeded synthetic run generation (default)
//! - **`parallel`** - Enable parallel processing with rayon
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use pacetrack::{GeoSample, GpsPoint, Track, compute_splits, SplitConfig};
//!
//! let mut track = Track::new();
//! track.append(GeoSample::new(GpsPoint::new(0.0, 0.0), 0.0, 50.0));
//! track.append(GeoSample::new(GpsPoint::new(0.0, 0.01), 60.0, 55.0));
//! track.append(GeoSample::new(GpsPoint::new(0.0, 0.02), 120.0, 53.0));
//!
//! let splits = compute_splits(&track, &SplitConfig::default());
//! assert_eq!(splits.len(), 3);
//! println!("{:.0} m in {} splits", track.total_distance(), splits.len());
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{OptionExt, Result, TelemetryError};

// Configuration for every analyzer and the session
pub mod config;
pub use config::{FilterConfig, GhostConfig, PaceConfig, SessionConfig, SplitConfig, TrainingLoadConfig};

// Geographic utilities (haversine distance, polyline length, offsets)
pub mod geo_utils;

// Sample validation and deduplication
pub mod filter;
pub use filter::{filter_samples, SampleFilter};

// Canonical track with cumulative distance
pub mod track;
pub use track::{ReferenceTrack, Segment, Track};

// Pace analysis
pub mod pace;
pub use pace::{analyze_pace, format_pace, PaceAnalysis, SegmentPace};

// Kilometre splits
pub mod splits;
pub use splits::{compute_splits, Split};

// Elevation gain/loss and profile
pub mod elevation;
pub use elevation::{analyze_elevation, ElevationPoint, ElevationSummary};

// Heart-rate zone distribution
pub mod heart_rate;
pub use heart_rate::{
    analyze_heart_rate, HeartRateAnalysis, HeartRateSample, HeartRateZone, HeartRateZoneConfig,
    ZoneOverflow,
};
#[cfg(feature = "parallel")]
pub use heart_rate::analyze_heart_rate_parallel;

// TRIMP and Training Effect
pub mod training_load;
pub use training_load::{training_effect, trimp, PhysiologicalParams, Sex, TrainingEffect};

// Ghost replay
pub mod ghost;
pub use ghost::{GhostComparison, GhostCoordinator, GhostRunner, RelativePosition};
#[cfg(feature = "parallel")]
pub use ghost::prepare_ghosts_parallel;

// Run session state machine
pub mod session;
pub use session::{LiveMetrics, RunSession, RunSummary, SessionObserver, SessionState};

// Injected data sources
pub mod sources;
pub use sources::{HealthDataSource, StaticHealthSource};

// Typed decoding of stored run documents
pub mod documents;
pub use documents::{decode_run, StoredRun};

// Live session driver on tokio
#[cfg(feature = "runtime")]
pub mod runtime;
#[cfg(feature = "runtime")]
pub use runtime::{spawn_session, SessionHandle};

// Synthetic runs for tests and benchmarks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("PacetrackRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude.
///
/// # Example
/// ```
/// use pacetrack::GpsPoint;
/// let point = GpsPoint::new(51.5074, -0.1278); // London
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// A single recorded location fix.
///
/// Timestamps are seconds (fractional) on a monotonic or epoch clock; only
/// differences between samples of the same track are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GeoSample {
    pub point: GpsPoint,
    /// Seconds
    pub timestamp: f64,
    /// Meters above sea level
    pub altitude: f64,
    /// Horizontal error radius in meters reported by the location provider.
    /// Negative values mean the fix is invalid.
    pub horizontal_accuracy: Option<f64>,
}

impl GeoSample {
    /// Create a sample without accuracy metadata.
    pub fn new(point: GpsPoint, timestamp: f64, altitude: f64) -> Self {
        Self {
            point,
            timestamp,
            altitude,
            horizontal_accuracy: None,
        }
    }

    /// Attach a horizontal accuracy (meters).
    pub fn with_accuracy(mut self, horizontal_accuracy: f64) -> Self {
        self.horizontal_accuracy = Some(horizontal_accuracy);
        self
    }
}
