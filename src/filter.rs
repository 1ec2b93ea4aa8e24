//! GPS sample filtering.
//!
//! Consumer GPS jitters at rest and over short intervals. Without filtering,
//! that jitter accumulates into spurious distance. A sample is rejected when:
//! - its coordinates are out of range or not finite
//! - its horizontal error radius is invalid or at/above the threshold
//! - it arrives less than `min_interval_seconds` after the previous sample
//!   (this also rejects out-of-order and duplicate timestamps)
//! - it lies less than `min_movement_meters` from the previous sample
//!
//! The filter only decides; the caller owns insertion into the track.

use log::debug;

use crate::config::FilterConfig;
use crate::geo_utils::haversine_distance;
use crate::GeoSample;

/// Why a sample was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidCoordinates,
    PoorAccuracy,
    TooSoon,
    TooClose,
}

/// Stateless sample filter.
#[derive(Debug, Clone, Default)]
pub struct SampleFilter {
    config: FilterConfig,
}

impl SampleFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Decide whether `sample` should be appended after `previous`.
    pub fn accept(&self, sample: &GeoSample, previous: Option<&GeoSample>) -> bool {
        match self.check(sample, previous) {
            Ok(()) => true,
            Err(reason) => {
                debug!(
                    "[Filter] Rejected sample at t={:.1}s: {:?}",
                    sample.timestamp, reason
                );
                false
            }
        }
    }

    /// Like [`accept`](Self::accept) but reports the rejection reason.
    pub fn check(
        &self,
        sample: &GeoSample,
        previous: Option<&GeoSample>,
    ) -> Result<(), Rejection> {
        if !sample.point.is_valid()
            || !sample.timestamp.is_finite()
            || !sample.altitude.is_finite()
        {
            return Err(Rejection::InvalidCoordinates);
        }

        if let Some(accuracy) = sample.horizontal_accuracy {
            if accuracy < 0.0 || accuracy >= self.config.max_horizontal_accuracy_meters {
                return Err(Rejection::PoorAccuracy);
            }
        }

        if let Some(prev) = previous {
            // Written as a negated >= so NaN deltas are rejected too
            if !(sample.timestamp - prev.timestamp >= self.config.min_interval_seconds) {
                return Err(Rejection::TooSoon);
            }
            if haversine_distance(&prev.point, &sample.point) < self.config.min_movement_meters {
                return Err(Rejection::TooClose);
            }
        }

        Ok(())
    }
}

/// Filter a recorded stream, comparing each sample with the last accepted one.
pub fn filter_samples(samples: &[GeoSample], config: &FilterConfig) -> Vec<GeoSample> {
    let filter = SampleFilter::new(config.clone());
    let mut accepted: Vec<GeoSample> = Vec::with_capacity(samples.len());

    for sample in samples {
        if filter.accept(sample, accepted.last()) {
            accepted.push(*sample);
        }
    }

    if accepted.len() < samples.len() {
        debug!(
            "[Filter] Kept {} of {} samples",
            accepted.len(),
            samples.len()
        );
    }
    accepted
}
