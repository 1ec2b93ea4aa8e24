//! Track accumulation.
//!
//! A [`Track`] is the canonical, append-only record of a run: the accepted
//! samples plus the cumulative haversine distance at each index. Once
//! finalized it is read-only, and may be shared as a [`ReferenceTrack`] for
//! ghost replay.

use std::ops::Deref;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::documents::StoredRun;
use crate::geo_utils::haversine_distance;
use crate::{GeoSample, GpsPoint};

/// The interval between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Seconds per kilometre; `None` when the segment covers no distance
    pub pace_sec_per_km: Option<f64>,
}

impl Segment {
    fn between(a: &GeoSample, b: &GeoSample, distance_meters: f64) -> Self {
        let duration_seconds = b.timestamp - a.timestamp;
        let pace_sec_per_km = if distance_meters > 0.0 {
            Some(duration_seconds / (distance_meters / 1000.0))
        } else {
            None
        };
        Self {
            distance_meters,
            duration_seconds,
            pace_sec_per_km,
        }
    }
}

/// Ordered samples with cumulative distance per index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    samples: Vec<GeoSample>,
    cumulative_distance: Vec<f64>,
    finalized: bool,
}

impl Track {
    /// Create an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finalized track from already-validated samples.
    ///
    /// Samples that do not strictly increase in time are skipped.
    pub fn from_samples(samples: impl IntoIterator<Item = GeoSample>) -> Self {
        let mut track = Self::new();
        for sample in samples {
            track.append(sample);
        }
        track.finalize();
        track
    }

    /// Append a sample that has already passed the filter.
    ///
    /// Returns `false` (and leaves the track untouched) when the track is
    /// finalized or the timestamp does not strictly increase.
    pub fn append(&mut self, sample: GeoSample) -> bool {
        if self.finalized {
            debug!("[Track] Ignoring append to finalized track");
            return false;
        }

        let cumulative = match self.samples.last() {
            None => 0.0,
            Some(prev) => {
                if !(sample.timestamp > prev.timestamp) {
                    debug!(
                        "[Track] Ignoring non-increasing timestamp {:.3} after {:.3}",
                        sample.timestamp, prev.timestamp
                    );
                    return false;
                }
                self.total_distance() + haversine_distance(&prev.point, &sample.point)
            }
        };

        self.samples.push(sample);
        self.cumulative_distance.push(cumulative);
        true
    }

    /// Freeze the track. Further appends are ignored.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn samples(&self) -> &[GeoSample] {
        &self.samples
    }

    pub fn cumulative_distances(&self) -> &[f64] {
        &self.cumulative_distance
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&GeoSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&GeoSample> {
        self.samples.last()
    }

    /// Point of the sample at `index`.
    pub fn point_at(&self, index: usize) -> Option<GpsPoint> {
        self.samples.get(index).map(|s| s.point)
    }

    /// Total distance in meters (0 for fewer than two samples).
    pub fn total_distance(&self) -> f64 {
        self.cumulative_distance.last().copied().unwrap_or(0.0)
    }

    /// Seconds between the first and last sample (0 for fewer than two).
    pub fn total_elapsed(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp - first.timestamp,
            _ => 0.0,
        }
    }

    /// All segments between consecutive samples.
    pub fn segments(&self) -> Vec<Segment> {
        self.samples
            .windows(2)
            .zip(self.cumulative_distance.windows(2))
            .map(|(s, d)| Segment::between(&s[0], &s[1], d[1] - d[0]))
            .collect()
    }

    /// A copy of the first `len` samples, for readers that need a stable
    /// snapshot while the live track keeps growing.
    pub fn prefix(&self, len: usize) -> Track {
        let len = len.min(self.samples.len());
        Track {
            samples: self.samples[..len].to_vec(),
            cumulative_distance: self.cumulative_distance[..len].to_vec(),
            finalized: self.finalized,
        }
    }
}

/// An immutable, shareable finalized track used as a ghost's reference run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTrack(Arc<Track>);

impl ReferenceTrack {
    /// Wrap a track, finalizing it.
    pub fn from_track(mut track: Track) -> Self {
        track.finalize();
        Self(Arc::new(track))
    }

    /// Build a reference track from a decoded stored run.
    pub fn from_stored_run(run: &StoredRun) -> Self {
        Self::from_track(Track::from_samples(run.samples.iter().copied()))
    }

    /// Number of samples.
    pub fn point_count(&self) -> usize {
        self.0.len()
    }
}

impl Deref for ReferenceTrack {
    type Target = Track;

    fn deref(&self) -> &Track {
        &self.0
    }
}
