//! Heart-rate zone distribution.
//!
//! Heart-rate samples carry a duration (`start_time..end_time`). Each sample's
//! duration is added to the first zone whose `[lower, upper)` range contains
//! its bpm. Five zones span 50-100% of max HR in 10% bands; the top zone's
//! upper bound is `max_hr + 1` so a sample at exactly max HR lands in Zone 5.
//!
//! ## Example
//! ```rust
//! use pacetrack::heart_rate::{analyze_heart_rate, HeartRateSample, HeartRateZoneConfig};
//!
//! let samples = vec![
//!     HeartRateSample::new(0.0, 60.0, 120.0),
//!     HeartRateSample::new(60.0, 120.0, 175.0),
//! ];
//! let analysis = analyze_heart_rate(&samples, &HeartRateZoneConfig::from_max_hr(190.0));
//! assert_eq!(analysis.zones[1].accumulated_duration_seconds, 60.0);
//! assert_eq!(analysis.zones[4].accumulated_duration_seconds, 60.0);
//! ```

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const ZONE_COUNT: usize = 5;

/// A heart-rate reading covering a time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct HeartRateSample {
    /// Seconds
    pub start_time: f64,
    /// Seconds
    pub end_time: f64,
    pub bpm: f64,
}

impl HeartRateSample {
    pub fn new(start_time: f64, end_time: f64, bpm: f64) -> Self {
        Self {
            start_time,
            end_time,
            bpm,
        }
    }

    /// Seconds covered by this sample (never negative).
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }

    /// Whether the reading is usable at all.
    pub fn is_valid(&self) -> bool {
        self.bpm.is_finite()
            && self.bpm > 0.0
            && self.start_time.is_finite()
            && self.end_time.is_finite()
    }
}

/// What to do with samples above the top zone's upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneOverflow {
    /// Count them in Zone 5
    #[default]
    ClampToTop,
    /// Leave them out of every zone
    Drop,
}

/// Configuration for heart rate zone calculation.
/// Zones are defined as percentages of max HR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZoneConfig {
    pub max_hr: f64,
    /// Lower bound of each zone as a fraction of max HR
    pub zone_floors: [f64; ZONE_COUNT],
    pub overflow: ZoneOverflow,
}

impl HeartRateZoneConfig {
    /// Standard 5-zone model: 50/60/70/80/90% of max HR.
    pub fn from_max_hr(max_hr: f64) -> Self {
        Self {
            max_hr,
            zone_floors: [0.50, 0.60, 0.70, 0.80, 0.90],
            overflow: ZoneOverflow::default(),
        }
    }

    pub fn with_overflow(mut self, overflow: ZoneOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// `[lower, upper)` bpm bounds of every zone.
    pub fn zone_bounds(&self) -> [(f64, f64); ZONE_COUNT] {
        let mut bounds = [(0.0, 0.0); ZONE_COUNT];
        for (i, bound) in bounds.iter_mut().enumerate() {
            let lower = self.max_hr * self.zone_floors[i];
            let upper = if i + 1 < ZONE_COUNT {
                self.max_hr * self.zone_floors[i + 1]
            } else {
                self.max_hr + 1.0
            };
            *bound = (lower, upper);
        }
        bounds
    }

    /// Index (0-4) of the zone containing `bpm`, if any.
    pub fn zone_index(&self, bpm: f64) -> Option<usize> {
        let bounds = self.zone_bounds();
        if let Some(index) = bounds
            .iter()
            .position(|&(lower, upper)| bpm >= lower && bpm < upper)
        {
            return Some(index);
        }

        let ceiling = bounds[ZONE_COUNT - 1].1;
        match self.overflow {
            ZoneOverflow::ClampToTop if bpm >= ceiling => Some(ZONE_COUNT - 1),
            _ => None,
        }
    }

    fn empty_zones(&self) -> Vec<HeartRateZone> {
        self.zone_bounds()
            .iter()
            .enumerate()
            .map(|(i, &(lower, upper))| HeartRateZone {
                name: format!("Zone {}", i + 1),
                lower_bound_bpm: lower,
                upper_bound_bpm: upper,
                accumulated_duration_seconds: 0.0,
            })
            .collect()
    }
}

impl Default for HeartRateZoneConfig {
    fn default() -> Self {
        Self::from_max_hr(185.0) // Reasonable default max HR
    }
}

/// A heart-rate zone with the time spent in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZone {
    pub name: String,
    pub lower_bound_bpm: f64,
    pub upper_bound_bpm: f64,
    pub accumulated_duration_seconds: f64,
}

/// Result of heart rate zone distribution calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateAnalysis {
    pub zones: Vec<HeartRateZone>,
    /// Samples analyzed (invalid readings excluded)
    pub sample_count: u32,
    pub average_bpm: f64,
    pub min_bpm: f64,
    pub max_bpm: f64,
}

impl HeartRateAnalysis {
    /// Seconds spent across all zones.
    pub fn time_in_zones(&self) -> f64 {
        self.zones.iter().map(|z| z.accumulated_duration_seconds).sum()
    }

    /// Share of in-zone time per zone, in percent.
    pub fn zone_percentages(&self) -> Vec<f64> {
        let total = self.time_in_zones();
        self.zones
            .iter()
            .map(|z| {
                if total > 0.0 {
                    z.accumulated_duration_seconds / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Time in a specific zone (1-5).
    pub fn get_zone_seconds(&self, zone: u8) -> f64 {
        if (1..=ZONE_COUNT as u8).contains(&zone) {
            self.zones[(zone - 1) as usize].accumulated_duration_seconds
        } else {
            0.0
        }
    }
}

/// Running totals of one pass over the samples.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    zone_seconds: [f64; ZONE_COUNT],
    count: u32,
    sum: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            zone_seconds: [0.0; ZONE_COUNT],
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(mut self, sample: &HeartRateSample, config: &HeartRateZoneConfig) -> Self {
        if !sample.is_valid() {
            return self;
        }
        if let Some(zone) = config.zone_index(sample.bpm) {
            self.zone_seconds[zone] += sample.duration();
        }
        self.count += 1;
        self.sum += sample.bpm;
        self.min = self.min.min(sample.bpm);
        self.max = self.max.max(sample.bpm);
        self
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        for i in 0..ZONE_COUNT {
            self.zone_seconds[i] += other.zone_seconds[i];
        }
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    fn finish(self, config: &HeartRateZoneConfig) -> HeartRateAnalysis {
        let mut zones = config.empty_zones();
        for (zone, seconds) in zones.iter_mut().zip(self.zone_seconds) {
            zone.accumulated_duration_seconds = seconds;
        }

        if self.count == 0 {
            return HeartRateAnalysis {
                zones,
                sample_count: 0,
                average_bpm: 0.0,
                min_bpm: 0.0,
                max_bpm: 0.0,
            };
        }

        HeartRateAnalysis {
            zones,
            sample_count: self.count,
            average_bpm: self.sum / self.count as f64,
            min_bpm: self.min,
            max_bpm: self.max,
        }
    }
}

/// Bucket heart-rate samples into zones and compute average/min/max bpm.
///
/// Empty input yields all-zero zones and 0/0/0 stats.
pub fn analyze_heart_rate(
    samples: &[HeartRateSample],
    config: &HeartRateZoneConfig,
) -> HeartRateAnalysis {
    samples
        .iter()
        .fold(Accumulator::new(), |acc, sample| acc.add(sample, config))
        .finish(config)
}

/// Heart-rate analysis using parallel processing.
/// More efficient for large datasets (> 10,000 samples).
#[cfg(feature = "parallel")]
pub fn analyze_heart_rate_parallel(
    samples: &[HeartRateSample],
    config: &HeartRateZoneConfig,
) -> HeartRateAnalysis {
    if samples.len() < 10_000 {
        // Fall back to sequential for small datasets
        return analyze_heart_rate(samples, config);
    }

    samples
        .par_iter()
        .fold(Accumulator::new, |acc, sample| acc.add(sample, config))
        .reduce(Accumulator::new, Accumulator::merge)
        .finish(config)
}
