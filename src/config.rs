//! Configuration for the analyzers and the run session.
//!
//! All values are supplied by the caller; the defaults are the documented
//! behaviour of a standard running session.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};

/// GPS sample filter thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Samples whose horizontal error radius is at or above this are dropped
    pub max_horizontal_accuracy_meters: f64,
    /// Minimum time between accepted samples
    pub min_interval_seconds: f64,
    /// Minimum great-circle movement between accepted samples
    pub min_movement_meters: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_horizontal_accuracy_meters: 50.0,
            min_interval_seconds: 0.5,
            min_movement_meters: 1.0,
        }
    }
}

/// Pace banding configuration. The smoothing window is fixed at 3 segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceConfig {
    /// Seconds per km either side of the run average that map to the
    /// fully-good (0.0) and fully-bad (1.0) ends of the band
    pub band_delta_seconds: f64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            band_delta_seconds: 10.0,
        }
    }
}

/// Split segmentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub split_distance_meters: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split_distance_meters: 1000.0,
        }
    }
}

/// Training Effect configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingLoadConfig {
    /// TRIMP mapped to a Training Effect of 5.0
    pub trimp_max: f64,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self { trimp_max: 100.0 }
    }
}

/// Ghost replay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Maximum number of concurrently active ghosts
    pub max_active: usize,
    /// Distance delta within which the runner is "on pace" with a ghost
    pub on_pace_tolerance_meters: f64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            max_active: 3,
            on_pace_tolerance_meters: 100.0,
        }
    }
}

/// Complete configuration for a run session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub filter: FilterConfig,
    pub pace: PaceConfig,
    pub splits: SplitConfig,
    pub training_load: TrainingLoadConfig,
    pub ghosts: GhostConfig,
    pub tick_interval_seconds: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            pace: PaceConfig::default(),
            splits: SplitConfig::default(),
            training_load: TrainingLoadConfig::default(),
            ghosts: GhostConfig::default(),
            tick_interval_seconds: 1.0,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("filter.max_horizontal_accuracy_meters", self.filter.max_horizontal_accuracy_meters),
            ("filter.min_interval_seconds", self.filter.min_interval_seconds),
            ("filter.min_movement_meters", self.filter.min_movement_meters),
            ("pace.band_delta_seconds", self.pace.band_delta_seconds),
            ("ghosts.on_pace_tolerance_meters", self.ghosts.on_pace_tolerance_meters),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TelemetryError::config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("splits.split_distance_meters", self.splits.split_distance_meters),
            ("training_load.trimp_max", self.training_load.trimp_max),
            ("tick_interval_seconds", self.tick_interval_seconds),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TelemetryError::config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.ghosts.max_active == 0 {
            return Err(TelemetryError::config("ghosts.max_active must be at least 1"));
        }

        Ok(())
    }
}
