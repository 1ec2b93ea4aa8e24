//! Synthetic run generator for tests and benchmarking.
//!
//! Produces deterministic runs (GPS fixes with altitude and heart rate) from a
//! seed, and a [`SyntheticHealthSource`] that fabricates heart-rate readings
//! for any time window.
//!
//! Feature-gated behind `synthetic`.
//!
//! # Example
//!
//! ```rust
//! use pacetrack::synthetic::RunScenario;
//!
//! let scenario = RunScenario {
//!     duration_seconds: 600.0,
//!     seed: 7,
//!     ..RunScenario::default()
//! };
//! let run = scenario.generate("easy-10");
//! assert_eq!(run.samples.len(), 601);
//! ```

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::documents::StoredRun;
use crate::error::{Result, TelemetryError};
use crate::geo_utils::{offset_east, offset_north};
use crate::heart_rate::HeartRateSample;
use crate::sources::HealthDataSource;
use crate::track::ReferenceTrack;
use crate::training_load::PhysiologicalParams;
use crate::{GeoSample, GpsPoint};

/// Spacing of generated heart-rate readings.
const HEART_RATE_INTERVAL_SECONDS: f64 = 5.0;

/// Seconds for heart rate to settle after the start.
const HEART_RATE_RISE_SECONDS: f64 = 120.0;

/// Parameters of a generated run.
#[derive(Debug, Clone)]
pub struct RunScenario {
    pub origin: GpsPoint,
    pub duration_seconds: f64,
    pub sample_interval_seconds: f64,
    /// Mean pace in seconds per km
    pub base_pace_sec_per_km: f64,
    /// Relative pace swing over the run, e.g. 0.1 for ±10%
    pub pace_variation: f64,
    pub gps_noise_sigma_meters: f64,
    pub base_altitude_meters: f64,
    pub hill_amplitude_meters: f64,
    pub params: PhysiologicalParams,
    /// Fraction of heart-rate reserve held once settled
    pub intensity: f64,
    /// RNG seed for deterministic reproduction
    pub seed: u64,
}

impl Default for RunScenario {
    fn default() -> Self {
        Self {
            origin: GpsPoint::new(47.37, 8.55),
            duration_seconds: 1800.0,
            sample_interval_seconds: 1.0,
            base_pace_sec_per_km: 330.0,
            pace_variation: 0.08,
            gps_noise_sigma_meters: 0.0,
            base_altitude_meters: 400.0,
            hill_amplitude_meters: 15.0,
            params: PhysiologicalParams::default(),
            intensity: 0.7,
            seed: 42,
        }
    }
}

/// A generated run.
#[derive(Debug, Clone)]
pub struct SyntheticRun {
    pub id: String,
    pub samples: Vec<GeoSample>,
    pub heart_rate: Vec<HeartRateSample>,
    /// Distance actually travelled before noise, in meters
    pub true_distance_meters: f64,
}

impl SyntheticRun {
    pub fn to_stored_run(&self) -> StoredRun {
        StoredRun {
            id: self.id.clone(),
            name: None,
            samples: self.samples.clone(),
            heart_rate: self.heart_rate.clone(),
        }
    }

    pub fn reference_track(&self) -> ReferenceTrack {
        ReferenceTrack::from_stored_run(&self.to_stored_run())
    }
}

/// Gaussian noise via the Box-Muller transform.
fn gaussian(rng: &mut StdRng, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    let u1: f64 = rng.gen_range(0.0001..1.0);
    let u2: f64 = rng.gen();
    sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Heart rate at `t` seconds into a run, rising from rest to the target.
fn heart_rate_at(t: f64, params: &PhysiologicalParams, intensity: f64) -> f64 {
    let target = params.resting_hr + intensity * (params.max_hr - params.resting_hr);
    target - (target - params.resting_hr) * (-t / HEART_RATE_RISE_SECONDS).exp()
}

fn move_by(point: &GpsPoint, north_meters: f64, east_meters: f64) -> GpsPoint {
    offset_east(&offset_north(point, north_meters), east_meters)
}

impl RunScenario {
    /// Generate the run. Same seed, same run.
    pub fn generate(&self, id: impl Into<String>) -> SyntheticRun {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let steps = (self.duration_seconds / self.sample_interval_seconds).floor() as usize;

        let mut samples = Vec::with_capacity(steps + 1);
        let mut position = self.origin;
        let mut heading: f64 = rng.gen_range(0.0..2.0 * PI);
        let mut distance = 0.0;

        for i in 0..=steps {
            let t = i as f64 * self.sample_interval_seconds;
            if i > 0 {
                let swing = (2.0 * PI * t / self.duration_seconds.max(1.0)).sin();
                let pace = self.base_pace_sec_per_km * (1.0 + self.pace_variation * swing);
                let step = self.sample_interval_seconds * 1000.0 / pace;

                heading += rng.gen_range(-0.05..0.05);
                position = move_by(&position, step * heading.sin(), step * heading.cos());
                distance += step;
            }

            let noisy = move_by(
                &position,
                gaussian(&mut rng, self.gps_noise_sigma_meters),
                gaussian(&mut rng, self.gps_noise_sigma_meters),
            );
            let altitude =
                self.base_altitude_meters + self.hill_amplitude_meters * (distance / 800.0).sin();

            let mut sample = GeoSample::new(noisy, t, altitude);
            if self.gps_noise_sigma_meters > 0.0 {
                sample = sample.with_accuracy(self.gps_noise_sigma_meters * 2.0);
            }
            samples.push(sample);
        }

        let heart_rate = generate_heart_rate(
            &mut rng,
            0.0,
            steps as f64 * self.sample_interval_seconds,
            &self.params,
            self.intensity,
        );

        SyntheticRun {
            id: id.into(),
            samples,
            heart_rate,
            true_distance_meters: distance,
        }
    }
}

fn generate_heart_rate(
    rng: &mut StdRng,
    start: f64,
    end: f64,
    params: &PhysiologicalParams,
    intensity: f64,
) -> Vec<HeartRateSample> {
    let mut samples = Vec::new();
    let mut t = start;
    while t < end {
        let bpm = heart_rate_at(t, params, intensity) + gaussian(rng, 2.0);
        let window_end = (t + HEART_RATE_INTERVAL_SECONDS).min(end);
        samples.push(HeartRateSample::new(t, window_end, bpm.max(1.0).round()));
        t += HEART_RATE_INTERVAL_SECONDS;
    }
    samples
}

/// Fabricates heart-rate readings for whatever window is requested.
#[derive(Debug, Clone)]
pub struct SyntheticHealthSource {
    params: PhysiologicalParams,
    intensity: f64,
    seed: u64,
}

impl SyntheticHealthSource {
    pub fn new(params: PhysiologicalParams, intensity: f64, seed: u64) -> Self {
        Self {
            params,
            intensity,
            seed,
        }
    }
}

impl HealthDataSource for SyntheticHealthSource {
    fn fetch_heart_rate_samples(&self, start: f64, end: f64) -> Result<Vec<HeartRateSample>> {
        if !(end >= start) {
            return Err(TelemetryError::data_source(format!(
                "window end {:.3} precedes start {:.3}",
                end, start
            )));
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok(generate_heart_rate(
            &mut rng,
            start,
            end,
            &self.params,
            self.intensity,
        ))
    }

    fn fetch_user_physiological_params(&self) -> Result<PhysiologicalParams> {
        Ok(self.params)
    }
}
