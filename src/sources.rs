//! Injected health data.
//!
//! The session never reaches for a global health store. Callers hand it a
//! [`HealthDataSource`] when summarizing a finished run; tests hand it a
//! [`StaticHealthSource`] or the seeded source in `synthetic`.

use crate::error::{Result, TelemetryError};
use crate::heart_rate::HeartRateSample;
use crate::training_load::PhysiologicalParams;

/// Provider of heart-rate readings and the runner's physiology.
pub trait HealthDataSource: Send + Sync {
    /// Heart-rate samples overlapping `start..end` (seconds, same clock as the
    /// track's timestamps).
    fn fetch_heart_rate_samples(&self, start: f64, end: f64) -> Result<Vec<HeartRateSample>>;

    fn fetch_user_physiological_params(&self) -> Result<PhysiologicalParams>;
}

/// A fixed, in-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticHealthSource {
    samples: Vec<HeartRateSample>,
    params: Option<PhysiologicalParams>,
}

impl StaticHealthSource {
    pub fn new(samples: Vec<HeartRateSample>, params: PhysiologicalParams) -> Self {
        Self {
            samples,
            params: Some(params),
        }
    }

    /// A source with readings but no known physiology.
    pub fn without_params(samples: Vec<HeartRateSample>) -> Self {
        Self {
            samples,
            params: None,
        }
    }
}

impl HealthDataSource for StaticHealthSource {
    fn fetch_heart_rate_samples(&self, start: f64, end: f64) -> Result<Vec<HeartRateSample>> {
        if end < start {
            return Err(TelemetryError::data_source(format!(
                "window end {:.3} precedes start {:.3}",
                end, start
            )));
        }
        Ok(self
            .samples
            .iter()
            .filter(|s| s.end_time > start && s.start_time < end)
            .copied()
            .collect())
    }

    fn fetch_user_physiological_params(&self) -> Result<PhysiologicalParams> {
        self.params
            .ok_or_else(|| TelemetryError::data_source("no physiological parameters available"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_load::Sex;

    #[test]
    fn test_window_filtering() {
        let source = StaticHealthSource::new(
            vec![
                HeartRateSample::new(0.0, 5.0, 100.0),
                HeartRateSample::new(5.0, 10.0, 110.0),
                HeartRateSample::new(10.0, 15.0, 120.0),
            ],
            PhysiologicalParams::new(60.0, 190.0, Sex::Male),
        );

        let window = source.fetch_heart_rate_samples(5.0, 10.0).unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].bpm, 110.0);

        assert_eq!(source.fetch_heart_rate_samples(0.0, 100.0).unwrap().len(), 3);
        assert!(source.fetch_heart_rate_samples(10.0, 5.0).is_err());
    }

    #[test]
    fn test_missing_params() {
        let source = StaticHealthSource::without_params(Vec::new());
        assert!(matches!(
            source.fetch_user_physiological_params(),
            Err(TelemetryError::DataSource { .. })
        ));
    }
}
