//! Training load: Banister TRIMP and a 1-5 Training Effect score.
//!
//! ```text
//! ΔHR  = (avgHR - restHR) / (maxHR - restHR)
//! TRIMP = minutes · ΔHR · e^(b·ΔHR)          (0 when ΔHR ≤ 0)
//! TE    = clamp(1 + 4 · min(TRIMP / TRIMP_max, 1), 1, 5), one decimal
//! ```
//!
//! A run without load (no heart rate, no elapsed time, or an average at or
//! below resting HR) scores 0.0 rather than the 1.0 floor of the scale.

use serde::{Deserialize, Serialize};

use crate::config::TrainingLoadConfig;
use crate::heart_rate::HeartRateZoneConfig;

/// Sex-specific TRIMP weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// The exponent `b` of the TRIMP weighting.
    pub fn trimp_exponent(self) -> f64 {
        match self {
            Sex::Male => 1.92,
            Sex::Female => 1.67,
        }
    }
}

/// Physiological parameters of the runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct PhysiologicalParams {
    pub resting_hr: f64,
    pub max_hr: f64,
    pub trimp_exponent: f64,
}

impl PhysiologicalParams {
    pub fn new(resting_hr: f64, max_hr: f64, sex: Sex) -> Self {
        Self {
            resting_hr,
            max_hr,
            trimp_exponent: sex.trimp_exponent(),
        }
    }

    /// Estimate max HR as `220 - age`.
    pub fn from_age(age: u32, resting_hr: f64, sex: Sex) -> Self {
        Self::new(resting_hr, max_hr_from_age(age), sex)
    }

    /// Zone configuration derived from this runner's max HR.
    pub fn zone_config(&self) -> HeartRateZoneConfig {
        HeartRateZoneConfig::from_max_hr(self.max_hr)
    }
}

impl Default for PhysiologicalParams {
    fn default() -> Self {
        Self::new(60.0, 190.0, Sex::Male)
    }
}

/// Age-predicted maximum heart rate.
pub fn max_hr_from_age(age: u32) -> f64 {
    (220.0 - age as f64).max(0.0)
}

/// Banister TRIMP for a session at `average_hr` lasting `duration_seconds`.
pub fn trimp(average_hr: f64, duration_seconds: f64, params: &PhysiologicalParams) -> f64 {
    let reserve = params.max_hr - params.resting_hr;
    if !(reserve > 0.0) || !(duration_seconds > 0.0) {
        return 0.0;
    }

    let delta = (average_hr - params.resting_hr) / reserve;
    if !(delta > 0.0) {
        return 0.0;
    }

    let minutes = duration_seconds / 60.0;
    minutes * delta * (params.trimp_exponent * delta).exp()
}

/// Training load of one session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingEffect {
    pub trimp: f64,
    /// 0.0 for no load, otherwise 1.0-5.0 in steps of 0.1
    pub score: f64,
    pub average_hr: f64,
    pub duration_seconds: f64,
}

/// Compute TRIMP and the Training Effect score.
pub fn training_effect(
    average_hr: f64,
    elapsed_seconds: f64,
    params: &PhysiologicalParams,
    config: &TrainingLoadConfig,
) -> TrainingEffect {
    let mut effect = TrainingEffect {
        average_hr,
        duration_seconds: elapsed_seconds,
        ..TrainingEffect::default()
    };
    if !(average_hr > 0.0) || !(elapsed_seconds > 0.0) {
        return effect;
    }

    effect.trimp = trimp(average_hr, elapsed_seconds, params);
    if effect.trimp <= 0.0 {
        return effect;
    }

    let ratio = if config.trimp_max > 0.0 {
        (effect.trimp / config.trimp_max).min(1.0)
    } else {
        1.0
    };
    let score = (1.0 + 4.0 * ratio).clamp(1.0, 5.0);
    effect.score = (score * 10.0).round() / 10.0;
    effect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PhysiologicalParams {
        PhysiologicalParams::new(60.0, 190.0, Sex::Male)
    }

    #[test]
    fn test_sex_exponents() {
        assert_eq!(Sex::Male.trimp_exponent(), 1.92);
        assert_eq!(Sex::Female.trimp_exponent(), 1.67);
    }

    #[test]
    fn test_max_hr_from_age() {
        assert_eq!(max_hr_from_age(30), 190.0);
        assert_eq!(PhysiologicalParams::from_age(40, 55.0, Sex::Female).max_hr, 180.0);
    }

    #[test]
    fn test_trimp_formula() {
        // ΔHR = (125 - 60) / 130 = 0.5
        let value = trimp(125.0, 1800.0, &params());
        let expected = 30.0 * 0.5 * (1.92f64 * 0.5).exp();
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_trimp_no_load() {
        assert_eq!(trimp(60.0, 1800.0, &params()), 0.0);
        assert_eq!(trimp(50.0, 1800.0, &params()), 0.0);
        assert_eq!(trimp(150.0, 0.0, &params()), 0.0);

        let broken = PhysiologicalParams::new(190.0, 190.0, Sex::Male);
        assert_eq!(trimp(150.0, 1800.0, &broken), 0.0);
    }

    #[test]
    fn test_training_effect_at_or_below_rest_is_zero() {
        let config = TrainingLoadConfig::default();
        for hr in [60.0, 59.0, 1.0] {
            let effect = training_effect(hr, 3600.0, &params(), &config);
            assert_eq!(effect.trimp, 0.0);
            assert_eq!(effect.score, 0.0);
            assert!(!effect.score.is_nan());
        }
    }

    #[test]
    fn test_training_effect_skipped() {
        let config = TrainingLoadConfig::default();
        assert_eq!(training_effect(0.0, 3600.0, &params(), &config).score, 0.0);
        assert_eq!(training_effect(150.0, 0.0, &params(), &config).score, 0.0);
        assert_eq!(training_effect(f64::NAN, 3600.0, &params(), &config).score, 0.0);
    }

    #[test]
    fn test_training_effect_scaling() {
        let config = TrainingLoadConfig::default();

        // 30 min at half the reserve: TRIMP = 30 · 0.5 · e^0.96 ≈ 39.2, TE 2.57
        let moderate = training_effect(125.0, 1800.0, &params(), &config);
        assert!((moderate.trimp - 39.18).abs() < 0.01);
        assert_eq!(moderate.score, 2.6);

        // 90 min at the same effort is past the ceiling
        let long = training_effect(125.0, 5400.0, &params(), &config);
        assert!((long.trimp - 117.53).abs() < 0.01);
        assert_eq!(long.score, 5.0);

        // Very long hard effort saturates at 5.0
        let hard = training_effect(180.0, 7200.0, &params(), &config);
        assert!(hard.trimp > 100.0);
        assert_eq!(hard.score, 5.0);

        // Barely above rest rounds to the bottom of the scale
        let easy = training_effect(61.0, 60.0, &params(), &config);
        assert!(easy.trimp > 0.0);
        assert_eq!(easy.score, 1.0);
    }
}
