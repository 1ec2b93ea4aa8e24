//! Run session state machine.
//!
//! ```text
//! Idle ──start──▶ Running ──pause──▶ Paused
//!                  ▲   │               │
//!                  │   └────stop───┐   │
//!                  └───resume──────┼───┘
//!                                  ▼
//!       Idle ◀──reset── Stopped ◀──stop (from Paused)
//! ```
//!
//! The session owns the live [`Track`], the active ghosts and the elapsed
//! clock. It does no scheduling of its own: whoever drives it calls
//! [`RunSession::tick`] once per tick interval and feeds samples in between,
//! one call at a time (see `runtime` for the tokio driver). Invalid
//! transitions are no-ops returning `false`.

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::elevation::{analyze_elevation, ElevationSummary};
use crate::error::{Result, TelemetryError};
use crate::filter::SampleFilter;
use crate::ghost::{GhostComparison, GhostCoordinator, GhostRunner};
use crate::heart_rate::{analyze_heart_rate, HeartRateAnalysis, HeartRateSample, HeartRateZoneConfig};
use crate::pace::{analyze_pace, live_pace_string, PaceAnalysis};
use crate::sources::HealthDataSource;
use crate::splits::{compute_splits, Split};
use crate::track::Track;
use crate::training_load::{training_effect, PhysiologicalParams, TrainingEffect};
use crate::GeoSample;

/// Lifecycle state of a run session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Read-only view of a live session, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMetrics {
    pub state: SessionState,
    pub elapsed_seconds: f64,
    pub distance_meters: f64,
    pub pace: String,
    pub sample_count: u32,
    pub current_heart_rate: Option<f64>,
    /// Pace classification of every segment, in `[0, 1]`
    pub segment_fractions: Vec<f64>,
    pub ghosts: Vec<GhostComparison>,
}

/// Everything the persistence layer stores for a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub distance_meters: f64,
    pub elapsed_seconds: f64,
    pub sample_count: u32,
    pub average_pace: Option<f64>,
    pub pace_string: String,
    pub pace: PaceAnalysis,
    pub splits: Vec<Split>,
    pub elevation: ElevationSummary,
    pub heart_rate: HeartRateAnalysis,
    /// `None` when the runner's physiology is unknown
    pub training_effect: Option<TrainingEffect>,
}

/// Hooks for anything that follows a session (UI, logging, tests).
///
/// Called synchronously from the mutating call, after the mutation.
pub trait SessionObserver: Send + Sync {
    fn on_tick(&self, _metrics: &LiveMetrics) {}

    fn on_append(&self, _sample: &GeoSample, _distance_meters: f64) {}

    fn on_state_change(&self, _from: SessionState, _to: SessionState) {}
}

/// A single run: live track, ghosts and elapsed clock.
pub struct RunSession {
    config: SessionConfig,
    filter: SampleFilter,
    state: SessionState,
    track: Track,
    elapsed_seconds: f64,
    pace: String,
    heart_rate: Vec<HeartRateSample>,
    ghosts: GhostCoordinator,
    observers: Vec<Arc<dyn SessionObserver>>,
    /// Pace fractions of the track, rebuilt only after it changes
    segment_fractions: Vec<f64>,
    fractions_stale: bool,
}

impl fmt::Debug for RunSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSession")
            .field("state", &self.state)
            .field("elapsed_seconds", &self.elapsed_seconds)
            .field("samples", &self.track.len())
            .field("distance_meters", &self.track.total_distance())
            .field("ghosts", &self.ghosts.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for RunSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl RunSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            filter: SampleFilter::new(config.filter.clone()),
            ghosts: GhostCoordinator::new(config.ghosts.clone()),
            config,
            state: SessionState::Idle,
            track: Track::new(),
            elapsed_seconds: 0.0,
            pace: live_pace_string(0.0, 0.0),
            heart_rate: Vec::new(),
            observers: Vec::new(),
            segment_fractions: Vec::new(),
            fractions_stale: false,
        }
    }

    /// Create a session after validating `config`.
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn subscribe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Idle → Running. Clears the track, clock and heart rate and rewinds
    /// every ghost.
    pub fn start(&mut self) -> bool {
        if !self.transition(&[SessionState::Idle], SessionState::Running) {
            return false;
        }
        self.clear_run();
        info!(
            "[Session] Started with {} ghost(s)",
            self.ghosts.len()
        );
        true
    }

    /// Running → Paused. Ticks and samples are ignored until resumed.
    pub fn pause(&mut self) -> bool {
        self.transition(&[SessionState::Running], SessionState::Paused)
    }

    /// Paused → Running, keeping all accumulated state.
    pub fn resume(&mut self) -> bool {
        self.transition(&[SessionState::Paused], SessionState::Running)
    }

    /// Running/Paused → Stopped. The track is frozen.
    pub fn stop(&mut self) -> bool {
        if !self.transition(
            &[SessionState::Running, SessionState::Paused],
            SessionState::Stopped,
        ) {
            return false;
        }
        self.track.finalize();
        info!(
            "[Session] Stopped after {:.0}s, {:.0}m, {} samples",
            self.elapsed_seconds,
            self.track.total_distance(),
            self.track.len()
        );
        true
    }

    /// Stopped → Idle with a fresh track. Ghost selections are kept.
    pub fn reset(&mut self) -> bool {
        if !self.transition(&[SessionState::Stopped], SessionState::Idle) {
            return false;
        }
        self.clear_run();
        true
    }

    fn transition(&mut self, from: &[SessionState], to: SessionState) -> bool {
        let current = self.state;
        if !from.contains(&current) {
            debug!("[Session] Ignoring transition {:?} -> {:?}", current, to);
            return false;
        }
        self.state = to;
        for observer in &self.observers {
            observer.on_state_change(current, to);
        }
        true
    }

    fn clear_run(&mut self) {
        self.track = Track::new();
        self.elapsed_seconds = 0.0;
        self.pace = live_pace_string(0.0, 0.0);
        self.heart_rate.clear();
        self.ghosts.reset_all();
        self.segment_fractions.clear();
        self.fractions_stale = false;
    }

    // ========================================================================
    // Intake
    // ========================================================================

    /// Offer a location fix. Returns whether it was appended to the track.
    ///
    /// Only accepted while Running, and only if it passes the filter.
    pub fn ingest_location(&mut self, sample: GeoSample) -> bool {
        if self.state != SessionState::Running {
            debug!("[Session] Ignoring location while {:?}", self.state);
            return false;
        }
        if !self.filter.accept(&sample, self.track.last()) {
            return false;
        }
        if !self.track.append(sample) {
            return false;
        }
        self.fractions_stale = true;

        let distance = self.track.total_distance();
        for observer in &self.observers {
            observer.on_append(&sample, distance);
        }
        true
    }

    /// Record a heart-rate reading. Only accepted while Running.
    pub fn ingest_heart_rate(&mut self, sample: HeartRateSample) -> bool {
        if self.state != SessionState::Running || !sample.is_valid() {
            return false;
        }
        self.heart_rate.push(sample);
        true
    }

    /// Advance the clock by one tick interval.
    ///
    /// In order: elapsed time, live pace, ghosts, then observers. Does
    /// nothing unless Running.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }

        self.elapsed_seconds += self.config.tick_interval_seconds;
        self.pace = live_pace_string(self.track.total_distance(), self.elapsed_seconds);
        self.ghosts.advance_all(self.elapsed_seconds);

        if !self.observers.is_empty() {
            self.refresh_fractions();
            let metrics = self.live_metrics();
            for observer in &self.observers {
                observer.on_tick(&metrics);
            }
        }
        true
    }

    // ========================================================================
    // Ghosts
    // ========================================================================

    /// Select a ghost. No-op returning `false` at the active limit or for a
    /// duplicate id. A ghost added mid-run jumps to the current elapsed time.
    pub fn add_ghost(&mut self, mut ghost: GhostRunner) -> bool {
        if matches!(self.state, SessionState::Running | SessionState::Paused) {
            ghost.advance(self.elapsed_seconds);
        }
        self.ghosts.add(ghost)
    }

    pub fn remove_ghost(&mut self, id: &str) -> bool {
        self.ghosts.remove(id)
    }

    pub fn ghosts(&self) -> &GhostCoordinator {
        &self.ghosts
    }

    pub fn ghost_comparisons(&self) -> Vec<GhostComparison> {
        self.ghosts.compare(self.track.total_distance())
    }

    // ========================================================================
    // Live accessors
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn distance_meters(&self) -> f64 {
        self.track.total_distance()
    }

    pub fn pace_string(&self) -> &str {
        &self.pace
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// A copy of the track as it stands, for analysis off the session.
    pub fn track_snapshot(&self) -> Track {
        self.track.prefix(self.track.len())
    }

    pub fn heart_rate_samples(&self) -> &[HeartRateSample] {
        &self.heart_rate
    }

    pub fn live_metrics(&self) -> LiveMetrics {
        LiveMetrics {
            state: self.state,
            elapsed_seconds: self.elapsed_seconds,
            distance_meters: self.track.total_distance(),
            pace: self.pace.clone(),
            sample_count: self.track.len() as u32,
            current_heart_rate: self.heart_rate.last().map(|s| s.bpm),
            segment_fractions: if self.fractions_stale {
                self.compute_fractions()
            } else {
                self.segment_fractions.clone()
            },
            ghosts: self.ghost_comparisons(),
        }
    }

    fn compute_fractions(&self) -> Vec<f64> {
        analyze_pace(&self.track, &self.config.pace).fractions()
    }

    fn refresh_fractions(&mut self) {
        if self.fractions_stale {
            self.segment_fractions = self.compute_fractions();
            self.fractions_stale = false;
        }
    }

    // ========================================================================
    // Finalized accessors
    // ========================================================================

    /// The frozen track. Fails unless the session is Stopped.
    pub fn finalized_track(&self) -> Result<&Track> {
        if self.state != SessionState::Stopped {
            return Err(TelemetryError::SessionNotFinalized { state: self.state });
        }
        Ok(&self.track)
    }

    /// Summarize the finished run using the heart rate ingested during it.
    ///
    /// Without `params`, zones use the default max HR and no Training Effect
    /// is computed.
    pub fn summary(&self, params: Option<&PhysiologicalParams>) -> Result<RunSummary> {
        let track = self.finalized_track()?;
        Ok(self.build_summary(track, &self.heart_rate, params))
    }

    /// Summarize the finished run with heart rate and physiology pulled from
    /// `source` over the track's time window.
    pub fn summarize_with_source(&self, source: &dyn HealthDataSource) -> Result<RunSummary> {
        let track = self.finalized_track()?;
        let samples = match (track.first(), track.last()) {
            (Some(first), Some(last)) => {
                source.fetch_heart_rate_samples(first.timestamp, last.timestamp)?
            }
            _ => Vec::new(),
        };
        let params = source.fetch_user_physiological_params()?;
        Ok(self.build_summary(track, &samples, Some(&params)))
    }

    fn build_summary(
        &self,
        track: &Track,
        heart_rate: &[HeartRateSample],
        params: Option<&PhysiologicalParams>,
    ) -> RunSummary {
        let zone_config = params
            .map(PhysiologicalParams::zone_config)
            .unwrap_or_else(HeartRateZoneConfig::default);
        let heart_rate = analyze_heart_rate(heart_rate, &zone_config);

        let training_effect = params.map(|p| {
            training_effect(
                heart_rate.average_bpm,
                self.elapsed_seconds,
                p,
                &self.config.training_load,
            )
        });

        let pace = analyze_pace(track, &self.config.pace);
        RunSummary {
            distance_meters: track.total_distance(),
            elapsed_seconds: self.elapsed_seconds,
            sample_count: track.len() as u32,
            average_pace: pace.average_pace,
            pace_string: self.pace.clone(),
            splits: compute_splits(track, &self.config.splits),
            elevation: analyze_elevation(track),
            heart_rate,
            training_effect,
            pace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_utils::offset_east;
    use crate::sources::StaticHealthSource;
    use crate::track::ReferenceTrack;
    use crate::training_load::Sex;
    use crate::GpsPoint;
    use std::sync::Mutex;

    fn at(meters: f64, t: f64) -> GeoSample {
        GeoSample::new(offset_east(&GpsPoint::new(0.0, 0.0), meters), t, 10.0)
    }

    fn reference(seconds: f64, meters: f64) -> ReferenceTrack {
        ReferenceTrack::from_track(Track::from_samples(
            (0..=10).map(|i| at(meters * i as f64 / 10.0, seconds * i as f64 / 10.0)),
        ))
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl SessionObserver for Recorder {
        fn on_tick(&self, metrics: &LiveMetrics) {
            self.events
                .lock()
                .unwrap()
                .push(format!("tick {}", metrics.elapsed_seconds));
        }

        fn on_append(&self, _sample: &GeoSample, distance_meters: f64) {
            self.events
                .lock()
                .unwrap()
                .push(format!("append {:.0}", distance_meters));
        }

        fn on_state_change(&self, from: SessionState, to: SessionState) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{:?}->{:?}", from, to));
        }
    }

    #[test]
    fn test_transitions() {
        let mut session = RunSession::default();
        assert_eq!(session.state(), SessionState::Idle);

        assert!(!session.pause());
        assert!(!session.resume());
        assert!(!session.stop());
        assert!(!session.reset());

        assert!(session.start());
        assert!(!session.start());
        assert!(!session.resume());

        assert!(session.pause());
        assert!(!session.pause());
        assert!(session.resume());

        assert!(session.stop());
        assert!(!session.stop());
        assert!(!session.start());
        assert_eq!(session.state(), SessionState::Stopped);

        assert!(session.reset());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.start());
    }

    #[test]
    fn test_stop_from_paused() {
        let mut session = RunSession::default();
        session.start();
        session.pause();
        assert!(session.stop());
    }

    #[test]
    fn test_ticks_only_while_running() {
        let mut session = RunSession::default();
        assert!(!session.tick());

        session.start();
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2.0);

        session.pause();
        assert!(!session.tick());
        assert_eq!(session.elapsed_seconds(), 2.0);

        session.resume();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 3.0);

        session.stop();
        assert!(!session.tick());
        assert_eq!(session.elapsed_seconds(), 3.0);
    }

    #[test]
    fn test_intake_only_while_running() {
        let mut session = RunSession::default();
        assert!(!session.ingest_location(at(0.0, 0.0)));

        session.start();
        assert!(session.ingest_location(at(0.0, 0.0)));
        assert!(session.ingest_location(at(10.0, 3.0)));
        assert!(session.ingest_heart_rate(HeartRateSample::new(0.0, 3.0, 140.0)));

        session.pause();
        assert!(!session.ingest_location(at(20.0, 6.0)));
        assert!(!session.ingest_heart_rate(HeartRateSample::new(3.0, 6.0, 141.0)));

        session.resume();
        assert!(session.ingest_location(at(20.0, 9.0)));

        session.stop();
        assert!(!session.ingest_location(at(30.0, 12.0)));
        assert_eq!(session.track().len(), 3);
        assert_eq!(session.heart_rate_samples().len(), 1);
    }

    #[test]
    fn test_filter_applies_to_intake() {
        let mut session = RunSession::default();
        session.start();
        assert!(session.ingest_location(at(0.0, 0.0)));
        // too soon
        assert!(!session.ingest_location(at(10.0, 0.2)));
        // no movement
        assert!(!session.ingest_location(at(0.5, 5.0)));
        // poor accuracy
        assert!(!session.ingest_location(at(10.0, 5.0).with_accuracy(80.0)));
        assert_eq!(session.track().len(), 1);
    }

    #[test]
    fn test_live_pace_string() {
        let mut session = RunSession::default();
        session.start();
        assert_eq!(session.pace_string(), "--:--/km");

        session.ingest_location(at(0.0, 0.0));
        session.ingest_location(at(1000.0, 300.0));
        for _ in 0..300 {
            session.tick();
        }
        assert_eq!(session.pace_string(), "5:00/km");
    }

    #[test]
    fn test_start_resets_run_state() {
        let mut session = RunSession::default();
        session.add_ghost(GhostRunner::new("g", reference(100.0, 500.0)));
        session.start();
        session.ingest_location(at(0.0, 0.0));
        session.ingest_location(at(100.0, 30.0));
        for _ in 0..200 {
            session.tick();
        }
        assert!(session.ghosts().all_finished());
        session.stop();

        session.reset();
        assert!(session.track().is_empty());
        assert_eq!(session.elapsed_seconds(), 0.0);
        assert_eq!(session.ghosts().len(), 1);
        assert!(!session.ghosts().all_finished());
        assert_eq!(session.ghosts().ghosts()[0].current_sample_index(), 0);
    }

    #[test]
    fn test_ghosts_follow_clock() {
        let mut session = RunSession::default();
        session.add_ghost(GhostRunner::new("g", reference(100.0, 1000.0)));
        session.start();
        for _ in 0..50 {
            session.tick();
        }
        let ghost = &session.ghosts().ghosts()[0];
        assert_eq!(ghost.current_sample_index(), 5);

        let comparison = &session.ghost_comparisons()[0];
        assert!((comparison.ghost_distance_meters - 500.0).abs() < 1e-6);
        assert_eq!(comparison.position, crate::ghost::RelativePosition::Behind);
    }

    #[test]
    fn test_ghost_added_mid_run_catches_up() {
        let mut session = RunSession::default();
        session.start();
        for _ in 0..30 {
            session.tick();
        }
        assert!(session.add_ghost(GhostRunner::new("late", reference(100.0, 1000.0))));
        assert_eq!(session.ghosts().ghosts()[0].current_sample_index(), 3);
    }

    #[test]
    fn test_observers() {
        let recorder = Arc::new(Recorder::default());
        let mut session = RunSession::default();
        session.subscribe(recorder.clone());

        session.start();
        session.ingest_location(at(0.0, 0.0));
        session.ingest_location(at(10.0, 3.0));
        session.tick();
        session.stop();

        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "Idle->Running",
                "append 0",
                "append 10",
                "tick 1",
                "Running->Stopped",
            ]
        );
    }

    #[derive(Default)]
    struct FractionRecorder {
        ticks: Mutex<Vec<Vec<f64>>>,
    }

    impl SessionObserver for FractionRecorder {
        fn on_tick(&self, metrics: &LiveMetrics) {
            self.ticks
                .lock()
                .unwrap()
                .push(metrics.segment_fractions.clone());
        }
    }

    #[test]
    fn test_segment_fractions_follow_the_track() {
        let recorder = Arc::new(FractionRecorder::default());
        let mut session = RunSession::default();
        session.subscribe(recorder.clone());
        let fractions = |session: &RunSession| {
            analyze_pace(session.track(), &session.config().pace).fractions()
        };

        session.start();
        session.ingest_location(at(0.0, 0.0));
        session.ingest_location(at(10.0, 3.0));
        let two_samples = fractions(&session);
        assert_eq!(two_samples.len(), 1);
        assert_eq!(session.live_metrics().segment_fractions, two_samples);

        session.tick();
        session.tick();

        session.ingest_location(at(30.0, 6.0));
        let three_samples = fractions(&session);
        assert_eq!(three_samples.len(), 2);
        assert_eq!(session.live_metrics().segment_fractions, three_samples);
        session.tick();

        let ticks = recorder.ticks.lock().unwrap().clone();
        assert_eq!(ticks, vec![two_samples.clone(), two_samples, three_samples]);

        session.stop();
        session.reset();
        assert!(session.live_metrics().segment_fractions.is_empty());
    }

    #[test]
    fn test_non_finite_altitude_is_not_recorded() {
        let mut session = RunSession::default();
        session.start();
        assert!(session.ingest_location(at(0.0, 0.0)));
        let mut bad = at(10.0, 3.0);
        bad.altitude = f64::NAN;
        assert!(!session.ingest_location(bad));
        assert!(session.ingest_location(at(20.0, 6.0)));
        session.stop();

        let summary = session.summary(None).unwrap();
        assert_eq!(summary.elevation.gain_meters, 0.0);
        assert_eq!(summary.elevation.loss_meters, 0.0);
    }

    #[test]
    fn test_finalized_access_requires_stop() {
        let mut session = RunSession::default();
        assert!(matches!(
            session.finalized_track(),
            Err(TelemetryError::SessionNotFinalized {
                state: SessionState::Idle
            })
        ));

        session.start();
        assert!(session.summary(None).is_err());

        session.stop();
        let track = session.finalized_track().unwrap();
        assert!(track.is_finalized());
    }

    #[test]
    fn test_summary() {
        let mut session = RunSession::default();
        session.start();
        for i in 0..=24 {
            session.ingest_location(at(i as f64 * 100.0, i as f64 * 30.0));
            session.ingest_heart_rate(HeartRateSample::new(
                i as f64 * 30.0,
                (i + 1) as f64 * 30.0,
                150.0,
            ));
        }
        for _ in 0..720 {
            session.tick();
        }
        session.stop();

        let params = PhysiologicalParams::new(60.0, 190.0, Sex::Male);
        let summary = session.summary(Some(&params)).unwrap();
        assert!((summary.distance_meters - 2400.0).abs() < 1e-3);
        assert_eq!(summary.elapsed_seconds, 720.0);
        assert_eq!(summary.splits.len(), 3);
        assert_eq!(summary.sample_count, 25);
        assert_eq!(summary.heart_rate.average_bpm, 150.0);
        assert_eq!(summary.pace_string, "5:00/km");

        let effect = summary.training_effect.unwrap();
        assert!(effect.trimp > 0.0);
        assert!((1.0..=5.0).contains(&effect.score));

        assert!(session.summary(None).unwrap().training_effect.is_none());
    }

    #[test]
    fn test_summarize_with_source() {
        let mut session = RunSession::default();
        session.start();
        session.ingest_location(at(0.0, 100.0));
        session.ingest_location(at(1000.0, 400.0));
        for _ in 0..300 {
            session.tick();
        }
        session.stop();

        let source = StaticHealthSource::new(
            vec![
                HeartRateSample::new(0.0, 50.0, 90.0),
                HeartRateSample::new(100.0, 250.0, 160.0),
                HeartRateSample::new(250.0, 400.0, 170.0),
            ],
            PhysiologicalParams::new(55.0, 185.0, Sex::Female),
        );
        let summary = session.summarize_with_source(&source).unwrap();
        assert_eq!(summary.heart_rate.sample_count, 2);
        assert_eq!(summary.heart_rate.average_bpm, 165.0);
        assert!(summary.training_effect.unwrap().score >= 1.0);
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = SessionConfig::default();
        config.tick_interval_seconds = 0.0;
        assert!(RunSession::with_config(config).is_err());
        assert!(RunSession::with_config(SessionConfig::default()).is_ok());
    }
}
