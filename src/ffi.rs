//! FFI bindings for mobile platforms (iOS/Android).
//!
//! Exposes one global run session to Kotlin and Swift. The host app owns the
//! 1 Hz timer and location/heart-rate callbacks and forwards them here; every
//! call locks the session, so ticks and samples are serialized. Complex
//! results cross the boundary as JSON strings.

use std::sync::Mutex;

use log::{info, warn};
use once_cell::sync::Lazy;

use crate::config::{SessionConfig, TrainingLoadConfig};
use crate::documents::decode_run;
use crate::ghost::GhostRunner;
use crate::heart_rate::{analyze_heart_rate_parallel, HeartRateSample, HeartRateZoneConfig};
use crate::session::{RunSession, SessionState};
use crate::track::ReferenceTrack;
use crate::training_load::{training_effect, PhysiologicalParams};
use crate::{format_pace, init_logging, GeoSample};

/// The live session shared with the host app.
static SESSION: Lazy<Mutex<RunSession>> = Lazy::new(|| Mutex::new(RunSession::default()));

/// Run `f` with the global session locked.
fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&mut RunSession) -> R,
{
    // Recover from a poisoned lock
    let mut session = SESSION.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut session)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

// ============================================================================
// Session lifecycle
// ============================================================================

/// Replace the global session with a fresh one.
///
/// `config_json` may be empty for the defaults. Returns `false` (keeping the
/// current session) when the configuration is invalid.
#[uniffi::export]
pub fn session_init(config_json: String) -> bool {
    init_logging();
    let config = if config_json.trim().is_empty() {
        Ok(SessionConfig::default())
    } else {
        SessionConfig::from_json(&config_json)
    };

    match config {
        Ok(config) => {
            with_session(|s| *s = RunSession::new(config));
            info!("[PacetrackRust] Session initialized");
            true
        }
        Err(e) => {
            warn!("[PacetrackRust] Rejected session config: {}", e);
            false
        }
    }
}

#[uniffi::export]
pub fn session_start() -> bool {
    with_session(|s| s.start())
}

#[uniffi::export]
pub fn session_pause() -> bool {
    with_session(|s| s.pause())
}

#[uniffi::export]
pub fn session_resume() -> bool {
    with_session(|s| s.resume())
}

#[uniffi::export]
pub fn session_stop() -> bool {
    with_session(|s| s.stop())
}

#[uniffi::export]
pub fn session_reset() -> bool {
    with_session(|s| s.reset())
}

#[uniffi::export]
pub fn session_state() -> SessionState {
    with_session(|s| s.state())
}

// ============================================================================
// Live intake
// ============================================================================

/// Called by the host's tick timer.
#[uniffi::export]
pub fn session_tick() -> bool {
    with_session(|s| s.tick())
}

#[uniffi::export]
pub fn session_ingest_location(sample: GeoSample) -> bool {
    with_session(|s| s.ingest_location(sample))
}

#[uniffi::export]
pub fn session_ingest_heart_rate(sample: HeartRateSample) -> bool {
    with_session(|s| s.ingest_heart_rate(sample))
}

/// Live metrics as JSON.
#[uniffi::export]
pub fn session_live_metrics() -> String {
    to_json(&with_session(|s| s.live_metrics()))
}

// ============================================================================
// Ghosts
// ============================================================================

/// Add a ghost from a stored run document. Returns `false` if the document
/// does not decode or the ghost is not accepted.
#[uniffi::export]
pub fn session_add_ghost(run_json: String) -> bool {
    init_logging();
    let run = match decode_run(&run_json) {
        Ok(run) => run,
        Err(e) => {
            warn!("[PacetrackRust] Ghost not added: {}", e);
            return false;
        }
    };

    info!(
        "[PacetrackRust] Adding ghost {} ({} samples)",
        run.id,
        run.samples.len()
    );
    let ghost = GhostRunner::new(run.id.clone(), ReferenceTrack::from_stored_run(&run));
    with_session(|s| s.add_ghost(ghost))
}

#[uniffi::export]
pub fn session_remove_ghost(ghost_id: String) -> bool {
    with_session(|s| s.remove_ghost(&ghost_id))
}

// ============================================================================
// Finalized run
// ============================================================================

/// Summary of the stopped run as JSON, or `{}` if the session is not stopped.
#[uniffi::export]
pub fn session_summary(params: Option<PhysiologicalParams>) -> String {
    match with_session(|s| s.summary(params.as_ref())) {
        Ok(summary) => to_json(&summary),
        Err(e) => {
            warn!("[PacetrackRust] No summary: {}", e);
            "{}".to_string()
        }
    }
}

/// Samples of the stopped run, empty if the session is not stopped.
#[uniffi::export]
pub fn session_finalized_samples() -> Vec<GeoSample> {
    with_session(|s| {
        s.finalized_track()
            .map(|track| track.samples().to_vec())
            .unwrap_or_default()
    })
}

// ============================================================================
// Standalone analyzers
// ============================================================================

#[uniffi::export]
pub fn ffi_format_pace(sec_per_km: f64) -> String {
    format_pace(sec_per_km)
}

/// Heart-rate zone distribution as JSON.
#[uniffi::export]
pub fn ffi_analyze_heart_rate(samples: Vec<HeartRateSample>, max_hr: f64) -> String {
    init_logging();
    info!(
        "[PacetrackRust] analyze_heart_rate: {} samples, max={}bpm",
        samples.len(),
        max_hr
    );
    let result = analyze_heart_rate_parallel(&samples, &HeartRateZoneConfig::from_max_hr(max_hr));
    to_json(&result)
}

/// TRIMP and Training Effect as JSON.
#[uniffi::export]
pub fn ffi_training_effect(
    average_hr: f64,
    elapsed_seconds: f64,
    params: PhysiologicalParams,
    trimp_max: f64,
) -> String {
    let config = TrainingLoadConfig { trimp_max };
    to_json(&training_effect(average_hr, elapsed_seconds, &params, &config))
}
