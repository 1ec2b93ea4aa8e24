//! Ghost replay.
//!
//! A [`GhostRunner`] replays a finalized reference run against the live
//! session clock. On every tick the coordinator maps the session's elapsed
//! time onto the reference run:
//!
//! ```text
//! progress    = min(elapsed / reference.total_elapsed, 1)
//! target      = floor((point_count - 1) · progress)
//! index       = min(target, point_count - 1)
//! finished    = target ≥ point_count - 1      (sticky)
//! ```
//!
//! Comparisons against the runner are recomputed on demand from the current
//! index; nothing is cached between ticks.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::GhostConfig;
use crate::track::ReferenceTrack;
use crate::GpsPoint;

#[cfg(feature = "parallel")]
use crate::documents::StoredRun;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A reference run replayed in lockstep with the live session.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostRunner {
    id: String,
    reference: ReferenceTrack,
    elapsed_time_of_reference: f64,
    current_sample_index: usize,
    is_finished: bool,
}

impl GhostRunner {
    /// Create a runner at the start of `reference`.
    ///
    /// A reference with fewer than two samples is finished immediately.
    pub fn new(id: impl Into<String>, reference: ReferenceTrack) -> Self {
        let elapsed_time_of_reference = reference.total_elapsed();
        let mut ghost = Self {
            id: id.into(),
            reference,
            elapsed_time_of_reference,
            current_sample_index: 0,
            is_finished: false,
        };
        ghost.reset();
        ghost
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn reference(&self) -> &ReferenceTrack {
        &self.reference
    }

    /// Duration of the reference run in seconds.
    pub fn elapsed_time_of_reference(&self) -> f64 {
        self.elapsed_time_of_reference
    }

    pub fn current_sample_index(&self) -> usize {
        self.current_sample_index
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Back to index 0.
    pub fn reset(&mut self) {
        self.current_sample_index = 0;
        self.is_finished = self.reference.point_count() < 2;
    }

    /// Move the runner to where the reference run was after `elapsed_seconds`.
    ///
    /// Once finished the runner no longer moves.
    pub fn advance(&mut self, elapsed_seconds: f64) {
        if self.is_finished {
            return;
        }

        let last = self.reference.point_count() - 1;
        let progress = if self.elapsed_time_of_reference > 0.0 {
            (elapsed_seconds / self.elapsed_time_of_reference).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress.is_nan() {
            return;
        }

        let target = (last as f64 * progress).floor() as usize;
        self.current_sample_index = target.min(last);

        if target >= last {
            self.is_finished = true;
            info!(
                "[Ghost] {} finished after {:.0}s",
                self.id, self.elapsed_time_of_reference
            );
        }
    }

    /// Fraction of the reference samples replayed so far, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let count = self.reference.point_count();
        if count < 2 {
            return 1.0;
        }
        self.current_sample_index as f64 / (count - 1) as f64
    }

    /// Distance the reference run had covered at the current index, in meters.
    pub fn implied_distance(&self) -> f64 {
        self.reference.total_distance() * self.progress()
    }

    /// Location of the runner, for map rendering.
    pub fn current_position(&self) -> Option<GpsPoint> {
        self.reference.point_at(self.current_sample_index)
    }
}

/// Where the live runner is relative to a ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum RelativePosition {
    Ahead,
    Behind,
    OnPace,
}

impl RelativePosition {
    /// Classify `ghost - user` against a symmetric tolerance band.
    pub fn classify(delta_meters: f64, tolerance_meters: f64) -> Self {
        if delta_meters.abs() <= tolerance_meters {
            RelativePosition::OnPace
        } else if delta_meters > 0.0 {
            RelativePosition::Behind
        } else {
            RelativePosition::Ahead
        }
    }
}

/// Live comparison against one ghost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostComparison {
    pub ghost_id: String,
    pub ghost_distance_meters: f64,
    pub user_distance_meters: f64,
    /// `ghost - user`; positive when the ghost is further along
    pub delta_meters: f64,
    pub position: RelativePosition,
    pub progress: f64,
    pub is_finished: bool,
}

impl GhostComparison {
    /// Human-readable comparison, e.g. `"0.25 km behind tuesday-tempo"`.
    pub fn describe(&self) -> String {
        let km = self.delta_meters.abs() / 1000.0;
        match self.position {
            RelativePosition::OnPace => format!("On pace with {}", self.ghost_id),
            RelativePosition::Ahead => format!("{:.2} km ahead of {}", km, self.ghost_id),
            RelativePosition::Behind => format!("{:.2} km behind {}", km, self.ghost_id),
        }
    }
}

/// Active ghosts of a session.
#[derive(Debug, Clone, Default)]
pub struct GhostCoordinator {
    ghosts: Vec<GhostRunner>,
    config: GhostConfig,
}

impl GhostCoordinator {
    pub fn new(config: GhostConfig) -> Self {
        Self {
            ghosts: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GhostConfig {
        &self.config
    }

    /// Add a ghost. No-op returning `false` when the active set is full or a
    /// ghost with the same id is already active.
    pub fn add(&mut self, ghost: GhostRunner) -> bool {
        if self.ghosts.len() >= self.config.max_active {
            info!(
                "[Ghost] Active limit of {} reached, ignoring {}",
                self.config.max_active, ghost.id
            );
            return false;
        }
        if self.ghosts.iter().any(|g| g.id == ghost.id) {
            debug!("[Ghost] {} already active", ghost.id);
            return false;
        }
        self.ghosts.push(ghost);
        true
    }

    /// Remove the ghost with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ghosts.len();
        self.ghosts.retain(|g| g.id != id);
        self.ghosts.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&GhostRunner> {
        self.ghosts.iter().find(|g| g.id == id)
    }

    pub fn ghosts(&self) -> &[GhostRunner] {
        &self.ghosts
    }

    pub fn len(&self) -> usize {
        self.ghosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ghosts.is_empty()
    }

    pub fn all_finished(&self) -> bool {
        self.ghosts.iter().all(|g| g.is_finished)
    }

    pub fn reset_all(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.reset();
        }
    }

    pub fn advance_all(&mut self, elapsed_seconds: f64) {
        for ghost in &mut self.ghosts {
            ghost.advance(elapsed_seconds);
        }
    }

    /// Compare every ghost against the live distance.
    pub fn compare(&self, user_distance_meters: f64) -> Vec<GhostComparison> {
        self.ghosts
            .iter()
            .map(|ghost| {
                let ghost_distance = ghost.implied_distance();
                let delta = ghost_distance - user_distance_meters;
                GhostComparison {
                    ghost_id: ghost.id.clone(),
                    ghost_distance_meters: ghost_distance,
                    user_distance_meters,
                    delta_meters: delta,
                    position: RelativePosition::classify(
                        delta,
                        self.config.on_pace_tolerance_meters,
                    ),
                    progress: ghost.progress(),
                    is_finished: ghost.is_finished,
                }
            })
            .collect()
    }
}

/// Build ghost runners from many stored runs using parallel processing.
#[cfg(feature = "parallel")]
pub fn prepare_ghosts_parallel(runs: &[StoredRun]) -> Vec<GhostRunner> {
    runs.par_iter()
        .map(|run| GhostRunner::new(run.id.clone(), ReferenceTrack::from_stored_run(run)))
        .collect()
}
