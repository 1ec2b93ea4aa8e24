//! Live session driver.
//!
//! [`spawn_session`] moves a [`RunSession`] into a tokio task that owns it.
//! Commands (transitions, samples, ghost changes, snapshots) arrive on an
//! unbounded channel and ticks come from a `tokio::time::interval`; both are
//! handled by one `select!` loop, so a tick and a sample never interleave.
//! Commands are polled first, which makes `stop()` take effect before any
//! tick that was already due. After [`MAX_COMMAND_BURST`] commands in a row
//! the loop checks for a due tick before reading more, so a busy channel
//! cannot starve the clock.
//!
//! The ticker only fires while the session is Running and is re-armed on
//! start/resume, so the first tick lands one full interval after the
//! transition. Ticks that fall behind are caught up in a burst, keeping
//! elapsed time in step with the wall clock.

use std::future;
use std::task::Poll;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Interval, MissedTickBehavior};

use crate::error::{Result, TelemetryError};
use crate::ghost::GhostRunner;
use crate::heart_rate::HeartRateSample;
use crate::session::{LiveMetrics, RunSession, SessionState};
use crate::GeoSample;

/// Commands handled back to back before a due tick is let in.
pub const MAX_COMMAND_BURST: usize = 32;

enum Command {
    Start(oneshot::Sender<bool>),
    Pause(oneshot::Sender<bool>),
    Resume(oneshot::Sender<bool>),
    Stop(oneshot::Sender<bool>),
    Reset(oneshot::Sender<bool>),
    Location(GeoSample),
    HeartRate(HeartRateSample),
    AddGhost(GhostRunner, oneshot::Sender<bool>),
    RemoveGhost(String, oneshot::Sender<bool>),
    Snapshot(oneshot::Sender<LiveMetrics>),
}

/// Handle to a session running on a tokio task.
///
/// Dropping the handle ends the task; use [`finish`](Self::finish) to get the
/// session back.
#[derive(Debug)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<RunSession>,
}

/// Run `session` on a new tokio task. Must be called within a tokio runtime.
pub fn spawn_session(session: RunSession) -> Result<SessionHandle> {
    session.config().validate()?;
    let period = Duration::from_secs_f64(session.config().tick_interval_seconds);

    let (commands, receiver) = mpsc::unbounded_channel();
    let task = tokio::spawn(drive(session, receiver, period));
    Ok(SessionHandle { commands, task })
}

async fn drive(
    mut session: RunSession,
    mut commands: mpsc::UnboundedReceiver<Command>,
    period: Duration,
) -> RunSession {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    ticker.reset();
    let mut burst = 0;

    loop {
        if burst >= MAX_COMMAND_BURST {
            burst = 0;
            if session.state() == SessionState::Running && tick_due(&mut ticker).await {
                debug!("[Runtime] Tick let in after {} commands", MAX_COMMAND_BURST);
                session.tick();
            }
        }

        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                burst += 1;
                if handle(&mut session, command) {
                    ticker.reset();
                }
            }

            _ = ticker.tick(), if session.state() == SessionState::Running => {
                burst = 0;
                session.tick();
            }
        }
    }

    info!(
        "[Runtime] Session task finished in state {:?}",
        session.state()
    );
    session
}

/// Consume a tick if one is already due, without waiting for the next.
async fn tick_due(ticker: &mut Interval) -> bool {
    future::poll_fn(|cx| Poll::Ready(ticker.poll_tick(cx).is_ready())).await
}

/// Apply one command. Returns whether the ticker must be re-armed.
fn handle(session: &mut RunSession, command: Command) -> bool {
    match command {
        Command::Start(reply) => {
            let started = session.start();
            let _ = reply.send(started);
            started
        }
        Command::Resume(reply) => {
            let resumed = session.resume();
            let _ = reply.send(resumed);
            resumed
        }
        Command::Pause(reply) => {
            let _ = reply.send(session.pause());
            false
        }
        Command::Stop(reply) => {
            let _ = reply.send(session.stop());
            false
        }
        Command::Reset(reply) => {
            let _ = reply.send(session.reset());
            false
        }
        Command::Location(sample) => {
            session.ingest_location(sample);
            false
        }
        Command::HeartRate(sample) => {
            session.ingest_heart_rate(sample);
            false
        }
        Command::AddGhost(ghost, reply) => {
            let _ = reply.send(session.add_ghost(ghost));
            false
        }
        Command::RemoveGhost(id, reply) => {
            let _ = reply.send(session.remove_ghost(&id));
            false
        }
        Command::Snapshot(reply) => {
            let _ = reply.send(session.live_metrics());
            false
        }
    }
}

fn closed() -> TelemetryError {
    TelemetryError::Runtime {
        message: "session task is no longer running".to_string(),
    }
}

impl SessionHandle {
    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands.send(make(reply)).map_err(|_| closed())?;
        response.await.map_err(|_| closed())
    }

    pub async fn start(&self) -> Result<bool> {
        self.request(Command::Start).await
    }

    pub async fn pause(&self) -> Result<bool> {
        self.request(Command::Pause).await
    }

    pub async fn resume(&self) -> Result<bool> {
        self.request(Command::Resume).await
    }

    pub async fn stop(&self) -> Result<bool> {
        self.request(Command::Stop).await
    }

    pub async fn reset(&self) -> Result<bool> {
        self.request(Command::Reset).await
    }

    /// Enqueue a location fix without waiting for it to be applied.
    pub fn ingest_location(&self, sample: GeoSample) -> Result<()> {
        self.commands
            .send(Command::Location(sample))
            .map_err(|_| closed())
    }

    /// Enqueue a heart-rate reading without waiting for it to be applied.
    pub fn ingest_heart_rate(&self, sample: HeartRateSample) -> Result<()> {
        self.commands
            .send(Command::HeartRate(sample))
            .map_err(|_| closed())
    }

    pub async fn add_ghost(&self, ghost: GhostRunner) -> Result<bool> {
        self.request(|reply| Command::AddGhost(ghost, reply)).await
    }

    pub async fn remove_ghost(&self, id: impl Into<String>) -> Result<bool> {
        let id = id.into();
        self.request(|reply| Command::RemoveGhost(id, reply)).await
    }

    /// Current live metrics, after every command sent before this call.
    pub async fn snapshot(&self) -> Result<LiveMetrics> {
        self.request(Command::Snapshot).await
    }

    /// Stop the session, end the task and hand the session back for
    /// finalization.
    pub async fn finish(self) -> Result<RunSession> {
        let stopped = self.stop().await?;
        debug!("[Runtime] Finishing session (stopped now: {})", stopped);

        let SessionHandle { commands, task } = self;
        drop(commands);
        task.await.map_err(|e| TelemetryError::Runtime {
            message: format!("session task failed: {}", e),
        })
    }
}
