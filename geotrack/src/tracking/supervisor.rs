//! Tracking supervisor - the lifecycle state machine.
//!
//! The supervisor runs the sample pipeline for one Running period as an
//! independently cancellable task: a stalled sample handler never blocks a
//! stop command, and a failing pipeline never takes the supervisor down
//! with it. Stream errors are contained at the start boundary; indicator
//! faults are contained at the per-sample boundary.
//!
//! # Lifecycle
//!
//! 1. **start**: open the stream, show the indicator in the unknown state,
//!    acquire keep-alive, spawn the pipeline
//! 2. **running**: each fix updates the same indicator in place
//! 3. **stop / destroy**: cancel the pipeline, await its teardown, retract
//!    the indicator, release keep-alive
//!
//! # Usage
//!
//! ```ignore
//! let supervisor = TrackingSupervisor::new(client, indicator, keep_alive, config);
//! let (tx, rx) = mpsc::channel(16);
//! tokio::spawn(supervisor.run(rx));
//!
//! tx.send(TrackingCommand::Start).await?;
//! // ...
//! tx.send(TrackingCommand::Stop).await?;
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::command::TrackingCommand;
use super::indicator::{IndicatorId, StatusIndicator, UNKNOWN_POSITION_TEXT, format_fix};
use super::keep_alive::KeepAlive;
use crate::config::TrackingConfig;
use crate::location::{LocationClient, LocationError, LocationUpdates};

/// Capacity of the internal cycle-event channel.
const CYCLE_EVENT_CAPACITY: usize = 4;

/// Report sent by a pipeline task back to the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CycleEvent {
    /// Sequence number of the cycle the event belongs to.
    cycle: u64,
    /// What ended the pipeline.
    end: CycleEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleEnd {
    /// The source terminated the subscription.
    SourceEnded,
}

/// One Running period: the live pipeline and the resources it owns.
struct ActiveCycle {
    /// Sequence number distinguishing this cycle from earlier ones.
    seq: u64,
    /// Cancellation signal scoped to this cycle.
    cancel: CancellationToken,
    /// The sample pipeline task.
    pipeline: JoinHandle<()>,
    /// The visible indicator owned by this cycle.
    indicator: IndicatorId,
}

/// Supervisor lifecycle state.
enum TrackingState {
    /// No subscription, no indicator. Initial and terminal-safe.
    Idle,
    /// Exactly one open subscription and one visible indicator.
    Running(ActiveCycle),
}

/// Command-driven lifecycle controller for background position tracking.
///
/// Owns the single active subscription and the single active indicator for
/// the duration of one Running period; no other component holds a
/// reference to either.
pub struct TrackingSupervisor {
    client: Arc<dyn LocationClient>,
    indicator: Arc<dyn StatusIndicator>,
    keep_alive: Arc<dyn KeepAlive>,
    config: TrackingConfig,
    state: TrackingState,
    next_cycle: u64,
    events_tx: mpsc::Sender<CycleEvent>,
    events_rx: mpsc::Receiver<CycleEvent>,
}

impl TrackingSupervisor {
    /// Create an idle supervisor over the given collaborators.
    pub fn new(
        client: Arc<dyn LocationClient>,
        indicator: Arc<dyn StatusIndicator>,
        keep_alive: Arc<dyn KeepAlive>,
        config: TrackingConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(CYCLE_EVENT_CAPACITY);
        Self {
            client,
            indicator,
            keep_alive,
            config,
            state: TrackingState::Idle,
            next_cycle: 0,
            events_tx,
            events_rx,
        }
    }

    /// True while a tracking cycle is active.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TrackingState::Running(_))
    }

    /// Begin a tracking cycle.
    ///
    /// If a cycle is already running it is fully torn down first, so a
    /// fresh subscription replaces the old one and at most one is ever
    /// open.
    ///
    /// # Errors
    ///
    /// Stream preconditions are surfaced to the caller; on failure no
    /// indicator is shown, nothing is kept alive and the supervisor stays
    /// Idle, able to accept a later stop or retried start.
    pub async fn start(&mut self) -> Result<(), LocationError> {
        if self.is_running() {
            info!("tracking already running, restarting with a fresh cycle");
            self.stop().await;
        }

        let updates = self.client.open(self.config.interval)?;

        let seq = self.next_cycle;
        self.next_cycle += 1;

        let indicator = self.indicator.create(UNKNOWN_POSITION_TEXT);
        self.keep_alive.acquire();

        let cancel = CancellationToken::new();
        let pipeline = tokio::spawn(run_pipeline(
            updates,
            cancel.clone(),
            Arc::clone(&self.indicator),
            indicator,
            seq,
            self.events_tx.clone(),
        ));

        info!(
            cycle = seq,
            interval_ms = self.config.interval.as_millis() as u64,
            "tracking started"
        );
        self.state = TrackingState::Running(ActiveCycle {
            seq,
            cancel,
            pipeline,
            indicator,
        });
        Ok(())
    }

    /// End the active tracking cycle.
    ///
    /// No-op when Idle. Cancellation is signalled to the pipeline and the
    /// subscription is released without waiting for another sample; the
    /// pipeline is awaited, so all work of the cycle has ended before Idle
    /// is entered. A panicked pipeline is logged, never propagated.
    pub async fn stop(&mut self) {
        let TrackingState::Running(cycle) =
            std::mem::replace(&mut self.state, TrackingState::Idle)
        else {
            debug!("stop with no active cycle, ignoring");
            return;
        };

        cycle.cancel.cancel();
        if let Err(e) = cycle.pipeline.await {
            error!(cycle = cycle.seq, error = %e, "sample pipeline panicked");
        }

        self.indicator.retract(cycle.indicator);
        self.keep_alive.release();
        info!(cycle = cycle.seq, "tracking stopped");
    }

    /// Tear the supervisor down.
    ///
    /// The terminal safety net for external destruction: behaves exactly
    /// like [`stop`](Self::stop), so no subscription or indicator survives.
    pub async fn shutdown(mut self) {
        self.stop().await;
    }

    /// Drive the supervisor from an external command channel.
    ///
    /// `Start`/`Stop` map to [`start`](Self::start)/[`stop`](Self::stop).
    /// Closing the channel is the external destroy signal and tears any
    /// active cycle down before this returns.
    pub async fn run(mut self, mut commands: mpsc::Receiver<TrackingCommand>) {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(TrackingCommand::Start) => {
                        if let Err(e) = self.start().await {
                            error!(error = %e, "failed to start tracking");
                        }
                    }
                    Some(TrackingCommand::Stop) => self.stop().await,
                    None => {
                        debug!("command channel closed, tearing down");
                        break;
                    }
                },
                Some(event) = self.events_rx.recv() => {
                    self.handle_cycle_event(event).await;
                }
            }
        }
        self.shutdown().await;
    }

    /// Apply a pipeline report, ignoring reports from ended cycles.
    async fn handle_cycle_event(&mut self, event: CycleEvent) {
        let current = match &self.state {
            TrackingState::Running(cycle) => cycle.seq,
            // The cycle was already torn down; nothing left to do.
            TrackingState::Idle => return,
        };
        if event.cycle != current {
            // Stale report that raced a restart.
            debug!(cycle = event.cycle, current, "ignoring stale cycle event");
            return;
        }

        match event.end {
            CycleEnd::SourceEnded => {
                warn!(
                    cycle = event.cycle,
                    "position source terminated the subscription"
                );
                self.stop().await;
            }
        }
    }
}

/// Sample pipeline for one cycle.
///
/// Consumes the stream until cancelled or until the source ends it.
/// Cancellation releases the subscription immediately; it does not wait
/// for another sample. Indicator faults are logged and the pipeline moves
/// on to the next fix.
async fn run_pipeline(
    mut updates: LocationUpdates,
    cancel: CancellationToken,
    indicator: Arc<dyn StatusIndicator>,
    id: IndicatorId,
    cycle: u64,
    events: mpsc::Sender<CycleEvent>,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                updates.cancel();
                break;
            }
            fix = updates.next() => match fix {
                Some(fix) => {
                    debug!(
                        cycle,
                        latitude = fix.latitude,
                        longitude = fix.longitude,
                        "position fix"
                    );
                    if let Err(e) = indicator.update(id, &format_fix(&fix)) {
                        warn!(cycle, error = %e, "indicator update failed");
                    }
                }
                None => {
                    let _ = events.try_send(CycleEvent {
                        cycle,
                        end: CycleEnd::SourceEnded,
                    });
                    break;
                }
            },
        }
    }
}
