// session.rs - Grid, run state and step bookkeeping for the interaction loop
//
// A Session lives on the UI thread and is the only thing that mutates the
// grid. Step replies arrive from tokio tasks as messages and are applied in
// `pump`, so clicks and replies are serialized without any locking.
//
// Timer ticks are not queued: the timer task only marks a tick as pending,
// and `pump` issues at most one request for it however long the UI thread
// was away.
//
// A reply is applied only while still running in the run it was requested
// in, and only if it is newer than the last reply applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use life_grid::Grid;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::StepError;
use crate::scheduler::Scheduler;
use crate::step::StepClient;

/// Called from background tasks whenever there is something for
/// [`Session::pump`] to pick up.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
struct StepReply {
    run: u64,
    seq: u64,
    result: Result<Grid, StepError>,
}

// No tick waiting in `pending_tick`
const NO_TICK: u64 = 0;

/// What the status line shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    /// Step responses applied since startup.
    pub generation: u64,
    /// Step cycles that failed since startup.
    pub failures: u64,
    /// Requests sent and not yet answered.
    pub in_flight: usize,
    /// Successful replies dropped as stale or out of order.
    pub discarded: u64,
    /// Most recent failure, cleared by the next success.
    pub last_error: Option<String>,
}

pub struct Session {
    grid: Grid,
    scheduler: Scheduler,
    stepper: StepClient,
    runtime: Handle,
    wake: Wake,
    // Run number + 1 of the latest unserved tick, or NO_TICK
    pending_tick: Arc<AtomicU64>,
    replies_tx: UnboundedSender<StepReply>,
    replies_rx: UnboundedReceiver<StepReply>,
    // Bumped on every pause; ticks and replies from an older run are stale
    run: u64,
    issued: u64,
    applied: u64,
    status: Status,
}

impl Session {
    pub fn new(config: &ClientConfig, runtime: Handle, wake: Wake) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        Self {
            grid: Grid::new(config.grid_size),
            scheduler: Scheduler::new(config.step_interval),
            stepper: StepClient::new(config.step_url.clone(), config.request_timeout),
            runtime,
            wake,
            pending_tick: Arc::new(AtomicU64::new(NO_TICK)),
            replies_tx,
            replies_rx,
            run: 0,
            issued: 0,
            applied: 0,
            status: Status::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Paused -> Running. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        let pending = Arc::clone(&self.pending_tick);
        let wake = Arc::clone(&self.wake);
        let run = self.run;

        let started = self.scheduler.start(&self.runtime, move || {
            // Overwrites an unserved tick instead of queueing another
            pending.store(run + 1, Ordering::Release);
            wake();
        });
        if started {
            info!(
                interval_ms = self.scheduler.period().as_millis(),
                url = %self.stepper.url(),
                "simulation started"
            );
        }
        started
    }

    /// Running -> Paused. Returns `false` if already paused.
    ///
    /// Requests already in flight are not cancelled, but their replies
    /// will be discarded.
    pub fn pause(&mut self) -> bool {
        if !self.scheduler.pause() {
            return false;
        }
        self.run += 1;
        info!(in_flight = self.status.in_flight, "simulation paused");
        true
    }

    /// Flip one cell. Out-of-range coordinates are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let hit = self.grid.toggle(row, col);
        if !hit {
            debug!(row, col, "ignored toggle outside the grid");
        }
        hit
    }

    /// Apply every reply received since the last call, then serve the
    /// pending tick if there is one. Returns `true` when the grid changed
    /// and needs a redraw.
    pub fn pump(&mut self) -> bool {
        let mut redraw = false;
        while let Ok(StepReply { run, seq, result }) = self.replies_rx.try_recv() {
            redraw |= self.finish_step(run, seq, result);
        }

        // Any number of ticks since the last pump collapse into one request
        let tick = self.pending_tick.swap(NO_TICK, Ordering::AcqRel);
        if tick != NO_TICK {
            self.issue_step(tick - 1);
        }
        redraw
    }

    fn issue_step(&mut self, run: u64) {
        // A tick that fired just before a pause
        if run != self.run || !self.is_running() {
            return;
        }

        self.issued += 1;
        self.status.in_flight += 1;
        let seq = self.issued;
        let snapshot = self.grid.clone();
        let stepper = self.stepper.clone();
        let tx = self.replies_tx.clone();
        let wake = Arc::clone(&self.wake);

        self.runtime.spawn(async move {
            let result = stepper.step(&snapshot).await;
            if tx.send(StepReply { run, seq, result }).is_ok() {
                wake();
            }
        });
    }

    fn finish_step(&mut self, run: u64, seq: u64, result: Result<Grid, StepError>) -> bool {
        self.status.in_flight = self.status.in_flight.saturating_sub(1);

        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, seq, "step cycle failed");
                self.status.failures += 1;
                self.status.last_error = Some(e.to_string());
                return false;
            }
        };

        if run != self.run || !self.is_running() {
            debug!(seq, "discarding step response that arrived after pause");
            self.status.discarded += 1;
            return false;
        }
        if seq <= self.applied {
            debug!(seq, applied = self.applied, "discarding out-of-order step response");
            self.status.discarded += 1;
            return false;
        }

        match self.grid.replace(next) {
            Ok(()) => {
                self.applied = seq;
                self.status.generation += 1;
                self.status.last_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, seq, "step response rejected");
                self.status.failures += 1;
                self.status.last_error = Some(e.to_string());
                false
            }
        }
    }
}
