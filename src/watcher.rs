//! Sampling lifecycle controller.
//!
//! [`RamWatcher`] owns the background sampling loop: `start` spawns it
//! (idempotently, at most one loop per controller), `stop` requests
//! cooperative cancellation and waits a bounded grace period for the loop
//! to confirm exit. The loop itself samples the memory provider, forwards
//! the snapshot to the sink, then sleeps one interval, checking the
//! cancellation token at every suspension point.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::constants::{SAMPLE_INTERVAL, SHUTDOWN_GRACE};
use crate::provider::MemoryProvider;
use crate::sink::SampleSink;

/// Lifecycle state of the controller.
///
/// Transitions are one-way: `Idle -> Running -> StopRequested -> Stopped`.
/// A controller is not restartable after `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, loop not yet spawned
    Idle,
    /// Sampling loop is active
    Running,
    /// Cancellation signaled, waiting for the loop to exit
    StopRequested,
    /// Loop exited (or was abandoned after the grace period)
    Stopped,
}

/// Result of a `stop` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// No sampling loop was active; nothing to cancel
    NotRunning,
    /// The loop observed cancellation and exited within the grace period
    Clean,
    /// The grace period elapsed first; the loop's termination is now
    /// unobserved and the host should treat this as a monitoring gap
    TimedOut,
}

/// Controls the background memory sampling loop.
pub struct RamWatcher {
    provider: Option<Box<dyn MemoryProvider>>,
    sink: Option<Box<dyn SampleSink>>,
    task: Option<JoinHandle<()>>,
    cancel: Option<CancellationToken>,
    state: ControllerState,
}

impl RamWatcher {
    /// Creates an idle controller around a provider and a sink.
    pub fn new(
        provider: impl MemoryProvider + 'static,
        sink: impl SampleSink + 'static,
    ) -> Self {
        Self {
            provider: Some(Box::new(provider)),
            sink: Some(Box::new(sink)),
            task: None,
            cancel: None,
            state: ControllerState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Spawns the sampling loop and returns without blocking.
    ///
    /// Idempotent: if a loop is already active this is a no-op. Fails if
    /// the controller has already been stopped, since a stopped controller
    /// may not be re-armed.
    pub fn start(&mut self) -> Result<()> {
        if self.task.is_some() {
            debug!("Sampling loop already running, start ignored");
            return Ok(());
        }

        let provider = self
            .provider
            .take()
            .context("Controller cannot be restarted after stop")?;
        let sink = self
            .sink
            .take()
            .context("Controller cannot be restarted after stop")?;

        let cancel = CancellationToken::new();
        self.task = Some(tokio::spawn(sampling_loop(
            provider,
            sink,
            cancel.clone(),
        )));
        self.cancel = Some(cancel);
        self.state = ControllerState::Running;

        info!(
            "Memory sampling started (interval {} ms)",
            SAMPLE_INTERVAL.as_millis()
        );
        Ok(())
    }

    /// Signals cancellation and waits for the loop to exit.
    ///
    /// Waits at most the shutdown grace period. On timeout the loop is
    /// abandoned rather than the caller blocked; either way the task
    /// handle is cleared and the controller ends up `Stopped`.
    pub async fn stop(&mut self) -> StopOutcome {
        let Some(task) = self.task.take() else {
            debug!("Stop requested but no sampling loop is active");
            return StopOutcome::NotRunning;
        };

        self.state = ControllerState::StopRequested;
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }

        info!(
            "Stop requested, waiting up to {} ms for sampling loop to exit",
            SHUTDOWN_GRACE.as_millis()
        );

        let outcome = match time::timeout(SHUTDOWN_GRACE, task).await {
            Ok(Ok(())) => {
                info!("Sampling loop stopped");
                StopOutcome::Clean
            }
            Ok(Err(e)) => {
                // The task terminated, but by panic or abort rather than
                // by observing cancellation
                warn!("Sampling loop task failed: {}", e);
                StopOutcome::Clean
            }
            Err(_) => {
                warn!(
                    "Sampling loop did not exit within {} ms, abandoning it",
                    SHUTDOWN_GRACE.as_millis()
                );
                StopOutcome::TimedOut
            }
        };

        self.state = ControllerState::Stopped;
        outcome
    }
}

/// The background loop: sample, report, sleep, repeat until cancelled.
///
/// A provider or sink failure on one cycle is logged and the loop moves
/// on; the next cycle retries implicitly. Cancellation is cooperative:
/// the token is checked before sampling and interrupts the inter-sample
/// sleep, so a stop request is observed within one interval at worst.
async fn sampling_loop(
    mut provider: Box<dyn MemoryProvider>,
    mut sink: Box<dyn SampleSink>,
    cancel: CancellationToken,
) {
    loop {
        if cancel.is_cancelled() {
            break;
        }

        match provider.sample() {
            Ok(snapshot) => {
                if let Err(e) = sink.report(&snapshot) {
                    warn!("Failed to report memory sample: {:#}", e);
                }
            }
            Err(e) => {
                warn!("Memory sample failed, retrying next cycle: {:#}", e);
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = time::sleep(SAMPLE_INTERVAL) => {}
        }
    }

    debug!("Sampling loop exited");
}
