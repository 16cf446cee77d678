//! Periodic expiration sweep.
//!
//! Runs `BundleApi::sweep()` on a fixed period until told to stop. The first
//! sweep happens one full interval after spawn.

use crate::ports::BundleApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Spawns the sweep loop.
pub struct Sweeper;

impl Sweeper {
    /// Starts sweeping `store` every `interval` on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime, like `tokio::spawn`.
    pub fn spawn(store: Arc<dyn BundleApi>, interval: Duration) -> SweeperHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(store, interval, shutdown_rx));

        info!(interval_ms = interval.as_millis() as u64, "Bundle sweeper started");

        SweeperHandle {
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Owner of a running sweep loop.
///
/// Dropping the handle also ends the loop at its next wakeup.
pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Signals the loop to stop and waits for it to exit.
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Bundle sweeper task ended abnormally");
            }
        }
        info!("Bundle sweeper stopped");
    }

    /// Returns true while the loop is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn run(
    store: Arc<dyn BundleApi>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let start = tokio::time::Instant::now() + interval;
    let mut ticker = tokio::time::interval_at(start, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = store.sweep();
                if report.removed > 0 {
                    debug!(
                        scanned = report.scanned,
                        removed = report.removed,
                        "Swept expired bundles"
                    );
                }
            }
            changed = shutdown_rx.changed() => {
                // Err means the handle is gone
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }
}
