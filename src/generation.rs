// ABOUTME: Cancellable delay task run before a requested recipe is produced
// ABOUTME: A tokio task races the delay against a oneshot cancel signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smoothie Lab Contributors

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// How a pending timer finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The full delay elapsed
    Elapsed,
    /// The timer was cancelled before the delay elapsed
    Cancelled,
}

/// Handle to a running delay task
///
/// Must be created from inside a tokio runtime.
#[derive(Debug)]
pub struct GenerationTimer {
    cancel_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<TimerOutcome>,
    delay: Duration,
}

impl GenerationTimer {
    /// Spawn a task that completes after `delay` unless cancelled first
    #[must_use]
    pub fn start(delay: Duration) -> Self {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => TimerOutcome::Elapsed,
                _ = cancel_rx => {
                    debug!("Generation timer received cancel signal");
                    TimerOutcome::Cancelled
                }
            }
        });
        Self {
            cancel_tx: Some(cancel_tx),
            handle,
            delay,
        }
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Signal the task to stop; a second call does nothing
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // Err means the task already finished
            if tx.send(()).is_err() {
                debug!("Generation timer already finished before cancel");
            }
        }
    }

    /// Whether the task has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task to finish
    ///
    /// Cancel-safe: dropping this future leaves the timer running, so it can
    /// be awaited again. Must not be called again after it has returned.
    pub async fn wait(&mut self) -> TimerOutcome {
        match (&mut self.handle).await {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Generation timer task did not complete");
                TimerOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timer_elapses() {
        let mut timer = GenerationTimer::start(Duration::from_millis(5));
        assert_eq!(timer.wait().await, TimerOutcome::Elapsed);
        assert!(timer.is_finished());
    }

    #[tokio::test]
    async fn test_timer_cancel() {
        let mut timer = GenerationTimer::start(Duration::from_secs(60));
        timer.cancel();
        timer.cancel();
        assert_eq!(timer.wait().await, TimerOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_wait_survives_dropped_future() {
        let mut timer = GenerationTimer::start(Duration::from_millis(20));
        let early = tokio::time::timeout(Duration::from_millis(1), timer.wait()).await;
        assert!(early.is_err());
        assert_eq!(timer.wait().await, TimerOutcome::Elapsed);
    }
}
