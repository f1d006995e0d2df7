//! Minimum-interval gate for upstream API calls.
//!
//! Every upstream call in this process goes through one [`Throttle`] that
//! enforces a minimum spacing between calls. The gate is global: a playlist
//! request and an album request compete for the same one-call-per-second
//! budget. No retry or backoff logic lives here; the throttle only paces
//! call cadence.

use std::{future::Future, time::Duration};

use tokio::{
    sync::Mutex,
    time::{Instant, sleep},
};

/// Minimum spacing between two upstream calls, process wide.
pub const MIN_CALL_INTERVAL: Duration = Duration::from_secs(1);

/// Serializes upstream calls behind a global minimum-interval gate.
///
/// The lock is held across wait, call, and timestamp update; releasing it
/// between the wait and the update would let two callers observe the same
/// stale timestamp and proceed concurrently. The interval is measured from
/// the end of the previous call, not its start.
///
/// Constructed with an explicit interval so tests can run with a zero
/// interval or under tokio's paused clock.
pub struct Throttle {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Throttle {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Runs `op` once the minimum interval since the previous call has
    /// elapsed. The timestamp is updated whether `op` succeeds or fails;
    /// a failed upstream call still spent budget.
    pub async fn run<F: Future>(&self, op: F) -> F::Output {
        let mut last_call = self.last_call.lock().await;

        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        let output = op.await;
        *last_call = Some(Instant::now());
        output
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle::new(MIN_CALL_INTERVAL)
    }
}
