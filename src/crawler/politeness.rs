//! Politeness delay between consecutive requests
//!
//! One request is in flight at a time. After every fetch attempt, successful
//! or not, the next request waits at least the configured minimum delay,
//! counted from when the attempt finished. A pending wait ends early when the
//! crawl is asked to stop.

use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Tracks when the last fetch attempt finished
#[derive(Debug, Clone)]
pub struct Politeness {
    /// Minimum pause after each fetch attempt
    min_delay: Duration,

    /// When the last fetch attempt finished
    last_attempt: Option<Instant>,
}

impl Politeness {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_attempt: None,
        }
    }

    /// The configured minimum delay
    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Records that a fetch attempt finished at `now`
    pub fn record_attempt(&mut self, now: Instant) {
        self.last_attempt = Some(now);
    }

    /// Time left before the next request may be issued
    ///
    /// # Returns
    ///
    /// * `Some(Duration)` - Remaining wait
    /// * `None` - A request may be issued right away
    pub fn time_until_next_request(&self, now: Instant) -> Option<Duration> {
        let last = self.last_attempt?;
        let ready_at = last + self.min_delay;
        if ready_at > now {
            Some(ready_at - now)
        } else {
            None
        }
    }

    /// Waits until the next request may be issued
    ///
    /// # Returns
    ///
    /// * `true` - The caller may issue its request
    /// * `false` - A stop was requested before or during the wait
    pub async fn wait_turn(&self, stop: &mut watch::Receiver<bool>) -> bool {
        if *stop.borrow() {
            return false;
        }

        let wait = match self.time_until_next_request(Instant::now()) {
            Some(wait) => wait,
            None => return true,
        };

        tracing::debug!("Pausing {:?} before next request", wait);

        let slept = tokio::select! {
            _ = tokio::time::sleep(wait) => true,
            _ = stopped(stop) => false,
        };

        slept && !*stop.borrow()
    }
}

/// Resolves once a stop is requested; never resolves if the sender is gone
async fn stopped(stop: &mut watch::Receiver<bool>) {
    loop {
        if *stop.borrow_and_update() {
            return;
        }
        if stop.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
