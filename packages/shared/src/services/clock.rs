use chrono::Utc;

#[cfg(test)]
use mockall::automock;

/// Source of "now" for expiry math, injected so tests can run against a
/// simulated clock instead of the wall clock.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
