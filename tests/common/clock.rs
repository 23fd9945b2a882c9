use shared::services::clock::Clock;

/// Clock driven by the tokio time driver, so paused-runtime tests advance
/// wall-clock math and timers together.
pub struct TestClock {
    base_ms: i64,
    origin: tokio::time::Instant,
}

impl TestClock {
    /// Must be constructed inside a runtime.
    pub fn new(base_ms: i64) -> Self {
        TestClock {
            base_ms,
            origin: tokio::time::Instant::now(),
        }
    }

    pub fn base_ms(&self) -> i64 {
        self.base_ms
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> i64 {
        self.base_ms + self.origin.elapsed().as_millis() as i64
    }
}
