use std::time::{Duration, Instant};

/// Lets a simulation step through at most once per `interval`, however often it is polled.
#[derive(Clone, Debug)]
pub struct TickThrottle {
    interval: Duration,
    last_step: Instant,
}

impl TickThrottle {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_step: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and records `now` as the last step when a full interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) < self.interval {
            return false;
        }
        self.last_step = now;
        true
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_step = now;
    }
}
