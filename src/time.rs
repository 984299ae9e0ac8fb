//! Tick scheduling with a self-adjusting period.
//!
//! The automatic income timer does not run at a fixed rate: each tick sets
//! the delay until the next one to `1 second / fluctuation_factor`. With
//! the factor drawn from (1.0, 3.0) the loop speeds up and slows down but
//! never stalls (delay < 1s) and never runs away (delay > 1/3s).
//!
//! `TickClock` keeps the absolute deadline in loop-relative milliseconds so
//! the event loop can sleep exactly until the next firing and tests can
//! drive it with a synthetic clock.

/// Nominal tick period at fluctuation 1.0.
pub const BASE_PERIOD_MS: f64 = 1000.0;

/// Delay until the next tick for a given fluctuation factor.
pub fn delay_ms_for(factor: f64) -> f64 {
    BASE_PERIOD_MS / factor
}

pub struct TickClock {
    deadline_ms: f64,
}

impl TickClock {
    /// The first tick fires one nominal period after loop start.
    pub fn new(now_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + BASE_PERIOD_MS,
        }
    }

    pub fn due(&self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms
    }

    /// Milliseconds until the deadline, zero once due.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.deadline_ms - now_ms).max(0.0)
    }

    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }

    /// Schedule the next firing `1 second / factor` after `now_ms`.
    pub fn reschedule(&mut self, now_ms: f64, factor: f64) {
        self.deadline_ms = now_ms + delay_ms_for(factor);
    }
}
