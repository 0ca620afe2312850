//! Keystroke debouncing
//!
//! Each keystroke restarts the timer; the query runs once input has been
//! idle for the full delay.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    /// When the last keystroke was scheduled (None = nothing pending)
    scheduled_at: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            scheduled_at: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule (or reschedule) an execution after the delay
    pub fn schedule_execution(&mut self) {
        self.schedule_execution_at(Instant::now());
    }

    pub fn schedule_execution_at(&mut self, now: Instant) {
        self.scheduled_at = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled_at.is_some()
    }

    /// Drop a pending execution
    pub fn cancel(&mut self) {
        self.scheduled_at = None;
    }

    /// Returns true exactly once per schedule, after the delay has elapsed
    pub fn should_execute(&mut self) -> bool {
        self.should_execute_at(Instant::now())
    }

    pub fn should_execute_at(&mut self, now: Instant) -> bool {
        match self.scheduled_at {
            Some(scheduled) if now.saturating_duration_since(scheduled) >= self.delay => {
                self.scheduled_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending execution fires
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.scheduled_at
            .map(|scheduled| self.delay.saturating_sub(now.saturating_duration_since(scheduled)))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
