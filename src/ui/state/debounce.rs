// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncer.
//!
//! Used for window resizes: layout metrics are only recomputed once the
//! burst of resize events has settled for the configured delay.

use std::time::{Duration, Instant};

/// Collapses a burst of events into a single deferred firing.
///
/// Each [`trigger`](Self::trigger) pushes the deadline out again, so the
/// debouncer only fires once the events stop arriving.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records an event at `now`, rescheduling the pending firing.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a firing is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Polls the debouncer. Returns `true` exactly once per settled burst,
    /// when `now` has reached the deadline.
    pub fn fired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
