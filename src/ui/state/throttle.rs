// SPDX-License-Identifier: MPL-2.0
//! Leading-edge throttle.
//!
//! Used for scroll events: the reveal scan runs at most once per frame
//! interval, no matter how fast the scroll reports come in.

use std::time::{Duration, Instant};

/// Rate-limits an action to at most once per `min_gap`.
///
/// The first call in a quiet period passes through immediately; calls
/// inside the gap are dropped, not deferred.
#[derive(Debug, Clone)]
pub struct Throttle {
    min_gap: Duration,
    last: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(min_gap: Duration) -> Self {
        Self {
            min_gap,
            last: None,
        }
    }

    /// Returns `true` if the action may run at `now`, and records the run.
    pub fn ready(&mut self, now: Instant) -> bool {
        let allowed = match self.last {
            Some(last) => now.saturating_duration_since(last) >= self.min_gap,
            None => true,
        };

        if allowed {
            self.last = Some(now);
        }
        allowed
    }

    /// Forgets the last run, so the next call passes through.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: Duration = Duration::from_millis(16);

    #[test]
    fn first_call_passes_immediately() {
        let mut throttle = Throttle::new(GAP);
        assert!(throttle.ready(Instant::now()));
    }

    #[test]
    fn calls_inside_the_gap_are_dropped() {
        let start = Instant::now();
        let mut throttle = Throttle::new(GAP);

        assert!(throttle.ready(start));
        assert!(!throttle.ready(start + Duration::from_millis(5)));
        assert!(!throttle.ready(start + Duration::from_millis(15)));
        assert!(throttle.ready(start + GAP));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_gap() {
        let start = Instant::now();
        let mut throttle = Throttle::new(GAP);

        assert!(throttle.ready(start));
        // A dropped call must not push the window start forward.
        assert!(!throttle.ready(start + Duration::from_millis(10)));
        assert!(throttle.ready(start + GAP));
    }

    #[test]
    fn reset_reopens_the_gate() {
        let start = Instant::now();
        let mut throttle = Throttle::new(GAP);

        assert!(throttle.ready(start));
        throttle.reset();
        assert!(throttle.ready(start + Duration::from_millis(1)));
    }
}
