// SPDX-License-Identifier: MPL-2.0
//! Autoplay timer for a gallery.
//!
//! A periodic deadline with an explicit start/cancel contract, polled
//! from the tick subscription. Rescheduling happens when the deadline
//! fires, so a slow tick cadence never queues up missed advances.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Autoplay {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Schedules the next firing at `now + interval`.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Stops the timer until the next [`start`](Self::start).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls the timer. On firing, reschedules from `now` and returns `true`.
    pub fn fired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(4);

    #[test]
    fn does_not_fire_before_the_interval() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.start(start);

        assert!(!autoplay.fired(start + Duration::from_secs(3)));
        assert!(autoplay.fired(start + INTERVAL));
    }

    #[test]
    fn firing_reschedules_the_next_deadline() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.start(start);

        assert!(autoplay.fired(start + INTERVAL));
        assert!(autoplay.is_running());
        assert!(!autoplay.fired(start + INTERVAL + Duration::from_secs(1)));
        assert!(autoplay.fired(start + INTERVAL + INTERVAL));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.start(start);
        autoplay.cancel();

        assert!(!autoplay.is_running());
        assert!(!autoplay.fired(start + INTERVAL * 2));
    }

    #[test]
    fn restart_pushes_the_deadline_out() {
        let start = Instant::now();
        let mut autoplay = Autoplay::new(INTERVAL);
        autoplay.start(start);

        // Restart half-way through the interval.
        autoplay.start(start + Duration::from_secs(2));
        assert!(!autoplay.fired(start + INTERVAL));
        assert!(autoplay.fired(start + INTERVAL + Duration::from_secs(2)));
    }
}
