// SPDX-License-Identifier: MPL-2.0
//! Time-based tween animator for smooth scrolling to a page section.

use std::time::{Duration, Instant};

/// Tweens the page scroll offset from its current position to a target.
///
/// While active the tick subscription polls [`tick`](Self::tick) every
/// frame and applies the returned offset. A user scroll cancels the
/// animation instead of fighting it.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimator {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The offset the animation is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begins animating from `current` to `target` at `now`.
    pub fn begin(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
    }

    /// Returns the next offset when animating, or `None` when inactive.
    ///
    /// The final tick lands exactly on the target and deactivates the
    /// animator.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }

        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * ease_in_out_quad(t))
    }

    /// Cancels the animation immediately, leaving the offset where it is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}
