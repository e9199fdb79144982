// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns a single toast slot. Pushing a new notification
//! replaces whatever is currently showing, so feedback never piles up:
//! the latest message always wins.
//!
//! A toast moves through three phases, all anchored to the push instant:
//! it stays pending and invisible for a short delay, shows at full
//! opacity, then fades out before the slot is emptied.

use super::notification::Notification;
use std::time::{Duration, Instant};

/// Delay between push and the toast becoming visible.
const SHOW_DELAY: Duration = Duration::from_millis(100);

/// Time from push until the fade-out starts.
const DISPLAY_FOR: Duration = Duration::from_millis(4000);

/// Length of the fade-out, after which the slot is emptied.
const FADE_OUT: Duration = Duration::from_millis(300);

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The dismiss button on the toast was pressed.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Pushed but not yet visible.
    Pending,
    /// Visible at full opacity.
    Shown,
    /// Fading out since the given instant.
    FadingOut { since: Instant },
}

#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    pushed_at: Instant,
    phase: Phase,
    alpha: f32,
}

/// Manages the single notification slot.
#[derive(Debug, Default)]
pub struct Manager {
    slot: Option<ActiveToast>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification at `now`, replacing any current toast.
    ///
    /// The replacement is immediate even mid-fade; the new toast starts
    /// its own pending delay from `now`.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.slot = Some(ActiveToast {
            notification,
            pushed_at: now,
            phase: Phase::Pending,
            alpha: 0.0,
        });
    }

    /// Advances the toast lifecycle. Called from the tick subscription.
    pub fn tick(&mut self, now: Instant) {
        let Some(toast) = &mut self.slot else {
            return;
        };

        if let Phase::Pending = toast.phase {
            if now.saturating_duration_since(toast.pushed_at) >= SHOW_DELAY {
                toast.phase = Phase::Shown;
            }
        }

        if let Phase::Shown = toast.phase {
            toast.alpha = 1.0;
            if now.saturating_duration_since(toast.pushed_at) >= DISPLAY_FOR {
                // Anchored to the schedule, not the tick that noticed it,
                // so a late tick does not stretch the fade.
                toast.phase = Phase::FadingOut {
                    since: toast.pushed_at + DISPLAY_FOR,
                };
            }
        }

        if let Phase::FadingOut { since } = toast.phase {
            let elapsed = now.saturating_duration_since(since);
            if elapsed >= FADE_OUT {
                self.slot = None;
            } else {
                toast.alpha = 1.0 - elapsed.as_secs_f32() / FADE_OUT.as_secs_f32();
            }
        }
    }

    /// Dismisses the current toast.
    ///
    /// A pending toast is dropped outright; a shown one starts fading.
    /// Dismissing mid-fade or with an empty slot does nothing.
    pub fn dismiss(&mut self, now: Instant) {
        match self.slot.as_mut() {
            Some(toast) => match toast.phase {
                Phase::Pending => self.slot = None,
                Phase::Shown => toast.phase = Phase::FadingOut { since: now },
                Phase::FadingOut { .. } => {}
            },
            None => {}
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismissed => self.dismiss(now),
        }
    }

    /// Returns the visible toast and its opacity, if any.
    ///
    /// A pending toast is not visible yet and yields `None`.
    #[must_use]
    pub fn visible(&self) -> Option<(&Notification, f32)> {
        self.slot.as_ref().and_then(|toast| match toast.phase {
            Phase::Pending => None,
            Phase::Shown | Phase::FadingOut { .. } => Some((&toast.notification, toast.alpha)),
        })
    }

    /// Whether a toast occupies the slot in any phase.
    ///
    /// Drives the tick subscription: while this is `true`, ticks must
    /// keep coming so the lifecycle can advance.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.slot.is_some()
    }

    /// Empties the slot without any fade.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
