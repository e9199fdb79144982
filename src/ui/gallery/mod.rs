// SPDX-License-Identifier: MPL-2.0
//! Gallery (carousel) controller.
//!
//! Each collection card carries one gallery: an active slide index, a
//! set of indicator dots, and an autoplay timer that advances the slide
//! on a fixed interval. Hovering the carousel suspends autoplay and
//! leaving it resumes it. Selecting a dot jumps to that slide and
//! resets the interval so the next automatic advance starts counting
//! from the selection.
//!
//! Exactly one slide is active per gallery at all times, and the active
//! index always stays within bounds; out-of-range selections are
//! ignored outright.

pub mod autoplay;
pub mod compat;
pub mod view;

pub use autoplay::Autoplay;
pub use view::{view, ViewContext};

use std::time::{Duration, Instant};

/// Messages emitted by a gallery card.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// An indicator dot was pressed.
    SlideRequested(usize),
    /// The pointer entered the carousel area.
    HoverEntered,
    /// The pointer left the carousel area.
    HoverExited,
    /// The replace-image button on the card was pressed.
    ReplacePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// Open the replace modal for this gallery's active slide.
    ReplaceRequested,
}

/// Per-collection carousel state.
#[derive(Debug, Clone)]
pub struct Gallery {
    active: usize,
    len: usize,
    autoplay: Autoplay,
    hovered: bool,
}

impl Gallery {
    /// Creates a gallery over `len` slides and starts autoplay.
    ///
    /// A gallery with fewer than two slides has nothing to rotate, so
    /// its timer stays idle.
    #[must_use]
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        let mut autoplay = Autoplay::new(interval);
        if len > 1 {
            autoplay.start(now);
        }

        Self {
            active: 0,
            len,
            autoplay,
            hovered: false,
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Moves to the next slide, wrapping at the end.
    pub fn advance(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
        self.restart_autoplay(now);
    }

    /// Jumps to an explicit slide and resets the autoplay interval.
    ///
    /// Out-of-range indices leave the gallery untouched. The reset
    /// happens even while hovered; the timer then runs until the next
    /// hover-enter.
    pub fn select(&mut self, index: usize, now: Instant) {
        if index >= self.len {
            return;
        }
        self.active = index;
        self.restart_autoplay(now);
    }

    /// Suspends autoplay while the pointer is over the carousel.
    pub fn hover_entered(&mut self) {
        self.hovered = true;
        self.autoplay.cancel();
    }

    /// Resumes autoplay with a fresh interval.
    pub fn hover_exited(&mut self, now: Instant) {
        self.hovered = false;
        self.restart_autoplay(now);
    }

    /// Polls the autoplay timer, advancing when it fires.
    ///
    /// Returns `true` when the slide changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.autoplay.fired(now) {
            if self.len > 0 {
                self.active = (self.active + 1) % self.len;
            }
            true
        } else {
            false
        }
    }

    // Cancellation strictly precedes the new schedule.
    fn restart_autoplay(&mut self, now: Instant) {
        self.autoplay.cancel();
        if self.len > 1 {
            self.autoplay.start(now);
        }
    }
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message, gallery: &mut Gallery, now: Instant) -> Event {
    match message {
        Message::SlideRequested(index) => {
            gallery.select(index, now);
            Event::None
        }
        Message::HoverEntered => {
            gallery.hover_entered();
            Event::None
        }
        Message::HoverExited => {
            gallery.hover_exited(now);
            Event::None
        }
        Message::ReplacePressed => Event::ReplaceRequested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(4);

    fn gallery(len: usize) -> (Gallery, Instant) {
        let now = Instant::now();
        (Gallery::new(len, INTERVAL, now), now)
    }

    #[test]
    fn new_gallery_starts_on_the_first_slide() {
        let (gallery, _) = gallery(3);
        assert_eq!(gallery.active(), 0);
        assert!(gallery.autoplay_running());
    }

    #[test]
    fn single_slide_gallery_keeps_the_timer_idle() {
        let (gallery, _) = gallery(1);
        assert!(!gallery.autoplay_running());
    }

    #[test]
    fn advance_wraps_around() {
        let (mut gallery, now) = gallery(3);
        gallery.advance(now);
        gallery.advance(now);
        assert_eq!(gallery.active(), 2);
        gallery.advance(now);
        assert_eq!(gallery.active(), 0);
    }

    #[test]
    fn select_jumps_to_the_requested_slide() {
        let (mut gallery, now) = gallery(3);
        gallery.select(2, now);
        assert_eq!(gallery.active(), 2);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let (mut gallery, now) = gallery(3);
        gallery.select(1, now);
        gallery.select(3, now);
        assert_eq!(gallery.active(), 1);
        gallery.select(usize::MAX, now);
        assert_eq!(gallery.active(), 1);
    }

    #[test]
    fn active_index_stays_in_bounds_under_any_sequence() {
        let (mut gallery, now) = gallery(4);
        for step in 0..40_usize {
            match step % 3 {
                0 => gallery.advance(now),
                1 => gallery.select(step % 7, now),
                _ => {
                    gallery.poll(now + INTERVAL * (step as u32 + 1));
                }
            }
            assert!(gallery.active() < gallery.len());
        }
    }

    #[test]
    fn hover_suspends_and_resumes_autoplay() {
        let (mut gallery, now) = gallery(3);

        gallery.hover_entered();
        assert!(gallery.is_hovered());
        assert!(!gallery.autoplay_running());
        assert!(!gallery.poll(now + INTERVAL * 3));
        assert_eq!(gallery.active(), 0);

        gallery.hover_exited(now);
        assert!(!gallery.is_hovered());
        assert!(gallery.autoplay_running());
    }

    #[test]
    fn select_resets_the_autoplay_interval() {
        let (mut gallery, start) = gallery(3);

        // Selecting half-way through the interval pushes the deadline out.
        gallery.select(1, start + Duration::from_secs(2));
        assert!(!gallery.poll(start + INTERVAL));
        assert!(gallery.poll(start + INTERVAL + Duration::from_secs(2)));
        assert_eq!(gallery.active(), 2);
    }

    #[test]
    fn select_restarts_autoplay_even_while_hovered() {
        let (mut gallery, start) = gallery(3);
        gallery.hover_entered();

        gallery.select(1, start);
        assert!(gallery.autoplay_running());
        assert!(gallery.poll(start + INTERVAL));
        assert_eq!(gallery.active(), 2);
    }

    #[test]
    fn poll_advances_on_the_deadline_and_reschedules() {
        let (mut gallery, start) = gallery(3);

        assert!(!gallery.poll(start + Duration::from_secs(3)));
        assert!(gallery.poll(start + INTERVAL));
        assert_eq!(gallery.active(), 1);

        assert!(!gallery.poll(start + INTERVAL + Duration::from_secs(1)));
        assert!(gallery.poll(start + INTERVAL * 2));
        assert_eq!(gallery.active(), 2);
    }

    #[test]
    fn empty_gallery_never_advances() {
        let (mut gallery, now) = gallery(0);
        gallery.advance(now);
        assert_eq!(gallery.active(), 0);
        assert!(!gallery.autoplay_running());
    }

    #[test]
    fn replace_press_emits_an_event() {
        let (mut gallery, now) = gallery(3);
        let event = update(Message::ReplacePressed, &mut gallery, now);
        assert!(matches!(event, Event::ReplaceRequested));
    }

    #[test]
    fn slide_request_goes_through_select() {
        let (mut gallery, now) = gallery(3);
        let event = update(Message::SlideRequested(2), &mut gallery, now);
        assert!(matches!(event, Event::None));
        assert_eq!(gallery.active(), 2);
    }
}
