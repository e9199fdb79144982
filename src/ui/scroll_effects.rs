// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven effects: entrance reveals and the navbar style swap.
//!
//! The page is a single vertical scrollable with fixed section metrics,
//! so target rectangles can be reconstructed from [`layout`] constants
//! instead of being measured. A target is revealed once at least 10% of
//! it enters the viewport band (the viewport minus a 50 px bottom
//! margin); the reveal is one-directional and never re-hides.
//!
//! The navbar swap is recomputed on every scroll report; the reveal
//! scan itself is throttled to one pass per frame interval.

use crate::config::{
    NAVBAR_RAISE_THRESHOLD, REVEAL_BOTTOM_MARGIN, REVEAL_FADE_MS, REVEAL_VISIBILITY_RATIO,
    SCROLL_THROTTLE_MS,
};
use crate::ui::design_tokens::layout;
use crate::ui::navbar::Section;
use crate::ui::state::Throttle;
use std::time::{Duration, Instant};

// =============================================================================
// Page geometry
// =============================================================================

/// Vertical page metrics derived from the layout constants and the
/// loaded content counts.
///
/// The view lays sections out with the same constants, so these numbers
/// track rendered positions without any measurement pass.
#[derive(Debug, Clone, Copy)]
pub struct PageMetrics {
    card_count: usize,
    team_count: usize,
}

impl PageMetrics {
    #[must_use]
    pub fn new(card_count: usize, team_count: usize) -> Self {
        Self {
            card_count,
            team_count,
        }
    }

    #[must_use]
    pub fn collection_top(&self) -> f32 {
        layout::HERO_HEIGHT
    }

    #[must_use]
    pub fn about_top(&self) -> f32 {
        self.collection_top()
            + layout::SECTION_PAD
            + layout::SECTION_TITLE_HEIGHT
            + grid_height(
                self.card_count,
                layout::CARDS_PER_ROW,
                layout::CARD_HEIGHT,
                layout::CARD_GAP,
            )
            + layout::SECTION_PAD
    }

    #[must_use]
    pub fn contact_top(&self) -> f32 {
        self.about_top()
            + layout::SECTION_PAD
            + layout::SECTION_TITLE_HEIGHT
            + layout::ABOUT_TEXT_HEIGHT
            + layout::CARD_GAP
            + layout::SECTION_TITLE_HEIGHT
            + grid_height(
                self.team_count,
                layout::TEAM_PER_ROW,
                layout::TEAM_MEMBER_HEIGHT,
                layout::CARD_GAP,
            )
            + layout::SECTION_PAD
    }

    #[must_use]
    pub fn page_height(&self) -> f32 {
        self.contact_top()
            + layout::SECTION_PAD
            + layout::SECTION_TITLE_HEIGHT
            + layout::CONTACT_FORM_HEIGHT
            + layout::SECTION_PAD
            + layout::FOOTER_HEIGHT
    }

    /// Top edge of a navigation section.
    #[must_use]
    pub fn section_top(&self, section: Section) -> f32 {
        match section {
            Section::Home => 0.0,
            Section::Collection => self.collection_top(),
            Section::About => self.about_top(),
            Section::Contact => self.contact_top(),
        }
    }

    /// The largest scroll offset the page allows for a viewport height.
    #[must_use]
    pub fn max_scroll_offset(&self, viewport_height: f32) -> f32 {
        (self.page_height() - viewport_height).max(0.0)
    }

    /// Vertical span `(top, height)` of a reveal target, or `None` for
    /// an index past the loaded content.
    #[must_use]
    pub fn target_span(&self, target: RevealTarget) -> Option<(f32, f32)> {
        match target {
            RevealTarget::Card(index) => {
                if index >= self.card_count {
                    return None;
                }
                let row = index / layout::CARDS_PER_ROW;
                let top = self.collection_top()
                    + layout::SECTION_PAD
                    + layout::SECTION_TITLE_HEIGHT
                    + row as f32 * (layout::CARD_HEIGHT + layout::CARD_GAP);
                Some((top, layout::CARD_HEIGHT))
            }
            RevealTarget::AboutText => {
                let top = self.about_top() + layout::SECTION_PAD + layout::SECTION_TITLE_HEIGHT;
                Some((top, layout::ABOUT_TEXT_HEIGHT))
            }
            RevealTarget::TeamMember(index) => {
                if index >= self.team_count {
                    return None;
                }
                let row = index / layout::TEAM_PER_ROW;
                let top = self.about_top()
                    + layout::SECTION_PAD
                    + layout::SECTION_TITLE_HEIGHT
                    + layout::ABOUT_TEXT_HEIGHT
                    + layout::CARD_GAP
                    + layout::SECTION_TITLE_HEIGHT
                    + row as f32 * (layout::TEAM_MEMBER_HEIGHT + layout::CARD_GAP);
                Some((top, layout::TEAM_MEMBER_HEIGHT))
            }
        }
    }
}

fn grid_height(items: usize, per_row: usize, row_height: f32, gap: f32) -> f32 {
    let rows = items.div_ceil(per_row);
    if rows == 0 {
        0.0
    } else {
        rows as f32 * row_height + (rows - 1) as f32 * gap
    }
}

// =============================================================================
// Reveal state
// =============================================================================

/// An element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    Card(usize),
    AboutText,
    TeamMember(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealPhase {
    Hidden,
    FadingIn { since: Instant, alpha: f32 },
    Visible,
}

/// Scroll-effect state: one reveal phase per target plus the navbar flag.
#[derive(Debug)]
pub struct ScrollEffects {
    navbar_raised: bool,
    reveals: Vec<RevealPhase>,
    card_count: usize,
    team_count: usize,
    throttle: Throttle,
}

impl ScrollEffects {
    /// Creates the effect state for the loaded content.
    ///
    /// With reveal animations disabled every target starts visible and
    /// nothing ever animates.
    #[must_use]
    pub fn new(card_count: usize, team_count: usize, animations_enabled: bool) -> Self {
        let phase = if animations_enabled {
            RevealPhase::Hidden
        } else {
            RevealPhase::Visible
        };

        Self {
            navbar_raised: false,
            reveals: vec![phase; card_count + 1 + team_count],
            card_count,
            team_count,
            throttle: Throttle::new(Duration::from_millis(SCROLL_THROTTLE_MS)),
        }
    }

    #[must_use]
    pub fn navbar_raised(&self) -> bool {
        self.navbar_raised
    }

    /// Handles a scroll report.
    ///
    /// The navbar flag is recomputed on every call; the reveal scan runs
    /// at most once per frame interval.
    pub fn on_scroll(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        metrics: &PageMetrics,
        now: Instant,
    ) {
        self.navbar_raised = offset_y > NAVBAR_RAISE_THRESHOLD;

        if self.throttle.ready(now) {
            self.scan(offset_y, viewport_height, metrics, now);
        }
    }

    /// Runs the reveal scan unconditionally.
    ///
    /// Used for the initial layout and after a settled window resize,
    /// where skipping a scan would leave exposed targets hidden.
    pub fn rescan(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        metrics: &PageMetrics,
        now: Instant,
    ) {
        self.throttle.reset();
        self.navbar_raised = offset_y > NAVBAR_RAISE_THRESHOLD;
        self.scan(offset_y, viewport_height, metrics, now);
    }

    fn scan(&mut self, offset_y: f32, viewport_height: f32, metrics: &PageMetrics, now: Instant) {
        let band_top = offset_y;
        let band_bottom = offset_y + (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);

        for index in 0..self.reveals.len() {
            if self.reveals[index] != RevealPhase::Hidden {
                continue;
            }
            let Some((top, height)) = metrics.target_span(self.target_at(index)) else {
                continue;
            };

            let overlap = (band_bottom.min(top + height) - band_top.max(top)).max(0.0);
            if overlap >= REVEAL_VISIBILITY_RATIO * height {
                self.reveals[index] = RevealPhase::FadingIn {
                    since: now,
                    alpha: 0.0,
                };
            }
        }
    }

    /// Advances running fade-ins. Called from the tick subscription.
    pub fn tick(&mut self, now: Instant) {
        let fade = Duration::from_millis(REVEAL_FADE_MS);
        for phase in &mut self.reveals {
            if let RevealPhase::FadingIn { since, alpha } = phase {
                let elapsed = now.saturating_duration_since(*since);
                if elapsed >= fade {
                    *phase = RevealPhase::Visible;
                } else {
                    let t = elapsed.as_secs_f32() / fade.as_secs_f32();
                    *alpha = ease_out_quad(t);
                }
            }
        }
    }

    /// Current opacity of a target, in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self, target: RevealTarget) -> f32 {
        match self.index_of(target) {
            Some(index) => match self.reveals[index] {
                RevealPhase::Hidden => 0.0,
                RevealPhase::FadingIn { alpha, .. } => alpha,
                RevealPhase::Visible => 1.0,
            },
            // Targets outside the loaded content render fully visible.
            None => 1.0,
        }
    }

    /// Whether any fade-in is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.reveals
            .iter()
            .any(|phase| matches!(phase, RevealPhase::FadingIn { .. }))
    }

    fn target_at(&self, index: usize) -> RevealTarget {
        if index < self.card_count {
            RevealTarget::Card(index)
        } else if index == self.card_count {
            RevealTarget::AboutText
        } else {
            RevealTarget::TeamMember(index - self.card_count - 1)
        }
    }

    fn index_of(&self, target: RevealTarget) -> Option<usize> {
        match target {
            RevealTarget::Card(index) if index < self.card_count => Some(index),
            RevealTarget::AboutText => Some(self.card_count),
            RevealTarget::TeamMember(index) if index < self.team_count => {
                Some(self.card_count + 1 + index)
            }
            _ => None,
        }
    }
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
