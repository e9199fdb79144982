// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: Carousel rotation interval bounds
//! - **Reveal**: Scroll-triggered entrance animation thresholds
//! - **Scrolling**: Navbar raise threshold and animated anchor scrolling
//! - **Rate limiting**: Debounce and throttle windows for high-frequency events

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default carousel rotation interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum allowed autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum allowed autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of a reveal target that must enter the viewport before it
/// becomes visible (0.1 = 10%).
pub const REVEAL_VISIBILITY_RATIO: f32 = 0.1;

/// Margin subtracted from the bottom of the viewport when measuring
/// intersections, so targets reveal slightly before fully scrolled in.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Duration of the entrance fade, in milliseconds.
pub const REVEAL_FADE_MS: u64 = 300;

// ==========================================================================
// Scrolling Defaults
// ==========================================================================

/// Vertical scroll offset past which the navbar switches to its raised
/// (condensed, shadowed) visual state.
pub const NAVBAR_RAISE_THRESHOLD: f32 = 100.0;

/// Duration of the animated anchor scroll, in milliseconds.
pub const SMOOTH_SCROLL_MS: u64 = 400;

/// Height subtracted from an anchor target's position so the fixed
/// navigation bar does not cover the section heading.
pub const HEADER_SCROLL_OFFSET: f32 = 80.0;

// ==========================================================================
// Rate-limiting Defaults
// ==========================================================================

/// Minimum gap between successive reveal scans while scrolling.
pub const SCROLL_THROTTLE_MS: u64 = 16;

/// Quiet period after the last window resize before relayout runs.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated delivery time for a submitted contact form, in milliseconds.
/// There is no backend; the success notification is raised after this delay.
pub const SUBMIT_SIMULATION_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    // Reveal validation
    assert!(REVEAL_VISIBILITY_RATIO > 0.0);
    assert!(REVEAL_VISIBILITY_RATIO <= 1.0);
    assert!(REVEAL_BOTTOM_MARGIN >= 0.0);
    assert!(REVEAL_FADE_MS > 0);

    // Scrolling validation
    assert!(NAVBAR_RAISE_THRESHOLD > 0.0);
    assert!(SMOOTH_SCROLL_MS > 0);

    // Rate-limiting validation
    assert!(SCROLL_THROTTLE_MS > 0);
    assert!(RESIZE_DEBOUNCE_MS > SCROLL_THROTTLE_MS);

    // Contact form validation
    assert!(SUBMIT_SIMULATION_MS > 0);
};
