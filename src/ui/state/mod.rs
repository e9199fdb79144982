// SPDX-License-Identifier: MPL-2.0
//! Small time-driven state machines shared across the UI.
//!
//! All of them are polled from the tick subscription with an explicit
//! `Instant` instead of reading the clock themselves, which keeps the
//! update logic deterministic and testable.

pub mod debounce;
pub mod smooth_scroll;
pub mod throttle;

// Re-export commonly used types for convenience
pub use debounce::Debouncer;
pub use smooth_scroll::ScrollAnimator;
pub use throttle::Throttle;
