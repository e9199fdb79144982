// SPDX-License-Identifier: MPL-2.0
//! Compatibility shim for legacy one-based slide jumps.
//!
//! Older call sites addressed slides starting at 1 and tolerated junk
//! input, falling back to the first slide. New code should call
//! [`Gallery::select`] with a zero-based index directly; this shim only
//! exists to keep those legacy jump requests working.

use super::Gallery;
use std::time::Instant;

/// Jumps to a one-based slide number.
///
/// Zero, negative, and otherwise nonsensical numbers land on the first
/// slide. Numbers past the end defer to [`Gallery::select`], which
/// ignores them.
pub fn select_one_based(gallery: &mut Gallery, number: i64, now: Instant) {
    let index = if number > 1 {
        (number - 1) as usize
    } else {
        0
    };
    gallery.select(index, now);
}
