// SPDX-License-Identifier: MPL-2.0
//! Image handling for showcase content and user-supplied replacements.
//!
//! Everything displayed by the application goes through this module: embedded
//! sample slides, images scanned from a content directory, and files picked
//! or dropped by the user for in-place replacement.

pub mod image;

use std::path::Path;

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

/// Supported image extensions
pub mod extensions {
    /// Image file extensions accepted by the file picker and drag-and-drop.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Checks whether a path refers to a displayable image, judged by extension.
///
/// This is the acceptance gate for dropped and picked files; anything else
/// is rejected before any decoding is attempted.
#[must_use]
pub fn is_image_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            extensions::IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}
