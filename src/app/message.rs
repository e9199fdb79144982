// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::replace_modal;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// A message for the carousel of one collection card.
    Gallery {
        collection: usize,
        message: gallery::Message,
    },
    Contact(contact::Message),
    ReplaceModal(replace_modal::Message),
    Notification(notifications::NotificationMessage),
    /// Scroll to a page section, offset for the fixed navbar.
    NavigateTo(navbar::Section),
    /// The page scrollable reported a new viewport.
    PageScrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
    },
    /// The window was resized; reveal targets are rescanned once the
    /// size settles.
    WindowResized(Size),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A dragged file entered the window.
    FileHovered,
    /// Dragged files left the window without dropping.
    FilesHoveredLeft,
    EscapePressed,
    /// Periodic tick driving the deadline-based state machines.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory holding showcase collections. Takes precedence
    /// over the configured content directory.
    pub content_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
