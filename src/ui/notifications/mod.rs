// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. A toast appears briefly to confirm an
//! action (form sent, image replaced, errors) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - Single-slot `Manager` for lifecycle timing
//! - [`toast`] - Toast widget component for rendering
//!
//! # Design Considerations
//!
//! - One toast at a time; pushing replaces the current one
//! - Lifecycle: 100ms show delay, 4s on screen, 300ms fade-out
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
