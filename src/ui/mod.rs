// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`gallery`] - Per-collection image carousel with autoplay
//! - [`contact`] - Contact form with validation and simulated submit
//! - [`replace_modal`] - Image replacement dialog with picker and drop zone
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`scroll_effects`] - Scroll-driven reveals and the navbar style swap
//! - [`notifications`] - Toast notification system for user feedback
//! - [`state`] - Reusable timer state machines (debounce, throttle, tween)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod replace_modal;
pub mod scroll_effects;
pub mod state;
pub mod styles;
pub mod theming;
