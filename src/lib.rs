// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a desktop showcase for a small jewelry house, built with
//! the Iced GUI framework.
//!
//! It renders a scrolling storefront page (hero, collection carousels,
//! about, contact) and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
