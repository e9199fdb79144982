// SPDX-License-Identifier: MPL-2.0
//! The notification value the manager schedules and the toast renders.
//!
//! A notification carries an i18n key rather than resolved text, so a
//! locale switch mid-display picks up the new catalog on the next
//! render.

use crate::ui::design_tokens::palette;
use iced::Color;

/// How the toast is tinted. Timing is identical for every severity;
/// the lifecycle lives in the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Accent color used for the toast border and icon.
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    fn tagged(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::tagged(Severity::Info, message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::tagged(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::tagged(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::tagged(Severity::Error, message_key)
    }

    /// Attaches a Fluent argument substituted into the message at
    /// render time.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_severity_gets_its_own_accent() {
        let accents: Vec<Color> = [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ]
        .into_iter()
        .map(Severity::accent_color)
        .collect();

        for (i, first) in accents.iter().enumerate() {
            for second in &accents[i + 1..] {
                assert_ne!(first, second);
            }
        }
    }

    #[test]
    fn constructors_tag_the_matching_severity() {
        assert_eq!(Notification::info("k").severity(), Severity::Info);
        assert_eq!(Notification::success("k").severity(), Severity::Success);
        assert_eq!(Notification::warning("k").severity(), Severity::Warning);
        assert_eq!(Notification::error("k").severity(), Severity::Error);
    }

    #[test]
    fn args_accumulate_in_order() {
        let notification = Notification::success("notification-image-replaced")
            .with_arg("name", "solitaire.png")
            .with_arg("collection", "rings");

        assert_eq!(notification.message_key(), "notification-image-replaced");
        assert_eq!(
            notification.message_args(),
            &[
                ("name".to_string(), "solitaire.png".to_string()),
                ("collection".to_string(), "rings".to_string()),
            ]
        );
    }
}
