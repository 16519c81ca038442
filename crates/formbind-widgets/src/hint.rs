#![forbid(unsafe_code)]

//! Inline error hint shown next to a field.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Error visible, no hint | Icon only |
//! | Error hidden | No `HintDisplay` is built |

use formbind_core::FieldDisplay;
use unicode_width::UnicodeWidthStr;

/// Default error icon.
pub const ERROR_ICON_DEFAULT: &str = "⚠";

/// An error hint ready for the host to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintDisplay {
    message: String,
    rule: Option<String>,
    icon: String,
    forced: bool,
}

impl HintDisplay {
    /// Create a hint with the default icon.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule: None,
            icon: ERROR_ICON_DEFAULT.to_string(),
            forced: false,
        }
    }

    /// Build from a form's display state; `None` when no error is visible.
    #[must_use]
    pub fn from_display(display: &FieldDisplay) -> Option<Self> {
        if !display.visible {
            return None;
        }
        Some(Self {
            message: display.hint.clone().unwrap_or_default(),
            rule: display.rule.clone(),
            icon: ERROR_ICON_DEFAULT.to_string(),
            forced: display.forced,
        })
    }

    /// Set a custom icon (default: "⚠").
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// The hint message; empty when only the icon should show.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rule that produced the error, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Whether the error was forced by the application.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// Icon followed by the message, separated by a space.
    #[must_use]
    pub fn text(&self) -> String {
        if self.message.is_empty() {
            self.icon.clone()
        } else {
            format!("{} {}", self.icon, self.message)
        }
    }

    /// Display width in terminal cells of [`text`](Self::text).
    #[must_use]
    pub fn min_width(&self) -> usize {
        let icon_width = UnicodeWidthStr::width(self.icon.as_str());
        if self.message.is_empty() {
            icon_width
        } else {
            icon_width + 1 + UnicodeWidthStr::width(self.message.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_display_builds_nothing() {
        assert_eq!(HintDisplay::from_display(&FieldDisplay::default()), None);
    }

    #[test]
    fn from_visible_display() {
        let display = FieldDisplay {
            visible: true,
            forced: false,
            rule: Some("required".into()),
            hint: Some("This field is required".into()),
        };
        let hint = HintDisplay::from_display(&display).unwrap();
        assert_eq!(hint.rule(), Some("required"));
        assert!(!hint.is_forced());
        assert_eq!(hint.text(), "⚠ This field is required");
    }

    #[test]
    fn icon_only_without_message() {
        let display = FieldDisplay {
            visible: true,
            forced: true,
            rule: None,
            hint: None,
        };
        let hint = HintDisplay::from_display(&display).unwrap().with_icon("!");
        assert_eq!(hint.text(), "!");
        assert_eq!(hint.min_width(), 1);
        assert!(hint.is_forced());
    }

    #[test]
    fn width_counts_cells() {
        let hint = HintDisplay::new("日本").with_icon("!");
        assert_eq!(hint.min_width(), 1 + 1 + 4);
    }
}
