#![forbid(unsafe_code)]

//! Per-form configuration.

use crate::registry::RuleRegistry;

/// What to do when a field names a rule the registry does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRulePolicy {
    /// Skip the rule as if it passed, logging a warning.
    #[default]
    Skip,
    /// Treat the rule as failing.
    Fail,
    /// Abort the validation pass with [`FormError::UnknownRule`](crate::FormError::UnknownRule).
    Error,
}

/// When a computed error becomes visible to the user.
///
/// Forced errors from [`Form::show_error`](crate::Form::show_error) are always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorVisibility {
    /// After the field has been both changed and used (blurred).
    #[default]
    Interacted,
    /// As soon as the value changes.
    Changed,
    /// Whenever the field is invalid, including pristine fields.
    Immediate,
}

impl ErrorVisibility {
    /// Whether an invalid field with these flags shows its error.
    #[must_use]
    pub const fn shows(self, is_used: bool, is_changed: bool) -> bool {
        match self {
            Self::Interacted => is_used && is_changed,
            Self::Changed => is_changed,
            Self::Immediate => true,
        }
    }
}

/// Configuration for one [`Form`](crate::Form).
///
/// # Example
///
/// ```rust
/// use formbind_core::{ErrorVisibility, FormConfig, RuleRegistry, UnknownRulePolicy};
///
/// let config = FormConfig::new(RuleRegistry::with_builtins())
///     .with_unknown_rules(UnknownRulePolicy::Error)
///     .with_error_visibility(ErrorVisibility::Changed);
/// assert!(config.block_invalid_submit);
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Rules available to this form.
    pub registry: RuleRegistry,
    /// Handling of rule names missing from the registry.
    pub unknown_rules: UnknownRulePolicy,
    /// When computed errors are displayed.
    pub error_visibility: ErrorVisibility,
    /// Refuse to call the submit handler while any field has an error.
    pub block_invalid_submit: bool,
    /// On a blocked submit, mark failing fields used and changed.
    pub reveal_errors_on_submit: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            registry: RuleRegistry::with_builtins(),
            unknown_rules: UnknownRulePolicy::default(),
            error_visibility: ErrorVisibility::default(),
            block_invalid_submit: true,
            reveal_errors_on_submit: true,
        }
    }
}

impl FormConfig {
    /// Default configuration using the given registry.
    #[must_use]
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Set the unknown-rule policy.
    #[must_use]
    pub fn with_unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    /// Set the error visibility policy.
    #[must_use]
    pub fn with_error_visibility(mut self, visibility: ErrorVisibility) -> Self {
        self.error_visibility = visibility;
        self
    }

    /// Set whether invalid forms block submission.
    #[must_use]
    pub fn with_block_invalid_submit(mut self, block: bool) -> Self {
        self.block_invalid_submit = block;
        self
    }

    /// Set whether a blocked submit reveals field errors.
    #[must_use]
    pub fn with_reveal_errors_on_submit(mut self, reveal: bool) -> Self {
        self.reveal_errors_on_submit = reveal;
        self
    }
}
