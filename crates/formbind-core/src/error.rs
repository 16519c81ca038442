#![forbid(unsafe_code)]

//! Error type for form operations.

use std::fmt;

/// Errors raised by [`Form`](crate::Form) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field with this name is registered.
    UnknownField(String),
    /// A field with this name is already registered.
    DuplicateField(String),
    /// A field's validation list names a rule missing from the registry.
    ///
    /// Only raised under [`UnknownRulePolicy::Error`](crate::UnknownRulePolicy::Error).
    UnknownRule {
        /// Field whose validation list references the rule.
        field: String,
        /// The missing rule name.
        rule: String,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "no field named `{name}` is registered"),
            Self::DuplicateField(name) => write!(f, "field `{name}` is already registered"),
            Self::UnknownRule { field, rule } => {
                write!(f, "field `{field}` references unknown rule `{rule}`")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Standard result type for formbind APIs.
pub type Result<T> = std::result::Result<T, FormError>;
