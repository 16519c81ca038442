#![forbid(unsafe_code)]

//! Input adapter: text and checkbox.
//!
//! An unchecked checkbox validates as the empty string, so a `required` rule
//! on it means "must be checked". Radio groups live in [`crate::radio`].

use formbind_core::{FieldKind, FieldSpec};

use crate::FieldWidget;

/// A single-line text or checkbox field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    name: String,
    kind: FieldKind,
    validations: Vec<String>,
    value: String,
    checked: bool,
}

impl Input {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            validations: Vec::new(),
            value: String::new(),
            checked: false,
        }
    }

    /// A single-line text input.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// A checkbox carrying `value` when checked.
    #[must_use]
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox).with_value(value)
    }

    /// Set the ordered rule list.
    #[must_use]
    pub fn with_validations<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validations = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial (or, for checkables, inherent) value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the initial checked state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Input kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

impl FieldWidget for Input {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> FieldSpec {
        FieldSpec::new(self.name.clone(), self.kind)
            .with_validations(self.validations.iter().cloned())
            .with_value(self.value.clone())
            .with_checked(self.checked)
    }
}
