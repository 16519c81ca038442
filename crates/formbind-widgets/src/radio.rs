#![forbid(unsafe_code)]

//! Radio group adapter.
//!
//! The whole group is one field. Its value is the checked option, so
//! checking one option replaces the previous choice and a `required` rule
//! is met by any of them.

use formbind_core::{FieldKind, FieldSpec, Form, Result};

use crate::{FieldEvent, FieldWidget, apply_event};

/// A set of mutually exclusive options bound to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioGroup {
    name: String,
    options: Vec<String>,
    validations: Vec<String>,
    initial: Option<usize>,
}

impl RadioGroup {
    /// Create a group over option values, nothing checked.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
            validations: Vec::new(),
            initial: None,
        }
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

    /// Check an option initially. Out-of-range indices leave the group unchecked.
    #[must_use]
    pub fn with_checked(mut self, index: usize) -> Self {
        self.initial = (index < self.options.len()).then_some(index);
        self
    }

    /// Option values.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the checked option, if any.
    #[must_use]
    pub fn selected(&self, form: &Form) -> Option<usize> {
        let field = form.field(&self.name)?;
        if !field.checked() {
            return None;
        }
        self.options.iter().position(|o| o == field.value())
    }
}

impl FieldWidget for RadioGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> FieldSpec {
        let value = self
            .initial
            .and_then(|i| self.options.get(i))
            .cloned()
            .unwrap_or_default();
        FieldSpec::new(self.name.clone(), FieldKind::Radio)
            .with_validations(self.validations.iter().cloned())
            .with_value(value)
            .with_checked(self.initial.is_some())
    }

    /// `Choose` and `Input` check a listed option; `Toggle(false)` clears the
    /// group. `Toggle(true)` names no option and is ignored.
    fn handle_event(&self, form: &mut Form, event: &FieldEvent) -> Result<bool> {
        let value = match event {
            FieldEvent::Choose(index) => self.options.get(*index),
            FieldEvent::Input(value) => self.options.iter().find(|o| *o == value),
            FieldEvent::Toggle(true) => return Ok(false),
            _ => return apply_event(form, &self.name, event),
        };
        match value {
            Some(value) => {
                form.choose(&self.name, value.clone())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
