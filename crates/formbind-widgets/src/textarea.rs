#![forbid(unsafe_code)]

//! Multi-line text adapter.

use formbind_core::{FieldKind, FieldSpec};

use crate::FieldWidget;

/// A multi-line text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textarea {
    name: String,
    validations: Vec<String>,
    value: String,
}

impl Textarea {
    /// Create an empty textarea.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validations: Vec::new(),
            value: String::new(),
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

    /// Set the initial text.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl FieldWidget for Textarea {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> FieldSpec {
        FieldSpec::new(self.name.clone(), FieldKind::Textarea)
            .with_validations(self.validations.iter().cloned())
            .with_value(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldEvent;
    use formbind_core::{Form, FormConfig, RuleRegistry, builtin};

    #[test]
    fn multiline_value_validated() {
        let registry = RuleRegistry::with_builtins().with_rule(builtin::max_length("short", 10));
        let mut form = Form::new(FormConfig::new(registry));
        let bio = Textarea::new("bio")
            .with_value("hi")
            .with_validations(["required", "short"]);
        bio.mount(&mut form).unwrap();
        assert_eq!(form.field("bio").unwrap().kind(), FieldKind::Textarea);
        assert!(form.field("bio").unwrap().is_valid());

        bio.handle_event(&mut form, &FieldEvent::Input("line one\nline two".into()))
            .unwrap();
        bio.handle_event(&mut form, &FieldEvent::Blur).unwrap();
        let view = bio.view(&form).unwrap();
        assert_eq!(view.error.unwrap().message(), "Must be at most 10 characters");
    }
}
