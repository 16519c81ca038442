#![forbid(unsafe_code)]

//! Single-choice adapter.

use formbind_core::{FieldKind, FieldSpec, Form, Result};

use crate::{FieldEvent, FieldWidget, apply_event};

/// A dropdown-style single choice.
///
/// The initial value is the first option's value. A leading empty option
/// works as a "please choose" placeholder that `required` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    name: String,
    options: Vec<String>,
    validations: Vec<String>,
    initial: usize,
}

impl Select {
    /// Create a select over option values.
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
            initial: 0,
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

    /// Pre-select an option by index. Out-of-range indices are clamped.
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        self.initial = index.min(self.options.len().saturating_sub(1));
        self
    }

    /// Option values.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the option matching the form's current value.
    #[must_use]
    pub fn selected(&self, form: &Form) -> Option<usize> {
        let value = form.field(&self.name)?.value();
        self.options.iter().position(|o| o == value)
    }
}

impl FieldWidget for Select {
    fn name(&self) -> &str {
        &self.name
    }

    fn spec(&self) -> FieldSpec {
        FieldSpec::new(self.name.clone(), FieldKind::Select)
            .with_validations(self.validations.iter().cloned())
            .with_value(self.options.get(self.initial).cloned().unwrap_or_default())
    }

    /// `Choose` picks an option; `Input` is accepted only for a listed value.
    fn handle_event(&self, form: &mut Form, event: &FieldEvent) -> Result<bool> {
        match event {
            FieldEvent::Choose(index) => match self.options.get(*index) {
                Some(value) => {
                    form.set_value(&self.name, value.clone())?;
                    Ok(true)
                }
                None => Ok(false),
            },
            FieldEvent::Input(value) if !self.options.contains(value) => Ok(false),
            _ => apply_event(form, &self.name, event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formbind_core::FormConfig;

    fn city() -> Select {
        Select::new("city", ["", "London", "Kyiv"]).with_validations(["required"])
    }

    #[test]
    fn placeholder_option_fails_required() {
        let mut form = Form::new(FormConfig::default());
        let select = city();
        select.mount(&mut form).unwrap();
        assert_eq!(select.selected(&form), Some(0));
        assert_eq!(form.field("city").unwrap().failing_rule(), Some("required"));
    }

    #[test]
    fn choose_sets_value() {
        let mut form = Form::new(FormConfig::default());
        let select = city();
        select.mount(&mut form).unwrap();
        assert!(select.handle_event(&mut form, &FieldEvent::Choose(2)).unwrap());
        assert_eq!(select.selected(&form), Some(2));
        assert_eq!(form.field("city").unwrap().value(), "Kyiv");
        assert!(form.field("city").unwrap().is_valid());
    }

    #[test]
    fn out_of_range_choice_ignored() {
        let mut form = Form::new(FormConfig::default());
        let select = city();
        select.mount(&mut form).unwrap();
        assert!(!select.handle_event(&mut form, &FieldEvent::Choose(9)).unwrap());
        assert!(!form.field("city").unwrap().is_changed());
    }

    #[test]
    fn input_limited_to_options() {
        let mut form = Form::new(FormConfig::default());
        let select = city();
        select.mount(&mut form).unwrap();
        assert!(!select
            .handle_event(&mut form, &FieldEvent::Input("Paris".into()))
            .unwrap());
        assert!(select
            .handle_event(&mut form, &FieldEvent::Input("London".into()))
            .unwrap());
        assert_eq!(select.selected(&form), Some(1));
    }

    #[test]
    fn preselected_option() {
        let mut form = Form::new(FormConfig::default());
        let select = city().with_selected(7);
        select.mount(&mut form).unwrap();
        assert_eq!(form.field("city").unwrap().value(), "Kyiv");
    }
}
