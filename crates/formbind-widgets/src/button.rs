#![forbid(unsafe_code)]

//! Submit button adapter.

use formbind_core::{Form, FormState, Result, SubmitOutcome};

/// A submit button whose disabled state follows the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    disabled: Option<bool>,
}

impl Button {
    /// Create a button that is disabled while any field has an error.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: None,
        }
    }

    /// Override the disabled state regardless of the form.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button is disabled. An explicit override wins.
    #[must_use]
    pub fn is_disabled(&self, form: &Form) -> bool {
        self.disabled.unwrap_or_else(|| form.has_errors())
    }

    /// Submit the form unless the button is disabled.
    ///
    /// Returns `None` when disabled; otherwise the form's submit outcome.
    pub fn press<T, F>(&self, form: &mut Form, handler: F) -> Result<Option<SubmitOutcome<T>>>
    where
        F: FnOnce(&FormState) -> T,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("button_press", label = %self.label).entered();

        if self.is_disabled(form) {
            return Ok(None);
        }
        form.submit(handler).map(Some)
    }
}
