#![forbid(unsafe_code)]

//! Field adapters binding host UI events to a [`Form`].
//!
//! Adapters hold no value state of their own. They register a field when
//! mounted, forward host events to the form, and expose a [`FieldView`]
//! the host renders however it likes.
//!
//! # Example
//!
//! ```rust
//! use formbind_core::{Form, FormConfig};
//! use formbind_widgets::{Button, FieldEvent, FieldWidget, Input};
//!
//! let mut form = Form::new(FormConfig::default());
//! let email = Input::text("email").with_validations(["required", "email"]);
//! let submit = Button::new("Sign up");
//! email.mount(&mut form)?;
//! assert!(submit.is_disabled(&form));
//!
//! email.handle_event(&mut form, &FieldEvent::Input("me@example.com".into()))?;
//! email.handle_event(&mut form, &FieldEvent::Blur)?;
//! assert!(!submit.is_disabled(&form));
//! # Ok::<(), formbind_core::FormError>(())
//! ```

pub mod button;
pub mod hint;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use hint::{ERROR_ICON_DEFAULT, HintDisplay};
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;

use formbind_core::{FieldSpec, FieldState, FieldStatus, Form, FormError, Result};

/// A host event delivered to a field adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text content changed.
    Input(String),
    /// A checkbox or radio group was checked or unchecked.
    Toggle(bool),
    /// An option was picked by index.
    Choose(usize),
    /// The field gained focus.
    Focus,
    /// The field lost focus.
    Blur,
}

/// Render-ready snapshot of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Field name.
    pub name: String,
    /// Current raw value.
    pub value: String,
    /// Checked state (checkables only).
    pub checked: bool,
    /// Lifecycle status.
    pub status: FieldStatus,
    /// Error to show next to the field, if any.
    pub error: Option<HintDisplay>,
}

impl FieldView {
    /// Build the view of a registered field.
    #[must_use]
    pub fn from_form(form: &Form, name: &str) -> Option<Self> {
        let field = form.field(name)?;
        let display = form.display(name).ok()?;
        Some(Self {
            name: field.name().to_string(),
            value: field.value().to_string(),
            checked: field.checked(),
            status: field.status(),
            error: HintDisplay::from_display(&display),
        })
    }

    /// Whether an error is shown.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A field adapter that forwards host events to a [`Form`].
pub trait FieldWidget {
    /// Name of the field this adapter drives.
    fn name(&self) -> &str;

    /// Declaration registered on mount.
    fn spec(&self) -> FieldSpec;

    /// Register the field with the form.
    fn mount(&self, form: &mut Form) -> Result<()> {
        form.register(self.spec()).map(|_| ())
    }

    /// Remove the field from the form.
    fn unmount(&self, form: &mut Form) -> Result<FieldState> {
        form.unregister(self.name())
    }

    /// Apply a host event. Returns `true` if the form changed.
    fn handle_event(&self, form: &mut Form, event: &FieldEvent) -> Result<bool> {
        apply_event(form, self.name(), event)
    }

    /// Snapshot for rendering; `None` if not mounted.
    fn view(&self, form: &Form) -> Option<FieldView> {
        FieldView::from_form(form, self.name())
    }
}

/// Event dispatch shared by adapters.
///
/// Events that don't fit the field's kind return `false` and leave the form
/// alone: `Input` on a checkbox or radio group, `Toggle` on anything else,
/// and `Choose` everywhere.
pub(crate) fn apply_event(form: &mut Form, name: &str, event: &FieldEvent) -> Result<bool> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("field_event", field = name, event = ?event).entered();

    let checkable = form
        .field(name)
        .map(|field| field.kind().is_checkable())
        .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

    match event {
        FieldEvent::Input(_) if checkable => Ok(false),
        FieldEvent::Toggle(_) if !checkable => Ok(false),
        FieldEvent::Input(value) => {
            form.set_value(name, value.clone())?;
            Ok(true)
        }
        FieldEvent::Toggle(checked) => {
            form.set_checked(name, *checked)?;
            Ok(true)
        }
        FieldEvent::Blur => {
            form.blur(name)?;
            Ok(true)
        }
        FieldEvent::Choose(_) | FieldEvent::Focus => Ok(false),
    }
}
