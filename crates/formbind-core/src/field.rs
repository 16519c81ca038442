#![forbid(unsafe_code)]

//! Field declarations and per-field validation state.

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// The kind of input a field represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Single-line text input.
    #[default]
    Text,
    /// Multi-line text input.
    Textarea,
    /// Single choice from a list of options.
    Select,
    /// Boolean toggle carrying an inherent value.
    Checkbox,
    /// A radio group. The value is the checked option; unchecked means
    /// nothing is chosen.
    Radio,
}

impl FieldKind {
    /// Whether the field has a checked state (checkbox or radio group).
    #[must_use]
    pub const fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

// ---------------------------------------------------------------------------
// FieldSpec
// ---------------------------------------------------------------------------

/// Declaration of a field, passed to [`Form::register`](crate::Form::register).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, unique within a form.
    pub name: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Ordered rule names evaluated against the field's value.
    pub validations: Vec<String>,
    /// Initial value (for checkables, the inherent value).
    pub value: String,
    /// Initial checked state. Ignored for non-checkable kinds.
    pub checked: bool,
}

impl FieldSpec {
    /// Declare a field of the given kind with an empty value.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            validations: Vec::new(),
            value: String::new(),
            checked: false,
        }
    }

    /// Declare a single-line text field.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Declare a checkbox with an inherent value.
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

    /// Set the initial value.
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
}

// ---------------------------------------------------------------------------
// ForcedError
// ---------------------------------------------------------------------------

/// An error overlay set out-of-band by [`Form::show_error`](crate::Form::show_error).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcedError {
    /// Hint overriding the rule's registered hint.
    pub hint: Option<String>,
}

// ---------------------------------------------------------------------------
// FieldStatus
// ---------------------------------------------------------------------------

/// Where a field sits in its interaction lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldStatus {
    /// Not yet used or changed by the user.
    Pristine,
    /// Interacted with, all rules pass.
    Valid,
    /// Interacted with, a rule fails.
    Invalid,
}

// ---------------------------------------------------------------------------
// FieldState
// ---------------------------------------------------------------------------

/// Validation state of one registered field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState {
    name: String,
    kind: FieldKind,
    validations: Vec<String>,
    value: String,
    checked: bool,
    pub(crate) is_used: bool,
    pub(crate) is_changed: bool,
    pub(crate) is_valid: bool,
    pub(crate) failing_rule: Option<String>,
    pub(crate) failure_message: Option<String>,
    pub(crate) forced: Option<ForcedError>,
}

impl FieldState {
    /// Create a pristine state from a declaration.
    ///
    /// Validity starts as `true` until the reducer runs.
    #[must_use]
    pub fn from_spec(spec: &FieldSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind,
            validations: spec.validations.clone(),
            value: spec.value.clone(),
            checked: spec.kind.is_checkable() && spec.checked,
            is_used: false,
            is_changed: false,
            is_valid: true,
            failing_rule: None,
            failure_message: None,
            forced: None,
        }
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Ordered rule names for this field.
    #[must_use]
    pub fn validations(&self) -> &[String] {
        &self.validations
    }

    /// The raw value (for checkables, the inherent value).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Checked state; always `false` for non-checkable kinds.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// The value rule predicates see.
    ///
    /// An unchecked checkbox or radio reports the empty string.
    #[must_use]
    pub fn validation_value(&self) -> &str {
        if self.kind.is_checkable() && !self.checked {
            ""
        } else {
            &self.value
        }
    }

    /// Whether the user has left the field (blur) or it was validated explicitly.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.is_used
    }

    /// Whether the value has changed since registration or reset.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.is_changed
    }

    /// Whether every rule in the list passed on the last reducer run.
    ///
    /// This is the computed state and ignores any forced error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Name of the first failing rule from the last reducer run.
    #[must_use]
    pub fn failing_rule(&self) -> Option<&str> {
        self.failing_rule.as_deref()
    }

    /// Message returned by the failing rule, if it supplied one.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    /// The forced error overlay, if set.
    #[must_use]
    pub fn forced_error(&self) -> Option<&ForcedError> {
        self.forced.as_ref()
    }

    /// Whether the field counts as failing for gating: computed or forced.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.is_valid || self.forced.is_some()
    }

    /// Lifecycle status derived from the used/changed flags and validity.
    #[must_use]
    pub fn status(&self) -> FieldStatus {
        if !self.is_used && !self.is_changed {
            FieldStatus::Pristine
        } else if self.is_valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = self.kind.is_checkable() && checked;
    }
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// All field states of one form, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormState {
    fields: Vec<FieldState>,
}

impl FormState {
    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The validation value of a field, if registered.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(FieldState::validation_value)
    }

    /// Iterate fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether any field has a computed or forced error.
    #[must_use]
    pub fn any_error(&self) -> bool {
        self.fields.iter().any(FieldState::has_error)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub(crate) fn push(&mut self, field: FieldState) {
        self.fields.push(field);
    }

    pub(crate) fn remove(&mut self, index: usize) -> FieldState {
        self.fields.remove(index)
    }

    pub(crate) fn at(&self, index: usize) -> &FieldState {
        &self.fields[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut FieldState {
        &mut self.fields[index]
    }
}
