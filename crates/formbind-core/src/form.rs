#![forbid(unsafe_code)]

//! The form orchestrator.
//!
//! A [`Form`] owns the [`FormState`] of one form instance. Field adapters
//! register themselves with [`Form::register`] when created and leave with
//! [`Form::unregister`]; every change goes through the form, which reruns the
//! reducer for every field so cross-field rules stay current.
//!
//! # Example
//!
//! ```rust
//! use formbind_core::{FieldSpec, Form, FormConfig};
//!
//! let mut form = Form::new(FormConfig::default());
//! form.register(FieldSpec::text("email").with_validations(["required", "email"]))?;
//!
//! form.set_value("email", "not-an-email")?;
//! form.blur("email")?;
//! assert_eq!(form.display("email")?.rule.as_deref(), Some("email"));
//!
//! form.set_value("email", "user@example.com")?;
//! assert!(form.validate_all()?.is_empty());
//! # Ok::<(), formbind_core::FormError>(())
//! ```

use crate::config::{FormConfig, UnknownRulePolicy};
use crate::error::{FormError, Result};
use crate::field::{FieldSpec, FieldState, ForcedError, FormState};
use crate::reducer::{Verdict, reduce_field};
use crate::rule::Hint;

/// Report key used for a forced error on a field whose rules all pass.
pub const FORCED_RULE: &str = "forced";

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

/// Invalid fields and their first failing rule, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    failures: Vec<(String, String)>,
}

impl ValidationReport {
    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// The failing rule for a field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.failures
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule.as_str())
    }

    /// Whether the field failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterate `(field, rule)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.failures
            .iter()
            .map(|(field, rule)| (field.as_str(), rule.as_str()))
    }
}

// ---------------------------------------------------------------------------
// FieldDisplay
// ---------------------------------------------------------------------------

/// What the host should show for a field's error slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDisplay {
    /// Whether an error is shown.
    pub visible: bool,
    /// Whether the shown error comes from [`Form::show_error`].
    pub forced: bool,
    /// Rule responsible for the error, if any.
    pub rule: Option<String>,
    /// Hint content to render.
    pub hint: Option<Hint>,
}

// ---------------------------------------------------------------------------
// SubmitOutcome
// ---------------------------------------------------------------------------

/// Result of [`Form::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// The handler ran and produced a value.
    Submitted(T),
    /// Submission was refused; the report lists the failing fields.
    Blocked(ValidationReport),
}

impl<T> SubmitOutcome<T> {
    /// Whether the handler ran.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Orchestrates validation for a set of named fields.
#[derive(Debug, Clone, Default)]
pub struct Form {
    config: FormConfig,
    state: FormState,
    initial: Vec<FieldSpec>,
}

impl Form {
    /// Create an empty form.
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            state: FormState::default(),
            initial: Vec::new(),
        }
    }

    /// The form's configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Read-only view of all field states.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Look up a field's state.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.state.get(name)
    }

    /// Whether any field has a computed or forced error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.state.any_error()
    }

    /// `(name, validation value)` for every field, in registration order.
    #[must_use]
    pub fn values(&self) -> Vec<(&str, &str)> {
        self.state
            .iter()
            .map(|f| (f.name(), f.validation_value()))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Add a field.
    ///
    /// The reducer runs once so validity is known before any interaction;
    /// the field stays pristine. Under [`UnknownRulePolicy::Error`] every rule
    /// name is checked here, so later events cannot fail on a missing rule.
    pub fn register(&mut self, spec: FieldSpec) -> Result<&FieldState> {
        if self.state.position(&spec.name).is_some() {
            return Err(FormError::DuplicateField(spec.name));
        }
        if self.config.unknown_rules == UnknownRulePolicy::Error {
            let registry = &self.config.registry;
            if let Some(rule) = spec.validations.iter().find(|r| !registry.contains(r)) {
                return Err(FormError::UnknownRule {
                    field: spec.name.clone(),
                    rule: rule.clone(),
                });
            }
        }
        crate::debug!(field = %spec.name, kind = ?spec.kind, "field registered");
        let before = self.state.clone();
        self.state.push(FieldState::from_spec(&spec));
        if let Err(err) = self.recompute_all() {
            self.state = before;
            return Err(err);
        }
        self.initial.push(spec);
        Ok(self.state.at(self.state.len() - 1))
    }

    /// Remove a field, returning its last state.
    ///
    /// Fields with a cross-field rule on the removed one are rechecked.
    pub fn unregister(&mut self, name: &str) -> Result<FieldState> {
        let index = self.index(name)?;
        self.initial.retain(|spec| spec.name != name);
        crate::debug!(field = name, "field unregistered");
        let removed = self.state.remove(index);
        self.recompute_all()?;
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Field events
    // -----------------------------------------------------------------------

    /// Replace a field's value and mark it changed.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<&FieldState> {
        let value = value.into();
        self.update(name, |field| {
            field.set_value(value);
            field.is_changed = true;
        })
    }

    /// Set a checkbox or radio group's checked state and mark it changed.
    ///
    /// Has no effect on the checked flag of other kinds, but still marks them changed.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<&FieldState> {
        self.update(name, |field| {
            field.set_checked(checked);
            field.is_changed = true;
        })
    }

    /// Check one option of a radio group: the group takes `value` and
    /// becomes checked in a single step.
    pub fn choose(&mut self, name: &str, value: impl Into<String>) -> Result<&FieldState> {
        let value = value.into();
        self.update(name, |field| {
            field.set_value(value);
            field.set_checked(true);
            field.is_changed = true;
        })
    }

    /// Mark a field used (the user left it).
    pub fn blur(&mut self, name: &str) -> Result<&FieldState> {
        self.update(name, |field| field.is_used = true)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Mark a field used and changed, then rerun its rules.
    pub fn validate(&mut self, name: &str) -> Result<&FieldState> {
        self.update(name, |field| {
            field.is_used = true;
            field.is_changed = true;
        })
    }

    /// Rerun every field's rules without touching used/changed flags.
    ///
    /// Fields with a forced error are reported under their failing rule, or
    /// under [`FORCED_RULE`] when their rules pass.
    pub fn validate_all(&mut self) -> Result<ValidationReport> {
        let _span = crate::debug_span!("validate_all", fields = self.state.len()).entered();
        let mut report = ValidationReport::default();
        for index in 0..self.state.len() {
            self.recompute(index)?;
            let field = self.state.at(index);
            let rule = match (&field.failing_rule, &field.forced) {
                (Some(rule), _) => rule.as_str(),
                (None, Some(_)) => FORCED_RULE,
                (None, None) => continue,
            };
            report
                .failures
                .push((field.name().to_string(), rule.to_string()));
        }
        crate::debug!(failures = report.len(), "validate_all finished");
        Ok(report)
    }

    // -----------------------------------------------------------------------
    // Forced errors
    // -----------------------------------------------------------------------

    /// Force a field into an error state, e.g. for a server-side rejection.
    ///
    /// `hint` overrides the displayed hint; without it the failing rule's
    /// registered hint is used, if any.
    pub fn show_error(&mut self, name: &str, hint: Option<Hint>) -> Result<()> {
        let index = self.index(name)?;
        crate::debug!(field = name, has_hint = hint.is_some(), "error forced");
        self.state.at_mut(index).forced = Some(ForcedError { hint });
        Ok(())
    }

    /// Clear a forced error. The field shows its current computed state.
    pub fn hide_error(&mut self, name: &str) -> Result<()> {
        let index = self.index(name)?;
        self.state.at_mut(index).forced = None;
        self.recompute(index)
    }

    /// What to display in the field's error slot.
    pub fn display(&self, name: &str) -> Result<FieldDisplay> {
        let field = self.state.get(name).ok_or_else(|| unknown(name))?;
        let rule_hint = || {
            field.failing_rule().map(|rule| {
                field.failure_message().map(str::to_string).or_else(|| {
                    self.config
                        .registry
                        .get(rule)
                        .map(|r| r.hint(field.validation_value()))
                })
            })
        };

        if let Some(forced) = field.forced_error() {
            let hint = forced.hint.clone().or_else(|| rule_hint().flatten());
            return Ok(FieldDisplay {
                visible: true,
                forced: true,
                rule: field.failing_rule.clone(),
                hint,
            });
        }

        let visible = !field.is_valid()
            && self
                .config
                .error_visibility
                .shows(field.is_used(), field.is_changed());
        if !visible {
            return Ok(FieldDisplay::default());
        }
        Ok(FieldDisplay {
            visible,
            forced: false,
            rule: field.failing_rule.clone(),
            hint: rule_hint().flatten(),
        })
    }

    // -----------------------------------------------------------------------
    // Submit / reset
    // -----------------------------------------------------------------------

    /// Validate everything and call `handler` unless submission is blocked.
    pub fn submit<T, F>(&mut self, handler: F) -> Result<SubmitOutcome<T>>
    where
        F: FnOnce(&FormState) -> T,
    {
        let report = self.validate_all()?;
        if !report.is_empty() && self.config.block_invalid_submit {
            crate::info!(failures = report.len(), "submit blocked");
            if self.config.reveal_errors_on_submit {
                for (name, _) in report.iter() {
                    if let Some(index) = self.state.position(name) {
                        let field = self.state.at_mut(index);
                        field.is_used = true;
                        field.is_changed = true;
                    }
                }
            }
            return Ok(SubmitOutcome::Blocked(report));
        }
        Ok(SubmitOutcome::Submitted(handler(&self.state)))
    }

    /// Restore every field to its registered value and pristine status.
    pub fn reset(&mut self) -> Result<()> {
        for index in 0..self.state.len() {
            let fresh = FieldState::from_spec(&self.initial[index]);
            *self.state.at_mut(index) = fresh;
        }
        self.recompute_all()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn index(&self, name: &str) -> Result<usize> {
        self.state.position(name).ok_or_else(|| unknown(name))
    }

    /// Apply `change` to one field, then rerun every field's rules.
    ///
    /// A cross-field rule reads other fields' values, so one change can flip
    /// another field's verdict. On error the whole state is put back.
    fn update<F>(&mut self, name: &str, change: F) -> Result<&FieldState>
    where
        F: FnOnce(&mut FieldState),
    {
        let index = self.index(name)?;
        let before = self.state.clone();
        change(self.state.at_mut(index));
        if let Err(err) = self.recompute_all() {
            self.state = before;
            return Err(err);
        }
        Ok(self.state.at(index))
    }

    fn recompute_all(&mut self) -> Result<()> {
        for index in 0..self.state.len() {
            self.recompute(index)?;
        }
        Ok(())
    }

    fn recompute(&mut self, index: usize) -> Result<()> {
        let Verdict {
            is_valid,
            failing_rule,
            message,
        } = reduce_field(
            self.state.at(index),
            &self.state,
            &self.config.registry,
            self.config.unknown_rules,
        )?;
        let field = self.state.at_mut(index);
        field.is_valid = is_valid;
        field.failing_rule = failing_rule;
        field.failure_message = message;
        Ok(())
    }
}

fn unknown(name: &str) -> FormError {
    FormError::UnknownField(name.to_string())
}
