#![forbid(unsafe_code)]

//! Named validation rules: a predicate plus a hint generator.

use std::fmt;
use std::sync::Arc;

use crate::field::{FieldState, FormState};

/// User-facing content shown when a rule fails.
pub type Hint = String;

/// Predicate signature: `(value, own field state, whole form state)`.
pub type PredicateFn = dyn Fn(&str, &FieldState, &FormState) -> RuleOutcome + Send + Sync;

/// Hint generator signature: `(value) -> hint`.
pub type HintFn = dyn Fn(&str) -> Hint + Send + Sync;

// ---------------------------------------------------------------------------
// RuleOutcome
// ---------------------------------------------------------------------------

/// Result of evaluating one rule predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    #[default]
    Pass,
    /// The value fails the rule.
    Fail,
    /// The value fails the rule, with a message from the predicate.
    FailWith(String),
}

impl RuleOutcome {
    /// Returns `true` for [`RuleOutcome::Pass`].
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The message carried by [`RuleOutcome::FailWith`].
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::FailWith(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<bool> for RuleOutcome {
    fn from(pass: bool) -> Self {
        if pass { Self::Pass } else { Self::Fail }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A named validation rule.
///
/// Rules are cheap to clone; the predicate and hint are shared.
///
/// # Example
///
/// ```rust
/// use formbind_core::{FieldSpec, FieldState, FormState, Rule};
///
/// let no_spaces = Rule::new(
///     "no_spaces",
///     |value, _, _| (!value.contains(' ')).into(),
///     |_| "Spaces are not allowed".to_string(),
/// );
///
/// let field = FieldState::from_spec(&FieldSpec::text("user"));
/// let form = FormState::default();
/// assert!(no_spaces.check("alice", &field, &form).is_pass());
/// assert!(!no_spaces.check("a b", &field, &form).is_pass());
/// ```
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Arc<PredicateFn>,
    hint: Arc<HintFn>,
}

impl Rule {
    /// Create a rule from a predicate and hint generator.
    pub fn new<P, H>(name: impl Into<String>, predicate: P, hint: H) -> Self
    where
        P: Fn(&str, &FieldState, &FormState) -> RuleOutcome + Send + Sync + 'static,
        H: Fn(&str) -> Hint + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            hint: Arc::new(hint),
        }
    }

    /// Create a rule whose predicate only looks at the value.
    pub fn from_value_fn<P, H>(name: impl Into<String>, predicate: P, hint: H) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        H: Fn(&str) -> Hint + Send + Sync + 'static,
    {
        Self::new(name, move |value, _, _| predicate(value).into(), hint)
    }

    /// The rule's registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &str, field: &FieldState, form: &FormState) -> RuleOutcome {
        (self.predicate)(value, field, form)
    }

    /// Produce the hint for a value.
    pub fn hint(&self, value: &str) -> Hint {
        (self.hint)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}
