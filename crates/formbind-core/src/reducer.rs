#![forbid(unsafe_code)]

//! The field state reducer.
//!
//! Rules run in declaration order and evaluation stops at the first failure,
//! so the reported rule is always the earliest failing one in the list.

use crate::config::UnknownRulePolicy;
use crate::error::{FormError, Result};
use crate::field::{FieldState, FormState};
use crate::registry::RuleRegistry;
use crate::rule::RuleOutcome;

/// The outcome of reducing one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verdict {
    /// Whether every rule passed.
    pub is_valid: bool,
    /// First failing rule, if any.
    pub failing_rule: Option<String>,
    /// Message supplied by the failing predicate.
    pub message: Option<String>,
}

impl Verdict {
    /// A passing verdict.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            failing_rule: None,
            message: None,
        }
    }

    fn failed(rule: &str, message: Option<String>) -> Self {
        Self {
            is_valid: false,
            failing_rule: Some(rule.to_string()),
            message,
        }
    }
}

/// Evaluate `validations` against `value`.
///
/// `field` and `form` are passed through to each predicate unchanged. The
/// result depends only on the inputs.
pub fn reduce(
    validations: &[String],
    value: &str,
    field: &FieldState,
    form: &FormState,
    registry: &RuleRegistry,
    policy: UnknownRulePolicy,
) -> Result<Verdict> {
    for name in validations {
        let Some(rule) = registry.get(name) else {
            match policy {
                UnknownRulePolicy::Skip => {
                    crate::warn!(field = field.name(), rule = %name, "unknown rule skipped");
                    continue;
                }
                UnknownRulePolicy::Fail => return Ok(Verdict::failed(name, None)),
                UnknownRulePolicy::Error => {
                    return Err(FormError::UnknownRule {
                        field: field.name().to_string(),
                        rule: name.clone(),
                    });
                }
            }
        };

        match rule.check(value, field, form) {
            RuleOutcome::Pass => {}
            RuleOutcome::Fail => {
                crate::trace!(field = field.name(), rule = %name, "rule failed");
                return Ok(Verdict::failed(name, None));
            }
            RuleOutcome::FailWith(message) => {
                crate::trace!(field = field.name(), rule = %name, %message, "rule failed");
                return Ok(Verdict::failed(name, Some(message)));
            }
        }
    }
    Ok(Verdict::valid())
}

/// Reduce a registered field using its own rule list and validation value.
pub fn reduce_field(
    field: &FieldState,
    form: &FormState,
    registry: &RuleRegistry,
    policy: UnknownRulePolicy,
) -> Result<Verdict> {
    reduce(
        field.validations(),
        field.validation_value(),
        field,
        form,
        registry,
        policy,
    )
}
