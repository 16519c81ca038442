#![forbid(unsafe_code)]

//! Built-in rules for common field checks.
//!
//! Format rules (`email`, `url`, `alpha`, `numeric`, `alphanumeric`) accept
//! the empty string; pair them with `required` when a value is mandatory.

use unicode_segmentation::UnicodeSegmentation;

use crate::rule::{Rule, RuleOutcome};

// ---------------------------------------------------------------------------
// Rule names
// ---------------------------------------------------------------------------

/// Name of the non-empty rule.
pub const RULE_REQUIRED: &str = "required";
/// Name of the email address rule.
pub const RULE_EMAIL: &str = "email";
/// Name of the http(s) URL rule.
pub const RULE_URL: &str = "url";
/// Name of the letters-only rule.
pub const RULE_ALPHA: &str = "alpha";
/// Name of the digits-only rule.
pub const RULE_NUMERIC: &str = "numeric";
/// Name of the letters-and-digits rule.
pub const RULE_ALPHANUMERIC: &str = "alphanumeric";

/// All rules installed by [`RuleRegistry::with_builtins`](crate::RuleRegistry::with_builtins).
#[must_use]
pub fn builtins() -> Vec<Rule> {
    vec![required(), email(), url(), alpha(), numeric(), alphanumeric()]
}

// ---------------------------------------------------------------------------
// Fixed rules
// ---------------------------------------------------------------------------

/// Fails on empty or whitespace-only values.
#[must_use]
pub fn required() -> Rule {
    Rule::from_value_fn(
        RULE_REQUIRED,
        |value| !value.trim().is_empty(),
        |_| "This field is required".to_string(),
    )
}

/// Simple heuristic: `local@domain.tld` with a TLD of two or more characters.
#[must_use]
pub fn email() -> Rule {
    Rule::from_value_fn(RULE_EMAIL, is_email, |value| {
        format!("{value} is not a valid email address")
    })
}

/// Requires an `http://` or `https://` prefix followed by a host.
#[must_use]
pub fn url() -> Rule {
    Rule::from_value_fn(
        RULE_URL,
        |value| {
            let trimmed = value.trim();
            trimmed.is_empty()
                || trimmed.strip_prefix("https://").is_some_and(|rest| !rest.is_empty())
                || trimmed.strip_prefix("http://").is_some_and(|rest| !rest.is_empty())
        },
        |_| "Invalid URL".to_string(),
    )
}

/// Letters only.
#[must_use]
pub fn alpha() -> Rule {
    Rule::from_value_fn(
        RULE_ALPHA,
        |value| value.chars().all(char::is_alphabetic),
        |_| "Only letters are allowed".to_string(),
    )
}

/// ASCII digits only.
#[must_use]
pub fn numeric() -> Rule {
    Rule::from_value_fn(
        RULE_NUMERIC,
        |value| value.chars().all(|c| c.is_ascii_digit()),
        |_| "Only digits are allowed".to_string(),
    )
}

/// Letters and digits only.
#[must_use]
pub fn alphanumeric() -> Rule {
    Rule::from_value_fn(
        RULE_ALPHANUMERIC,
        |value| value.chars().all(char::is_alphanumeric),
        |_| "Only letters and digits are allowed".to_string(),
    )
}

// ---------------------------------------------------------------------------
// Parameterized rules
// ---------------------------------------------------------------------------

/// At least `min` grapheme clusters.
#[must_use]
pub fn min_length(name: impl Into<String>, min: usize) -> Rule {
    Rule::from_value_fn(
        name,
        move |value| value.graphemes(true).count() >= min,
        move |_| format!("Must be at least {min} characters"),
    )
}

/// At most `max` grapheme clusters.
#[must_use]
pub fn max_length(name: impl Into<String>, max: usize) -> Rule {
    Rule::from_value_fn(
        name,
        move |value| value.graphemes(true).count() <= max,
        move |_| format!("Must be at most {max} characters"),
    )
}

/// Equal to the current validation value of another field.
///
/// Fails if the other field is not registered.
#[must_use]
pub fn matches(name: impl Into<String>, other: impl Into<String>) -> Rule {
    let other = other.into();
    let label = other.clone();
    Rule::new(
        name,
        move |value, _, form| match form.value(&other) {
            Some(expected) if expected == value => RuleOutcome::Pass,
            Some(_) => RuleOutcome::Fail,
            None => RuleOutcome::FailWith(format!("field `{other}` is not registered")),
        },
        move |_| format!("Must match {label}"),
    )
}

fn is_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    let mut labels = domain.split('.');
    if labels.clone().any(str::is_empty) {
        return false;
    }
    labels.next_back().is_some_and(|tld| tld.len() >= 2)
}
