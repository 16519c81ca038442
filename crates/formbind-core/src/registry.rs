#![forbid(unsafe_code)]

//! Rule registry: rule name to [`Rule`].

use std::collections::HashMap;

use crate::builtin;
use crate::field::{FieldState, FormState};
use crate::rule::{Hint, Rule, RuleOutcome};

/// Named rules available to one form.
///
/// A registry is owned by a [`FormConfig`](crate::FormConfig); cloning it is
/// cheap and clones are independent (registering into one does not affect
/// the other).
///
/// # Example
///
/// ```rust
/// use formbind_core::RuleRegistry;
///
/// let mut registry = RuleRegistry::with_builtins();
/// registry.register_fn(
///     "even_length",
///     |value, _, _| (value.len() % 2 == 0).into(),
///     |_| "Length must be even".to_string(),
/// );
/// assert!(registry.contains("required"));
/// assert!(registry.contains("even_length"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in rules.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for rule in builtin::builtins() {
            registry.register(rule);
        }
        registry
    }

    /// Add a rule, replacing any rule with the same name.
    ///
    /// Returns the replaced rule.
    pub fn register(&mut self, rule: Rule) -> Option<Rule> {
        let name = rule.name().to_string();
        let previous = self.rules.insert(name.clone(), rule);
        if previous.is_some() {
            crate::debug!(rule = %name, "rule overridden");
        }
        previous
    }

    /// Add a rule from closures, replacing any rule with the same name.
    pub fn register_fn<P, H>(&mut self, name: impl Into<String>, predicate: P, hint: H) -> Option<Rule>
    where
        P: Fn(&str, &FieldState, &FormState) -> RuleOutcome + Send + Sync + 'static,
        H: Fn(&str) -> Hint + Send + Sync + 'static,
    {
        self.register(Rule::new(name, predicate, hint))
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.register(rule);
        self
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Whether a rule with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpec;

    #[test]
    fn starts_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("required").is_none());
    }

    #[test]
    fn builtins_installed() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            ["alpha", "alphanumeric", "email", "numeric", "required", "url"]
        );
    }

    #[test]
    fn register_overrides() {
        let mut registry = RuleRegistry::with_builtins();
        let replaced = registry.register_fn(
            "required",
            |value, _, _| (value == "x").into(),
            |_| "Type x".to_string(),
        );
        assert!(replaced.is_some());

        let field = FieldState::from_spec(&FieldSpec::text("f"));
        let form = FormState::default();
        let rule = registry.get("required").unwrap();
        assert!(rule.check("x", &field, &form).is_pass());
        assert!(!rule.check("y", &field, &form).is_pass());
        assert_eq!(rule.hint(""), "Type x");
    }

    #[test]
    fn clones_are_independent() {
        let base = RuleRegistry::new();
        let extended = base
            .clone()
            .with_rule(builtin::max_length("lt8", 7));
        assert!(!base.contains("lt8"));
        assert!(extended.contains("lt8"));
        assert_eq!(extended.len(), 1);
    }
}
