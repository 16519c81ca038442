#![forbid(unsafe_code)]

//! Core: rule registry, field state reducer, and form orchestrator.
//!
//! A [`Form`] is built from a [`FormConfig`] holding its own
//! [`RuleRegistry`]. Fields register with the form, and every value change
//! reruns the field's ordered rule list through the reducer.
//!
//! # Example
//!
//! ```rust
//! use formbind_core::{FieldSpec, Form, FormConfig, RuleRegistry, SubmitOutcome, builtin};
//!
//! let registry = RuleRegistry::with_builtins().with_rule(builtin::max_length("lt8", 7));
//! let mut form = Form::new(FormConfig::new(registry));
//! form.register(FieldSpec::text("username").with_validations(["required", "alpha", "lt8"]))?;
//!
//! form.set_value("username", "bob1")?;
//! assert_eq!(form.field("username").unwrap().failing_rule(), Some("alpha"));
//!
//! form.set_value("username", "bob")?;
//! assert!(form.submit(|_| ())?.is_submitted());
//! # Ok::<(), formbind_core::FormError>(())
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod logging;
pub mod reducer;
pub mod registry;
pub mod rule;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};

pub use config::{ErrorVisibility, FormConfig, UnknownRulePolicy};
pub use error::{FormError, Result};
pub use field::{FieldKind, FieldSpec, FieldState, FieldStatus, ForcedError, FormState};
pub use form::{FORCED_RULE, FieldDisplay, Form, SubmitOutcome, ValidationReport};
pub use reducer::{Verdict, reduce, reduce_field};
pub use registry::RuleRegistry;
pub use rule::{Hint, Rule, RuleOutcome};
