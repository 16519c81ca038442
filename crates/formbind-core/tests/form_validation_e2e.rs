#![forbid(unsafe_code)]

//! End-to-end form scenarios: registration, typing, blur, server errors, submit.

use formbind_core::{
    FieldKind, FieldSpec, FieldStatus, Form, FormConfig, FormError, RuleOutcome, RuleRegistry,
    SubmitOutcome, UnknownRulePolicy, builtin,
};

fn signup_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::with_builtins()
        .with_rule(builtin::max_length("lt8", 7))
        .with_rule(builtin::min_length("min6", 6))
        .with_rule(builtin::matches("password_match", "password"));
    registry.register_fn(
        "not_admin",
        |value, _, _| {
            if value.eq_ignore_ascii_case("admin") {
                RuleOutcome::FailWith("That name is reserved".into())
            } else {
                RuleOutcome::Pass
            }
        },
        |_| "Choose another name".to_string(),
    );
    registry
}

fn signup_form() -> Form {
    let mut form = Form::new(FormConfig::new(signup_registry()));
    form.register(FieldSpec::text("username").with_validations(["required", "alpha", "lt8", "not_admin"]))
        .unwrap();
    form.register(FieldSpec::text("email").with_validations(["required", "email"]))
        .unwrap();
    form.register(FieldSpec::text("password").with_validations(["required", "min6"]))
        .unwrap();
    form.register(FieldSpec::text("confirm").with_validations(["required", "password_match"]))
        .unwrap();
    form.register(
        FieldSpec::new("terms", FieldKind::Checkbox)
            .with_value("accepted")
            .with_validations(["required"]),
    )
    .unwrap();
    form
}

#[test]
fn empty_email_fails_required_first() {
    let mut form = signup_form();
    let state = form.validate("email").unwrap();
    assert_eq!(state.failing_rule(), Some("required"));
}

#[test]
fn alpha_checked_before_length() {
    let mut form = signup_form();
    form.set_value("username", "really long value with d1g1t").unwrap();
    let state = form.validate("username").unwrap();
    assert_eq!(state.failing_rule(), Some("alpha"));
}

#[test]
fn predicate_message_becomes_hint() {
    let mut form = signup_form();
    form.set_value("username", "Admin").unwrap();
    form.blur("username").unwrap();
    let display = form.display("username").unwrap();
    assert_eq!(display.rule.as_deref(), Some("not_admin"));
    assert_eq!(display.hint.as_deref(), Some("That name is reserved"));
}

#[test]
fn full_signup_flow() {
    let mut form = signup_form();
    assert!(form.has_errors());
    assert!(
        form.state()
            .iter()
            .all(|f| f.status() == FieldStatus::Pristine)
    );

    let blocked = form.submit(|_| ()).unwrap();
    let SubmitOutcome::Blocked(report) = blocked else {
        panic!("empty form must not submit");
    };
    let failing: Vec<_> = report.iter().map(|(field, _)| field).collect();
    assert_eq!(failing, ["username", "email", "password", "confirm", "terms"]);

    form.set_value("username", "alice").unwrap();
    form.set_value("email", "alice@example.com").unwrap();
    form.set_value("password", "s3cret!").unwrap();
    form.set_value("confirm", "s3cret?").unwrap();
    form.set_checked("terms", true).unwrap();

    let report = form.validate_all().unwrap();
    assert_eq!(report.iter().collect::<Vec<_>>(), [("confirm", "password_match")]);

    form.set_value("confirm", "s3cret!").unwrap();
    let outcome = form
        .submit(|state| {
            state
                .iter()
                .map(|f| format!("{}={}", f.name(), f.validation_value()))
                .collect::<Vec<_>>()
                .join("&")
        })
        .unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Submitted(
            "username=alice&email=alice@example.com&password=s3cret!&confirm=s3cret!&terms=accepted"
                .to_string()
        )
    );
}

#[test]
fn server_error_round_trip() {
    let mut form = signup_form();
    form.set_value("username", "alice").unwrap();
    form.blur("username").unwrap();
    assert!(!form.display("username").unwrap().visible);

    form.show_error("username", Some("Username already registered".into()))
        .unwrap();
    assert!(form.validate_all().unwrap().contains("username"));
    assert_eq!(
        form.display("username").unwrap().hint.as_deref(),
        Some("Username already registered")
    );

    form.set_value("username", "bob").unwrap();
    form.hide_error("username").unwrap();
    let state = form.field("username").unwrap();
    assert_eq!(state.value(), "bob");
    assert!(state.is_valid());
    assert!(!form.display("username").unwrap().visible);
}

#[test]
fn forms_do_not_share_registries() {
    let mut a = Form::new(FormConfig::new(RuleRegistry::new()));
    let mut registry = RuleRegistry::new();
    registry.register(builtin::required());
    let mut b = Form::new(FormConfig::new(registry));

    a.register(FieldSpec::text("x").with_validations(["required"]))
        .unwrap();
    b.register(FieldSpec::text("x").with_validations(["required"]))
        .unwrap();

    assert!(a.validate_all().unwrap().is_empty());
    assert_eq!(b.validate_all().unwrap().get("x"), Some("required"));
}

#[test]
fn strict_unknown_rules() {
    let config = FormConfig::new(RuleRegistry::with_builtins())
        .with_unknown_rules(UnknownRulePolicy::Error);
    let mut form = Form::new(config);
    form.register(FieldSpec::text("ok").with_validations(["required"]))
        .unwrap();
    let err = form
        .register(FieldSpec::text("typo").with_validations(["requierd"]))
        .unwrap_err();
    assert_eq!(
        err,
        FormError::UnknownRule {
            field: "typo".into(),
            rule: "requierd".into(),
        }
    );
    assert_eq!(form.state().len(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes() {
    let mut form = signup_form();
    let report = form.validate_all().unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: formbind_core::ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);

    let state = form.field("terms").unwrap();
    let json = serde_json::to_value(state).unwrap();
    assert_eq!(json["kind"], "Checkbox");
    assert_eq!(json["failing_rule"], "required");
}
