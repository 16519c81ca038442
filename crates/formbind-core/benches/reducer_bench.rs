//! Benchmarks for the field reducer and whole-form validation.
//!
//! Run with: cargo bench -p formbind-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formbind_core::{FieldSpec, Form, FormConfig, RuleRegistry, builtin};
use std::hint::black_box;

fn form_with(fields: usize) -> Form {
    let registry = RuleRegistry::with_builtins().with_rule(builtin::max_length("lt32", 31));
    let mut form = Form::new(FormConfig::new(registry));
    for i in 0..fields {
        form.register(
            FieldSpec::text(format!("field{i}"))
                .with_validations(["required", "email", "lt32"])
                .with_value(format!("user{i}@example.com")),
        )
        .unwrap();
    }
    form
}

fn bench_validate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("form/validate_all");
    for fields in [4, 16, 64] {
        let mut form = form_with(fields);
        group.bench_with_input(BenchmarkId::from_parameter(fields), &(), |b, _| {
            b.iter(|| black_box(form.validate_all().unwrap()))
        });
    }
    group.finish();
}

fn bench_set_value(c: &mut Criterion) {
    let mut form = form_with(16);
    c.bench_function("form/set_value", |b| {
        b.iter(|| black_box(form.set_value("field7", "someone@example.org").unwrap().is_valid()))
    });
}

criterion_group!(benches, bench_validate_all, bench_set_value);
criterion_main!(benches);
