// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for form validation.
//!
//! Measures the performance of:
//! - Single field validation (email pattern, password length)
//! - Whole-form gate on a sign-up form
//! - Password strength scoring while typing

use criterion::{criterion_group, criterion_main, Criterion};
use pathstarter::forms::{
    password_strength, validate_field, validate_form, Field, FieldId, FieldKind, FormKind,
    FormState,
};
use std::hint::black_box;

fn bench_validate_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_validation");

    group.bench_function("validate_email", |b| {
        b.iter(|| {
            let field = Field::required(FieldKind::Email, black_box("ada.lovelace@example.com"));
            black_box(validate_field(&field));
        });
    });

    group.bench_function("validate_form_signup", |b| {
        let fields = [
            Field::required(FieldKind::Text, "Ada Lovelace"),
            Field::required(FieldKind::Email, "ada@example.com"),
            Field::required(FieldKind::Password, "Analytical1!"),
        ];
        b.iter(|| black_box(validate_form(black_box(&fields))));
    });

    group.finish();
}

/// Simulates typing a password one character at a time.
fn bench_typing_password(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_validation");
    let password = "Correct-Horse-Battery-9";

    group.bench_function("strength_while_typing", |b| {
        b.iter(|| {
            for end in 1..=password.len() {
                black_box(password_strength(&password[..end]));
            }
        });
    });

    group.bench_function("form_state_typing", |b| {
        b.iter(|| {
            let mut form = FormState::new(FormKind::Signup);
            for end in 1..=password.len() {
                form.input(FieldId::Password, password[..end].to_string());
            }
            form.blur(FieldId::Password);
            black_box(form.password_strength());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_validate_field, bench_typing_password);
criterion_main!(benches);
