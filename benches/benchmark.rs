//! Benchmarks for card_form performance testing.
//!
//! Run with: cargo bench

use card_form::{
    format::{format_card_number, format_cardholder_name, format_expiry},
    validate_form, CardInputState, CurrentDate, Field, PaymentForm,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const NAME: &str = "Jane Appleseed";
const NUMBER_RAW: &str = "4111111111111111";
const NUMBER_GROUPED: &str = "4111 1111 1111 1111";

fn today() -> CurrentDate {
    CurrentDate::new(4, 2026).unwrap()
}

fn valid_state() -> CardInputState {
    CardInputState::new(NAME, NUMBER_GROUPED, "09", "30", "123")
}

/// Benchmark preview formatting
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("name", |b| {
        b.iter(|| format_cardholder_name(black_box(NAME)))
    });

    group.bench_function("number_raw", |b| {
        b.iter(|| format_card_number(black_box(NUMBER_RAW)))
    });

    group.bench_function("number_grouped", |b| {
        b.iter(|| format_card_number(black_box(NUMBER_GROUPED)))
    });

    group.bench_function("expiry", |b| {
        b.iter(|| format_expiry(black_box("9"), black_box("30")))
    });

    group.finish();
}

/// Benchmark submit-time validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    group.throughput(Throughput::Elements(1));

    let date = today();
    let valid = valid_state();
    let invalid = CardInputState::new("", "4111", "13", "20", "1");

    group.bench_function("form_valid", |b| {
        b.iter(|| validate_form(black_box(&valid), black_box(&date)))
    });

    group.bench_function("form_invalid", |b| {
        b.iter(|| validate_form(black_box(&invalid), black_box(&date)))
    });

    group.finish();
}

/// Benchmark the keystroke entry point
fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    let form = PaymentForm::new();
    let state = valid_state();

    group.bench_function("field_changed_number", |b| {
        b.iter(|| form.field_changed(black_box(&state), black_box(Field::CardNumber)))
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_validation, bench_session);
criterion_main!(benches);
