// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for calculator expression evaluation.
//!
//! Measures tokenizing plus parsing for short keypad-sized expressions and
//! a long nested one.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::calculator::{lexer, parser, Calculator, Message};
use std::hint::black_box;

const SHORT: &str = "12.5*(3-1)/4";

fn nested(depth: usize) -> String {
    let mut expr = String::from("1");
    for i in 0..depth {
        expr = format!("({expr}+{i})*2/3");
    }
    expr
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    let long = nested(32);

    group.bench_function("tokenize_short", |b| {
        b.iter(|| black_box(lexer::tokenize(black_box(SHORT))));
    });
    group.bench_function("tokenize_nested", |b| {
        b.iter(|| black_box(lexer::tokenize(black_box(&long))));
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    let long = nested(32);

    group.bench_function("evaluate_short", |b| {
        b.iter(|| black_box(parser::evaluate(black_box(SHORT))));
    });
    group.bench_function("evaluate_nested", |b| {
        b.iter(|| black_box(parser::evaluate(black_box(&long))));
    });

    group.finish();
}

/// Full keypad workflow: append keystrokes one by one, then evaluate.
fn bench_keystrokes(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    group.bench_function("keystrokes_then_evaluate", |b| {
        b.iter(|| {
            let mut calc = Calculator::new();
            for ch in SHORT.chars() {
                calc.handle(Message::Append(ch.to_string()));
            }
            calc.handle(Message::Evaluate);
            black_box(calc.buffer().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_evaluate, bench_keystrokes);
criterion_main!(benches);
