use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple arithmetic");

    let expr = "2 + 3 * 4";
    let no_vars = HashMap::new();

    group.bench_function("numerix", |b| {
        b.iter(|| numerix::evaluate(black_box(expr), &no_vars).unwrap())
    });

    group.bench_function("native_rust", |b| b.iter(|| black_box(2.0 + 3.0 * 4.0)));

    group.bench_function("meval", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.finish();
}

fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex arithmetic");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let no_vars = HashMap::new();

    group.bench_function("numerix", |b| {
        b.iter(|| numerix::evaluate(black_box(expr), &no_vars).unwrap())
    });

    group.bench_function("native_rust", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.finish();
}

fn benchmark_functions_and_variables(c: &mut Criterion) {
    let mut group = c.benchmark_group("functions and variables");

    let no_vars = HashMap::new();
    let vars = HashMap::from([("x".to_string(), 0.5), ("y".to_string(), 2.0)]);

    group.bench_function("numerix sin(max(2,3))", |b| {
        b.iter(|| numerix::evaluate(black_box("sin(max(2, 3))"), &no_vars).unwrap())
    });

    group.bench_function("numerix 2^10", |b| {
        b.iter(|| numerix::evaluate(black_box("2 ^ 10"), &no_vars).unwrap())
    });

    group.bench_function("numerix variables", |b| {
        b.iter(|| numerix::evaluate(black_box("-x * (y + 1) ^ 2"), &vars).unwrap())
    });

    group.bench_function("meval sin(max(2,3))", |b| {
        b.iter(|| meval::eval_str(black_box("sin(max(2, 3))")).unwrap())
    });

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch evaluation");

    let environments: Vec<_> = (0..256)
        .map(|i| HashMap::from([("x".to_string(), i as f64)]))
        .collect();
    let expr = "sin(x) * x + sqrt(x)";

    group.bench_function("sequential", |b| {
        b.iter(|| {
            environments
                .iter()
                .map(|env| numerix::evaluate(black_box(expr), env))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| numerix::evaluate_batch(black_box(expr), &environments))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_functions_and_variables,
    benchmark_batch
);
criterion_main!(benches);
