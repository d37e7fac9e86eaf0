//! Benchmarks for the validation hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldgate::engine::Engine;
use fieldgate::testing::{course_registry, Course};

fn validate_benchmark(c: &mut Criterion) {
    let engine = Engine::new(course_registry());
    let valid = Course::new("Go101", 49.0);
    let invalid = Course::new("Go 101!", 0.0);

    c.bench_function("validate_valid_course", |b| {
        b.iter(|| engine.validate(black_box(&valid)))
    });

    c.bench_function("evaluate_invalid_course", |b| {
        b.iter(|| engine.evaluate(black_box(&invalid)))
    });
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
