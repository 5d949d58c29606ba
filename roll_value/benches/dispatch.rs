// Operator dispatch benchmarks
// Run with: cargo bench -p roll_value

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use roll_value::prelude::*;

fn bench_numeric_add(c: &mut Criterion) {
    let a = long_value(17);
    let b = long_value(25);
    let d = double_value(0.5);

    c.bench_function("add_long_long", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)))
    });
    c.bench_function("add_long_double", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&d)))
    });
}

fn bench_string_ops(c: &mut Criterion) {
    let text = string_value("the quick brown fox jumps over the lazy dog");
    let pattern = string_value("o");
    let count = long_value(8);

    c.bench_function("subtract_string_string", |bench| {
        bench.iter(|| black_box(&text).subtract(black_box(&pattern)))
    });
    c.bench_function("multiply_string_long", |bench| {
        bench.iter(|| black_box(&pattern).multiply(black_box(&count)))
    });
}

fn bench_list_ops(c: &mut Criterion) {
    let rolls = long_list_value((0..64).map(|i| i % 6 + 1));
    let removed = long_list_value([1, 6]);

    c.bench_function("add_list_list", |bench| {
        bench.iter(|| black_box(&rolls).add(black_box(&rolls)))
    });
    c.bench_function("subtract_list_list", |bench| {
        bench.iter(|| black_box(&rolls).subtract(black_box(&removed)))
    });
}

/// Result operands are unwrapped before dispatch
fn bench_result_operand(c: &mut Criterion) {
    let rolled = ResultBuilder::new()
        .set_long_value(7)
        .set_individual_values([long_value(3), long_value(4)])
        .set_roll_expression(RollExpression::detail_with_sum("2d4"))
        .build_value()
        .expect("result has a value");
    let bonus = long_value(2);

    c.bench_function("add_result_long", |bench| {
        bench.iter(|| black_box(&rolled).add(black_box(&bonus)))
    });
}

criterion_group!(
    benches,
    bench_numeric_add,
    bench_string_ops,
    bench_list_ops,
    bench_result_operand
);
criterion_main!(benches);
