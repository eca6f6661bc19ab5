use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scalargrad::prelude::*;

fn make_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 - n as f64 / 2.0) * 0.01).collect()
}

fn bench_sigmoid_map(c: &mut Criterion) {
    let values = make_values(1024);
    let activate = map(sigmoid);
    c.bench_function("map_sigmoid_1024", |b| {
        b.iter(|| activate(black_box(&values)))
    });
}

fn bench_reduce_sum(c: &mut Criterion) {
    let values = make_values(1024);
    c.bench_function("reduce_sum_1024", |b| b.iter(|| sum(black_box(&values))));
}

fn bench_zip_with_add(c: &mut Criterion) {
    let lhs = make_values(1024);
    let rhs = make_values(1024);
    let add_pairs = zip_with(add);
    c.bench_function("zip_with_add_1024", |b| {
        b.iter(|| add_pairs(black_box(&lhs), black_box(&rhs)))
    });
}

criterion_group!(
    benches,
    bench_sigmoid_map,
    bench_reduce_sum,
    bench_zip_with_add
);
criterion_main!(benches);
