use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use map_collect::{collect, CollectOptions, Transform, TransformSet, Value};

fn generate(n: i64) -> Value {
    Value::Seq((0..n).map(Value::from).collect())
}

fn sum_pair() -> Transform {
    Transform::new()
        .with_map(|v, _k| Value::from(v.as_i64().unwrap_or(0) + 1))
        .with_reduce(|acc, v, _i| Value::from(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0)))
        .with_init(0)
}

fn bench_collect(c: &mut Criterion) {
    let source = generate(10_000);
    let options = CollectOptions::default();

    let single = TransformSet::single(sum_pair());
    c.bench_function("single_map_reduce_10k", |b| {
        b.iter(|| collect(black_box(&source), &single, &options))
    });

    let named = TransformSet::named([("test", sum_pair())]);
    c.bench_function("named_map_reduce_10k", |b| {
        b.iter(|| collect(black_box(&source), &named, &options))
    });

    let chained = TransformSet::named([
        (
            "incremented",
            Transform::new().with_map(|v, _k| Value::from(v.as_i64().unwrap_or(0) + 1)),
        ),
        (
            "total",
            Transform::new()
                .with_data("incremented")
                .with_reduce(|acc, v, _i| {
                    Value::from(acc.as_i64().unwrap_or(0) + v.as_i64().unwrap_or(0))
                })
                .with_init(0),
        ),
    ]);
    c.bench_function("chained_map_then_reduce_10k", |b| {
        b.iter(|| collect(black_box(&source), &chained, &options))
    });
}

criterion_group!(benches, bench_collect);
criterion_main!(benches);
