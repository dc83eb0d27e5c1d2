//! Criterion benchmarks for slot-table generation.
//!
//! Measures single-table construction across precisions and whole-batch
//! generation, sequential and parallel.

use anstable_core::builder::{build_batch, build_table, generate_many, GeneratorParams};
use anstable_core::rng::SeededSource;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark one table at increasing precision.
fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");

    for precision in [256, 1024, 4096] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| {
                let mut rng = SeededSource::from_seed(42);
                b.iter(|| build_table(black_box(64), black_box(precision), &mut rng).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark a batch of tables sharing one stream.
fn bench_build_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_batch");

    for num_histograms in [8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_histograms),
            &num_histograms,
            |b, &n| {
                b.iter(|| {
                    let mut rng = SeededSource::from_seed(7);
                    build_batch(black_box(64), n, 4096, &mut rng).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark independent batches built in parallel.
fn bench_generate_many(c: &mut Criterion) {
    let params: Vec<GeneratorParams> = (0..16)
        .map(|seed| GeneratorParams::new(64, 16, 4096, seed))
        .collect();

    c.bench_function("generate_many_16", |b| {
        b.iter(|| generate_many(black_box(&params)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_build_table,
    bench_build_batch,
    bench_generate_many
);
criterion_main!(benches);
