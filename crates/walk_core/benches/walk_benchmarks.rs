//! Criterion benchmarks for walk_core.
//!
//! Measures walk generation and raw step drawing across walk lengths to
//! characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use walk_core::generate_walk;
use walk_core::rng::WalkRng;

/// Benchmark end-to-end walk generation.
fn bench_generate_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_walk");

    for length in [100_usize, 10_000, 1_000_000] {
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("seeded", length), &length, |b, &length| {
            b.iter(|| generate_walk(black_box(length), 3, 50, Some(42)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark batch step drawing into a pre-allocated buffer.
fn bench_fill_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_steps");

    for length in [100_usize, 10_000, 1_000_000] {
        let mut buffer = vec![0_i64; length];
        group.throughput(Throughput::Elements(length as u64));
        group.bench_function(BenchmarkId::new("volatility_3", length), |b| {
            let mut rng = WalkRng::from_seed(42);
            b.iter(|| rng.fill_steps(black_box(&mut buffer), 3).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_walk, bench_fill_steps);
criterion_main!(benches);
