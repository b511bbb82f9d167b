//! Benchmarks for identity assembly in each representation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linbench_core::{CscMatrix, MatrixKind, RandomSource, SystemMatrix, random_rhs};

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");

    for size in [100, 500, 1000] {
        for kind in MatrixKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, &size| {
                b.iter(|| SystemMatrix::identity(kind, black_box(size)));
            });
        }
    }

    group.finish();
}

fn bench_from_triplets(c: &mut Criterion) {
    let n = 10_000;
    let triplets: Vec<(usize, usize, f64)> = (0..n).rev().map(|i| (i, i, 1.0)).collect();
    c.bench_function("csc_from_triplets_10k", |b| {
        b.iter(|| CscMatrix::from_triplets(n, n, black_box(&triplets)).unwrap());
    });
}

fn bench_random_rhs(c: &mut Criterion) {
    c.bench_function("random_rhs_10k", |b| {
        b.iter(|| random_rhs(black_box(10_000), RandomSource::Entropy));
    });
}

criterion_group!(benches, bench_identity, bench_from_triplets, bench_random_rhs);
criterion_main!(benches);
