//! # Hafnian Benchmarks
//!
//! Measures the exact hafnian algorithms and the Ryser permanent across
//! dimensions. The subset enumerations double in cost every two rows, so
//! these curves are the practical size guide.
//!
//! Run: `cargo bench --bench hafnian_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hafnia_core::prelude::*;
use hafnia_engine::{HafnianAlgorithm, hafnian, hafnian_repeated, permanent};
use nalgebra::DMatrix;

/// Matriz simétrica real determinística
fn symmetric(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| ((i * j + i + j + 3) % 7) as f64 / 4.0)
}

fn bench_hafnian_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("hafnian");

    for n in [6usize, 10, 14] {
        let a = symmetric(n);
        group.bench_with_input(BenchmarkId::new("power_trace", n), &a, |b, a| {
            b.iter(|| black_box(hafnian(a, false, HafnianAlgorithm::PowerTrace).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("recursive", n), &a, |b, a| {
            b.iter(|| black_box(hafnian(a, false, HafnianAlgorithm::Recursive).unwrap()))
        });
    }

    group.finish();
}

fn bench_loop_hafnian(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_hafnian");

    for n in [6usize, 10] {
        let a = symmetric(n);
        group.bench_with_input(BenchmarkId::new("power_trace", n), &a, |b, a| {
            b.iter(|| black_box(hafnian(a, true, HafnianAlgorithm::PowerTrace).unwrap()))
        });
    }

    group.finish();
}

fn bench_hafnian_repeated(c: &mut Criterion) {
    let mut group = c.benchmark_group("hafnian_repeated");

    // Poucos modos com multiplicidades altas: o regime da fórmula de Kan
    let a = symmetric(4);
    for count in [3usize, 6, 9] {
        let spec = ReductionSpec::uniform(4, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &spec, |b, spec| {
            b.iter(|| black_box(hafnian_repeated(&a, spec, false).unwrap()))
        });
    }

    group.finish();
}

fn bench_permanent(c: &mut Criterion) {
    let mut group = c.benchmark_group("permanent");

    for n in [8usize, 12, 16] {
        let a = symmetric(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| black_box(permanent(a).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hafnian_algorithms,
    bench_loop_hafnian,
    bench_hafnian_repeated,
    bench_permanent
);
criterion_main!(benches);
