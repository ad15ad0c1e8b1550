//! # Hermite Tensor Benchmarks
//!
//! Measures the batched hafnian path: one dense DP sweep produces every
//! reduction below the cutoff, against cutoff^modes table entries.
//!
//! Run: `cargo bench --bench hermite_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hafnia_engine::{hafnian_batched, hermite_multidimensional_renorm};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

fn symmetric_complex(n: usize) -> DMatrix<Complex64> {
    DMatrix::from_fn(n, n, |i, j| {
        Complex64::new(((i + j) % 5) as f64 / 6.0, ((i * j) % 3) as f64 / 7.0)
    })
}

fn bench_batched_hafnian(c: &mut Criterion) {
    let mut group = c.benchmark_group("hafnian_batched");

    let a = symmetric_complex(2);
    let y = DVector::from_element(2, Complex64::new(0.3, -0.1));
    for cutoff in [8usize, 16, 32] {
        group.bench_with_input(BenchmarkId::new("two_modes", cutoff), &cutoff, |b, &cut| {
            b.iter(|| black_box(hafnian_batched(&a, Some(&y), cut).unwrap()))
        });
    }

    let a4 = symmetric_complex(4);
    let y4 = DVector::from_element(4, Complex64::new(0.2, 0.0));
    for cutoff in [4usize, 8] {
        group.bench_with_input(BenchmarkId::new("four_modes", cutoff), &cutoff, |b, &cut| {
            b.iter(|| black_box(hafnian_batched(&a4, Some(&y4), cut).unwrap()))
        });
    }

    group.finish();
}

fn bench_renormalized_tensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_renorm");

    let r = symmetric_complex(3);
    let y = DVector::from_element(3, Complex64::new(0.4, 0.2));
    for cutoff in [6usize, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(cutoff), &cutoff, |b, &cut| {
            b.iter(|| black_box(hermite_multidimensional_renorm(&r, &y, cut).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batched_hafnian, bench_renormalized_tensor);
criterion_main!(benches);
