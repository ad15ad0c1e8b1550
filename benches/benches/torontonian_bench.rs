//! # Torontonian Benchmarks
//!
//! Measures the subset-determinant sum for growing mode counts. One LU
//! determinant per subset: O(m³·2^m) overall.
//!
//! Run: `cargo bench --bench torontonian_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hafnia_engine::tor;
use nalgebra::DMatrix;
use num_complex::Complex64;

/// Matriz O de m modos térmicos independentes com n̄ = 1
fn thermal_o(modes: usize) -> DMatrix<Complex64> {
    DMatrix::from_fn(2 * modes, 2 * modes, |r, c| {
        if r == c {
            Complex64::new(0.5, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    })
}

fn bench_torontonian(c: &mut Criterion) {
    let mut group = c.benchmark_group("torontonian");

    for modes in [4usize, 8, 12] {
        let o = thermal_o(modes);
        group.bench_with_input(BenchmarkId::from_parameter(modes), &o, |b, o| {
            b.iter(|| black_box(tor(o).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_torontonian);
criterion_main!(benches);
