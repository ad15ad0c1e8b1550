//! # Sampler Benchmarks
//!
//! Measures whole sampling calls per state family: exact hafnian cascade,
//! torontonian clicks and the classical fast path. Private RandomState
//! instances keep the runs reproducible.
//!
//! Run: `cargo bench --bench sampler_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hafnia_sampler::{
    RandomState, SampleOptions, hafnian_sample_classical_state_with_state,
    hafnian_sample_state_with_state, torontonian_sample_state_with_state,
};
use nalgebra::DMatrix;

/// Covariância de vácuo comprimido de dois modos
fn tms_cov(r: f64) -> DMatrix<f64> {
    let (c, s) = ((2.0 * r).cosh(), (2.0 * r).sinh());
    DMatrix::from_row_slice(
        4,
        4,
        &[
            c, s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, c, -s, //
            0.0, 0.0, -s, c,
        ],
    )
}

fn bench_hafnian_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("hafnian_sample_state");
    group.sample_size(10);

    let cov = tms_cov(1.0_f64.sqrt().asinh());
    let options = SampleOptions::default();
    for samples in [1usize, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            b.iter(|| {
                let mut state = RandomState::from_seed(137);
                black_box(hafnian_sample_state_with_state(&cov, n, &options, &mut state).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_torontonian_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("torontonian_sample_state");
    group.sample_size(10);

    let options = SampleOptions::default();
    for modes in [2usize, 6] {
        let cov = DMatrix::<f64>::identity(2 * modes, 2 * modes) * 2.0;
        group.bench_with_input(BenchmarkId::from_parameter(modes), &cov, |b, cov| {
            b.iter(|| {
                let mut state = RandomState::from_seed(137);
                black_box(
                    torontonian_sample_state_with_state(cov, 10, &options, &mut state).unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_classical_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("hafnian_sample_classical_state");

    let options = SampleOptions::default();
    for modes in [5usize, 20] {
        let cov = DMatrix::<f64>::identity(2 * modes, 2 * modes) * 3.0;
        group.bench_with_input(BenchmarkId::from_parameter(modes), &cov, |b, cov| {
            b.iter(|| {
                let mut state = RandomState::from_seed(137);
                black_box(
                    hafnian_sample_classical_state_with_state(cov, 100, &options, &mut state)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hafnian_sampling,
    bench_torontonian_sampling,
    bench_classical_sampling
);
criterion_main!(benches);
