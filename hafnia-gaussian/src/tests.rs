//! Testes integrados para hafnia-gaussian

use crate::*;
use hafnia_core::prelude::*;
use hafnia_engine::hafnian_batched;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

/// Covariância de vácuo comprimido de dois modos (base xxpp, ħ = 2)
fn tms_cov(r: f64, phi: f64) -> DMatrix<f64> {
    let (cp, sp) = (phi.cos(), phi.sin());
    let (ch, sh) = (r.cosh(), r.sinh());
    let s = DMatrix::from_row_slice(
        4,
        4,
        &[
            ch, cp * sh, 0.0, sp * sh, //
            cp * sh, ch, sp * sh, 0.0, //
            0.0, sp * sh, ch, -cp * sh, //
            sp * sh, 0.0, -cp * sh, ch,
        ],
    );
    &s * s.transpose()
}

#[test]
fn test_tms_pattern_weights_are_geometric_and_correlated() {
    let mean_n = 1.0_f64;
    let r = mean_n.sqrt().asinh();
    let state = GaussianState::new(tms_cov(r, 0.546), None, 2.0).unwrap();

    let ratio = mean_n / (1.0 + mean_n);
    for k in 0..5 {
        let expected = ratio.powi(k as i32) / (1.0 + mean_n);
        let got = state.pattern_weight(&[k, k]).unwrap();
        assert!((got - expected).abs() < 1.0e-9, "k = {k}: {got} vs {expected}");
    }

    // Contagens diferentes têm probabilidade nula
    assert!(state.pattern_weight(&[0, 1]).unwrap().abs() < 1.0e-10);
    assert!(state.pattern_weight(&[3, 1]).unwrap().abs() < 1.0e-10);
}

#[test]
fn test_tms_pattern_weights_sum_to_one() {
    let r = 0.5_f64.sqrt().asinh();
    let state = GaussianState::new(tms_cov(r, 0.0), None, 2.0).unwrap();
    let mut total = 0.0;
    for j in 0..12 {
        for k in 0..12 {
            total += state.pattern_weight(&[j, k]).unwrap();
        }
    }
    assert!((total - 1.0).abs() < 1.0e-7, "total {total}");
}

#[test]
fn test_pattern_weights_match_batched_tensor() {
    // O tensor de Hermite em lote deve reproduzir os pesos modo a modo
    let state = GaussianState::new(tms_cov(0.4, 0.3), None, 2.0).unwrap();
    let a = state.amat().unwrap();
    let prefactor = state.prefactor().unwrap();
    let cutoff = 3;
    let tensor = hafnian_batched(&a, None, cutoff).unwrap();

    for j in 0..cutoff {
        for k in 0..cutoff {
            let haf = tensor.value(&[j, k, j, k]).unwrap();
            let denom = factorial(j) * factorial(k);
            let expected = (haf * prefactor).re / denom;
            let got = state.pattern_weight(&[j, k]).unwrap();
            assert!(
                (got - expected).abs() < 1.0e-10,
                "(j, k) = ({j}, {k}): {got} vs {expected}"
            );
        }
    }
}

#[test]
fn test_displaced_pattern_weights_match_batched_tensor() {
    let mean = DVector::from_column_slice(&[0.2, 0.5, 0.2, 0.5]);
    let state = GaussianState::new(tms_cov(0.4, 0.0), Some(mean), 2.0).unwrap();
    let a = state.amat().unwrap();
    let beta = state.beta();
    let gamma = beta.map(|z: Complex64| z.conj()) - &a * &beta;
    let prefactor = state.prefactor().unwrap();
    let cutoff = 3;
    let tensor = hafnian_batched(&a, Some(&gamma), cutoff).unwrap();

    for j in 0..cutoff {
        for k in 0..cutoff {
            let haf = tensor.value(&[j, k, j, k]).unwrap();
            let denom = factorial(j) * factorial(k);
            let expected = (haf * prefactor).re / denom;
            let got = state.pattern_weight(&[j, k]).unwrap();
            assert!(
                (got - expected).abs() < 1.0e-10,
                "(j, k) = ({j}, {k}): {got} vs {expected}"
            );
        }
    }
}

#[test]
fn test_marginal_weights_are_consistent_with_reduction() {
    // A marginal do primeiro modo do TMS é a soma sobre o segundo
    let state = GaussianState::new(tms_cov(0.6, 0.2), None, 2.0).unwrap();
    let sub = state.reduced(&[0]).unwrap();
    for k in 0..4 {
        let marginal = sub.pattern_weight(&[k]).unwrap();
        let summed: f64 = (0..25)
            .map(|j| state.pattern_weight(&[k, j]).unwrap())
            .sum();
        assert!(
            (marginal - summed).abs() < 1.0e-8,
            "k = {k}: {marginal} vs {summed}"
        );
    }
}

#[test]
fn test_tms_state_is_valid_but_not_classical() {
    let state = GaussianState::new(tms_cov(0.7, 0.1), None, 2.0).unwrap();
    assert!(state.is_valid(1.0e-6));
    assert!(!state.is_classical(1.0e-8));
}
