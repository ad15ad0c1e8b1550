//! Codificação de grafos em estados gaussianos
//!
//! Um grafo de adjacência A vira um estado gaussiano cujo hafniano de
//! reduções dá os pesos de emparelhamento: escala-se A até o número médio
//! de fótons pedido, monta-se Q = (I − XÃ)⁻¹ com Ã = diag(cA, (cA)*) e
//! converte-se Q de volta à covariância na base xxpp.

use nalgebra::DMatrix;
use num_complex::Complex64;

use hafnia_core::prelude::*;

use crate::error::{GaussianError, GaussianResult};

/// Número médio total de fótons do estado com valores singulares `c·s`
fn mean_photons(scaling: f64, singular_values: &[f64]) -> f64 {
    singular_values
        .iter()
        .map(|&s| {
            let t = (scaling * s).powi(2);
            t / (1.0 - t)
        })
        .sum()
}

/// Fator c tal que o estado de cA tem número médio de fótons `n_mean`
///
/// O número médio é estritamente crescente em c e diverge quando c·s_max
/// se aproxima de 1, então uma bisseção em (0, 1/s_max) sempre converge.
pub fn adjacency_scaling(a: &DMatrix<Complex64>, n_mean: f64) -> GaussianResult<f64> {
    check_square(a)?;
    check_finite(a)?;
    check_symmetric(a, DEFAULT_ATOL)?;
    if !(n_mean > 0.0) || !n_mean.is_finite() {
        return Err(GaussianError::ScalingFailed(n_mean));
    }

    let singular_values: Vec<f64> = a.clone().svd(false, false).singular_values.iter().copied().collect();
    let s_max = singular_values.iter().cloned().fold(0.0_f64, f64::max);
    if s_max <= 0.0 {
        return Err(GaussianError::ScalingFailed(n_mean));
    }

    let mut lo = 0.0;
    let mut hi = (1.0 - 1.0e-8) / s_max;
    if mean_photons(hi, &singular_values) < n_mean {
        return Err(GaussianError::ScalingFailed(n_mean));
    }
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if mean_photons(mid, &singular_values) < n_mean {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// Matriz Q do estado gaussiano que codifica o grafo `a`
pub fn qmat_from_adjacency(
    a: &DMatrix<Complex64>,
    n_mean: f64,
) -> GaussianResult<DMatrix<Complex64>> {
    let c = adjacency_scaling(a, n_mean)?;
    let n = a.nrows();

    // I − XÃ = [[I, −(cA)*], [−cA, I]]
    let mut inner = DMatrix::identity(2 * n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            let scaled = a[(i, j)] * c;
            inner[(i, j + n)] = -scaled.conj();
            inner[(i + n, j)] = -scaled;
        }
    }
    inner.try_inverse().ok_or(GaussianError::Singular)
}

/// Covariância xxpp correspondente a uma matriz Q
///
/// Inverte a construção de Q bloco a bloco: N = Q₁₁ − I e M = Q₂₁ dão as
/// partes reais e imaginárias dos blocos de posição, momento e cruzado.
pub fn covmat_from_qmat(q: &DMatrix<Complex64>, hbar: f64) -> GaussianResult<DMatrix<f64>> {
    check_square(q)?;
    check_finite(q)?;
    check_even_dimension(q)?;
    if !(hbar > 0.0) {
        return Err(GaussianError::InvalidHbar(hbar));
    }

    let n = q.nrows() / 2;
    let half = hbar / 2.0;
    let mut cov = DMatrix::zeros(2 * n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            let delta = if i == j { 1.0 } else { 0.0 };
            let n_blk = q[(i, j)] - delta;
            let m_blk = q[(i + n, j)];

            let xx = 2.0 * (n_blk.re + m_blk.re) + delta;
            let pp = 2.0 * (n_blk.re - m_blk.re) + delta;
            let xp = 2.0 * (n_blk.im + m_blk.im);

            cov[(i, j)] = half * xx;
            cov[(i + n, j + n)] = half * pp;
            cov[(i, j + n)] = half * xp;
            cov[(j + n, i)] = half * xp;
        }
    }
    Ok(cov)
}

// =====
// Testes
// =====
