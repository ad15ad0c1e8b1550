//! Estimador aproximado de Barvinok
//!
//! Para matrizes reais de entradas não negativas o hafniano é a média de
//! determinantes de matrizes antissimétricas aleatórias W com
//! Wᵢⱼ = gᵢⱼ·√aᵢⱼ e gᵢⱼ ~ N(0,1). Cada amostra custa um determinante
//! O(n³), então o estimador escala para dimensões fora do alcance dos
//! algoritmos exatos, ao preço de variância estatística.

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::StandardNormal;

use hafnia_core::validate::{check_finite, check_square, check_symmetric, DEFAULT_ATOL};

use crate::error::{EngineError, EngineResult};

/// Hafniano aproximado por amostragem de determinantes
///
/// Exige matriz real simétrica de entradas não negativas e pelo menos
/// uma amostra. A diagonal é ignorada, como no hafniano sem laços.
pub fn hafnian_approx<R: Rng + ?Sized>(
    a: &DMatrix<f64>,
    num_samples: usize,
    rng: &mut R,
) -> EngineResult<f64> {
    check_square(a)?;
    check_finite(a)?;
    check_symmetric(a, DEFAULT_ATOL)?;

    if a.iter().any(|&x| x < 0.0) {
        return Err(EngineError::NegativeEntries);
    }
    if num_samples == 0 {
        return Err(EngineError::InvalidSampleCount);
    }

    let n = a.nrows();
    if n == 0 {
        return Ok(1.0);
    }
    if n % 2 == 1 {
        return Ok(0.0);
    }

    let roots = a.map(f64::sqrt);
    let mut acc = 0.0;

    for _ in 0..num_samples {
        let mut skew = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let gauss: f64 = rng.sample(StandardNormal);
                let entry = gauss * roots[(i, j)];
                skew[(i, j)] = entry;
                skew[(j, i)] = -entry;
            }
        }
        acc += skew.determinant();
    }

    Ok(acc / num_samples as f64)
}

// =====
// Testes
// =====
