//! Tensor de Hermite multidimensional
//!
//! Os polinômios de Hermite multidimensionais H_k^{(R)}(y) satisfazem a
//! recorrência H[k] = y_a·H[k−e_a] − Σᵢ (k−e_a)ᵢ·R[a,i]·H[k−e_a−e_i],
//! então o tensor inteiro sai de uma varredura em grau total crescente
//! sobre um arena plano. Com R = −A o tensor coleciona todos os
//! hafnianos com laços das reduções de A até o corte, que é o caminho
//! barato para matrizes de densidade completas.
//!
//! ## Computational Complexity
//!
//! O(n·cutoffⁿ) entries, each combining at most n predecessors.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use hafnia_core::prelude::*;

use crate::error::{EngineError, EngineResult};

/// Tensor denso indexado por multi-índices 0 ≤ kᵢ < cutoff
///
/// Armazenamento plano em ordem row-major com o último eixo mais rápido.
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteTensor {
    data: Vec<Complex64>,
    modes: usize,
    cutoff: usize,
}

impl HermiteTensor {
    /// Número de modos (eixos)
    pub fn modes(&self) -> usize {
        self.modes
    }

    /// Corte exclusivo por eixo
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Número total de entradas (cutoff^modes)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Tensor sem entradas?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entradas em ordem row-major
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Valor no multi-índice, ou `None` fora do corte
    pub fn value(&self, index: &[usize]) -> Option<Complex64> {
        if index.len() != self.modes || index.iter().any(|&k| k >= self.cutoff) {
            return None;
        }
        let mut flat = 0;
        for &k in index {
            flat = flat * self.cutoff + k;
        }
        Some(self.data[flat])
    }
}

/// Tensor de Hermite H_k^{(R)}(y) para todos os k abaixo do corte
pub fn hermite_multidimensional(
    r: &DMatrix<Complex64>,
    y: &DVector<Complex64>,
    cutoff: usize,
) -> EngineResult<HermiteTensor> {
    build_tensor(r, y, cutoff, false)
}

/// Variante renormalizada: cada entrada dividida por √(k!)
///
/// Mantém a magnitude das entradas controlada em cortes altos; é a forma
/// que entra diretamente em amplitudes de estados gaussianos.
pub fn hermite_multidimensional_renorm(
    r: &DMatrix<Complex64>,
    y: &DVector<Complex64>,
    cutoff: usize,
) -> EngineResult<HermiteTensor> {
    build_tensor(r, y, cutoff, true)
}

/// Todos os hafnianos com laços das reduções de `a` até o corte
///
/// Identidade lhaf(reduction(a, k), diag = y) = H_k^{(−a)}(y); sem `y` o
/// deslocamento é nulo e o tensor traz os hafnianos sem laços de ordem
/// par (as entradas de grau ímpar se anulam).
pub fn hafnian_batched(
    a: &DMatrix<Complex64>,
    y: Option<&DVector<Complex64>>,
    cutoff: usize,
) -> EngineResult<HermiteTensor> {
    let negated = -a;
    match y {
        Some(shift) => hermite_multidimensional(&negated, shift, cutoff),
        None => {
            let zeros = DVector::zeros(a.nrows());
            hermite_multidimensional(&negated, &zeros, cutoff)
        }
    }
}

fn build_tensor(
    r: &DMatrix<Complex64>,
    y: &DVector<Complex64>,
    cutoff: usize,
    renorm: bool,
) -> EngineResult<HermiteTensor> {
    check_square(r)?;
    check_finite(r)?;
    check_symmetric(r, DEFAULT_ATOL)?;
    check_finite_vector(y)?;

    let modes = r.nrows();
    if y.len() != modes {
        return Err(EngineError::Matrix(MatrixError::DimensionMismatch {
            expected: modes,
            found: y.len(),
        }));
    }
    if cutoff == 0 {
        return Err(EngineError::InvalidCutoff);
    }
    let size = cutoff
        .checked_pow(modes as u32)
        .ok_or(EngineError::TensorTooLarge { modes, cutoff })?;

    // Passos de cada eixo no arranjo plano, último eixo com passo 1
    let mut strides = vec![1usize; modes];
    for i in (0..modes.saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * cutoff;
    }

    // Varredura em grau total crescente: todo antecessor k − e_a já
    // está preenchido quando k é visitado
    let mut order: Vec<Vec<usize>> = Vec::with_capacity(size);
    let mut index = vec![0usize; modes];
    loop {
        order.push(index.clone());
        if !advance(&mut index, cutoff) {
            break;
        }
    }
    order.sort_by_key(|k| k.iter().sum::<usize>());

    let mut data = vec![Complex64::new(0.0, 0.0); size];
    data[0] = Complex64::new(1.0, 0.0);

    for k in &order {
        let Some(axis) = k.iter().position(|&v| v > 0) else {
            continue;
        };
        let flat: usize = k.iter().zip(strides.iter()).map(|(&v, &s)| v * s).sum();
        let below = flat - strides[axis];

        let mut value = y[axis] * data[below];
        for i in 0..modes {
            let predecessors = if i == axis { k[i] - 1 } else { k[i] };
            if predecessors == 0 {
                continue;
            }
            let weight = if renorm {
                (predecessors as f64).sqrt()
            } else {
                predecessors as f64
            };
            value -= r[(axis, i)].scale(weight) * data[below - strides[i]];
        }
        if renorm {
            value = value.unscale((k[axis] as f64).sqrt());
        }
        data[flat] = value;
    }

    Ok(HermiteTensor {
        data,
        modes,
        cutoff,
    })
}

/// Incremento row-major: o último eixo é o mais rápido
fn advance(index: &mut [usize], cutoff: usize) -> bool {
    for i in (0..index.len()).rev() {
        if index[i] + 1 < cutoff {
            index[i] += 1;
            return true;
        }
        index[i] = 0;
    }
    false
}

// =====
// Testes
// =====
