//! Torontoniano para detecção por limiar
//!
//! O torontoniano de uma matriz 2m×2m soma, sobre os 2^m subconjuntos de
//! modos, o inverso da raiz do determinante de I − O_Z com sinal dado
//! pela paridade do complemento. É a contraparte do hafniano quando os
//! detectores distinguem apenas "clique" de vácuo.
//!
//! ## Computational Complexity
//!
//! O(m³·2^m) for m modes: one LU determinant per subset.

use nalgebra::DMatrix;
use num_complex::Complex64;

use hafnia_core::validate::{
    check_even_dimension, check_finite, check_square, check_symmetric, DEFAULT_ATOL,
};

use crate::error::{EngineError, EngineResult};
use crate::hafnian::ENUMERATION_LIMIT;

/// Torontoniano de uma matriz complexa simétrica 2m×2m
///
/// O subconjunto vazio contribui com o termo unitário sem montar matriz
/// alguma. Determinante nulo em qualquer subconjunto é reportado como
/// falha numérica em vez de propagar um infinito.
pub fn tor(o: &DMatrix<Complex64>) -> EngineResult<f64> {
    check_square(o)?;
    check_finite(o)?;
    check_symmetric(o, DEFAULT_ATOL)?;
    check_even_dimension(o)?;

    let modes = o.nrows() / 2;
    if modes >= ENUMERATION_LIMIT {
        return Err(EngineError::TooLarge {
            dim: o.nrows(),
            limit: 2 * (ENUMERATION_LIMIT - 1),
        });
    }

    let mut total = Complex64::new(0.0, 0.0);

    for z in 0u64..(1u64 << modes) {
        let chosen = z.count_ones() as usize;
        let summand = if z == 0 {
            Complex64::new(1.0, 0.0)
        } else {
            // Índices selecionados: i e i+m para cada bit do subconjunto
            let mut sel = Vec::with_capacity(2 * chosen);
            for i in 0..modes {
                if z >> i & 1 == 1 {
                    sel.push(i);
                }
            }
            for i in 0..modes {
                if z >> i & 1 == 1 {
                    sel.push(i + modes);
                }
            }

            let size = sel.len();
            let inner = DMatrix::from_fn(size, size, |r, c| {
                let delta = if r == c {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                delta - o[(sel[r], sel[c])]
            });

            let det = inner.determinant();
            if det.norm() == 0.0 {
                return Err(EngineError::Numerical(format!(
                    "singular subset matrix in torontonian ({size}x{size})"
                )));
            }
            det.sqrt().inv()
        };

        if (modes - chosen) % 2 == 0 {
            total += summand;
        } else {
            total -= summand;
        }
    }

    Ok(total.re)
}

// =====
// Testes
// =====
