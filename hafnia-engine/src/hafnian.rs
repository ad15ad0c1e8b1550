//! Hafniano e hafniano com laços
//!
//! O hafniano de uma matriz simétrica n×n soma, sobre todos os
//! emparelhamentos perfeitos dos índices, o produto das entradas
//! emparelhadas. A variante com laços (loop hafnian) admite também
//! auto-emparelhamentos ponderados pela diagonal, o que representa
//! estados com deslocamento.

use std::fmt;

use nalgebra::DMatrix;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use hafnia_core::prelude::*;

use crate::error::{EngineError, EngineResult};
use crate::power_trace::{hafnian_power_trace, loop_hafnian_power_trace};
use crate::recursive::hafnian_recursive;
use crate::repeated::hafnian_repeated_with_diagonal;

/// Limite de dimensão para as enumerações por subconjuntos
pub(crate) const ENUMERATION_LIMIT: usize = 64;

/// Algoritmo de cálculo do hafniano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HafnianAlgorithm {
    /// Soma sobre subconjuntos de pares com traços de potências; suporta laços
    #[default]
    PowerTrace,
    /// Recursão de Björklund sobre polinômios auxiliares; não suporta laços
    Recursive,
    /// Fórmula de momentos de Kan sobre multiplicidades; suporta laços
    Repeated,
}

impl HafnianAlgorithm {
    /// Nome curto do algoritmo
    pub fn name(&self) -> &'static str {
        match self {
            HafnianAlgorithm::PowerTrace => "power-trace",
            HafnianAlgorithm::Recursive => "recursive",
            HafnianAlgorithm::Repeated => "repeated",
        }
    }

    /// O algoritmo aceita a variante com laços?
    pub fn supports_loop(&self) -> bool {
        !matches!(self, HafnianAlgorithm::Recursive)
    }
}

impl fmt::Display for HafnianAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Hafniano de uma matriz simétrica
///
/// Com `loop_hafnian = true` a diagonal entra como pesos de
/// auto-emparelhamento. Dimensão ímpar sem laços tem hafniano zero por
/// definição e retorna sem invocar algoritmo algum; com laços a matriz é
/// imersa em dimensão par com um canto unitário.
pub fn hafnian<T: Scalar>(
    a: &DMatrix<T>,
    loop_hafnian: bool,
    algorithm: HafnianAlgorithm,
) -> EngineResult<T> {
    check_square(a)?;
    check_finite(a)?;
    check_symmetric(a, DEFAULT_ATOL)?;

    if loop_hafnian && !algorithm.supports_loop() {
        return Err(EngineError::LoopUnsupported { algorithm });
    }

    let n = a.nrows();
    if n == 0 {
        return Ok(T::one());
    }
    if n % 2 == 1 && !loop_hafnian {
        return Ok(T::zero());
    }
    if n > ENUMERATION_LIMIT {
        return Err(EngineError::TooLarge {
            dim: n,
            limit: ENUMERATION_LIMIT,
        });
    }
    if n == 1 {
        // Ímpar com laços: o único emparelhamento é o laço da diagonal
        return Ok(a[(0, 0)]);
    }
    if n == 2 {
        return Ok(if loop_hafnian {
            a[(0, 1)] + a[(0, 0)] * a[(1, 1)]
        } else {
            a[(0, 1)]
        });
    }
    if n % 2 == 1 {
        // Imersão par: um vértice extra com laço unitário não altera a soma
        let mut padded = DMatrix::zeros(n + 1, n + 1);
        padded.view_mut((0, 0), (n, n)).copy_from(a);
        padded[(n, n)] = T::one();
        return hafnian(&padded, true, algorithm);
    }

    match algorithm {
        HafnianAlgorithm::PowerTrace => Ok(if loop_hafnian {
            loop_hafnian_power_trace(a)
        } else {
            hafnian_power_trace(a)
        }),
        HafnianAlgorithm::Recursive => Ok(hafnian_recursive(a)),
        HafnianAlgorithm::Repeated => {
            let spec = ReductionSpec::uniform(n, 1);
            hafnian_repeated(a, &spec, loop_hafnian)
        }
    }
}

/// Hafniano com laços usando a diagonal como deslocamento
pub fn loop_hafnian<T: Scalar>(a: &DMatrix<T>) -> EngineResult<T> {
    hafnian(a, true, HafnianAlgorithm::PowerTrace)
}

/// Hafniano da redução de `r` pelas multiplicidades, sem materializá-la
///
/// Avalia a fórmula de momentos de Kan diretamente sobre a matriz base,
/// com custo Π(countsᵢ+1) em vez do hafniano denso de dimensão Σ counts.
pub fn hafnian_repeated<T: Scalar>(
    r: &DMatrix<T>,
    reduction: &ReductionSpec,
    loop_hafnian: bool,
) -> EngineResult<T> {
    check_square(r)?;
    check_finite(r)?;
    check_symmetric(r, DEFAULT_ATOL)?;
    reduction.check_dimension(r.nrows())?;

    let mu = if loop_hafnian {
        Some(nalgebra::DVector::from_fn(r.nrows(), |i, _| r[(i, i)]))
    } else {
        None
    };
    Ok(hafnian_repeated_with_diagonal(
        r,
        reduction.counts(),
        mu.as_ref(),
    ))
}

/// Hafniano com laços da redução, com diagonal substituída por `mu`
pub fn hafnian_repeated_displaced<T: Scalar>(
    r: &DMatrix<T>,
    reduction: &ReductionSpec,
    mu: &nalgebra::DVector<T>,
) -> EngineResult<T> {
    check_square(r)?;
    check_finite(r)?;
    check_symmetric(r, DEFAULT_ATOL)?;
    check_finite_vector(mu)?;
    reduction.check_dimension(r.nrows())?;
    if mu.len() != r.nrows() {
        return Err(EngineError::Matrix(MatrixError::DimensionMismatch {
            expected: r.nrows(),
            found: mu.len(),
        }));
    }
    Ok(hafnian_repeated_with_diagonal(r, reduction.counts(), Some(mu)))
}

// =====
// Testes
// =====
