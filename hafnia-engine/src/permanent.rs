//! Permanente por inclusão-exclusão de Ryser
//!
//! A fórmula de Ryser soma, sobre todos os subconjuntos de colunas, o
//! produto das somas parciais de cada linha com sinal alternado. O
//! percurso em código de Gray troca uma única coluna por passo, então as
//! somas de linha são atualizadas em O(n) e o custo total é O(n·2ⁿ).

use nalgebra::DMatrix;
use num_traits::{One, Zero};

use hafnia_core::prelude::*;

use crate::error::{EngineError, EngineResult};
use crate::hafnian::{hafnian_repeated, ENUMERATION_LIMIT};

/// Permanente de uma matriz quadrada
///
/// Não exige simetria. A dimensão é limitada a 63 para o contador de
/// subconjuntos caber em um u64.
pub fn permanent<T: Scalar>(a: &DMatrix<T>) -> EngineResult<T> {
    check_square(a)?;
    check_finite(a)?;

    let n = a.nrows();
    if n == 0 {
        return Ok(T::one());
    }
    if n >= ENUMERATION_LIMIT {
        return Err(EngineError::TooLarge {
            dim: n,
            limit: ENUMERATION_LIMIT - 1,
        });
    }

    let mut row_sums = vec![T::zero(); n];
    let mut total = T::zero();
    let mut previous = 0u64;

    for k in 1u64..(1u64 << n) {
        let gray = k ^ (k >> 1);
        let flipped = gray ^ previous;
        let column = flipped.trailing_zeros() as usize;
        if gray & flipped != 0 {
            for i in 0..n {
                row_sums[i] += a[(i, column)];
            }
        } else {
            for i in 0..n {
                row_sums[i] -= a[(i, column)];
            }
        }
        previous = gray;

        let mut product = T::one();
        for sum in &row_sums {
            product *= *sum;
        }
        if (n as u32 - gray.count_ones()) % 2 == 0 {
            total += product;
        } else {
            total -= product;
        }
    }

    Ok(total)
}

/// Permanente da redução de `r` pelas multiplicidades
///
/// Usa a identidade per(R) = haf([[0, R], [Rᵀ, 0]]): o permanente vira o
/// hafniano do recobrimento bipartido, reduzido pelo padrão concatenado.
pub fn permanent_repeated<T: Scalar>(
    r: &DMatrix<T>,
    reduction: &ReductionSpec,
) -> EngineResult<T> {
    check_square(r)?;
    check_finite(r)?;
    reduction.check_dimension(r.nrows())?;

    let n = r.nrows();
    let mut cover = DMatrix::zeros(2 * n, 2 * n);
    cover.view_mut((0, n), (n, n)).copy_from(r);
    cover.view_mut((n, 0), (n, n)).copy_from(&r.transpose());

    let full = ReductionSpec::doubled(reduction.counts());
    hafnian_repeated(&cover, &full, false)
}

// =====
// Testes
// =====
