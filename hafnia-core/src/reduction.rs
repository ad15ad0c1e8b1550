//! Redução de matrizes por repetição de linhas e colunas
//!
//! A redução de uma matriz n×n por um vetor de multiplicidades repete a
//! i-ésima linha e coluna `counts[i]` vezes, produzindo uma matriz S×S com
//! S = Σ counts. É a representação matricial de ocupações multi-fóton: o
//! hafniano da matriz reduzida é a amplitude do padrão de contagens.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};
use crate::scalar::Scalar;

/// Multiplicidades de repetição, uma por modo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionSpec {
    counts: Vec<usize>,
}

impl ReductionSpec {
    /// Cria a partir das multiplicidades
    pub fn new(counts: Vec<usize>) -> Self {
        Self { counts }
    }

    /// Multiplicidade uniforme `count` para `n` modos
    pub fn uniform(n: usize, count: usize) -> Self {
        Self {
            counts: vec![count; n],
        }
    }

    /// Concatena o padrão consigo mesmo, na ordem `[s, s]`
    ///
    /// É a forma usada para elementos diagonais: as primeiras n entradas
    /// repetem o bloco de aniquilação e as últimas n o de criação.
    pub fn doubled(pattern: &[usize]) -> Self {
        let mut counts = Vec::with_capacity(pattern.len() * 2);
        counts.extend_from_slice(pattern);
        counts.extend_from_slice(pattern);
        Self { counts }
    }

    /// Número de modos
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sem modos?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Soma das multiplicidades (dimensão da matriz reduzida)
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Multiplicidades
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Índices expandidos: o índice i aparece `counts[i]` vezes
    pub fn expanded_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.total());
        for (i, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                indices.push(i);
            }
        }
        indices
    }

    /// Verifica compatibilidade com uma matriz ou vetor de dimensão `n`
    pub fn check_dimension(&self, n: usize) -> MatrixResult<()> {
        if self.counts.len() != n {
            return Err(MatrixError::DimensionMismatch {
                expected: n,
                found: self.counts.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<usize>> for ReductionSpec {
    fn from(counts: Vec<usize>) -> Self {
        Self::new(counts)
    }
}

impl From<&[usize]> for ReductionSpec {
    fn from(counts: &[usize]) -> Self {
        Self::new(counts.to_vec())
    }
}

/// Expande `a` repetindo a i-ésima linha e coluna `counts[i]` vezes
pub fn reduction<T: Scalar>(a: &DMatrix<T>, spec: &ReductionSpec) -> MatrixResult<DMatrix<T>> {
    if a.nrows() != a.ncols() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    spec.check_dimension(a.nrows())?;
    let indices = spec.expanded_indices();
    let size = indices.len();
    Ok(DMatrix::from_fn(size, size, |r, c| {
        a[(indices[r], indices[c])]
    }))
}

/// Expande um vetor repetindo a i-ésima entrada `counts[i]` vezes
pub fn reduction_vector<T: Scalar>(
    v: &DVector<T>,
    spec: &ReductionSpec,
) -> MatrixResult<DVector<T>> {
    spec.check_dimension(v.len())?;
    let indices = spec.expanded_indices();
    Ok(DVector::from_iterator(
        indices.len(),
        indices.iter().map(|&i| v[i]),
    ))
}
