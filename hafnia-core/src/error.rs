//! Tipos de erro para hafnia-core

use thiserror::Error;

/// Resultado customizado para validação e redução de matrizes
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Erros estruturais e de domínio das entradas matriciais
#[derive(Debug, Clone, Error)]
pub enum MatrixError {
    #[error("Input matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Input matrix must not contain NaNs or infinities")]
    NotFinite,

    #[error("Input matrix must be symmetric")]
    NotSymmetric,

    #[error("Input matrix must have even dimension, got {0}")]
    OddDimension(usize),

    #[error("Dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Input vector must not contain NaNs or infinities")]
    VectorNotFinite,
}
