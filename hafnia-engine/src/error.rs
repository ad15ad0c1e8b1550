//! Tipos de erro para hafnia-engine

use thiserror::Error;

use hafnia_core::MatrixError;

use crate::hafnian::HafnianAlgorithm;

/// Resultado customizado para as funções matriciais
pub type EngineResult<T> = Result<T, EngineError>;

/// Erros do motor de funções matriciais
///
/// As variantes seguem a taxonomia das entradas: `Matrix` cobre falhas
/// estruturais, `NegativeEntries` e `InvalidCutoff` são erros de domínio,
/// `LoopUnsupported` é uma configuração não suportada e `Numerical` cobre
/// falhas detectadas durante o cálculo.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Loop hafnian is not supported by the {algorithm} algorithm")]
    LoopUnsupported { algorithm: HafnianAlgorithm },

    #[error("Approximate hafnian requires real non-negative entries")]
    NegativeEntries,

    #[error("Cutoff must be at least 1")]
    InvalidCutoff,

    #[error("Number of samples must be at least 1")]
    InvalidSampleCount,

    #[error("Matrix dimension {dim} exceeds the enumeration limit of {limit}")]
    TooLarge { dim: usize, limit: usize },

    #[error("Hermite tensor of {modes} modes at cutoff {cutoff} exceeds addressable size")]
    TensorTooLarge { modes: usize, cutoff: usize },

    #[error("Numerical failure: {0}")]
    Numerical(String),
}
