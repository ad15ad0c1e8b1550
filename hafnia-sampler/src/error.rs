//! Tipos de erro para hafnia-sampler

use thiserror::Error;

use hafnia_core::MatrixError;
use hafnia_engine::EngineError;
use hafnia_gaussian::GaussianError;

/// Resultado customizado para a amostragem sequencial
pub type SamplerResult<T> = Result<T, SamplerError>;

/// Erros da amostragem condicional
///
/// Falha em qualquer modo aborta a chamada inteira: nenhuma amostra
/// parcial é devolvida.
#[derive(Debug, Clone, Error)]
pub enum SamplerError {
    #[error(transparent)]
    Gaussian(#[from] GaussianError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Cutoff must be at least 1")]
    InvalidCutoff,

    #[error("Conditional distribution at mode {mode} has no probability mass")]
    DegenerateDistribution { mode: usize },

    #[error("Poisson mean must be finite, got {0}")]
    InvalidPoissonMean(f64),

    #[error("The {sampler} sampler does not support a displaced mean")]
    MeanUnsupported { sampler: &'static str },
}
