//! Tipos de erro para hafnia-gaussian

use thiserror::Error;

use hafnia_core::MatrixError;
use hafnia_engine::EngineError;

/// Resultado customizado para a caixa de ferramentas gaussiana
pub type GaussianResult<T> = Result<T, GaussianError>;

/// Erros de construção e avaliação de estados gaussianos
///
/// As mensagens das variantes de covariância são o contrato de erro dos
/// amostradores e não devem mudar de texto.
#[derive(Debug, Clone, Error)]
pub enum GaussianError {
    #[error("Covariance matrix must be square.")]
    CovarianceNotSquare,

    #[error("Covariance matrix must not contain NaNs.")]
    CovarianceNotFinite,

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Covariance matrix violates the uncertainty relation")]
    InvalidCovariance,

    #[error("Covariance matrix does not describe a classical state")]
    NotClassical,

    #[error("Mean vector has {found} entries, expected {expected} quadratures")]
    MeanDimensionMismatch { expected: usize, found: usize },

    #[error("Mode index {mode} out of range for {modes} modes")]
    ModeOutOfRange { mode: usize, modes: usize },

    #[error("hbar must be positive, got {0}")]
    InvalidHbar(f64),

    #[error("Q matrix is singular: state is unphysical")]
    Singular,

    #[error("Could not scale adjacency matrix to mean photon number {0}")]
    ScalingFailed(f64),
}
