//! # 🌊 hafnia-gaussian — Estados Gaussianos Multimodais
//!
//! Caixa de ferramentas que liga covariâncias físicas às funções
//! matriciais do motor: matrizes Q e A, vetor de deslocamento β, pesos de
//! padrões de fótons via hafniano com laços, verificações de validade e
//! classicalidade, e a codificação de grafos de adjacência em estados.
//!
//! ## Computational Complexity
//!
//! **Q/A/β construction — O(m³):**
//! - One dense inversion of the 2m×2m Q matrix
//!
//! **Pattern weight — O(S³·2^(S/2)) or O(m²·Π(cᵢ+1)):**
//! - Dense reduction + power-trace hafnian for low multiplicities
//! - Kan moment formula when multiplicities grow (S = Σ doubled counts)
//!
//! **Adjacency scaling — O(n³ + 200·n):**
//! - One SVD plus a bisection over the mean-photon curve
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              hafnia-gaussian                    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  GaussianState (mean, cov, ħ)             │  │
//! │  │    qmat │ amat │ beta │ prefactor         │  │
//! │  │    pattern_weight │ reduced               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Grafos: scaling │ Q(A) │ Covmat(Q)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use hafnia_gaussian::GaussianState;
//! use nalgebra::DMatrix;
//!
//! let state = GaussianState::new(DMatrix::identity(4, 4), None, 2.0)?;
//! assert!((state.pattern_weight(&[0, 0])? - 1.0).abs() < 1.0e-12);
//! ```

pub mod error;
pub mod graph;
pub mod state;

pub use error::{GaussianError, GaussianResult};
pub use graph::{adjacency_scaling, covmat_from_qmat, qmat_from_adjacency};
pub use state::{GaussianState, xmat};

#[cfg(test)]
mod tests;
