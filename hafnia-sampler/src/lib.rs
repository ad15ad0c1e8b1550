//! # 🎲 hafnia-sampler — Amostragem Condicional Sequencial
//!
//! Sorteia padrões de números de fótons (ou de cliques) de estados
//! gaussianos multimodais, modo a modo: cada modo recebe a distribuição
//! condicional dada pelas contagens já fixadas, avaliada com o motor de
//! funções matriciais, e um sorteio do fluxo ChaCha20 decide a contagem.
//!
//! ## Computational Complexity
//!
//! **Exact photon sampling — O(m · cutoff · W):**
//! - W = custo de um peso de padrão (hafniano com laços da redução)
//! - Dominado pelos últimos modos, onde a redução é maior
//!
//! **Threshold sampling — O(m · 2^m · m³):**
//! - Um torontoniano por bin por modo
//!
//! **Approximate sampling — O(m · cutoff · approx_samples · S³):**
//! - Um determinante por amostra interna de Barvinok
//!
//! **Classical fast path — O(m²) per sample:**
//! - Uma normal multivariada + m sorteios de Poisson, hafniano nenhum
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              hafnia-sampler                     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  RandomState (ChaCha20, seed global)      │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌─────────────────────┐ ┌───────────────────┐  │
//! │  │  photon (hafniano)  │ │  threshold (tor)  │  │
//! │  └─────────────────────┘ └───────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  classical (coerentes + Poisson)          │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use hafnia_sampler::{hafnian_sample_state, seed};
//! use nalgebra::DMatrix;
//!
//! seed(137);
//! let vacuum = DMatrix::identity(4, 4);
//! let samples = hafnian_sample_state(&vacuum, 10)?;
//! assert!(samples.iter().all(|s| s == &vec![0, 0]));
//! ```

pub mod classical;
pub mod error;
pub mod options;
pub mod photon;
pub mod random;
pub mod threshold;

/// Uma amostra: uma contagem (ou clique 0/1) por modo
pub type Sample = Vec<usize>;

pub use classical::{
    hafnian_sample_classical_state, hafnian_sample_classical_state_with,
    hafnian_sample_classical_state_with_state, torontonian_sample_classical_state,
    torontonian_sample_classical_state_with, torontonian_sample_classical_state_with_state,
};
pub use error::{SamplerError, SamplerResult};
pub use options::SampleOptions;
pub use photon::{
    hafnian_sample_graph, hafnian_sample_graph_with, hafnian_sample_graph_with_state,
    hafnian_sample_state, hafnian_sample_state_with, hafnian_sample_state_with_state,
};
pub use random::{RandomState, seed};
pub use threshold::{
    torontonian_sample_state, torontonian_sample_state_with, torontonian_sample_state_with_state,
};
