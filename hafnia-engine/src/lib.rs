//! # ⚛️ hafnia-engine — Funções Matriciais de Emparelhamento
//!
//! Implementa o hafniano e suas variantes (laços, repetições, estimativa
//! aproximada), o permanente, o torontoniano e o tensor de Hermite
//! multidimensional. São as quantidades que ligam matrizes simétricas a
//! amplitudes de estados gaussianos de fótons.
//!
//! ## Computational Complexity
//!
//! **Hafnian (power-trace) — O(n⁴ × 2^(n/2)):**
//! - Subset sum over the n/2 index pairs
//! - Power traces per subset via repeated multiplication
//! - Supports the loop (displaced) variant
//!
//! **Hafnian (recursive) — O(n⁴ × 2^(n/2)):**
//! - Björklund's polynomial recursion, no loop support
//!
//! **Hafnian (repeated) — O(n² × Π(nᵢ+1)):**
//! - Kan moment formula over multiplicity boxes
//! - Wins when few modes carry high multiplicities
//!
//! **Permanent — O(n × 2ⁿ):**
//! - Ryser inclusion-exclusion with Gray-code row sums
//!
//! **Torontonian — O(m³ × 2^m):**
//! - One LU determinant per mode subset
//!
//! **Hermite tensor — O(n × cutoffⁿ):**
//! - Ascending total-degree sweep over a flat arena
//!
//! **Scalability:**
//! - Exact hafnians (n ≤ 30): ✓ Excellent
//! - Exact hafnians (30 < n ≤ 50): △ Hours of CPU
//! - Larger matrices: approximate estimator or repeated form
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               hafnia-engine                     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  hafnian() dispatch (HafnianAlgorithm)    │  │
//! │  │    power-trace │ recursive │ repeated     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌─────────────────────┐ ┌───────────────────┐  │
//! │  │  permanent (Ryser)  │ │  tor (subsets)    │  │
//! │  └─────────────────────┘ └───────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  HermiteTensor + hafnian_batched          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  hafnian_approx (Barvinok sampling)       │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use hafnia_engine::{hafnian, HafnianAlgorithm};
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_element(4, 4, 1.0);
//! let haf = hafnian(&a, false, HafnianAlgorithm::PowerTrace)?;
//! assert!((haf - 3.0).abs() < 1.0e-10);
//! ```

pub mod approx;
pub mod error;
pub mod hafnian;
pub mod hermite;
pub mod permanent;
pub mod torontonian;

mod power_trace;
mod recursive;
mod repeated;

pub use approx::hafnian_approx;
pub use error::{EngineError, EngineResult};
pub use hafnian::{
    HafnianAlgorithm, hafnian, hafnian_repeated, hafnian_repeated_displaced, loop_hafnian,
};
pub use hermite::{
    HermiteTensor, hafnian_batched, hermite_multidimensional, hermite_multidimensional_renorm,
};
pub use permanent::{permanent, permanent_repeated};
pub use torontonian::tor;
