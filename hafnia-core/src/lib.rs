//! # 🧮 hafnia-core — Fundamentos Matriciais
//!
//! Camada compartilhada do Hafnia: escalares aceitos pelo motor de funções
//! matriciais, redução de matrizes por multiplicidades, validação estrutural
//! e utilitários combinatórios.
//!
//! ## Computational Complexity
//!
//! **Reduction — O(S²):**
//! - S = sum of the multiplicities (dimension of the reduced matrix)
//! - Materializes the repeated rows/columns into a dense copy
//!
//! **Validation — O(n²):**
//! - Square/finite/symmetric checks walk every entry once
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                hafnia-core                      │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Scalar (f64 | Complex64)                 │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  ReductionSpec + reduction()              │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Structural validation (MatrixError)      │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use hafnia_core::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::from_element(4, 4, 1.0);
//! let spec = ReductionSpec::new(vec![2, 0, 1, 1]);
//! let reduced = reduction(&a, &spec)?;
//! assert_eq!(reduced.nrows(), 4);
//! ```

pub mod error;
pub mod math;
pub mod prelude;
pub mod reduction;
pub mod scalar;
pub mod validate;

pub use error::{MatrixError, MatrixResult};
pub use math::{binomial, factorial};
pub use reduction::{ReductionSpec, reduction, reduction_vector};
pub use scalar::Scalar;
pub use validate::{
    DEFAULT_ATOL, check_even_dimension, check_finite, check_finite_vector, check_square,
    check_symmetric,
};

#[cfg(test)]
mod tests;
