//! # Prelude — Re-exportações Convenientes
//!
//! Importação única para usar o hafnia-core:
//!
//! ```
//! use hafnia_core::prelude::*;
//! ```

// Escalares
pub use crate::scalar::Scalar;

// Redução
pub use crate::reduction::{
    ReductionSpec,
    reduction,
    reduction_vector,
};

// Validação
pub use crate::validate::{
    DEFAULT_ATOL,
    check_even_dimension,
    check_finite,
    check_finite_vector,
    check_square,
    check_symmetric,
};

// Combinatória
pub use crate::math::{binomial, factorial};

// Erros
pub use crate::error::{MatrixError, MatrixResult};
