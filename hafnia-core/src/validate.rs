//! Validação estrutural de matrizes de entrada

use nalgebra::{DMatrix, DVector};

use crate::error::{MatrixError, MatrixResult};
use crate::scalar::Scalar;

/// Tolerância absoluta padrão para comparações de simetria
pub const DEFAULT_ATOL: f64 = 1.0e-8;

/// Exige matriz quadrada
pub fn check_square<T: Scalar>(a: &DMatrix<T>) -> MatrixResult<()> {
    if a.nrows() != a.ncols() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(())
}

/// Exige entradas finitas (sem NaN nem infinito)
pub fn check_finite<T: Scalar>(a: &DMatrix<T>) -> MatrixResult<()> {
    if a.iter().any(|entry| !entry.is_finite()) {
        return Err(MatrixError::NotFinite);
    }
    Ok(())
}

/// Exige vetor com entradas finitas
pub fn check_finite_vector<T: Scalar>(v: &DVector<T>) -> MatrixResult<()> {
    if v.iter().any(|entry| !entry.is_finite()) {
        return Err(MatrixError::VectorNotFinite);
    }
    Ok(())
}

/// Exige simetria dentro da tolerância absoluta
pub fn check_symmetric<T: Scalar>(a: &DMatrix<T>, atol: f64) -> MatrixResult<()> {
    check_square(a)?;
    let n = a.nrows();
    for j in 0..n {
        for i in 0..j {
            if (a[(i, j)] - a[(j, i)]).modulus() > atol {
                return Err(MatrixError::NotSymmetric);
            }
        }
    }
    Ok(())
}

/// Exige dimensão par (matrizes de covariância 2m×2m)
pub fn check_even_dimension<T: Scalar>(a: &DMatrix<T>) -> MatrixResult<()> {
    if a.nrows() % 2 != 0 {
        return Err(MatrixError::OddDimension(a.nrows()));
    }
    Ok(())
}
