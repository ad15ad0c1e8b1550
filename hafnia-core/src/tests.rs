//! Testes integrados para hafnia-core

use crate::prelude::*;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

#[test]
fn test_reduction_spec_total() {
    let spec = ReductionSpec::new(vec![2, 0, 1]);
    assert_eq!(spec.len(), 3);
    assert_eq!(spec.total(), 3);
    assert_eq!(spec.expanded_indices(), vec![0, 0, 2]);
}

#[test]
fn test_reduction_spec_doubled() {
    let spec = ReductionSpec::doubled(&[1, 2]);
    assert_eq!(spec.counts(), &[1, 2, 1, 2]);
    assert_eq!(spec.total(), 6);
}

#[test]
fn test_reduction_expands_rows_and_columns() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    let spec = ReductionSpec::new(vec![2, 1]);
    let r = reduction(&a, &spec).unwrap();
    assert_eq!(r.nrows(), 3);
    assert_eq!(r[(0, 0)], 1.0);
    assert_eq!(r[(0, 1)], 1.0);
    assert_eq!(r[(1, 2)], 2.0);
    assert_eq!(r[(2, 2)], 4.0);
}

#[test]
fn test_reduction_zero_counts_gives_empty() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    let spec = ReductionSpec::uniform(2, 0);
    let r = reduction(&a, &spec).unwrap();
    assert_eq!(r.nrows(), 0);
}

#[test]
fn test_reduction_dimension_mismatch() {
    let a = DMatrix::<f64>::identity(3, 3);
    let spec = ReductionSpec::new(vec![1, 1]);
    let err = reduction(&a, &spec).unwrap_err();
    assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
}

#[test]
fn test_reduction_vector_expands_entries() {
    let v = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    let spec = ReductionSpec::new(vec![0, 2, 1]);
    let r = reduction_vector(&v, &spec).unwrap();
    assert_eq!(r.as_slice(), &[2.0, 2.0, 3.0]);
}

#[test]
fn test_check_square_rejects_rectangular() {
    let a = DMatrix::<f64>::zeros(2, 3);
    let err = check_square(&a).unwrap_err();
    assert!(err.to_string().contains("must be square"));
}

#[test]
fn test_check_finite_rejects_nan() {
    let a = DMatrix::from_row_slice(2, 2, &[0.0, 5.0, 0.0, f64::NAN]);
    let err = check_finite(&a).unwrap_err();
    assert!(err.to_string().contains("must not contain NaNs"));
}

#[test]
fn test_check_finite_accepts_complex() {
    let a = DMatrix::from_element(2, 2, Complex64::new(1.0, -1.0));
    assert!(check_finite(&a).is_ok());
}

#[test]
fn test_check_symmetric_tolerance() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0 + 1.0e-12, 1.0]);
    assert!(check_symmetric(&a, DEFAULT_ATOL).is_ok());

    let b = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 1.0]);
    assert!(matches!(
        check_symmetric(&b, DEFAULT_ATOL),
        Err(MatrixError::NotSymmetric)
    ));
}

#[test]
fn test_check_even_dimension() {
    let a = DMatrix::<f64>::identity(3, 3);
    assert!(matches!(
        check_even_dimension(&a),
        Err(MatrixError::OddDimension(3))
    ));
    let b = DMatrix::<f64>::identity(4, 4);
    assert!(check_even_dimension(&b).is_ok());
}

#[test]
fn test_factorial_and_binomial() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(5), 120.0);
    assert_eq!(binomial(5, 2), 10.0);
    assert_eq!(binomial(4, 0), 1.0);
    assert_eq!(binomial(3, 5), 0.0);
}
