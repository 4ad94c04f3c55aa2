//! Shape coercion: normalize an array-like value to a target 2D shape.
//!
//! Rules, applied to the value after every length-1 axis is squeezed out:
//!
//! 1. Exact match: the squeezed shape already equals `(M, N)`.
//! 2. Vector reshape: the squeezed value is a scalar or flat sequence, the
//!    target is a row or column vector (exactly one dimension is 1), and
//!    the element counts agree.
//! 3. Scaled identity: `multiplicative` is set, the squeezed value is a
//!    scalar and the target is square. The result is `s * I`.
//!
//! A `1 x 1` target is not a vector: a single value only fits it through
//! rule 3, so it's rejected when `multiplicative` is off.
//!
//! Anything else is a [`PropertyError::ShapeMismatch`]. A flat sequence is
//! never reshaped into a matrix with two non-unit dimensions, and a vector
//! is never read as a diagonal.

use tracing::trace;

use crate::error::{PropertyError, Result};
use crate::primitives::{Array, Matrix, Shape};
use crate::traits::IntoArray;

/// Coerces `value` into a matrix of exactly `shape`.
///
/// `label` names the value in the error message (an attribute name or
/// "return value").
///
/// # Errors
///
/// Returns `ShapeMismatch` when no rule applies, or `RaggedArray` when the
/// value isn't a rectangular array to begin with.
///
/// # Examples
///
/// ```
/// use matprop::primitives::{Matrix, Shape};
/// use matprop::properties::as_matrix;
///
/// let q = Shape::new(4, 4).unwrap();
/// let m = as_matrix(q, 4.0, "Q", true).unwrap();
/// assert!(m.allclose(&Matrix::eye(4).mul_scalar(4.0), 1e-12));
///
/// let col = Shape::new(3, 1).unwrap();
/// assert_eq!(as_matrix(col, vec![1.0, 2.0, 3.0], "x", true).unwrap().shape(), (3, 1));
///
/// assert!(as_matrix(Shape::new(3, 5).unwrap(), vec![0.0; 15], "H", true).is_err());
/// ```
pub fn as_matrix(
    shape: Shape,
    value: impl IntoArray,
    label: &str,
    multiplicative: bool,
) -> Result<Matrix<f64>> {
    let squeezed = value.into_array()?.squeeze();
    coerce_squeezed(shape, squeezed, label, multiplicative)
}

fn coerce_squeezed(
    shape: Shape,
    m: Array,
    label: &str,
    multiplicative: bool,
) -> Result<Matrix<f64>> {
    let (rows, cols) = shape.dims();

    if shape.matches(m.shape()) {
        trace!(label, %shape, "exact shape match");
        return Matrix::try_from(m);
    }

    if m.ndim() <= 1 && shape.is_vector() && m.numel() == shape.numel() {
        trace!(label, %shape, from = ?m.shape(), "reshaping flat value");
        return Matrix::try_from(m.reshape(&[rows, cols])?);
    }

    if multiplicative && shape.is_square() {
        if let (true, Some(s)) = (m.is_scalar(), m.item()) {
            trace!(label, %shape, scale = s, "scalar to scaled identity");
            return Ok(Matrix::eye(rows).mul_scalar(s));
        }
    }

    Err(PropertyError::ShapeMismatch {
        label: label.to_string(),
        expected: shape,
        actual: m.shape().to_vec(),
    })
}

#[cfg(test)]
#[path = "coerce_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_coerce_contract.rs"]
mod tests_coerce_contract;
