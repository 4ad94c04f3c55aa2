//! Matrix type for 2D numeric data.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::Array;
use crate::error::{PropertyError, Result};

/// A 2D matrix of values (row-major storage).
///
/// This is the output type of shape coercion: a validated attribute always
/// reads back as a `Matrix<f64>` of exactly the declared shape.
///
/// # Examples
///
/// ```
/// use matprop::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns `DataLength` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(PropertyError::DataLength {
                len: data.len(),
                shape: vec![rows, cols],
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Same shape and every element within `tol` of the other matrix.
    #[must_use]
    pub fn allclose(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl From<Matrix<f64>> for Array {
    fn from(m: Matrix<f64>) -> Self {
        let cols = m.cols;
        Array::from(Array2::from_shape_fn((m.rows, cols), |(i, j)| m.data[i * cols + j]))
    }
}

impl TryFrom<Array> for Matrix<f64> {
    type Error = PropertyError;

    fn try_from(a: Array) -> Result<Self> {
        if a.ndim() != 2 {
            return Err(PropertyError::TypeMismatch {
                name: "array".to_string(),
                expected: "2-D array",
                found: "array of another rank",
            });
        }
        let (rows, cols) = (a.shape()[0], a.shape()[1]);
        Matrix::from_vec(rows, cols, a.into_data())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
