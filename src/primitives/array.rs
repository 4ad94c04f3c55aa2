//! N-dimensional array used as the input side of shape coercion.
//!
//! Array-like values of any rank (scalars, flat sequences, nested
//! sequences) are first converted into an `Array`, then squeezed and
//! matched against a target [`Shape`](super::Shape). Storage and axis
//! manipulation are delegated to `ndarray`.

use ndarray::{ArrayD, ArrayView, Axis, IxDyn};

use crate::error::{PropertyError, Result};

/// Number of elements for `shape`, `DataLength` if the product overflows.
fn checked_len(len: usize, shape: &[usize]) -> Result<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&n| isize::try_from(n).is_ok())
        .ok_or_else(|| PropertyError::DataLength {
            len,
            shape: shape.to_vec(),
        })
}

/// An n-dimensional array of `f64` values.
///
/// A 0-dimensional array holds exactly one value and represents a scalar.
/// Elements are always kept in row-major standard layout.
///
/// # Examples
///
/// ```
/// use matprop::primitives::Array;
///
/// let a = Array::new(vec![1.0, 2.0, 3.0], &[1, 3, 1]).expect("3 elements");
/// assert_eq!(a.squeeze().shape(), &[3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    inner: ArrayD<f64>,
}

impl Array {
    /// Create a new array from data with the given shape.
    ///
    /// # Errors
    ///
    /// Returns `DataLength` if the data length doesn't match the product of
    /// shape dimensions, or if that product overflows.
    pub fn new(data: Vec<f64>, shape: &[usize]) -> Result<Self> {
        let len = data.len();
        if checked_len(len, shape)? != len {
            return Err(PropertyError::DataLength {
                len,
                shape: shape.to_vec(),
            });
        }
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(|inner| Self { inner })
            .map_err(|_| PropertyError::DataLength {
                len,
                shape: shape.to_vec(),
            })
    }

    /// Create a 0-dimensional array.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            inner: ArrayD::from_elem(IxDyn(&[]), value),
        }
    }

    /// Create a 1D array from a slice.
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            inner: ndarray::Array1::from(data.to_vec()).into_dyn(),
        }
    }

    /// Create an array filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns `DataLength` if the element count overflows.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        checked_len(0, shape)?;
        Ok(Self {
            inner: ArrayD::zeros(IxDyn(shape)),
        })
    }

    /// Get the shape of the array.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.inner.shape()
    }

    /// Get the number of dimensions.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.inner.len()
    }

    /// Get the elements in row-major order.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        // Every constructor yields standard layout
        self.inner.as_slice().unwrap_or_default()
    }

    /// Consumes the array, returning its data.
    #[must_use]
    pub fn into_data(self) -> Vec<f64> {
        self.inner.into_raw_vec()
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.inner.ndim() == 0
    }

    /// The single value of a one-element array, `None` otherwise.
    #[must_use]
    pub fn item(&self) -> Option<f64> {
        match self.data() {
            [value] => Some(*value),
            _ => None,
        }
    }

    /// Removes every axis of length 1.
    ///
    /// Element order and count are unchanged. An array whose axes are all
    /// of length 1 squeezes down to a scalar.
    #[must_use]
    pub fn squeeze(&self) -> Self {
        let mut inner = self.inner.clone();
        for axis in (0..inner.ndim()).rev() {
            if inner.len_of(Axis(axis)) == 1 {
                inner = inner.index_axis_move(Axis(axis), 0);
            }
        }
        Self { inner }
    }

    /// Returns the same elements with a new shape.
    ///
    /// # Errors
    ///
    /// Returns `DataLength` if the element count doesn't match `shape`.
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let len = self.numel();
        if checked_len(len, shape)? != len {
            return Err(PropertyError::DataLength {
                len,
                shape: shape.to_vec(),
            });
        }
        self.inner
            .clone()
            .into_shape(IxDyn(shape))
            .map(|inner| Self { inner })
            .map_err(|_| PropertyError::DataLength {
                len,
                shape: shape.to_vec(),
            })
    }

    /// Stacks equally shaped arrays along a new leading axis.
    ///
    /// # Errors
    ///
    /// Returns `RaggedArray` when the parts disagree on shape.
    pub fn stack(parts: Vec<Array>) -> Result<Self> {
        let Some(first) = parts.first() else {
            return Ok(Self {
                inner: ArrayD::zeros(IxDyn(&[0])),
            });
        };
        let inner = first.shape().to_vec();
        if let Some(part) = parts.iter().find(|p| p.shape() != inner.as_slice()) {
            return Err(PropertyError::RaggedArray {
                expected: inner,
                found: part.shape().to_vec(),
            });
        }

        let views: Vec<ArrayView<f64, IxDyn>> = parts.iter().map(|p| p.inner.view()).collect();
        ndarray::stack(Axis(0), &views)
            .map(Self::from)
            .map_err(|_| PropertyError::RaggedArray {
                expected: inner.clone(),
                found: inner,
            })
    }
}

impl From<ArrayD<f64>> for Array {
    fn from(inner: ArrayD<f64>) -> Self {
        Self {
            inner: inner.as_standard_layout().into_owned(),
        }
    }
}

impl From<ndarray::Array2<f64>> for Array {
    fn from(inner: ndarray::Array2<f64>) -> Self {
        Self::from(inner.into_dyn())
    }
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
