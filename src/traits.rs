//! Conversion trait for array-like values.
//!
//! Anything that can be assigned to a shape-validated property implements
//! [`IntoArray`]: scalars, flat and nested sequences, and the crate's own
//! primitives.

use crate::error::Result;
use crate::primitives::{Array, Matrix};

/// Converts an array-like value into an n-dimensional [`Array`].
///
/// Nested sequences stack along a new leading axis, so `vec![vec![1.0]]`
/// becomes a `1 x 1` array and `vec![vec![vec![1.0]]]` a `1 x 1 x 1` one.
///
/// # Examples
///
/// ```
/// use matprop::traits::IntoArray;
///
/// let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]].into_array().unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
///
/// let ragged = vec![vec![1.0, 2.0], vec![3.0]].into_array();
/// assert!(ragged.is_err());
/// ```
pub trait IntoArray {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns `RaggedArray` if nested elements disagree on shape.
    fn into_array(self) -> Result<Array>;
}

impl IntoArray for Array {
    fn into_array(self) -> Result<Array> {
        Ok(self)
    }
}

impl IntoArray for &Array {
    fn into_array(self) -> Result<Array> {
        Ok(self.clone())
    }
}

impl IntoArray for Matrix<f64> {
    fn into_array(self) -> Result<Array> {
        Ok(Array::from(self))
    }
}

impl IntoArray for &Matrix<f64> {
    fn into_array(self) -> Result<Array> {
        Ok(Array::from(self.clone()))
    }
}

macro_rules! impl_into_array_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoArray for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn into_array(self) -> Result<Array> {
                    Ok(Array::scalar(self as f64))
                }
            }
        )*
    };
}

impl_into_array_scalar!(f64, f32, i32, i64, u32, usize);

impl<T: IntoArray> IntoArray for Vec<T> {
    fn into_array(self) -> Result<Array> {
        let parts = self
            .into_iter()
            .map(IntoArray::into_array)
            .collect::<Result<Vec<_>>>()?;
        Array::stack(parts)
    }
}

impl<T: IntoArray, const N: usize> IntoArray for [T; N] {
    fn into_array(self) -> Result<Array> {
        Vec::from(self).into_array()
    }
}

impl<T: IntoArray + Clone> IntoArray for &[T] {
    fn into_array(self) -> Result<Array> {
        self.to_vec().into_array()
    }
}
