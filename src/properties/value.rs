//! Values a property can hold.

use super::function::{Callable, WrappedFunction};
use crate::error::{PropertyError, Result};
use crate::primitives::{Array, Matrix};
use crate::traits::IntoArray;

/// A property value.
///
/// `Array` and `Callable` are raw values as assigned to an attribute with
/// no validator; `Matrix` and `Function` are what the shape validators
/// store.
#[derive(Debug, Clone)]
pub enum Value {
    /// Unvalidated array of any rank
    Array(Array),
    /// Matrix conformed to a declared shape
    Matrix(Matrix<f64>),
    /// Function bound to a return shape
    Function(WrappedFunction),
    /// Function with no return shape
    Callable(Callable),
}

impl Value {
    /// Converts any array-like value.
    ///
    /// # Errors
    ///
    /// Returns `RaggedArray` for non-rectangular nested sequences.
    pub fn array(value: impl IntoArray) -> Result<Self> {
        Ok(Self::Array(value.into_array()?))
    }

    /// Wraps a closure as an unchecked callable value.
    pub fn function<F, R>(f: F) -> Self
    where
        F: Fn(&[Array]) -> Result<R> + Send + Sync + 'static,
        R: IntoArray,
    {
        Self::Callable(Callable::new(f))
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Array(_) => "array",
            Value::Matrix(_) => "matrix",
            Value::Function(_) => "wrapped function",
            Value::Callable(_) => "function",
        }
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_) | Value::Callable(_))
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_matrix(&self) -> Option<&Matrix<f64>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&WrappedFunction> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Converts a matrix or 2D array value into a matrix.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for functions and arrays of other ranks.
    pub fn into_matrix(self) -> Result<Matrix<f64>> {
        match self {
            Value::Matrix(m) => Ok(m),
            Value::Array(a) if a.ndim() == 2 => Matrix::try_from(a),
            other => Err(PropertyError::TypeMismatch {
                name: "value".to_string(),
                expected: "matrix",
                found: other.kind(),
            }),
        }
    }

    /// Calls a function value.
    ///
    /// A wrapped function returns a `Matrix` of its declared shape, an
    /// unwrapped one returns its raw `Array`.
    ///
    /// # Errors
    ///
    /// Returns `NotCallable` for data values, otherwise whatever the call
    /// returns.
    pub fn call(&self, args: &[Array]) -> Result<Value> {
        match self {
            Value::Function(f) => f.call(args).map(Value::Matrix),
            Value::Callable(c) => c.call(args).map(Value::Array),
            Value::Array(_) | Value::Matrix(_) => Err(PropertyError::NotCallable {
                name: "value".to_string(),
            }),
        }
    }

    /// Array view of a data value, `None` for functions.
    pub(crate) fn to_array(&self) -> Option<Array> {
        match self {
            Value::Array(a) => Some(a.clone()),
            Value::Matrix(m) => Some(Array::from(m.clone())),
            Value::Function(_) | Value::Callable(_) => None,
        }
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Matrix<f64>> for Value {
    fn from(m: Matrix<f64>) -> Self {
        Value::Matrix(m)
    }
}

impl From<WrappedFunction> for Value {
    fn from(f: WrappedFunction) -> Self {
        Value::Function(f)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<f64> for Value {
    fn from(s: f64) -> Self {
        Value::Array(Array::scalar(s))
    }
}
