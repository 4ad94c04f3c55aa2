//! Functions whose return values are shape-checked on every call.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::coerce::as_matrix;
use crate::error::Result;
use crate::primitives::{Array, Matrix, Shape};
use crate::traits::IntoArray;

type DynFn = dyn Fn(&[Array]) -> Result<Array> + Send + Sync;

/// A shared, type-erased function of array arguments.
///
/// Errors returned by the function are passed back to the caller as they
/// are. Cloning is cheap: clones share the same function.
#[derive(Clone)]
pub struct Callable(Arc<DynFn>);

impl Callable {
    /// Wraps a closure returning any array-like value.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&[Array]) -> Result<R> + Send + Sync + 'static,
        R: IntoArray,
    {
        Self(Arc::new(move |args: &[Array]| f(args)?.into_array()))
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Whatever the function itself returns.
    pub fn call(&self, args: &[Array]) -> Result<Array> {
        (self.0)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable").finish_non_exhaustive()
    }
}

/// A function bound to a return shape.
///
/// Every successful return value is coerced to `shape` with the same rules
/// as a shape-validated property. Nothing is checked at wrap time: the
/// function is only invoked when the caller invokes it.
///
/// # Examples
///
/// ```
/// use matprop::primitives::{Array, Shape};
/// use matprop::properties::WrappedFunction;
///
/// let shape = Shape::new(3, 5).unwrap();
/// let zeros = WrappedFunction::from_fn(shape, |args: &[Array]| {
///     let dims: Vec<usize> = args[0].data().iter().map(|&d| d as usize).collect();
///     Array::zeros(&dims)
/// });
///
/// assert_eq!(zeros.call(&[Array::from_slice(&[3.0, 5.0])]).unwrap().shape(), (3, 5));
/// assert!(zeros.call(&[Array::from_slice(&[5.0, 3.0])]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WrappedFunction {
    f: Callable,
    shape: Shape,
    name: Option<String>,
    multiplicative: bool,
}

impl WrappedFunction {
    /// Binds `f` to `shape`, multiplicative by default.
    #[must_use]
    pub fn new(shape: Shape, f: Callable) -> Self {
        Self {
            f,
            shape,
            name: None,
            multiplicative: true,
        }
    }

    /// Binds a closure to `shape`.
    pub fn from_fn<F, R>(shape: Shape, f: F) -> Self
    where
        F: Fn(&[Array]) -> Result<R> + Send + Sync + 'static,
        R: IntoArray,
    {
        Self::new(shape, Callable::new(f))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_multiplicative(mut self, multiplicative: bool) -> Self {
        self.multiplicative = multiplicative;
        self
    }

    /// Declared return shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn multiplicative(&self) -> bool {
        self.multiplicative
    }

    /// The underlying, unchecked function.
    #[must_use]
    pub fn inner(&self) -> &Callable {
        &self.f
    }

    /// Label used in shape errors.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("return value of `{name}`"),
            None => "return value".to_string(),
        }
    }

    /// Calls the function and coerces its result to the declared shape.
    ///
    /// # Errors
    ///
    /// Errors from the function propagate unchanged. A successful return
    /// value that can't be coerced fails with `ShapeMismatch`.
    pub fn call(&self, args: &[Array]) -> Result<Matrix<f64>> {
        let value = self.f.call(args)?;
        as_matrix(self.shape, value, &self.label(), self.multiplicative).inspect_err(|err| {
            debug!(label = %self.label(), shape = %self.shape, %err, "return value rejected");
        })
    }
}

/// Annotation that binds functions to a return shape.
///
/// # Examples
///
/// ```
/// use matprop::primitives::{Array, Matrix};
/// use matprop::properties::ReturnShape;
///
/// let identity = ReturnShape::new(4, 4)
///     .unwrap()
///     .with_name("identity")
///     .wrap(|args: &[Array]| Ok(args[0].clone()));
///
/// let m = identity.call(&[Array::scalar(4.0)]).unwrap();
/// assert!(m.allclose(&Matrix::eye(4).mul_scalar(4.0), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnShape {
    shape: Shape,
    multiplicative: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedReturnShape {
    inner: ReturnShape,
    name: String,
}

impl ReturnShape {
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            shape: Shape::new(rows, cols)?,
            multiplicative: true,
        })
    }

    #[must_use]
    pub fn with_multiplicative(mut self, multiplicative: bool) -> Self {
        self.multiplicative = multiplicative;
        self
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> NamedReturnShape {
        NamedReturnShape {
            inner: self,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Wraps `f` so its return values are checked against this shape.
    pub fn wrap<F, R>(&self, f: F) -> WrappedFunction
    where
        F: Fn(&[Array]) -> Result<R> + Send + Sync + 'static,
        R: IntoArray,
    {
        WrappedFunction::from_fn(self.shape, f).with_multiplicative(self.multiplicative)
    }
}

impl NamedReturnShape {
    #[must_use]
    pub fn with_multiplicative(mut self, multiplicative: bool) -> Self {
        self.inner = self.inner.with_multiplicative(multiplicative);
        self
    }

    pub fn wrap<F, R>(&self, f: F) -> WrappedFunction
    where
        F: Fn(&[Array]) -> Result<R> + Send + Sync + 'static,
        R: IntoArray,
    {
        self.inner.wrap(f).with_name(self.name.clone())
    }
}
