//! Target shape for 2D matrices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PropertyError, Result};

/// A validated `(rows, cols)` pair with both dimensions positive.
///
/// # Examples
///
/// ```
/// use matprop::primitives::Shape;
///
/// let s = Shape::new(3, 1).expect("positive dims");
/// assert!(s.is_vector());
/// assert_eq!(s.to_string(), "(3, 1)");
/// assert!(Shape::new(0, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Creates a new shape.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PropertyError::InvalidShape { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A row or column vector: exactly one dimension is 1.
    ///
    /// `1 x 1` is not a vector. It only accepts a scalar through the scaled
    /// identity rule.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        (self.rows == 1) != (self.cols == 1)
    }

    /// True when `dims` is exactly `[rows, cols]`.
    #[must_use]
    pub fn matches(&self, dims: &[usize]) -> bool {
        dims == [self.rows, self.cols]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

impl TryFrom<(usize, usize)> for Shape {
    type Error = PropertyError;

    fn try_from((rows, cols): (usize, usize)) -> Result<Self> {
        Self::new(rows, cols)
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        shape.dims()
    }
}
