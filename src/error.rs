//! Error types for property validation.
//!
//! Every failure is reported synchronously to the caller of the operation
//! that violated a contract. Nothing is retried or recovered internally.

use thiserror::Error;

use crate::primitives::Shape;

/// Main error type for matprop operations.
///
/// # Examples
///
/// ```
/// use matprop::error::PropertyError;
/// use matprop::primitives::Shape;
///
/// let err = PropertyError::ShapeMismatch {
///     label: "F".to_string(),
///     expected: Shape::new(3, 5).expect("positive dims"),
///     actual: vec![5, 3],
/// };
/// assert!(err.to_string().contains("shape (3, 5)"));
/// ```
#[derive(Debug, Error)]
pub enum PropertyError {
    /// No reshape or broadcast path leads from the value to the target shape.
    #[error("Expected {label} to be of shape {expected}, value has shape {}", dims(.actual))]
    ShapeMismatch {
        /// Attribute name or "return value" label
        label: String,
        /// Target shape
        expected: Shape,
        /// Shape of the value after squeezing
        actual: Vec<usize>,
    },

    /// A function validator received something that cannot be called.
    #[error("{name} must be a function")]
    NotCallable {
        /// Attribute name
        name: String,
    },

    /// A wrapped function declares a shape different from the validator's.
    #[error("The return value of {name} does not fit in a {expected} matrix, function declares {found}")]
    TemplateShapeConflict {
        /// Attribute name
        name: String,
        /// Shape required by the validator
        expected: Shape,
        /// Shape the wrapped function was declared with
        found: Shape,
    },

    /// The attribute was read before any value was assigned.
    #[error("Property {name} is not defined yet")]
    PropertyUndefined {
        /// Attribute name
        name: String,
    },

    /// The attribute was never declared on the container.
    #[error("Unknown property: {name}")]
    UnknownProperty {
        /// Attribute name
        name: String,
    },

    /// The stored value is of a different kind than requested.
    #[error("{name} holds a {found}, expected a {expected}")]
    TypeMismatch {
        /// Attribute name or label
        name: String,
        /// Expected value kind
        expected: &'static str,
        /// Actual value kind
        found: &'static str,
    },

    /// A shape with a zero dimension was requested.
    #[error("Invalid shape ({rows}, {cols}): dimensions must be positive")]
    InvalidShape {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Element count doesn't match the product of the dimensions.
    #[error("Data length {len} doesn't match shape {}", dims(.shape))]
    DataLength {
        /// Number of elements supplied
        len: usize,
        /// Requested dimensions
        shape: Vec<usize>,
    },

    /// Nested sequence elements have different shapes.
    #[error("Ragged array: expected elements of shape {}, found {}", dims(.expected), dims(.found))]
    RaggedArray {
        /// Shape of the first element
        expected: Vec<usize>,
        /// Shape of the offending element
        found: Vec<usize>,
    },

    /// A custom validator rejected the value.
    #[error("Validation failed for {name}: {message}")]
    Rejected {
        /// Attribute name
        name: String,
        /// Reason given by the validator
        message: String,
    },

    /// Error raised inside a wrapped callable.
    #[error("Function error: {0}")]
    Function(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Malformed property schema.
    #[error("Invalid property schema: {0}")]
    Schema(#[from] serde_json::Error),
}

impl PropertyError {
    /// Create a rejection error for a custom validator
    #[must_use]
    pub fn rejected(name: &str, message: impl Into<String>) -> Self {
        Self::Rejected {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Wrap an error raised inside a user callable
    #[must_use]
    pub fn function<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Function(err.into())
    }

    /// True for failures of the shape coercion rules.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. } | Self::TemplateShapeConflict { .. }
        )
    }
}

impl From<std::convert::Infallible> for PropertyError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Formats dims as a tuple, `()` for scalars and `(3,)` for vectors.
fn dims(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [n] => format!("({n},)"),
        _ => {
            let parts: Vec<String> = shape.iter().map(ToString::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PropertyError>;
