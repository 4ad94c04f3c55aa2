//! Validators that can be installed on a property.
//!
//! The variant set is closed: identity, matrix shape, function return shape,
//! and a custom escape hatch for user rules. Each carries the name of the
//! property it's installed on, which it uses to label its errors.

use std::fmt;
use std::sync::Arc;

use super::coerce::as_matrix;
use super::function::WrappedFunction;
use super::value::Value;
use crate::error::{PropertyError, Result};
use crate::primitives::{Array, Matrix, Shape};
use crate::traits::IntoArray;

/// Validates that values are matrices of a fixed shape.
///
/// # Examples
///
/// ```
/// use matprop::primitives::Matrix;
/// use matprop::properties::ShapeValidator;
///
/// let q = ShapeValidator::new(4, 4).unwrap().with_name("Q");
/// assert!(q.validate(4.0).unwrap().allclose(&Matrix::eye(4).mul_scalar(4.0), 1e-12));
/// assert!(q.validate(vec![1.0; 4]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeValidator {
    name: String,
    shape: Shape,
    multiplicative: bool,
}

impl ShapeValidator {
    /// Multiplicative by default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_shape(Shape::new(rows, cols)?))
    }

    #[must_use]
    pub fn from_shape(shape: Shape) -> Self {
        Self {
            name: "matrix".to_string(),
            shape,
            multiplicative: true,
        }
    }

    #[must_use]
    pub fn with_multiplicative(mut self, multiplicative: bool) -> Self {
        self.multiplicative = multiplicative;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn multiplicative(&self) -> bool {
        self.multiplicative
    }

    /// Coerces `value` to this validator's shape.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the value can't be coerced.
    pub fn validate(&self, value: impl IntoArray) -> Result<Matrix<f64>> {
        as_matrix(self.shape, value, &self.name, self.multiplicative)
    }

    fn apply(&self, value: Value) -> Result<Value> {
        let Some(array) = value.to_array() else {
            return Err(PropertyError::TypeMismatch {
                name: self.name.clone(),
                expected: "array",
                found: value.kind(),
            });
        };
        self.validate(array).map(Value::Matrix)
    }
}

/// Validates that values are functions returning a fixed shape.
///
/// Unwrapped functions get wrapped; their return values are checked when
/// they're called. Already wrapped functions are accepted as they are if
/// their declared shape agrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionShapeValidator {
    name: String,
    shape: Shape,
    multiplicative: bool,
}

impl FunctionShapeValidator {
    /// Multiplicative by default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self::from_shape(Shape::new(rows, cols)?))
    }

    #[must_use]
    pub fn from_shape(shape: Shape) -> Self {
        Self {
            name: "function".to_string(),
            shape,
            multiplicative: true,
        }
    }

    #[must_use]
    pub fn with_multiplicative(mut self, multiplicative: bool) -> Self {
        self.multiplicative = multiplicative;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn multiplicative(&self) -> bool {
        self.multiplicative
    }

    /// Wraps or re-checks a function value.
    ///
    /// # Errors
    ///
    /// Returns `TemplateShapeConflict` for a wrapped function declared with
    /// another shape, `NotCallable` for data values.
    pub fn validate(&self, value: Value) -> Result<WrappedFunction> {
        match value {
            Value::Function(f) if f.shape() != self.shape => {
                Err(PropertyError::TemplateShapeConflict {
                    name: self.name.clone(),
                    expected: self.shape,
                    found: f.shape(),
                })
            }
            Value::Function(f) => Ok(f),
            Value::Callable(c) => Ok(WrappedFunction::new(self.shape, c)
                .with_name(self.name.clone())
                .with_multiplicative(self.multiplicative)),
            Value::Array(_) | Value::Matrix(_) => Err(PropertyError::NotCallable {
                name: self.name.clone(),
            }),
        }
    }
}

type RuleFn = dyn Fn(&str, Value) -> Result<Value> + Send + Sync;

/// A user-defined validation or transformation rule.
///
/// The rule receives the property name and the assigned value, and returns
/// the value to store or an error.
///
/// # Examples
///
/// ```
/// use matprop::error::PropertyError;
/// use matprop::properties::{CustomValidator, Value};
///
/// let even = CustomValidator::new("n", |name, value| {
///     match value.as_array().and_then(|a| a.item()) {
///         Some(n) if n % 2.0 == 0.0 => Ok(value),
///         _ => Err(PropertyError::rejected(name, "expected an even number")),
///     }
/// });
/// assert!(even.validate(Value::from(4.0)).is_ok());
/// assert!(even.validate(Value::from(3.0)).is_err());
/// ```
#[derive(Clone)]
pub struct CustomValidator {
    name: String,
    rule: Arc<RuleFn>,
}

impl CustomValidator {
    pub fn new<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            rule: Arc::new(rule),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the rule.
    ///
    /// # Errors
    ///
    /// Whatever the rule returns.
    pub fn validate(&self, value: Value) -> Result<Value> {
        (self.rule)(&self.name, value)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A validator installed on a property.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Stores values unchanged
    Identity {
        /// Property name
        name: String,
    },
    /// Matrix of a fixed shape
    Shape(ShapeValidator),
    /// Function returning a fixed shape
    FunctionShape(FunctionShapeValidator),
    /// User-defined rule
    Custom(CustomValidator),
}

impl Validator {
    /// The identity validator.
    #[must_use]
    pub fn identity() -> Self {
        Validator::Identity {
            name: "template".to_string(),
        }
    }

    /// Name of the property the validator is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Validator::Identity { name } => name,
            Validator::Shape(v) => &v.name,
            Validator::FunctionShape(v) => &v.name,
            Validator::Custom(v) => &v.name,
        }
    }

    /// Rebinds the validator to a property name.
    pub(crate) fn bind(&mut self, property: &str) {
        let name = match self {
            Validator::Identity { name } => name,
            Validator::Shape(v) => &mut v.name,
            Validator::FunctionShape(v) => &mut v.name,
            Validator::Custom(v) => &mut v.name,
        };
        property.clone_into(name);
    }

    /// Shape this validator conforms values to, if any.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Validator::Shape(v) => Some(v.shape),
            Validator::FunctionShape(v) => Some(v.shape),
            Validator::Identity { .. } | Validator::Custom(_) => None,
        }
    }

    /// Validates, and possibly transforms, a value.
    ///
    /// # Errors
    ///
    /// Returns the variant's validation error.
    pub fn apply(&self, value: Value) -> Result<Value> {
        match self {
            Validator::Identity { .. } => Ok(value),
            Validator::Shape(v) => v.apply(value),
            Validator::FunctionShape(v) => v.validate(value).map(Value::Function),
            Validator::Custom(v) => v.validate(value),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<ShapeValidator> for Validator {
    fn from(v: ShapeValidator) -> Self {
        Validator::Shape(v)
    }
}

impl From<FunctionShapeValidator> for Validator {
    fn from(v: FunctionShapeValidator) -> Self {
        Validator::FunctionShape(v)
    }
}

impl From<CustomValidator> for Validator {
    fn from(v: CustomValidator) -> Self {
        Validator::Custom(v)
    }
}

/// Anything that can be assigned to a property: a validator, which gets
/// installed, or a value, which gets validated and stored.
#[derive(Debug, Clone)]
pub enum Assignment {
    /// Install this validator
    Validator(Validator),
    /// Store this value
    Value(Value),
}

impl From<Validator> for Assignment {
    fn from(v: Validator) -> Self {
        Assignment::Validator(v)
    }
}

impl From<ShapeValidator> for Assignment {
    fn from(v: ShapeValidator) -> Self {
        Assignment::Validator(v.into())
    }
}

impl From<FunctionShapeValidator> for Assignment {
    fn from(v: FunctionShapeValidator) -> Self {
        Assignment::Validator(v.into())
    }
}

impl From<CustomValidator> for Assignment {
    fn from(v: CustomValidator) -> Self {
        Assignment::Validator(v.into())
    }
}

impl From<Value> for Assignment {
    fn from(v: Value) -> Self {
        Assignment::Value(v)
    }
}

impl From<WrappedFunction> for Assignment {
    fn from(f: WrappedFunction) -> Self {
        Assignment::Value(f.into())
    }
}

impl From<Matrix<f64>> for Assignment {
    fn from(m: Matrix<f64>) -> Self {
        Assignment::Value(m.into())
    }
}

impl From<Array> for Assignment {
    fn from(a: Array) -> Self {
        Assignment::Value(a.into())
    }
}

impl From<f64> for Assignment {
    fn from(s: f64) -> Self {
        Assignment::Value(s.into())
    }
}

impl<T: IntoArray> TryFrom<Vec<T>> for Assignment {
    type Error = PropertyError;

    fn try_from(v: Vec<T>) -> Result<Self> {
        Value::array(v).map(Assignment::Value)
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
