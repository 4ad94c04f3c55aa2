//! Validated matrix-valued attributes.
//!
//! Filters carry matrices (state, covariance, transition, measurement)
//! and functions returning matrices. This module checks, on every
//! assignment and every call, that those values have the shape their
//! owner declared:
//!
//! - [`as_matrix`] coerces array-like values to a target shape.
//! - [`ShapeValidator`] and [`FunctionShapeValidator`] apply it to
//!   stored matrices and to function return values.
//! - [`PropertyMap`] holds an object's attributes and the validators
//!   installed on them.
//! - [`PropertySchema`] declares a map from JSON.
//!
//! # Example
//!
//! ```
//! use matprop::primitives::{Array, Matrix};
//! use matprop::properties::{FunctionShapeValidator, PropertyMap, ShapeValidator, Value};
//!
//! let mut kf = PropertyMap::with_properties(["Q", "hx"]);
//! kf.set("Q", ShapeValidator::new(2, 2).unwrap()).unwrap();
//! kf.set("hx", FunctionShapeValidator::new(1, 2).unwrap()).unwrap();
//!
//! kf.set("Q", 0.1).unwrap();
//! assert!(kf.matrix("Q").unwrap().allclose(&Matrix::eye(2).mul_scalar(0.1), 1e-12));
//!
//! kf.set("hx", Value::function(|x: &[Array]| Ok(x[0].clone()))).unwrap();
//! assert!(kf.call("hx", &[Array::from_slice(&[1.0, 2.0])]).is_ok());
//! assert!(kf.call("hx", &[Array::from_slice(&[1.0, 2.0, 3.0])]).is_err());
//! ```

mod coerce;
mod function;
mod schema;
mod store;
mod validator;
mod value;

pub use coerce::as_matrix;
pub use function::{Callable, NamedReturnShape, ReturnShape, WrappedFunction};
pub use schema::{PropertySchema, ValidatorSpec};
pub use store::{PropertyMap, PropertySlot, SlotState};
pub use validator::{
    Assignment, CustomValidator, FunctionShapeValidator, ShapeValidator, Validator,
};
pub use value::Value;
