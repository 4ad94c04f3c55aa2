//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matprop::prelude::*;
//! ```

pub use crate::error::{PropertyError, Result};
pub use crate::primitives::{Array, Matrix, Shape};
pub use crate::properties::{
    as_matrix, Assignment, Callable, CustomValidator, FunctionShapeValidator, PropertyMap,
    PropertySchema, ReturnShape, ShapeValidator, SlotState, Validator, ValidatorSpec, Value,
    WrappedFunction,
};
pub use crate::traits::IntoArray;
