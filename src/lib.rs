//! Matprop: shape-validated matrix properties for filter configuration.
//!
//! State estimators carry a handful of matrices (state `x`, covariance `P`,
//! transition `F`, noise `Q` and `R`) and functions returning matrices
//! (`fx`, `hx`). Matprop checks on every assignment and every call that
//! those values have the shape their owner declared, and coerces the
//! convenient spellings (a scalar for `s * I`, a flat list for a vector)
//! into the declared shape.
//!
//! # Quick Start
//!
//! ```
//! use matprop::prelude::*;
//!
//! let mut kf = PropertyMap::with_properties(["x", "P"]);
//! kf.set("x", ShapeValidator::new(3, 1).unwrap()).unwrap();
//! kf.set("P", ShapeValidator::new(3, 3).unwrap()).unwrap();
//!
//! // Flat list to column vector, scalar to scaled identity
//! kf.set("x", vec![0.0, 1.0, 0.5]).unwrap();
//! kf.set("P", 100.0).unwrap();
//! assert_eq!(kf.matrix("x").unwrap().shape(), (3, 1));
//! assert!(kf.matrix("P").unwrap().allclose(&Matrix::eye(3).mul_scalar(100.0), 1e-12));
//!
//! // Wrong shapes are rejected and the old value is kept
//! assert!(kf.set("x", vec![0.0, 1.0]).is_err());
//! assert_eq!(kf.matrix("x").unwrap().get(2, 0), 0.5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `Shape`, n-dimensional `Array` and 2D `Matrix`
//! - [`traits`]: `IntoArray` for array-like inputs
//! - [`properties`]: coercion, validators, wrapped functions, storage
//! - [`error`]: `PropertyError`

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod properties;
pub mod traits;

pub use error::{PropertyError, Result};
pub use primitives::{Array, Matrix, Shape};
pub use traits::IntoArray;
