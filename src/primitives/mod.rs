//! Core numeric primitives (Shape, Array, Matrix).
//!
//! `Array` is the n-dimensional input side of shape coercion, `Matrix` the
//! validated 2D output side, `Shape` the target both are checked against.

mod array;
mod matrix;
mod shape;

pub use array::Array;
pub use matrix::Matrix;
pub use shape::Shape;

#[cfg(test)]
mod tests_matrix_contract;
