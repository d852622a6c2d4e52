//! Pre-defined type aliases for common `Matrix` and `Vector` element types.

use super::{Matrix, Vector};

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
