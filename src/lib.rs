//! # densela
//!
//! Dense linear algebra on heap-allocated, runtime-sized matrices:
//! factorizations, linear solvers, covariance and principal component
//! analysis. `no_std` compatible with `alloc`.
//!
//! ## Quick start
//!
//! ```
//! use densela::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(&[
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]).unwrap();
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T>` with row-major `Vec<T>` storage and
//!   [`Vector<T>`]. Arithmetic (fallible `try_*` methods and panicking
//!   operators), transpose, trace, rank, reduced row-echelon form, norms,
//!   condition number and formatting.
//!
//! - [`linalg`] — LU (partial pivoting), Cholesky (`A = L·Lᵗ`), QR
//!   (modified Gram-Schmidt), eigendecomposition (unshifted QR algorithm),
//!   SVD (through `AᵗA`) and power iteration. Also home of [`LinalgError`].
//!
//! - [`solver`] — Gaussian elimination: `solve`, `determinant`, `inverse`,
//!   `power`, plus QR least squares, Cholesky solves and iterative
//!   refinement. Convenience methods on `Matrix`: `a.solve(&b)`,
//!   `a.inverse()`, `a.det()`, `a.lu()`, `a.eigen()`, ...
//!
//! - [`stats`] — Mean, variance, standard deviation, standardization,
//!   covariance and correlation matrices, PCA.
//!
//! - [`log`] — The [`StepLogger`](log::StepLogger) sink that the
//!   `*_logged` solver variants narrate to.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by every algorithm
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `tracing` | no       | [`TracingLogger`](log::TracingLogger) bridge to `tracing` |
//! | `all`     | no       | All features: `std` + `tracing` |
//!
//! Without `std`, float math falls back to pure-Rust `libm` through
//! the always-on `libm` feature of `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod log;
pub mod matrix;
pub mod solver;
pub mod stats;
pub mod traits;

pub use linalg::LinalgError;
pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64, Vectorf32, Vectorf64};
pub use matrix::{Matrix, Vector};
pub use traits::{FloatScalar, Scalar};
