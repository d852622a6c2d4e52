//! Linear systems, determinants, inverses and matrix powers.
//!
//! Gaussian elimination with partial pivoting underlies everything here:
//!
//! - [`solve`] — `A·x = b` for square `A`
//! - [`determinant`] — product of pivots with swap sign
//! - [`inverse`] — Gauss-Jordan on `[A | I]`
//! - [`power`] — integer powers by repeated squaring
//! - [`least_squares`] — overdetermined systems through QR
//! - [`solve_cholesky`] — symmetric positive-definite systems
//! - [`solve_refined`] — `solve` plus iterative refinement
//!
//! Each entry point that narrates its work has a `*_logged` twin that takes
//! a [`StepLogger`](crate::log::StepLogger); the plain form logs nowhere.

mod gauss;
mod least_squares;
mod refine;

#[cfg(test)]
mod tests;

pub use gauss::{
    determinant, determinant_logged, inverse, inverse_logged, power, solve, solve_logged,
};
pub use least_squares::{
    least_squares, least_squares_logged, solve_cholesky, solve_cholesky_logged,
};
pub use refine::{solve_refined, solve_refined_logged, DEFAULT_REFINE_ITERATIONS};

use crate::linalg::{self, Eigen, EigenSettings, LinalgError, Lu, Qr, Svd};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Pivots smaller than this in magnitude mean the matrix is singular.
pub(crate) const PIVOT_TOL: f64 = 1e-10;

/// Elimination factors at or below this magnitude are skipped.
pub(crate) const ELIMINATION_TOL: f64 = 1e-10;

/// Refinement stops once the residual norm drops below this.
pub(crate) const RESIDUAL_TOL: f64 = 1e-14;

// ── Convenience methods on Matrix ───────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Solve `A·x = b` by Gaussian elimination. See [`solve`].
    ///
    /// ```
    /// use densela::{Matrix, Vector};
    /// let a = Matrix::from_row_slice(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let x = a.solve(&Vector::from_slice(&[4.0_f64, 11.0])).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        solve(self, b)
    }

    /// Determinant. See [`determinant`].
    pub fn det(&self) -> Result<T, LinalgError> {
        determinant(self)
    }

    /// Inverse by Gauss-Jordan elimination. See [`inverse`].
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        inverse(self)
    }

    /// Integer power; negative exponents raise the inverse. See [`power`].
    pub fn pow(&self, n: i32) -> Result<Self, LinalgError> {
        power(self, n)
    }

    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>, LinalgError> {
        linalg::lu(self)
    }

    /// Lower-triangular Cholesky factor `L` with `A = L·Lᵗ`.
    pub fn cholesky(&self) -> Result<Self, LinalgError> {
        linalg::cholesky(self)
    }

    /// Thin QR decomposition by modified Gram-Schmidt.
    pub fn qr(&self) -> Result<Qr<T>, LinalgError> {
        linalg::qr(self)
    }

    /// Eigendecomposition by the QR algorithm with default settings
    /// (1000 iterations, tolerance `1e-10` for `f64`).
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(2, 2, &[5.0_f64, 2.0, 2.0, 2.0]);
    /// let e = a.eigen().unwrap();
    /// assert!((e.values[(0, 0)] - 6.0).abs() < 1e-8);
    /// assert!((e.values[(1, 1)] - 1.0).abs() < 1e-8);
    /// ```
    pub fn eigen(&self) -> Result<Eigen<T>, LinalgError> {
        linalg::eigen(self, EigenSettings::for_precision())
    }

    /// Singular value decomposition via `AᵗA`.
    pub fn svd(&self) -> Result<Svd<T>, LinalgError> {
        linalg::svd(self)
    }
}
