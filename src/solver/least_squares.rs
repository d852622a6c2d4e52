use crate::linalg::{back_substitute_lt, cholesky, forward_substitute, qr, LinalgError};
use crate::log::{NoopLogger, StepLogger};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::solve_logged;

/// Least-squares solution of an overdetermined system via QR.
///
/// Factors `A = Q·R`, forms `y = Qᵗ·b` and solves the square system
/// `R·x = y`. Fails with [`LinalgError::InvalidArgument`] when `A` has
/// fewer rows than columns, [`LinalgError::DimensionMismatch`] when `b`
/// does not have one entry per row, and [`LinalgError::Singular`] when `A`
/// is rank deficient.
///
/// ```
/// use densela::{Matrix, Vector};
/// use densela::solver::least_squares;
///
/// // Fit y = c0 + c1·t through (0, 1), (1, 3), (2, 5)
/// let a = Matrix::from_row_slice(3, 2, &[1.0_f64, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// let b = Vector::from_slice(&[1.0, 3.0, 5.0]);
/// let c = least_squares(&a, &b).unwrap();
/// assert!((c[0] - 1.0).abs() < 1e-10);
/// assert!((c[1] - 2.0).abs() < 1e-10);
/// ```
pub fn least_squares<T: FloatScalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    least_squares_logged(a, b, &mut NoopLogger)
}

/// [`least_squares`], narrating the triangular solve to `log`.
pub fn least_squares_logged<T, L>(
    a: &Matrix<T>,
    b: &Vector<T>,
    log: &mut L,
) -> Result<Vector<T>, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let (m, n) = a.shape();
    if m < n {
        return Err(LinalgError::InvalidArgument(
            "least squares requires nrows >= ncols",
        ));
    }
    if b.len() != m {
        return Err(LinalgError::DimensionMismatch {
            expected: (m, 1),
            got: (b.len(), 1),
        });
    }

    let f = qr(a)?;
    let y = f.q.transpose().mul_vec(b)?;
    solve_logged(&f.r, &y, log)
}

/// Solve a symmetric positive-definite system via Cholesky.
///
/// Factors `A = L·Lᵗ`, then solves `L·y = b` forward and `Lᵗ·x = y`
/// backward. Fails with [`LinalgError::NotPositiveDefinite`] when the
/// factorization does, [`LinalgError::InvalidArgument`] unless `a` is
/// square, and [`LinalgError::DimensionMismatch`] when `b` has the wrong
/// length.
///
/// ```
/// use densela::{Matrix, Vector};
/// use densela::solver::solve_cholesky;
///
/// let a = Matrix::from_row_slice(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let x = solve_cholesky(&a, &Vector::from_slice(&[2.0, 1.0])).unwrap();
/// assert!((x[0] - 0.5).abs() < 1e-12);
/// assert!(x[1].abs() < 1e-12);
/// ```
pub fn solve_cholesky<T: FloatScalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    solve_cholesky_logged(a, b, &mut NoopLogger)
}

/// [`solve_cholesky`], announcing the method to `log`.
pub fn solve_cholesky_logged<T, L>(
    a: &Matrix<T>,
    b: &Vector<T>,
    log: &mut L,
) -> Result<Vector<T>, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let n = a.require_square("Cholesky solve requires a square matrix")?;
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (b.len(), 1),
        });
    }

    log.log("Solving using Cholesky decomposition");

    let l = cholesky(a)?;
    let y = forward_substitute(&l, b);
    Ok(back_substitute_lt(&l, &y))
}
