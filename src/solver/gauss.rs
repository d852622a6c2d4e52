use crate::linalg::LinalgError;
use crate::log::{trace_line, NoopLogger, StepLogger};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::{ELIMINATION_TOL, PIVOT_TOL};

/// Row index with the largest magnitude in column `col`, searching rows
/// `col..nrows`.
fn pivot_row<T: FloatScalar>(m: &Matrix<T>, col: usize) -> usize {
    let mut pivot = col;
    for j in (col + 1)..m.nrows() {
        if m[(j, col)].abs() > m[(pivot, col)].abs() {
            pivot = j;
        }
    }
    pivot
}

/// Solve `A·x = b` by Gaussian elimination with partial pivoting.
///
/// Fails with [`LinalgError::InvalidArgument`] unless `a` is square,
/// [`LinalgError::DimensionMismatch`] when `b` has the wrong length, and
/// [`LinalgError::Singular`] when a pivot is smaller than `1e-10` in
/// magnitude after row exchange.
///
/// ```
/// use densela::{Matrix, Vector};
/// use densela::solver::solve;
///
/// let a = Matrix::from_row_slice(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let x = solve(&a, &Vector::from_slice(&[4.0, 11.0])).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve<T: FloatScalar>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
    solve_logged(a, b, &mut NoopLogger)
}

/// [`solve`], narrating each step to `log`.
///
/// Emits the start of elimination, an `Initial Augmented Matrix:` step
/// marker, every row swap, every elimination `R{j} = R{j} - (f) * R{i}`
/// with `|f| > 1e-10`, and the start of back substitution. Rows whose
/// factor is below that threshold are left untouched.
pub fn solve_logged<T, L>(
    a: &Matrix<T>,
    b: &Vector<T>,
    log: &mut L,
) -> Result<Vector<T>, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let n = a.require_square("solve requires a square matrix")?;
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (b.len(), 1),
        });
    }

    let mut m = a.with_column(b)?;
    let pivot_tol = T::lit(PIVOT_TOL);
    let factor_tol = T::lit(ELIMINATION_TOL);

    log.log("Starting Gaussian Elimination");
    log.log_step("Initial Augmented Matrix:");

    for i in 0..n {
        let p = pivot_row(&m, i);
        if p != i {
            trace_line!(log, "Swapping row {} with row {}", i, p);
            m.swap_rows(i, p);
        }

        let pivot = m[(i, i)];
        if pivot.abs() < pivot_tol {
            return Err(LinalgError::Singular);
        }

        for j in (i + 1)..n {
            let factor = m[(j, i)] / pivot;
            if factor.abs() > factor_tol {
                trace_line!(log, "R{} = R{} - ({}) * R{}", j, j, factor, i);
                for k in i..=n {
                    let v = m[(i, k)];
                    m[(j, k)] = m[(j, k)] - factor * v;
                }
            }
        }
    }

    log.log("Starting Back Substitution");
    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + m[(i, j)] * x[j];
        }
        x[i] = (m[(i, n)] - sum) / m[(i, i)];
    }

    Ok(x)
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// The product of the pivots, negated once per row exchange. Returns `0`
/// as soon as a pivot is smaller than `1e-10` in magnitude, so singular
/// input is not an error. Fails with [`LinalgError::InvalidArgument`]
/// unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::solver::determinant;
///
/// let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert!((determinant(&a).unwrap() + 2.0).abs() < 1e-12);
/// assert_eq!(determinant(&Matrix::<f64>::identity(3)).unwrap(), 1.0);
/// ```
pub fn determinant<T: FloatScalar>(a: &Matrix<T>) -> Result<T, LinalgError> {
    determinant_logged(a, &mut NoopLogger)
}

/// [`determinant`], narrating row swaps to `log`.
pub fn determinant_logged<T, L>(a: &Matrix<T>, log: &mut L) -> Result<T, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let n = a.require_square("determinant requires a square matrix")?;
    let mut m = a.clone();
    let mut det = T::one();
    let pivot_tol = T::lit(PIVOT_TOL);

    log.log("Calculating Determinant using Gaussian Elimination");

    for i in 0..n {
        let p = pivot_row(&m, i);
        if p != i {
            trace_line!(log, "Swapping row {} with row {} (det sign flips)", i, p);
            m.swap_rows(i, p);
            det = -det;
        }

        let pivot = m[(i, i)];
        if pivot.abs() < pivot_tol {
            return Ok(T::zero());
        }
        det = det * pivot;

        for j in (i + 1)..n {
            let factor = m[(j, i)] / pivot;
            for k in i..n {
                let v = m[(i, k)];
                m[(j, k)] = m[(j, k)] - factor * v;
            }
        }
    }

    Ok(det)
}

/// Inverse by Gauss-Jordan elimination on `[A | I]`.
///
/// Fails with [`LinalgError::Singular`] when a pivot is smaller than
/// `1e-10` in magnitude after row exchange, and with
/// [`LinalgError::InvalidArgument`] unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::solver::inverse;
///
/// let a = Matrix::from_row_slice(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
/// let inv = inverse(&a).unwrap();
/// assert!((&a * &inv).approx_eq(&Matrix::identity(2), 1e-12));
/// ```
pub fn inverse<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    inverse_logged(a, &mut NoopLogger)
}

/// [`inverse`], narrating row swaps and row normalizations to `log`.
pub fn inverse_logged<T, L>(a: &Matrix<T>, log: &mut L) -> Result<Matrix<T>, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let n = a.require_square("inverse requires a square matrix")?;
    let mut m = a.hstack(&Matrix::identity(n))?;
    let cols = 2 * n;
    let pivot_tol = T::lit(PIVOT_TOL);

    log.log("Starting Gauss-Jordan for Inverse");

    for i in 0..n {
        let p = pivot_row(&m, i);
        if p != i {
            trace_line!(log, "Swapping row {} with row {}", i, p);
            m.swap_rows(i, p);
        }

        let pivot = m[(i, i)];
        if pivot.abs() < pivot_tol {
            return Err(LinalgError::Singular);
        }

        for k in 0..cols {
            m[(i, k)] = m[(i, k)] / pivot;
        }
        trace_line!(log, "Dividing row {} by {}", i, pivot);

        for j in 0..n {
            if j != i {
                let factor = m[(j, i)];
                for k in 0..cols {
                    let v = m[(i, k)];
                    m[(j, k)] = m[(j, k)] - factor * v;
                }
            }
        }
    }

    Ok(m.columns(n, cols))
}

/// Integer matrix power by repeated squaring.
///
/// `A⁰ = I`; a negative exponent raises the inverse, so it fails with
/// [`LinalgError::Singular`] for singular `a`. Fails with
/// [`LinalgError::InvalidArgument`] unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::solver::power;
///
/// let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 1.0, 0.0, 1.0]);
/// let a5 = power(&a, 5).unwrap();
/// assert_eq!(a5.as_slice(), &[1.0, 5.0, 0.0, 1.0]);
///
/// let back = power(&a, -5).unwrap();
/// assert!((&a5 * &back).approx_eq(&Matrix::identity(2), 1e-12));
/// ```
pub fn power<T: FloatScalar>(a: &Matrix<T>, n: i32) -> Result<Matrix<T>, LinalgError> {
    let size = a.require_square("power requires a square matrix")?;
    let mut base = if n < 0 { inverse(a)? } else { a.clone() };
    let mut result = Matrix::identity(size);
    let mut e = n.unsigned_abs();
    while e > 0 {
        if e % 2 == 1 {
            result = &result * &base;
        }
        e /= 2;
        if e > 0 {
            base = &base * &base;
        }
    }
    Ok(result)
}
