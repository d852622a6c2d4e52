use alloc::vec;

use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Cholesky decomposition: `A = L·Lᵗ` with `L` lower triangular.
///
/// Only the lower triangle of `a` is read; symmetry is not checked.
/// Fails with [`LinalgError::NotPositiveDefinite`] when a diagonal pivot is
/// not strictly positive before its square root, and with
/// [`LinalgError::InvalidArgument`] unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::cholesky;
///
/// let a = Matrix::from_row_slice(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l[(0, 0)], 2.0);
/// assert_eq!(l[(0, 1)], 0.0);
/// assert!((&l * &l.transpose()).approx_eq(&a, 1e-12));
/// ```
pub fn cholesky<T: FloatScalar>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let n = a.require_square("Cholesky decomposition requires a square matrix")?;
    let mut l = Matrix::<T>::zeros(n, n);

    for j in 0..n {
        let mut diag = a[(j, j)];
        for k in 0..j {
            diag = diag - l[(j, k)] * l[(j, k)];
        }
        if diag <= T::zero() {
            return Err(LinalgError::NotPositiveDefinite);
        }
        let ljj = diag.sqrt();
        l[(j, j)] = ljj;

        for i in (j + 1)..n {
            let mut sum = a[(i, j)];
            for k in 0..j {
                sum = sum - l[(i, k)] * l[(j, k)];
            }
            l[(i, j)] = sum / ljj;
        }
    }

    Ok(l)
}

/// Solve `L·x = b` by forward substitution, where `L` is lower triangular.
pub(crate) fn forward_substitute<T: FloatScalar>(l: &Matrix<T>, b: &Vector<T>) -> Vector<T> {
    let n = l.nrows();
    let mut x = vec![T::zero(); n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - l[(i, j)] * x[j];
        }
        x[i] = sum / l[(i, i)];
    }
    Vector::from_vec(x)
}

/// Solve `Lᵗ·x = b` by back substitution, where `L` is lower triangular.
pub(crate) fn back_substitute_lt<T: FloatScalar>(l: &Matrix<T>, b: &Vector<T>) -> Vector<T> {
    let n = l.nrows();
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum = sum - l[(j, i)] * x[j];
        }
        x[i] = sum / l[(i, i)];
    }
    Vector::from_vec(x)
}
