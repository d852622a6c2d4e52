use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::traits::{is_exact_zero, FloatScalar};
use crate::Matrix;

/// LU factorization with partial pivoting: `P·A = L·U`.
///
/// `l` is unit lower triangular, `u` upper triangular, and row `i` of
/// `P·A` is row `perm[i]` of `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lu<T> {
    pub l: Matrix<T>,
    pub u: Matrix<T>,
    pub perm: Vec<usize>,
}

impl<T: FloatScalar> Lu<T> {
    /// The permutation as an explicit matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let f = a.lu().unwrap();
    /// assert_eq!(f.perm, vec![1, 0]);
    /// assert!((&f.l * &f.u).approx_eq(&(&f.p() * &a), 1e-12));
    /// ```
    pub fn p(&self) -> Matrix<T> {
        let n = self.perm.len();
        let mut p = Matrix::zeros(n, n);
        for (i, &src) in self.perm.iter().enumerate() {
            p[(i, src)] = T::one();
        }
        p
    }
}

/// LU decomposition with partial pivoting.
///
/// At each column the row with the largest remaining magnitude is swapped
/// into the pivot position. A column that is entirely zero below the
/// diagonal is skipped, so singular matrices still factor (with a zero on
/// the diagonal of `U`).
///
/// Fails with [`LinalgError::InvalidArgument`] unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::lu;
///
/// let a = Matrix::from_row_slice(3, 3, &[
///     2.0_f64, 1.0, 1.0,
///     4.0, 3.0, 3.0,
///     8.0, 7.0, 9.0,
/// ]);
/// let f = lu(&a).unwrap();
/// assert_eq!(f.l[(0, 0)], 1.0);
/// assert_eq!(f.u[(2, 0)], 0.0);
/// assert!((&f.l * &f.u).approx_eq(&(&f.p() * &a), 1e-12));
/// ```
pub fn lu<T: FloatScalar>(a: &Matrix<T>) -> Result<Lu<T>, LinalgError> {
    let n = a.require_square("LU decomposition requires a square matrix")?;

    let mut u = a.clone();
    let mut l = Matrix::<T>::identity(n);
    let mut perm: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Partial pivoting: largest magnitude at or below the diagonal
        let mut max_row = k;
        let mut max_val = u[(k, k)].abs();
        for i in (k + 1)..n {
            let val = u[(i, k)].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != k {
            u.swap_rows(k, max_row);
            perm.swap(k, max_row);
            // Multipliers already computed follow their rows
            for j in 0..k {
                let tmp = l[(k, j)];
                l[(k, j)] = l[(max_row, j)];
                l[(max_row, j)] = tmp;
            }
        }

        let pivot = u[(k, k)];
        if is_exact_zero(pivot) {
            continue;
        }

        for i in (k + 1)..n {
            let factor = u[(i, k)] / pivot;
            l[(i, k)] = factor;
            u[(i, k)] = T::zero();
            for j in (k + 1)..n {
                let ukj = u[(k, j)];
                u[(i, j)] = u[(i, j)] - factor * ukj;
            }
        }
    }

    Ok(Lu { l, u, perm })
}
