use crate::linalg::svd;
use crate::traits::{abs_diff, FloatScalar};

use super::Matrix;

/// Singular values at or below this are left out of the condition number.
const SINGULAR_VALUE_FLOOR: f64 = 1e-10;

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]);
    /// assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Largest absolute element-wise difference, or `None` when the shapes
    /// differ.
    pub fn max_abs_diff(&self, other: &Self) -> Option<T> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc.max(abs_diff(a, b))),
        )
    }

    /// Same shape and every element within `tol`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(1, 2, &[1.0_f64, 2.0]);
    /// let b = Matrix::from_row_slice(1, 2, &[1.0, 2.0 + 1e-9]);
    /// assert!(a.approx_eq(&b, 1e-8));
    /// assert!(!a.approx_eq(&b, 1e-10));
    /// ```
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.max_abs_diff(other).is_some_and(|d| d <= tol)
    }

    /// 2-norm condition number `σ_max / σ_min`.
    ///
    /// Singular values come from [`svd`], which works on `AᵗA` and
    /// therefore squares the conditioning of the input: results above about
    /// `1e7` (for `f64`) are not reliable.
    ///
    /// Only the first `min(nrows, ncols)` singular values are considered.
    /// Values at or below `1e-10` are excluded from the minimum; if none
    /// remain the result is `+∞`. Any failure of the decomposition (for
    /// example an empty matrix) yields the sentinel `-1`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(2, 2, &[2.0_f64, 0.0, 0.0, 0.5]);
    /// assert!((a.condition_number() - 4.0).abs() < 1e-8);
    ///
    /// assert!(Matrix::<f64>::zeros(2, 2).condition_number().is_infinite());
    /// ```
    pub fn condition_number(&self) -> T {
        let decomposition = match svd(self) {
            Ok(d) => d,
            Err(_) => return -T::one(),
        };
        let floor = T::lit(SINGULAR_VALUE_FLOOR);
        let k = self.nrows.min(self.ncols);

        let mut max_sv = T::zero();
        let mut min_sv = T::infinity();
        for i in 0..k {
            let s = decomposition.s[(i, i)];
            if s > max_sv {
                max_sv = s;
            }
            if s > floor && s < min_sv {
                min_sv = s;
            }
        }

        if min_sv.is_infinite() || min_sv <= floor {
            return T::infinity();
        }
        max_sv / min_sv
    }
}
