use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::linalg::{eigen, EigenSettings, LinalgError};
use crate::traits::FloatScalar;
use crate::Matrix;

/// Singular values at or below this get a zero left singular vector.
const ZERO_SINGULAR_VALUE: f64 = 1e-10;

/// Singular value decomposition: `A = U·S·Vᵗ`.
///
/// For an `m x n` input, `u` is `m x n`, `s` is the `n x n` diagonal matrix
/// of singular values in descending order, and `v` is `n x n` with the
/// right singular vectors as columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Svd<T> {
    pub u: Matrix<T>,
    pub s: Matrix<T>,
    pub v: Matrix<T>,
}

impl<T: FloatScalar> Svd<T> {
    /// The singular values, largest first.
    pub fn singular_values(&self) -> crate::Vector<T> {
        self.s.diag()
    }
}

/// Singular value decomposition via the eigendecomposition of `AᵗA`.
///
/// The eigenvectors of `AᵗA` are the right singular vectors; singular
/// values are `sqrt(max(λ, 0))`. Column `i` of `U` is `A·vᵢ / σᵢ`, or zero
/// when `σᵢ <= 1e-10`.
///
/// Forming `AᵗA` squares the condition number, so small singular values of
/// ill-conditioned inputs lose roughly half their significant digits.
///
/// Fails with [`LinalgError::InvalidArgument`] for an empty matrix.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::svd;
///
/// let a = Matrix::from_row_slice(3, 2, &[3.0_f64, 0.0, 0.0, 4.0, 0.0, 0.0]);
/// let d = svd(&a).unwrap();
/// assert!((d.s[(0, 0)] - 4.0).abs() < 1e-10);
/// assert!((d.s[(1, 1)] - 3.0).abs() < 1e-10);
///
/// let usvt = &d.u * &d.s * d.v.transpose();
/// assert!(usvt.approx_eq(&a, 1e-10));
/// ```
pub fn svd<T: FloatScalar>(a: &Matrix<T>) -> Result<Svd<T>, LinalgError> {
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return Err(LinalgError::InvalidArgument(
            "SVD requires a non-empty matrix",
        ));
    }

    let at = a.transpose();
    let ata = &at * a;
    let e = eigen(&ata, EigenSettings::for_precision())?;

    let sigma: Vec<T> = (0..n)
        .map(|i| e.values[(i, i)].max(T::zero()).sqrt())
        .collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| sigma[y].partial_cmp(&sigma[x]).unwrap_or(Ordering::Equal));

    let floor = T::lit(ZERO_SINGULAR_VALUE);
    let mut u = Matrix::<T>::zeros(m, n);
    let mut s = Matrix::<T>::zeros(n, n);
    let mut v = Matrix::<T>::zeros(n, n);

    for (dst, &src) in order.iter().enumerate() {
        let sv = sigma[src];
        s[(dst, dst)] = sv;
        let vi = e.vectors.col(src);
        v.set_col(dst, &vi);

        if sv > floor {
            let avi = a.mul_vec(&vi)?;
            u.set_col(dst, &(&avi * (T::one() / sv)));
        }
    }

    Ok(Svd { u, s, v })
}
