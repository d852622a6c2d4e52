use crate::linalg::LinalgError;
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Relative residual below which a column counts as linearly dependent.
const DEPENDENT_TOL: f64 = 1e-12;

/// Thin QR factorization: `A = Q·R`.
///
/// For an `m x n` input, `q` is `m x n` with orthonormal columns and `r` is
/// `n x n` upper triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct Qr<T> {
    pub q: Matrix<T>,
    pub r: Matrix<T>,
}

/// QR decomposition by modified Gram-Schmidt.
///
/// Each column is orthogonalized against the already accepted columns of
/// `Q`, one projection at a time. When what remains of a column is
/// negligible relative to its original norm, `r[(j, j)]` is set to zero and
/// column `j` of `Q` is filled with the standard basis direction that is
/// most orthogonal to the previous columns, so `QᵗQ = I` holds even for
/// rank-deficient input.
///
/// Fails with [`LinalgError::InvalidArgument`] when `nrows < ncols`.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::qr;
///
/// let a = Matrix::from_row_slice(3, 2, &[1.0_f64, 1.0, 1.0, 0.0, 0.0, 1.0]);
/// let f = qr(&a).unwrap();
/// assert_eq!(f.q.shape(), (3, 2));
/// assert_eq!(f.r.shape(), (2, 2));
/// assert!((&f.q * &f.r).approx_eq(&a, 1e-12));
/// assert!((f.q.transpose() * &f.q).approx_eq(&Matrix::identity(2), 1e-12));
/// ```
pub fn qr<T: FloatScalar>(a: &Matrix<T>) -> Result<Qr<T>, LinalgError> {
    let (m, n) = a.shape();
    if m < n {
        return Err(LinalgError::InvalidArgument(
            "QR decomposition requires nrows >= ncols",
        ));
    }

    let tol = T::lit(DEPENDENT_TOL).max(T::epsilon() * T::lit(100.0));
    let mut q = Matrix::<T>::zeros(m, n);
    let mut r = Matrix::<T>::zeros(n, n);

    for j in 0..n {
        let mut v = a.col(j);
        let original = v.norm();

        for i in 0..j {
            let qi = q.col(i);
            let rij = qi.dot(&v);
            r[(i, j)] = rij;
            v = &v - &(&qi * rij);
        }

        let norm = v.norm();
        if norm > tol * original {
            r[(j, j)] = norm;
            q.set_col(j, &(&v * (T::one() / norm)));
        } else {
            r[(j, j)] = T::zero();
            q.set_col(j, &complete_basis(&q, j));
        }
    }

    Ok(Qr { q, r })
}

/// Unit vector orthogonal to the first `j` columns of `q`, built from the
/// standard basis vector that keeps the largest residual.
fn complete_basis<T: FloatScalar>(q: &Matrix<T>, j: usize) -> Vector<T> {
    let m = q.nrows();
    let mut best = Vector::zeros(m);
    let mut best_norm = T::zero();

    for k in 0..m {
        let mut e = Vector::zeros(m);
        e[k] = T::one();
        // Two passes keep the result orthogonal to working precision
        for _ in 0..2 {
            for i in 0..j {
                let qi = q.col(i);
                let proj = qi.dot(&e);
                e = &e - &(&qi * proj);
            }
        }
        let norm = e.norm();
        if norm > best_norm {
            best_norm = norm;
            best = e;
        }
    }

    best.normalize()
}
