use crate::linalg::{qr, EigenSettings, LinalgError};
use crate::matrix::Vector;
use crate::traits::{is_exact_zero, FloatScalar};
use crate::Matrix;

/// Eigenvalues and eigenvectors from the QR algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigen<T> {
    /// Diagonal matrix of eigenvalues.
    pub values: Matrix<T>,
    /// Eigenvectors stored as columns, in the same order as `values`.
    pub vectors: Matrix<T>,
}

impl<T: FloatScalar> Eigen<T> {
    /// The eigenvalues as a vector.
    pub fn eigenvalues(&self) -> Vector<T> {
        self.values.diag()
    }
}

/// Dominant eigenpair from [`power_iteration`].
#[derive(Debug, Clone, PartialEq)]
pub struct DominantEigen<T> {
    pub value: T,
    /// Unit-norm eigenvector estimate.
    pub vector: Vector<T>,
}

impl<T: FloatScalar> EigenSettings<T> {
    /// Defaults for any float type: 1000 iterations, tolerance `1e-10` or
    /// a hundred machine epsilons, whichever is larger.
    pub(crate) fn for_precision() -> Self {
        Self {
            max_iter: 1000,
            tol: T::lit(1e-10).max(T::epsilon() * T::lit(100.0)),
        }
    }
}

/// Frobenius norm of the strictly lower triangle.
fn lower_mass<T: FloatScalar>(a: &Matrix<T>) -> T {
    let mut sum = T::zero();
    for i in 1..a.nrows() {
        for j in 0..i {
            sum = sum + a[(i, j)] * a[(i, j)];
        }
    }
    sum.sqrt()
}

/// Eigendecomposition by the unshifted QR algorithm.
///
/// Iterates `A_{k+1} = R_k·Q_k` and accumulates `V_{k+1} = V_k·Q_k` until
/// the Frobenius norm of the strictly lower triangle of `A_k` drops below
/// `settings.tol`, or `settings.max_iter` iterations have run. The
/// eigenvalues are read off the diagonal of the final `A_k`.
///
/// Reliable for symmetric matrices and for real spectra whose eigenvalues
/// have distinct magnitudes. Complex eigenvalues are not supported and
/// equal-magnitude pairs converge slowly or not at all; the iteration
/// budget then bounds the work.
///
/// Fails with [`LinalgError::InvalidArgument`] unless `a` is square.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::{eigen, EigenSettings};
///
/// let a = Matrix::from_row_slice(2, 2, &[2.0_f64, 1.0, 1.0, 2.0]);
/// let e = eigen(&a, EigenSettings::default()).unwrap();
/// assert!((e.values[(0, 0)] - 3.0).abs() < 1e-8);
/// assert!((e.values[(1, 1)] - 1.0).abs() < 1e-8);
///
/// // A·v = λ·v for each column
/// let av = &a * &e.vectors;
/// let vl = &e.vectors * &e.values;
/// assert!(av.approx_eq(&vl, 1e-8));
/// ```
pub fn eigen<T: FloatScalar>(
    a: &Matrix<T>,
    settings: EigenSettings<T>,
) -> Result<Eigen<T>, LinalgError> {
    let n = a.require_square("eigendecomposition requires a square matrix")?;

    let mut ak = a.clone();
    let mut v = Matrix::<T>::identity(n);

    for _ in 0..settings.max_iter {
        if lower_mass(&ak) < settings.tol {
            break;
        }
        let f = qr(&ak)?;
        ak = &f.r * &f.q;
        v = &v * &f.q;
    }

    Ok(Eigen {
        values: Matrix::from_diag(&ak.diag()),
        vectors: v,
    })
}

/// Dominant eigenpair by power iteration.
///
/// Starts from the normalized all-ones vector, repeatedly applies `a` and
/// renormalizes, and estimates the eigenvalue with the Rayleigh quotient
/// `vᵗ·A·v`. Stops when two successive estimates differ by less than
/// `settings.tol` or after `settings.max_iter` iterations. If `A·v` is
/// exactly zero the eigenvalue is reported as `0`.
///
/// Two dominant eigenvalues of equal magnitude are not detected.
///
/// Fails with [`LinalgError::InvalidArgument`] unless `a` is square and
/// non-empty.
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::{power_iteration, EigenSettings};
///
/// let a = Matrix::from_row_slice(2, 2, &[2.0_f64, 0.0, 0.0, 1.0]);
/// let d = power_iteration(&a, EigenSettings::default()).unwrap();
/// assert!((d.value - 2.0).abs() < 1e-8);
/// assert!((d.vector[0].abs() - 1.0).abs() < 1e-4);
/// ```
pub fn power_iteration<T: FloatScalar>(
    a: &Matrix<T>,
    settings: EigenSettings<T>,
) -> Result<DominantEigen<T>, LinalgError> {
    let n = a.require_square("power iteration requires a square matrix")?;
    if n == 0 {
        return Err(LinalgError::InvalidArgument(
            "power iteration requires a non-empty matrix",
        ));
    }

    let mut v = Vector::fill(n, T::one()).normalize();
    let mut lambda = T::zero();

    for _ in 0..settings.max_iter {
        let w = a.mul_vec(&v)?;
        let norm = w.norm();
        if is_exact_zero(norm) {
            return Ok(DominantEigen {
                value: T::zero(),
                vector: v,
            });
        }
        v = &w * (T::one() / norm);

        let next = v.dot(&a.mul_vec(&v)?);
        let delta = (next - lambda).abs();
        lambda = next;
        if delta < settings.tol {
            break;
        }
    }

    Ok(DominantEigen { value: lambda, vector: v })
}
