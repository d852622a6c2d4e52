//! Matrix factorizations: LU, Cholesky, QR, eigen (QR algorithm),
//! SVD and power iteration.
//!
//! Every routine takes `&Matrix<T>` and works on its own copy, so the input
//! is never modified. Results are plain structs with public fields that
//! satisfy the usual reconstruction identities.

pub(crate) mod cholesky;
pub(crate) mod eigen;
pub(crate) mod lu;
pub(crate) mod qr;
pub(crate) mod svd;

pub use cholesky::cholesky;
pub use eigen::{eigen, power_iteration, DominantEigen, Eigen};
pub use lu::{lu, Lu};
pub use qr::{qr, Qr};
pub use svd::{svd, Svd};

pub(crate) use cholesky::{back_substitute_lt, forward_substitute};

/// Errors from linear algebra operations.
///
/// Returned by the fallible matrix constructors and accessors, the
/// factorizations in this module and the solvers in [`crate::solver`].
///
/// ```
/// use densela::Matrix;
/// use densela::linalg::LinalgError;
///
/// let singular = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let not_pd = Matrix::from_row_slice(2, 2, &[1.0_f64, 5.0, 5.0, 1.0]);
/// assert_eq!(not_pd.cholesky().unwrap_err(), LinalgError::NotPositiveDefinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand shapes are incompatible.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Element access outside the matrix.
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },
    /// Matrix is singular or nearly singular.
    Singular,
    /// Matrix is not positive definite (required for Cholesky).
    NotPositiveDefinite,
    /// A precondition on the input other than shape compatibility failed.
    InvalidArgument(&'static str),
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::IndexOutOfBounds { index, shape } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::NotPositiveDefinite => write!(f, "matrix is not positive definite"),
            LinalgError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// Iteration controls for [`eigen`] and [`power_iteration`].
///
/// ```
/// use densela::linalg::EigenSettings;
///
/// let s = EigenSettings::<f64>::default();
/// assert_eq!(s.max_iter, 1000);
/// assert_eq!(s.tol, 1e-10);
///
/// let loose = EigenSettings { max_iter: 50, tol: 1e-6 };
/// assert!(loose.tol > s.tol);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EigenSettings<T> {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence threshold.
    pub tol: T,
}

impl Default for EigenSettings<f64> {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tol: 1e-10,
        }
    }
}

impl Default for EigenSettings<f32> {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tol: 1e-5,
        }
    }
}
