use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::linalg::{eigen, EigenSettings, LinalgError};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::covariance::covariance_matrix;
use super::descriptive::{center_columns, mean};
use super::Axis;

/// Result of a principal component analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Pca<T> {
    /// Principal axes as unit columns (`d x k`), strongest first.
    pub components: Matrix<T>,
    /// Variance along each component (the covariance eigenvalues),
    /// non-increasing.
    pub explained_variance: Vector<T>,
    /// Column means of the fitted data.
    pub mean: Vector<T>,
    /// Sum of all covariance eigenvalues, kept or not.
    pub total_variance: T,
}

impl<T: FloatScalar> Pca<T> {
    /// Number of retained components.
    pub fn num_components(&self) -> usize {
        self.components.ncols()
    }

    /// Share of the total variance carried by each retained component.
    ///
    /// All zeros when the data has no variance.
    pub fn explained_variance_ratio(&self) -> Vector<T> {
        if self.total_variance <= T::zero() {
            return Vector::zeros(self.explained_variance.len());
        }
        self.explained_variance.scale(T::one() / self.total_variance)
    }

    /// Project samples (rows) onto the components: `(X − mean)·W`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] unless `data` has one
    /// column per feature of the fitted data.
    pub fn transform(&self, data: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        if data.ncols() != self.mean.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: (data.nrows(), self.mean.len()),
                got: data.shape(),
            });
        }
        center_columns(data, &self.mean).try_mul(&self.components)
    }
}

/// Principal component analysis with default eigen settings.
///
/// Rows are observations, columns are features. See [`pca_with_settings`].
///
/// ```
/// use densela::Matrix;
/// use densela::stats::pca;
///
/// // Points along the line y = x, plus a little spread
/// let data = Matrix::from_row_slice(4, 2, &[
///     1.0_f64, 1.1,
///     2.0, 1.9,
///     3.0, 3.2,
///     4.0, 3.8,
/// ]);
/// let p = pca(&data, 1).unwrap();
/// assert_eq!(p.components.shape(), (2, 1));
/// let dir = p.components.col(0);
/// assert!((dir[0].abs() - dir[1].abs()).abs() < 0.05);
/// assert!(p.explained_variance_ratio()[0] > 0.95);
/// ```
pub fn pca<T: FloatScalar>(data: &Matrix<T>, num_components: usize) -> Result<Pca<T>, LinalgError> {
    pca_with_settings(data, num_components, EigenSettings::for_precision())
}

/// Principal component analysis.
///
/// Computes the covariance matrix of `data`, its eigendecomposition, and
/// keeps the `num_components` eigenpairs with the largest eigenvalues,
/// sorted in descending order. `num_components` is clamped to the number of
/// features. Fails with [`LinalgError::InvalidArgument`] when `data` has
/// fewer than two rows.
pub fn pca_with_settings<T: FloatScalar>(
    data: &Matrix<T>,
    num_components: usize,
    settings: EigenSettings<T>,
) -> Result<Pca<T>, LinalgError> {
    let cov = covariance_matrix(data)?;
    let d = cov.nrows();
    let e = eigen(&cov, settings)?;

    let values = e.eigenvalues();
    let mut order: Vec<usize> = (0..d).collect();
    order.sort_by(|&a, &b| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal));

    let k = num_components.min(d);
    let mut components = Matrix::zeros(d, k);
    let mut explained = Vector::zeros(k);
    for (dst, &src) in order.iter().take(k).enumerate() {
        explained[dst] = values[src];
        components.set_col(dst, &e.vectors.col(src));
    }

    Ok(Pca {
        components,
        explained_variance: explained,
        mean: mean(data, Axis::Columns),
        total_variance: values.iter().fold(T::zero(), |acc, &v| acc + v),
    })
}
