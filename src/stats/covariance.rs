use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::descriptive::{center_columns, mean};
use super::Axis;

/// Sample covariance matrix of column features, rows being observations.
///
/// `(X_cᵗ·X_c) / (n − 1)` where `X_c` is `data` with column means removed.
/// Fails with [`LinalgError::InvalidArgument`] for fewer than two rows.
///
/// ```
/// use densela::Matrix;
/// use densela::stats::covariance_matrix;
///
/// let data = Matrix::from_row_slice(3, 2, &[1.0_f64, 2.0, 2.0, 4.0, 3.0, 6.0]);
/// let cov = covariance_matrix(&data).unwrap();
/// assert_eq!(cov.as_slice(), &[1.0, 2.0, 2.0, 4.0]);
/// ```
pub fn covariance_matrix<T: FloatScalar>(data: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let n = data.nrows();
    if n < 2 {
        return Err(LinalgError::InvalidArgument(
            "covariance requires at least 2 observations",
        ));
    }
    let centered = center_columns(data, &mean(data, Axis::Columns));
    let scatter = centered.transpose().try_mul(&centered)?;
    Ok(scatter.scale(T::one() / T::lit((n - 1) as f64)))
}

/// Pearson correlation matrix of column features.
///
/// Covariance divided by the product of the standard deviations; entries
/// involving a constant column are `0`. Fails like
/// [`covariance_matrix`].
///
/// ```
/// use densela::Matrix;
/// use densela::stats::correlation_matrix;
///
/// let data = Matrix::from_row_slice(3, 2, &[1.0_f64, 2.0, 2.0, 4.0, 3.0, 6.0]);
/// let corr = correlation_matrix(&data).unwrap();
/// assert!((corr[(0, 1)] - 1.0).abs() < 1e-12);
/// ```
pub fn correlation_matrix<T: FloatScalar>(data: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
    let cov = covariance_matrix(data)?;
    let d = cov.nrows();
    let mut corr = Matrix::zeros(d, d);
    for i in 0..d {
        let si = cov[(i, i)].sqrt();
        for j in 0..d {
            let sj = cov[(j, j)].sqrt();
            if si > T::zero() && sj > T::zero() {
                corr[(i, j)] = cov[(i, j)] / (si * sj);
            }
        }
    }
    Ok(corr)
}
