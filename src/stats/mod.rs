//! Descriptive statistics, covariance and principal component analysis.
//!
//! Data matrices hold one observation per row and one feature per column.
//!
//! | Function | Result |
//! |---|---|
//! | [`mean`], [`variance`], [`std_dev`] | per-column or per-row vector |
//! | [`standardize`] | z-scored copy of the data |
//! | [`covariance_matrix`] | `d x d` sample covariance |
//! | [`correlation_matrix`] | `d x d` Pearson correlation |
//! | [`pca`], [`pca_with_settings`] | [`Pca`] components and variances |
//!
//! # Example
//!
//! ```
//! use densela::Matrix;
//! use densela::stats::{mean, std_dev, Axis};
//!
//! let data = Matrix::from_row_slice(3, 2, &[1.0_f64, 10.0, 2.0, 20.0, 3.0, 30.0]);
//! assert_eq!(mean(&data, Axis::Columns).as_slice(), &[2.0, 20.0]);
//! assert_eq!(std_dev(&data, Axis::Columns).as_slice(), &[1.0, 10.0]);
//! ```

mod covariance;
mod descriptive;
mod pca;

#[cfg(test)]
mod tests;

pub use covariance::{correlation_matrix, covariance_matrix};
pub use descriptive::{mean, standardize, std_dev, variance};
pub use pca::{pca, pca_with_settings, Pca};

/// Direction along which a statistic is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// One result per column, reducing over the rows (observations).
    #[default]
    Columns,
    /// One result per row, reducing over the columns.
    Rows,
}
