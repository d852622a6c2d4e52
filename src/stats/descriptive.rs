use alloc::vec::Vec;

use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::Axis;

/// Number of observations and number of groups along `axis`.
fn extent<T>(data: &Matrix<T>, axis: Axis) -> (usize, usize) {
    match axis {
        Axis::Columns => (data.nrows(), data.ncols()),
        Axis::Rows => (data.ncols(), data.nrows()),
    }
}

/// Element `k` of group `g` along `axis`.
#[inline]
fn at<T: FloatScalar>(data: &Matrix<T>, axis: Axis, g: usize, k: usize) -> T {
    match axis {
        Axis::Columns => data[(k, g)],
        Axis::Rows => data[(g, k)],
    }
}

/// Arithmetic mean of each column ([`Axis::Columns`]) or each row
/// ([`Axis::Rows`]).
///
/// A group with no observations has a NaN mean.
///
/// ```
/// use densela::Matrix;
/// use densela::stats::{mean, Axis};
///
/// let data = Matrix::from_row_slice(2, 3, &[1.0_f64, 2.0, 3.0, 3.0, 4.0, 5.0]);
/// assert_eq!(mean(&data, Axis::Columns).as_slice(), &[2.0, 3.0, 4.0]);
/// assert_eq!(mean(&data, Axis::Rows).as_slice(), &[2.0, 4.0]);
/// ```
pub fn mean<T: FloatScalar>(data: &Matrix<T>, axis: Axis) -> Vector<T> {
    let (count, groups) = extent(data, axis);
    let n = T::lit(count as f64);
    let means: Vec<T> = (0..groups)
        .map(|g| (0..count).fold(T::zero(), |acc, k| acc + at(data, axis, g, k)) / n)
        .collect();
    Vector::from_vec(means)
}

/// Sample variance along `axis`, with denominator `n − 1`.
///
/// With fewer than two observations the denominator falls back to `1`, so
/// a single observation has variance `0`.
///
/// ```
/// use densela::Matrix;
/// use densela::stats::{variance, Axis};
///
/// let data = Matrix::from_row_slice(3, 1, &[1.0_f64, 2.0, 3.0]);
/// assert_eq!(variance(&data, Axis::Columns).as_slice(), &[1.0]);
/// ```
pub fn variance<T: FloatScalar>(data: &Matrix<T>, axis: Axis) -> Vector<T> {
    let means = mean(data, axis);
    let (count, groups) = extent(data, axis);
    let denom = T::lit(if count > 1 { (count - 1) as f64 } else { 1.0 });
    let vars: Vec<T> = (0..groups)
        .map(|g| {
            let ss = (0..count).fold(T::zero(), |acc, k| {
                let d = at(data, axis, g, k) - means[g];
                acc + d * d
            });
            ss / denom
        })
        .collect();
    Vector::from_vec(vars)
}

/// Sample standard deviation along `axis`: the square root of
/// [`variance`].
pub fn std_dev<T: FloatScalar>(data: &Matrix<T>, axis: Axis) -> Vector<T> {
    let vars = variance(data, axis);
    Vector::from_fn(vars.len(), |i| vars[i].sqrt())
}

/// Center and scale every column to zero mean and unit sample standard
/// deviation.
///
/// Columns whose standard deviation is exactly zero are returned
/// unchanged, not even centered.
///
/// ```
/// use densela::Matrix;
/// use densela::stats::standardize;
///
/// let data = Matrix::from_row_slice(3, 2, &[1.0_f64, 5.0, 2.0, 5.0, 3.0, 5.0]);
/// let z = standardize(&data);
/// assert_eq!(z.col(0).as_slice(), &[-1.0, 0.0, 1.0]);
/// assert_eq!(z.col(1).as_slice(), &[5.0, 5.0, 5.0]);
/// ```
pub fn standardize<T: FloatScalar>(data: &Matrix<T>) -> Matrix<T> {
    let means = mean(data, Axis::Columns);
    let stds = std_dev(data, Axis::Columns);
    let mut out = data.clone();
    for j in 0..data.ncols() {
        if stds[j] == T::zero() {
            continue;
        }
        for i in 0..data.nrows() {
            out[(i, j)] = (data[(i, j)] - means[j]) / stds[j];
        }
    }
    out
}

/// Subtract `means[j]` from every entry of column `j`.
pub(crate) fn center_columns<T: FloatScalar>(data: &Matrix<T>, means: &Vector<T>) -> Matrix<T> {
    Matrix::from_fn(data.nrows(), data.ncols(), |i, j| data[(i, j)] - means[j])
}
