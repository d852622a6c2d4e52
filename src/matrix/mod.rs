pub mod aliases;
mod echelon;
mod norm;
mod ops;
mod square;
mod util;
mod vector;

pub use aliases::*;
pub use vector::Vector;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: element `(row, col)` lives at
/// `data[row * ncols + col]`. The shape is fixed at construction; every
/// algorithm that needs to mutate works on its own copy.
///
/// # Examples
///
/// ```
/// use densela::Matrix;
///
/// let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::identity(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from nested rows.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if the rows are ragged.
    /// An empty outer sequence gives a `0 x 0` matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(LinalgError::DimensionMismatch {
                    expected: (1, ncols),
                    got: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_row_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            nrows,
            ncols,
        );
        Self {
            data: slice.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Bounds-checked element read.
    ///
    /// ```
    /// use densela::Matrix;
    /// use densela::linalg::LinalgError;
    ///
    /// let m = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.get(1, 1), Ok(4.0));
    /// assert!(matches!(m.get(2, 0), Err(LinalgError::IndexOutOfBounds { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T, LinalgError> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.ncols + col])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), LinalgError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Bounds-checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinalgError> {
        self.check_index(row, col)?;
        Ok(&mut self.data[row * self.ncols + col])
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Contiguous view of row `i`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<(), LinalgError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(LinalgError::IndexOutOfBounds {
                index: (row, col),
                shape: (self.nrows, self.ncols),
            });
        }
        Ok(())
    }

    pub(crate) fn require_square(&self, what: &'static str) -> Result<usize, LinalgError> {
        if self.nrows != self.ncols {
            return Err(LinalgError::InvalidArgument(what));
        }
        Ok(self.nrows)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn fill() {
        let m = Matrix::fill(2, 3, 7.0_f64);
        assert!(m.as_slice().iter().all(|&x| x == 7.0));
    }

    #[test]
    fn identity() {
        let m = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows_nested() {
        let m = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                expected: (1, 2),
                got: (1, 1)
            }
        );
    }

    #[test]
    fn from_rows_empty() {
        let rows: [[f64; 0]; 0] = [];
        let m = Matrix::from_rows(&rows).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_row_slice_wrong_length() {
        let _ = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0]);
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
        assert_eq!(m.row_slice(1), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn bounds_checked_access() {
        let mut m = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(0, 1), Ok(2.0));
        assert_eq!(
            m.get(0, 2),
            Err(LinalgError::IndexOutOfBounds {
                index: (0, 2),
                shape: (2, 2)
            })
        );
        m.set(1, 0, 9.0).unwrap();
        assert_eq!(m[(1, 0)], 9.0);
        assert!(m.set(5, 5, 1.0).is_err());
        *m.get_mut(0, 0).unwrap() = -1.0;
        assert_eq!(m[(0, 0)], -1.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let m = Matrix::<f64>::zeros(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn require_square() {
        assert_eq!(Matrix::<f64>::zeros(3, 3).require_square("x"), Ok(3));
        assert_eq!(
            Matrix::<f64>::zeros(2, 3).require_square("needs square"),
            Err(LinalgError::InvalidArgument("needs square"))
        );
    }

    #[test]
    fn clone_is_independent() {
        let a = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 10.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn integer_elements() {
        let m = Matrix::from_row_slice(2, 2, &[1_i32, 2, 3, 4]);
        assert_eq!(m.get(1, 1), Ok(4));
        assert_eq!(m.into_vec(), vec![1, 2, 3, 4]);
    }
}
