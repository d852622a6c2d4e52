use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};

use super::vector::Vector;
use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements. Fails unless the matrix is square.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), Ok(5.0));
    /// assert!(Matrix::<f64>::zeros(2, 3).trace().is_err());
    /// ```
    pub fn trace(&self) -> Result<T, LinalgError> {
        let n = self.require_square("trace requires a square matrix")?;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    /// Extract the main diagonal (length `min(nrows, ncols)`).
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.diag().as_slice(), &[1.0, 5.0]);
    /// ```
    pub fn diag(&self) -> Vector<T> {
        let n = self.nrows.min(self.ncols);
        let data: Vec<T> = (0..n).map(|i| self[(i, i)]).collect();
        Vector::from_vec(data)
    }

    /// Square diagonal matrix from a vector.
    ///
    /// ```
    /// use densela::{Matrix, Vector};
    /// let m = Matrix::from_diag(&Vector::from_slice(&[2.0, 3.0]));
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(v: &Vector<T>) -> Self {
        let n = v.len();
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = v[i];
        }
        m
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Whether the matrix is square and `|a_ij - a_ji| <= tol` everywhere.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in (i + 1)..self.ncols {
                if (self[(i, j)] - self[(j, i)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
