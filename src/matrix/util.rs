use alloc::vec::Vec;
use core::fmt;

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use densela::Matrix;
    /// let mut m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(i))
    }

    /// Copy of column `j`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.col(1).as_slice(), &[2.0, 4.0]);
    /// ```
    pub fn col(&self, j: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.nrows).map(|i| self[(i, j)]).collect();
        Vector::from_vec(data)
    }

    /// Overwrite column `j`. Panics on length mismatch.
    pub fn set_col(&mut self, j: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.nrows, "vector length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v[i];
        }
    }

    /// Horizontal concatenation `[self | rhs]`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(2, 1, &[1.0, 2.0]);
    /// let aug = a.hstack(&Matrix::identity(2)).unwrap();
    /// assert_eq!(aug.as_slice(), &[1.0, 1.0, 0.0, 2.0, 0.0, 1.0]);
    /// ```
    pub fn hstack(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.nrows != rhs.nrows {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.nrows, rhs.ncols),
                got: rhs.shape(),
            });
        }
        let ncols = self.ncols + rhs.ncols;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for i in 0..self.nrows {
            data.extend_from_slice(self.row_slice(i));
            data.extend_from_slice(rhs.row_slice(i));
        }
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols,
        })
    }

    /// Append `v` as an extra rightmost column (`[A | b]`).
    pub fn with_column(&self, v: &Vector<T>) -> Result<Self, LinalgError> {
        if v.len() != self.nrows {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.nrows, 1),
                got: (v.len(), 1),
            });
        }
        self.hstack(&Matrix::from_vec(v.len(), 1, v.as_slice().to_vec()))
    }

    /// Sub-matrix made of the columns `start..end`.
    pub fn columns(&self, start: usize, end: usize) -> Self {
        assert!(start <= end && end <= self.ncols, "column range out of bounds");
        Matrix::from_fn(self.nrows, end - start, |i, j| self[(i, start + j)])
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One row per line, columns right-aligned, framed like `[ a  b ]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n) = (self.nrows, self.ncols);

        let mut widths: Vec<usize> = alloc::vec![0; n];
        for i in 0..m {
            for j in 0..n {
                let w = WriteCounting::count(|wc| write_elem(wc, f, &self[(i, j)]));
                widths[j] = widths[j].max(w);
            }
        }

        for i in 0..m {
            write!(f, "[")?;
            for j in 0..n {
                write!(f, " ")?;
                let mut cell = alloc::string::String::new();
                write_elem(&mut cell, f, &self[(i, j)])?;
                write!(f, "{:>width$}", cell, width = widths[j])?;
            }
            write!(f, " ]")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Honour a caller-supplied precision (`{:.4}`) for each cell.
fn write_elem<T: fmt::Display>(
    w: &mut impl fmt::Write,
    f: &fmt::Formatter<'_>,
    x: &T,
) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(w, "{:.*}", p, x),
        None => write!(w, "{}", x),
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
