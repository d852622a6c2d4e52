use crate::traits::{is_exact_zero, FloatScalar};

use super::Matrix;

/// Pivots smaller than this are treated as zero by [`Matrix::rank`].
pub(crate) const RANK_TOL: f64 = 1e-10;

impl<T: FloatScalar> Matrix<T> {
    /// Numerical rank via Gaussian elimination with partial pivoting.
    ///
    /// Works on an internal copy. A column whose largest remaining entry is
    /// below `1e-10` in magnitude contributes no pivot.
    ///
    /// ```
    /// use densela::Matrix;
    /// let full = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert_eq!(full.rank(), 2);
    /// let deficient = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert_eq!(deficient.rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        let tol = T::lit(RANK_TOL);
        let (rows, cols) = self.shape();
        let mut pivot_row = 0;

        for col in 0..cols {
            if pivot_row >= rows {
                break;
            }
            let mut sel = pivot_row;
            for i in (pivot_row + 1)..rows {
                if m[(i, col)].abs() > m[(sel, col)].abs() {
                    sel = i;
                }
            }
            if m[(sel, col)].abs() < tol {
                continue;
            }
            m.swap_rows(sel, pivot_row);

            let pivot = m[(pivot_row, col)];
            for i in (pivot_row + 1)..rows {
                let factor = m[(i, col)] / pivot;
                for j in col..cols {
                    let v = m[(pivot_row, j)];
                    m[(i, j)] = m[(i, j)] - factor * v;
                }
            }
            pivot_row += 1;
        }
        pivot_row
    }

    /// Reduced row-echelon form, computed on a copy.
    ///
    /// Lead entries are located with an exact `!= 0` test, so entries that
    /// are merely tiny after cancellation still act as pivots.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1.0_f64, 2.0, 3.0, 2.0, 4.0, 7.0]);
    /// let r = m.rref();
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn rref(&self) -> Self {
        let mut m = self.clone();
        let (rows, cols) = self.shape();
        let mut lead = 0;

        for r in 0..rows {
            if lead >= cols {
                break;
            }
            let mut i = r;
            while is_exact_zero(m[(i, lead)]) {
                i += 1;
                if i == rows {
                    i = r;
                    lead += 1;
                    if lead == cols {
                        return m;
                    }
                }
            }

            m.swap_rows(i, r);

            let lv = m[(r, lead)];
            for k in 0..cols {
                m[(r, k)] = m[(r, k)] / lv;
            }

            for i in 0..rows {
                if i != r {
                    let factor = m[(i, lead)];
                    for k in 0..cols {
                        let v = m[(r, k)];
                        m[(i, k)] = m[(i, k)] - factor * v;
                    }
                }
            }
            lead += 1;
        }
        m
    }
}
