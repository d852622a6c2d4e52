use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

// ── Fallible arithmetic ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, LinalgError> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise sum; shapes must be equal.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(1, 2, &[1.0, 2.0]);
    /// let b = Matrix::from_row_slice(1, 2, &[3.0, 4.0]);
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[4.0, 6.0]);
    /// assert!(a.try_add(&Matrix::zeros(2, 1)).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference; shapes must be equal.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, LinalgError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Matrix product; requires `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use densela::Matrix;
    /// let a = Matrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = Matrix::from_row_slice(3, 1, &[1.0, 0.0, -1.0]);
    /// assert_eq!(a.try_mul(&b).unwrap().as_slice(), &[-2.0, -2.0]);
    /// assert!(b.try_mul(&b).is_err());
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.ncols != rhs.nrows {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut out = Matrix::zeros(m, p);
        // i-k-j order keeps both inner accesses on contiguous rows
        for i in 0..m {
            for k in 0..n {
                let aik = self.data[i * n + k];
                let rhs_row = &rhs.data[k * p..(k + 1) * p];
                let out_row = &mut out.data[i * p..(i + 1) * p];
                for (o, &b) in out_row.iter_mut().zip(rhs_row) {
                    *o = *o + aik * b;
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `A * x`.
    ///
    /// ```
    /// use densela::{Matrix, Vector};
    /// let a = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let y = a.mul_vec(&Vector::from_slice(&[1.0, 1.0])).unwrap();
    /// assert_eq!(y.as_slice(), &[3.0, 7.0]);
    /// ```
    pub fn mul_vec(&self, x: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        if self.ncols != x.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: (self.ncols, 1),
                got: (x.len(), 1),
            });
        }
        let xs = x.as_slice();
        let data: Vec<T> = (0..self.nrows)
            .map(|i| {
                self.row_slice(i)
                    .iter()
                    .zip(xs)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect();
        Ok(Vector::from_vec(data))
    }

    /// Multiply every element by a scalar.
    pub fn scale(&self, s: T) -> Self {
        Matrix {
            data: self.data.iter().map(|&x| x * s).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transpose.
    ///
    /// ```
    /// use densela::Matrix;
    /// let m = Matrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

fn unwrap_shape<T>(r: Result<Matrix<T>, LinalgError>) -> Matrix<T> {
    match r {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Operators panic on shape mismatch, like slice indexing does; the
// `try_*` methods above are the fallible forms.

macro_rules! impl_binop {
    ($Trait:ident, $method:ident, $try:ident) => {
        impl<T: Scalar> $Trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(rhs))
            }
        }

        impl<T: Scalar> $Trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(&rhs))
            }
        }

        impl<T: Scalar> $Trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(rhs))
            }
        }

        impl<T: Scalar> $Trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(&rhs))
            }
        }
    };
}

impl_binop!(Add, add, try_add);
impl_binop!(Sub, sub, try_sub);
impl_binop!(Mul, mul, try_mul);

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_shape(self.try_add(rhs));
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = unwrap_shape(self.try_sub(rhs));
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for x in self.data.iter_mut() {
            *x = -*x;
        }
        self
    }
}

// ── Scalar multiplication, both directions ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

macro_rules! impl_scalar_mul_left {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_left!(f32, f64, i32, i64);
