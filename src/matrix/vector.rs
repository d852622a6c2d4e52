use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::traits::{FloatScalar, Scalar};

/// Dynamically-sized vector of scalars.
///
/// Used for right-hand sides, means, eigenvalues and explained variance.
///
/// # Examples
///
/// ```
/// use densela::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self::fill(n, T::zero())
    }

    /// Vector of length `n` filled with `value`.
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Create a vector by calling `f(i)` for each index.
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dot product. Panics on length mismatch.
    ///
    /// ```
    /// use densela::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: FloatScalar> Vector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use densela::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. A zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == T::zero() {
            return self.clone();
        }
        self.scale(T::one() / n)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a + b).collect(),
        }
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a - b).collect(),
        }
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, s: T) -> Vector<T> {
        self.scale(s)
    }
}
