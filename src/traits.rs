use core::fmt::{Debug, Display, LowerExp};
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types, so integer matrices get
/// arithmetic, transpose and trace but not the floating-point algorithms.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements.
///
/// Required by every algorithm that pivots on magnitudes or takes square
/// roots (elimination, decompositions, statistics). `Display` lets the
/// solvers format pivots and factors into trace lines.
pub trait FloatScalar: Scalar + Float + Display + LowerExp {
    /// Convert an `f64` literal (a tolerance or a sample count) into `Self`.
    fn lit(x: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn lit(x: f64) -> $t {
                    x as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Absolute difference helper shared by the approximate comparisons.
#[inline]
pub(crate) fn abs_diff<T: FloatScalar>(a: T, b: T) -> T {
    (a - b).abs()
}

/// `true` when `x` is exactly zero (the `rref` lead test).
#[inline]
pub(crate) fn is_exact_zero<T: Scalar>(x: T) -> bool {
    x == T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_round_trips_small_constants() {
        assert_eq!(f64::lit(1e-10), 1e-10);
        assert!((f32::lit(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn helpers() {
        assert!(is_exact_zero(0.0_f64));
        assert!(!is_exact_zero(1e-300_f64));
        assert_eq!(abs_diff(1.0_f64, 3.0), 2.0);
    }
}
