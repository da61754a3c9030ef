//! Approximate equality for floating-point values.
//!
//! The comparison is relative: two values are equal if their difference is
//! within `epsilon` times the larger of their magnitudes (or one).

use crate::matrix::Matrix;
use crate::scalar::Float;
use crate::vector::Vector;

/// Trait for testing approximate equality
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Compare using [`Self::relative_epsilon`]
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Compare using the relative epsilon `rel_eps`
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Default relative epsilon of this type
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        (self - other).abs() <= rel_eps * self.abs().max(other.abs()).max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-5
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        (self - other).abs() <= rel_eps * self.abs().max(other.abs()).max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-12
    }
}

impl<T: Float + ApproxEq, const N: usize> ApproxEq<Self, T> for Vector<T, N> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &T) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.approx_eq_eps(b, rel_eps))
    }

    fn relative_epsilon() -> T {
        T::relative_epsilon()
    }
}

impl<T: Float + ApproxEq, const W: usize, const H: usize> ApproxEq<Self, T> for Matrix<T, W, H> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &T) -> bool {
        self.as_flat()
            .iter()
            .zip(other.as_flat().iter())
            .all(|(a, b)| a.approx_eq_eps(b, rel_eps))
    }

    fn relative_epsilon() -> T {
        T::relative_epsilon()
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Whether every component is within `epsilon` of zero
    pub fn is_nearly_zero(&self, epsilon: T) -> bool {
        self.iter().all(|elt| elt.abs() <= epsilon)
    }
}

/// Asserts that two values are approximately equal.
///
/// An explicit relative epsilon may be given with `eps = ...`.
///
/// # Panics
///
/// If the values are not approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::approx::ApproxEq::approx_eq(a, b),
                "assertion failed: `{:?} ≅ {:?}`",
                a,
                b
            ),
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => assert!(
                $crate::approx::ApproxEq::approx_eq_eps(a, b, &$eps),
                "assertion failed: `{:?} ≅ {:?}` (eps = {})",
                a,
                b,
                $eps
            ),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec3;

    #[test]
    fn test_scalar_approx() {
        assert!((0.1f64 + 0.2).approx_eq(&0.3));
        assert!(1.0f32.approx_eq(&1.000_001));
        assert!(!1.0f32.approx_eq(&1.01));
        assert!(1e7f32.approx_eq(&(1e7 + 1.0)));
        assert!(100.0f64.approx_eq_eps(&101.0, &0.01));
    }

    #[test]
    fn test_vector_approx() {
        let a = vec3(1.0f32, 2.0, 3.0);
        assert!(a.approx_eq(&vec3(1.000_001, 2.0, 2.999_999)));
        assert!(!a.approx_eq(&vec3(1.1, 2.0, 3.0)));
        assert_approx_eq!(a, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_nearly_zero() {
        assert!(vec3(1e-7f32, -1e-7, 0.0).is_nearly_zero(1e-6));
        assert!(!vec3(1e-3f32, 0.0, 0.0).is_nearly_zero(1e-6));
    }
}
