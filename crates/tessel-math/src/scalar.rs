//! Scalar element types
//!
//! Traits describing what vector and matrix components must support.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A numeric type usable as a vector or matrix component
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Hash of a single element, fed into the structural vector hash.
    ///
    /// Values comparing equal must produce the same hash.
    fn element_hash(self) -> u64;

    /// Smaller of two values
    fn min_value(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values
    fn max_value(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// A floating-point scalar
pub trait Float: Scalar + Neg<Output = Self> {
    /// Machine epsilon
    const EPSILON: Self;
    /// Archimedes' constant
    const PI: Self;
    /// Largest finite value
    const MAX: Self;
    /// Smallest (most negative) finite value
    const LOWEST: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn from_f32(value: f32) -> Self;
}

macro_rules! impl_float {
    ($($t:ident),* $(,)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn element_hash(self) -> u64 {
                // -0.0 == 0.0, so both must hash the same
                if self == 0.0 {
                    0
                } else {
                    self.to_bits() as u64
                }
            }
        }

        impl Float for $t {
            const EPSILON: Self = $t::EPSILON;
            const PI: Self = std::$t::consts::PI;
            const MAX: Self = $t::MAX;
            const LOWEST: Self = $t::MIN;

            fn sqrt(self) -> Self { $t::sqrt(self) }
            fn abs(self) -> Self { $t::abs(self) }
            fn sin(self) -> Self { $t::sin(self) }
            fn cos(self) -> Self { $t::cos(self) }
            fn tan(self) -> Self { $t::tan(self) }
            fn atan2(self, other: Self) -> Self { $t::atan2(self, other) }
            fn from_f32(value: f32) -> Self { value as $t }
        }
    )*};
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn element_hash(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_float!(f32, f64);
impl_integer!(i32, i64, u32, u64, usize);
