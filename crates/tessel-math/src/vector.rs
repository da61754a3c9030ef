//! Fixed-size vectors
//!
//! `Vector<T, N>` is a plain array of `N` scalars. The dimension is part of
//! the type, so mixing dimensions is rejected at compile time; the only
//! runtime-checked path is construction from a slice.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::scalar::{Float, Scalar};
use crate::{MathError, MathResult};

/// Mixing constant of the structural hash (the 32-bit golden ratio)
pub const HASH_MIX: u64 = 0x9e37_79b9;

/// Folds one element hash into a running seed.
#[inline]
pub fn hash_combine(seed: u64, element_hash: u64) -> u64 {
    seed ^ element_hash
        .wrapping_add(HASH_MIX)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// A vector of `N` components of type `T`
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3d = Vec3<f64>;
pub type Vec4d = Vec4<f64>;
pub type Vec2i = Vec2<i32>;
pub type Vec3i = Vec3<i32>;
pub type Vec2u = Vec2<u32>;
pub type Vec3u = Vec3<u32>;

/// Shorthand for a 2D vector
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector::new([x, y])
}

/// Shorthand for a 3D vector
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::new([x, y, z])
}

/// Shorthand for a 4D vector
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::new([x, y, z, w])
}

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from its components
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of components
    pub const fn size(&self) -> usize {
        N
    }

    /// Components as an array
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    /// Components as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector, returning its components
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector
    pub const ZERO: Self = Self { data: [T::ZERO; N] };

    /// Create a vector with every component set to `value`
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Create a vector from a per-index generator
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self { data: std::array::from_fn(f) }
    }

    fn zip_with(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|i| f(self.data[i], other.data[i]))
    }

    /// Sum of the pairwise products
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    pub fn compute_squared_length(&self) -> T {
        self.dot(self)
    }

    /// Component-wise minimum
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, Scalar::min_value)
    }

    /// Component-wise maximum
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, Scalar::max_value)
    }

    /// Structural hash, chained from `seed`.
    ///
    /// Elements are folded left to right, so permuting components changes
    /// the result. Passing the output of one call as the seed of the next
    /// chains hashes across several fields.
    pub fn hash_with_seed(&self, seed: u64) -> u64 {
        self.data
            .iter()
            .fold(seed, |seed, elt| hash_combine(seed, elt.element_hash()))
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    pub fn compute_length(&self) -> T {
        self.compute_squared_length().sqrt()
    }

    /// Divide by the length.
    ///
    /// A zero-length vector yields non-finite components; callers must not
    /// normalize one.
    pub fn normalize(&self) -> Self {
        *self / self.compute_length()
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product, only available in three dimensions
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;

        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Append a fourth component
    pub fn extend(&self, w: T) -> Vec4<T> {
        let [x, y, z] = self.data;
        Vector::new([x, y, z, w])
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Drop the fourth component
    pub fn truncate(&self) -> Vec3<T> {
        let [x, y, z, _] = self.data;
        Vector::new([x, y, z])
    }
}

macro_rules! impl_accessors {
    ($n:literal: $($name:ident => $i:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                pub const fn $name(&self) -> T {
                    self.data[$i]
                }
            )+
        }
    };
}

impl_accessors!(2: x => 0, y => 1);
impl_accessors!(3: x => 0, y => 1, z => 2);
impl_accessors!(4: x => 0, y => 1, z => 2, w => 3);

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = MathError;

    fn try_from(values: &[T]) -> MathResult<Self> {
        let data: [T; N] = values.try_into().map_err(|_| MathError::DimensionMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self::new(data))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_with_seed(0));
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}", N)?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elt) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elt}")?;
        }
        write!(f, ")")
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident) => {
        impl<T: Scalar, const N: usize> $op_assign for Vector<T, N> {
            fn $fn_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
                    lhs.$fn_assign(rhs);
                }
            }
        }

        impl<T: Scalar, const N: usize> $op_assign<T> for Vector<T, N> {
            fn $fn_assign(&mut self, rhs: T) {
                for lhs in &mut self.data {
                    lhs.$fn_assign(rhs);
                }
            }
        }

        impl<T: Scalar, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            fn $fn(mut self, rhs: Self) -> Self {
                self.$fn_assign(rhs);
                self
            }
        }

        impl<T: Scalar, const N: usize> $op<T> for Vector<T, N> {
            type Output = Self;

            fn $fn(mut self, rhs: T) -> Self {
                self.$fn_assign(rhs);
                self
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_fn(|i| -self.data[i])
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32, u32);
