//! # Tessel Math
//!
//! Linear algebra kernel for the Tessel engine.
//!
//! This crate provides the value types every other Tessel crate builds on:
//! - **Vectors**: `Vector<T, N>` with element-wise arithmetic, dot/cross
//!   products and an order-sensitive structural hash
//! - **Matrices**: `Matrix<T, W, H>`, row-major, multiplied by row vectors
//! - **Transforms**: position/rotation/scale composition
//! - **Approximate comparison** for floating-point results
//! - **glam interop** for handing data to glam-based code

pub mod approx;
pub mod axis;
pub mod interop;
pub mod matrix;
pub mod scalar;
pub mod transform;
pub mod vector;

pub use approx::ApproxEq;
pub use axis::Axis;
pub use matrix::{Mat2f, Mat3d, Mat3f, Mat4d, Mat4f, Matrix};
pub use scalar::{Float, Scalar};
pub use transform::Transform;
pub use vector::{
    Vec2d, Vec2f, Vec2i, Vec2u, Vec3d, Vec3f, Vec3i, Vec3u, Vec4d, Vec4f, Vector, vec2, vec3,
    vec4,
};

use thiserror::Error;

/// Math errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Result type for math operations
pub type MathResult<T> = Result<T, MathError>;
