//! # Tessel Geometry
//!
//! Geometric primitives for the Tessel engine.
//!
//! ## Features
//! - Lines, planes, triangles, quads, spheres and axis-aligned boxes
//! - Derived quantities (centroids, lengths, normals, extents)
//! - Intersection predicates (line/plane, line/box, plane/plane, ...)
//!
//! Intersection tests never panic and always return a definite answer:
//! near-parallel and degenerate configurations are resolved against
//! [`EPSILON`].

pub mod aabb;
pub mod line;
pub mod plane;
pub mod quad;
pub mod sphere;
pub mod triangle;

pub use aabb::Aabb;
pub use line::Line;
pub use plane::Plane;
pub use quad::Quad;
pub use sphere::Sphere;
pub use triangle::Triangle;

use tessel_math::Vec3f;

/// Tolerance used by the intersection tests
pub const EPSILON: f32 = f32::EPSILON;

/// Common queries shared by every primitive
pub trait Shape {
    /// Geometric center of the shape
    fn compute_centroid(&self) -> Vec3f;
}

/// Intersection test between two shapes
pub trait Intersects<Rhs: ?Sized = Self> {
    /// Whether the two shapes have at least one point in common
    fn intersects(&self, other: &Rhs) -> bool;
}
