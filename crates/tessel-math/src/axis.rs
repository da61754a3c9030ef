//! Unit axis directions

use crate::vector::{Vec3f, vec3};

/// The three world axes as unit vectors
pub struct Axis;

impl Axis {
    pub const X: Vec3f = vec3(1.0, 0.0, 0.0);
    pub const Y: Vec3f = vec3(0.0, 1.0, 0.0);
    pub const Z: Vec3f = vec3(0.0, 0.0, 1.0);
}
