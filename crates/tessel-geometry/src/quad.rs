//! Quads

use tessel_math::Vec3f;

use crate::{Shape, Triangle};

/// Four corners of a (not necessarily planar) quadrilateral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub left_top: Vec3f,
    pub right_top: Vec3f,
    pub right_bottom: Vec3f,
    pub left_bottom: Vec3f,
}

impl Quad {
    pub fn new(left_top: Vec3f, right_top: Vec3f, right_bottom: Vec3f, left_bottom: Vec3f) -> Self {
        Self {
            left_top,
            right_top,
            right_bottom,
            left_bottom,
        }
    }

    /// The two triangles covering the quad, split along the
    /// left-top/right-bottom diagonal
    pub fn triangulate(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.left_top, self.left_bottom, self.right_bottom),
            Triangle::new(self.left_top, self.right_bottom, self.right_top),
        ]
    }
}

impl Shape for Quad {
    fn compute_centroid(&self) -> Vec3f {
        (self.left_top + self.right_top + self.right_bottom + self.left_bottom) * 0.25
    }
}
