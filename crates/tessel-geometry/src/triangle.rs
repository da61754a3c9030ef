//! Triangles

use tessel_math::Vec3f;

use crate::{Plane, Shape};

/// Three ordered points; their order defines the winding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub first: Vec3f,
    pub second: Vec3f,
    pub third: Vec3f,
}

impl Triangle {
    pub fn new(first: Vec3f, second: Vec3f, third: Vec3f) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Cross product of the two edges leaving the first point, not normalized.
    ///
    /// Its length is twice the triangle's area.
    pub fn compute_edge_cross(&self) -> Vec3f {
        (self.second - self.first).cross(&(self.third - self.first))
    }

    /// Unit normal, following the winding
    pub fn compute_normal(&self) -> Vec3f {
        self.compute_edge_cross().normalize()
    }

    pub fn compute_area(&self) -> f32 {
        self.compute_edge_cross().compute_length() * 0.5
    }

    /// Whether the points turn counter-clockwise when looking down `axis`
    pub fn is_counter_clockwise(&self, axis: &Vec3f) -> bool {
        self.compute_edge_cross().dot(axis) > 0.0
    }

    /// Reorders the points, if needed, so that they turn counter-clockwise
    /// relative to `axis`
    pub fn make_counter_clockwise(&mut self, axis: &Vec3f) {
        if !self.is_counter_clockwise(axis) {
            std::mem::swap(&mut self.second, &mut self.third);
        }
    }

    /// Plane the triangle lies in
    pub fn compute_plane(&self) -> Plane {
        Plane::from_points(self.first, self.second, self.third)
    }
}

impl Shape for Triangle {
    fn compute_centroid(&self) -> Vec3f {
        (self.first + self.second + self.third) / 3.0
    }
}
