//! Axis-aligned bounding boxes

use tessel_math::{Mat4f, Vec3f, Vector, vec3};

use crate::{Intersects, Shape};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub left_bottom_back: Vec3f,
    /// Maximum corner
    pub right_top_front: Vec3f,
}

impl Aabb {
    /// Inverted box containing nothing; expanding it by any point yields
    /// that point
    pub const EMPTY: Self = Self {
        left_bottom_back: Vector::new([f32::INFINITY; 3]),
        right_top_front: Vector::new([f32::NEG_INFINITY; 3]),
    };

    /// Create an AABB from its minimum and maximum corners
    pub fn new(left_bottom_back: Vec3f, right_top_front: Vec3f) -> Self {
        debug_assert!(
            (0..3).all(|i| left_bottom_back[i] <= right_top_front[i]),
            "AABB corners are inverted: {left_bottom_back:?} > {right_top_front:?}"
        );

        Self {
            left_bottom_back,
            right_top_front,
        }
    }

    /// Box spanning `half_extents` on each side of `center`; negative
    /// extents span the same box as their absolute values
    pub fn from_center_half_extents(center: Vec3f, half_extents: Vec3f) -> Self {
        let first = center - half_extents;
        let second = center + half_extents;
        Self::new(first.min(second), first.max(second))
    }

    /// Smallest box containing every given point; [`Aabb::EMPTY`] if there
    /// are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3f>) -> Self {
        points.into_iter().fold(Self::EMPTY, |mut aabb, point| {
            aabb.expand_to_include(point);
            aabb
        })
    }

    pub fn compute_half_extents(&self) -> Vec3f {
        (self.right_top_front - self.left_bottom_back) * 0.5
    }

    pub fn compute_size(&self) -> Vec3f {
        self.right_top_front - self.left_bottom_back
    }

    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.left_bottom_back[i] > self.right_top_front[i])
    }

    /// Check if a point is inside the box, faces included
    pub fn contains(&self, point: &Vec3f) -> bool {
        (0..3).all(|i| {
            point[i] >= self.left_bottom_back[i] && point[i] <= self.right_top_front[i]
        })
    }

    pub fn expand_to_include(&mut self, point: &Vec3f) {
        self.left_bottom_back = self.left_bottom_back.min(*point);
        self.right_top_front = self.right_top_front.max(*point);
    }

    /// Smallest box containing both boxes
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb {
            left_bottom_back: self.left_bottom_back.min(other.left_bottom_back),
            right_top_front: self.right_top_front.max(other.right_top_front),
        }
    }

    /// The eight corners, minimum corner first and maximum corner last
    pub fn corners(&self) -> [Vec3f; 8] {
        let min = self.left_bottom_back;
        let max = self.right_top_front;

        [
            vec3(min.x(), min.y(), min.z()),
            vec3(max.x(), min.y(), min.z()),
            vec3(min.x(), max.y(), min.z()),
            vec3(max.x(), max.y(), min.z()),
            vec3(min.x(), min.y(), max.z()),
            vec3(max.x(), min.y(), max.z()),
            vec3(min.x(), max.y(), max.z()),
            vec3(max.x(), max.y(), max.z()),
        ]
    }

    /// Box enclosing this one once transformed by `matrix`
    pub fn transform(&self, matrix: &Mat4f) -> Aabb {
        let transformed = self
            .corners()
            .map(|corner| (corner.extend(1.0) * *matrix).truncate());
        Self::from_points(&transformed)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Shape for Aabb {
    fn compute_centroid(&self) -> Vec3f {
        (self.left_bottom_back + self.right_top_front) * 0.5
    }
}

impl Intersects for Aabb {
    fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| {
            self.left_bottom_back[i] <= other.right_top_front[i]
                && self.right_top_front[i] >= other.left_bottom_back[i]
        })
    }
}
