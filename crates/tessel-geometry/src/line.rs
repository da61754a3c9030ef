//! Line segments

use tessel_math::Vec3f;

use crate::{Aabb, EPSILON, Intersects, Plane, Shape};

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub begin: Vec3f,
    pub end: Vec3f,
}

impl Line {
    pub fn new(begin: Vec3f, end: Vec3f) -> Self {
        Self { begin, end }
    }

    /// Vector from the beginning to the end of the segment
    pub fn compute_direction(&self) -> Vec3f {
        self.end - self.begin
    }

    pub fn compute_length(&self) -> f32 {
        self.compute_direction().compute_length()
    }

    pub fn compute_squared_length(&self) -> f32 {
        self.compute_direction().compute_squared_length()
    }

    /// Point at parameter `t`, `0` being the beginning and `1` the end
    pub fn point_at(&self, t: f32) -> Vec3f {
        self.begin + self.compute_direction() * t
    }
}

impl Shape for Line {
    fn compute_centroid(&self) -> Vec3f {
        (self.begin + self.end) * 0.5
    }
}

impl Intersects<Plane> for Line {
    /// A segment lying in the plane is reported as not intersecting it.
    fn intersects(&self, plane: &Plane) -> bool {
        let direction = self.compute_direction();
        let denom = plane.normal.dot(&direction);

        if denom.abs() < EPSILON {
            return false;
        }

        let t = (plane.distance - plane.normal.dot(&self.begin)) / denom;
        (-EPSILON..=1.0 + EPSILON).contains(&t)
    }
}

impl Intersects<Aabb> for Line {
    /// Slab test, clipping the segment's `[0, 1]` parameter range one
    /// axis at a time.
    fn intersects(&self, aabb: &Aabb) -> bool {
        let direction = self.compute_direction();
        let min_corner = aabb.left_bottom_back;
        let max_corner = aabb.right_top_front;

        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;

        for axis in 0..3 {
            let start = self.begin[axis];
            let dir = direction[axis];

            // Parallel to this slab: either always inside it or never
            if dir.abs() < EPSILON {
                if start < min_corner[axis] || start > max_corner[axis] {
                    return false;
                }
                continue;
            }

            let inv_dir = 1.0 / dir;
            let mut t_enter = (min_corner[axis] - start) * inv_dir;
            let mut t_exit = (max_corner[axis] - start) * inv_dir;
            if t_enter > t_exit {
                std::mem::swap(&mut t_enter, &mut t_exit);
            }

            t_min = t_min.max(t_enter);
            t_max = t_max.min(t_exit);

            if t_min > t_max {
                return false;
            }
        }

        true
    }
}

impl Intersects<Line> for Plane {
    fn intersects(&self, line: &Line) -> bool {
        line.intersects(self)
    }
}

impl Intersects<Line> for Aabb {
    fn intersects(&self, line: &Line) -> bool {
        line.intersects(self)
    }
}
