//! Spheres

use tessel_math::Vec3f;

use crate::{Aabb, Intersects, Plane, Shape};

/// Sphere given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3f,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere enclosing an AABB
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.compute_centroid(),
            radius: aabb.compute_half_extents().compute_length(),
        }
    }

    /// Check if a point is inside the sphere, surface included
    pub fn contains(&self, point: &Vec3f) -> bool {
        (*point - self.center).compute_squared_length() <= self.radius * self.radius
    }

    /// Tightest AABB around the sphere
    pub fn compute_bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, Vec3f::splat(self.radius))
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3f::ZERO, 1.0)
    }
}

impl Shape for Sphere {
    fn compute_centroid(&self) -> Vec3f {
        self.center
    }
}

impl Intersects for Sphere {
    fn intersects(&self, other: &Sphere) -> bool {
        let distance_sq = (other.center - self.center).compute_squared_length();
        let radius_sum = self.radius + other.radius;
        distance_sq <= radius_sum * radius_sum
    }
}

impl Intersects<Aabb> for Sphere {
    fn intersects(&self, aabb: &Aabb) -> bool {
        // Closest point of the box to the sphere's center
        let closest = self.center.max(aabb.left_bottom_back).min(aabb.right_top_front);
        self.contains(&closest)
    }
}

impl Intersects<Sphere> for Aabb {
    fn intersects(&self, sphere: &Sphere) -> bool {
        sphere.intersects(self)
    }
}

impl Intersects<Plane> for Sphere {
    fn intersects(&self, plane: &Plane) -> bool {
        plane.intersects(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_math::{ApproxEq, vec3};

    #[test]
    fn test_sphere_contains() {
        let sphere = Sphere::new(vec3(1.0, 0.0, 0.0), 2.0);
        assert!(sphere.contains(&sphere.center));
        assert!(sphere.contains(&vec3(3.0, 0.0, 0.0)));
        assert!(!sphere.contains(&vec3(3.1, 0.0, 0.0)));
        assert_eq!(Sphere::default(), Sphere::new(Vec3f::ZERO, 1.0));
    }

    #[test]
    fn test_sphere_intersection() {
        let a = Sphere::new(Vec3f::ZERO, 1.0);
        let b = Sphere::new(vec3(1.5, 0.0, 0.0), 1.0);
        let c = Sphere::new(vec3(5.0, 0.0, 0.0), 1.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_sphere_aabb_intersection() {
        let aabb = Aabb::new(Vec3f::ZERO, Vec3f::splat(1.0));

        assert!(Sphere::new(vec3(0.5, 0.5, 0.5), 0.1).intersects(&aabb));
        assert!(Sphere::new(vec3(2.0, 0.5, 0.5), 1.0).intersects(&aabb));
        assert!(!Sphere::new(vec3(2.0, 2.0, 2.0), 1.0).intersects(&aabb));
        assert!(aabb.intersects(&Sphere::new(vec3(-0.5, 0.5, 0.5), 0.6)));
    }

    #[test]
    fn test_from_aabb() {
        let aabb = Aabb::new(Vec3f::splat(-1.0), Vec3f::splat(1.0));
        let sphere = Sphere::from_aabb(&aabb);
        assert_eq!(sphere.center, Vec3f::ZERO);
        assert!(sphere.radius.approx_eq(&3.0f32.sqrt()));
        for corner in aabb.corners() {
            assert!((corner - sphere.center).compute_length().approx_eq(&sphere.radius));
        }
    }

    #[test]
    fn test_bounding_box() {
        let sphere = Sphere::new(vec3(1.0, 2.0, 3.0), 0.5);
        assert_eq!(
            sphere.compute_bounding_box(),
            Aabb::new(vec3(0.5, 1.5, 2.5), vec3(1.5, 2.5, 3.5))
        );
    }

    #[test]
    fn test_bounding_box_negative_radius() {
        let sphere = Sphere::new(vec3(1.0, 2.0, 3.0), -0.5);
        assert_eq!(
            sphere.compute_bounding_box(),
            Aabb::new(vec3(0.5, 1.5, 2.5), vec3(1.5, 2.5, 3.5))
        );
    }
}
