//! Infinite planes

use tessel_math::{Vec3f, vec3};

use crate::{EPSILON, Intersects, Shape, Sphere};

/// A plane in 3D space, holding every point `p` with `normal · p == distance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Signed offset from the origin along the normal
    pub distance: f32,
    /// Unit normal
    pub normal: Vec3f,
}

impl Plane {
    pub fn new(distance: f32, normal: Vec3f) -> Self {
        Self { distance, normal }
    }

    /// Create a plane passing through a point
    pub fn from_point(point: Vec3f, normal: Vec3f) -> Self {
        let normal = normal.normalize();
        Self {
            distance: normal.dot(&point),
            normal,
        }
    }

    /// Create a plane passing through three non-collinear points.
    ///
    /// The normal follows the winding of `a`, `b`, `c`.
    pub fn from_points(a: Vec3f, b: Vec3f, c: Vec3f) -> Self {
        Self::from_point(a, (b - a).cross(&(c - a)))
    }

    /// Signed distance from a point to the plane, positive on the normal's side
    pub fn compute_signed_distance(&self, point: &Vec3f) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Orthogonal projection of a point onto the plane
    pub fn project_point(&self, point: &Vec3f) -> Vec3f {
        *point - self.normal * self.compute_signed_distance(point)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(0.0, vec3(0.0, 1.0, 0.0))
    }
}

impl Shape for Plane {
    /// Point of the plane closest to the origin
    fn compute_centroid(&self) -> Vec3f {
        self.normal * self.distance
    }
}

impl Intersects for Plane {
    /// Parallel planes never intersect, coincident ones included.
    fn intersects(&self, other: &Plane) -> bool {
        !self.normal.cross(&other.normal).is_nearly_zero(EPSILON)
    }
}

impl Intersects<Sphere> for Plane {
    fn intersects(&self, sphere: &Sphere) -> bool {
        self.compute_signed_distance(&sphere.center).abs() <= sphere.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_math::{ApproxEq, Axis, assert_approx_eq};

    fn planes() -> [Plane; 3] {
        [
            Plane::new(1.0, Axis::Y),
            Plane::new(0.5, vec3(1.0, 1.0, 0.0).normalize()),
            Plane::new(0.5, vec3(-1.0, 1.0, 0.0).normalize()),
        ]
    }

    #[test]
    fn test_plane_basic() {
        let [plane1, plane2, _] = planes();

        assert_eq!(plane1.compute_centroid(), Axis::Y);
        assert_approx_eq!(
            plane2.compute_centroid(),
            vec3(0.353_553_4, 0.353_553_4, 0.0)
        );
        assert_eq!(Plane::default(), Plane::new(0.0, Axis::Y));
    }

    #[test]
    fn test_plane_from_point() {
        let plane = Plane::from_point(vec3(4.0, 1.0, -7.0), Axis::Y);
        assert_eq!(plane, Plane::new(1.0, Axis::Y));

        let plane = Plane::from_point(vec3(1.0, 0.0, 0.0), vec3(2.0, 2.0, 0.0));
        assert_approx_eq!(plane.normal, vec3(1.0, 1.0, 0.0).normalize());
        assert!(plane.distance.approx_eq(&std::f32::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            vec3(-3.0, 0.5, 3.0),
            vec3(3.0, 0.5, 3.0),
            vec3(0.0, 0.5, -6.0),
        );
        assert_approx_eq!(plane.normal, Axis::Y);
        assert!(plane.distance.approx_eq(&0.5));

        // Reversed winding flips the normal and the offset
        let flipped = Plane::from_points(
            vec3(-3.0, 0.5, 3.0),
            vec3(0.0, 0.5, -6.0),
            vec3(3.0, 0.5, 3.0),
        );
        assert_approx_eq!(flipped.normal, -Axis::Y);
        assert!(flipped.distance.approx_eq(&-0.5));
    }

    #[test]
    fn test_signed_distance() {
        let plane = Plane::new(1.0, Axis::Y);
        assert_eq!(plane.compute_signed_distance(&vec3(3.0, 4.0, 0.0)), 3.0);
        assert_eq!(plane.compute_signed_distance(&vec3(0.0, -1.0, 5.0)), -2.0);
        assert_eq!(plane.project_point(&vec3(3.0, 4.0, -2.0)), vec3(3.0, 1.0, -2.0));
    }

    #[test]
    fn test_plane_plane_intersection() {
        let [plane1, plane2, plane3] = planes();

        assert!(!plane1.intersects(&plane1));
        assert!(plane1.intersects(&plane2));
        assert!(plane1.intersects(&plane3));

        assert!(plane2.intersects(&plane1));
        assert!(!plane2.intersects(&plane2));
        assert!(plane2.intersects(&plane3));

        assert!(plane3.intersects(&plane1));
        assert!(plane3.intersects(&plane2));
        assert!(!plane3.intersects(&plane3));

        // Parallel, facing opposite directions
        assert!(!Plane::new(1.0, Axis::Y).intersects(&Plane::new(2.0, -Axis::Y)));
    }

    #[test]
    fn test_plane_sphere_intersection() {
        let plane = Plane::new(1.0, Axis::Y);
        assert!(plane.intersects(&Sphere::new(Vec3f::ZERO, 1.0)));
        assert!(plane.intersects(&Sphere::new(vec3(0.0, 2.5, 0.0), 2.0)));
        assert!(!plane.intersects(&Sphere::new(vec3(0.0, -2.0, 0.0), 2.0)));
    }
}
