//! Transforms
//!
//! Position, rotation and scale, composed into row-vector matrices:
//! a point `p` maps to `p * M`, so translations live in the last row.

use crate::axis::Axis;
use crate::matrix::{Mat4, Mat4f};
use crate::scalar::Float;
use crate::vector::{Vec3, Vec3f};

impl<T: Float> Mat4<T> {
    /// Translation by `offset`
    pub fn from_translation(offset: Vec3<T>) -> Self {
        let mut mat = Self::identity();
        mat[(3, 0)] = offset[0];
        mat[(3, 1)] = offset[1];
        mat[(3, 2)] = offset[2];
        mat
    }

    /// Non-uniform scaling
    pub fn from_scale(scale: Vec3<T>) -> Self {
        let mut mat = Self::identity();
        for i in 0..3 {
            mat[(i, i)] = scale[i];
        }
        mat
    }

    /// Rotation of `angle` radians around the unit vector `axis`,
    /// counter-clockwise when looking down the axis towards the origin.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        let t = T::ONE - cos;
        let [x, y, z] = *axis.data();

        Self::from_rows([
            [cos + x * x * t, x * y * t + z * sin, x * z * t - y * sin, T::ZERO],
            [x * y * t - z * sin, cos + y * y * t, y * z * t + x * sin, T::ZERO],
            [x * z * t + y * sin, y * z * t - x * sin, cos + z * z * t, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

/// Position, orientation and scale of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position
    pub position: Vec3f,
    /// Orthonormal rotation
    pub rotation: Mat4f,
    /// Per-axis scale
    pub scale: Vec3f,
}

impl Transform {
    /// Create a new transform with the given position
    pub fn from_position(position: Vec3f) -> Self {
        Self {
            position,
            rotation: Mat4f::identity(),
            scale: Vec3f::splat(1.0),
        }
    }

    /// Create a new transform from all components
    pub fn new(position: Vec3f, rotation: Mat4f, scale: Vec3f) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Move along the local axes: `displacement` is rotated by the current
    /// orientation before being applied.
    pub fn move_by(&mut self, displacement: Vec3f) {
        self.position += (displacement.extend(0.0) * self.rotation).truncate();
    }

    /// Translate in world space
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position += Vec3f::new([x, y, z]);
    }

    /// Rotate by `angle` radians around `axis` (normalized here)
    pub fn rotate(&mut self, angle: f32, axis: Vec3f) {
        self.rotation = self.rotation * Mat4f::from_axis_angle(axis.normalize(), angle);
    }

    /// Multiply the current scale component-wise
    pub fn scale_by(&mut self, factors: Vec3f) {
        self.scale *= factors;
    }

    /// Translation matrix of the position, or of its opposite if `reverse`
    pub fn compute_translation_matrix(&self, reverse: bool) -> Mat4f {
        let offset = if reverse { -self.position } else { self.position };
        Mat4f::from_translation(offset)
    }

    /// Full local-to-world matrix: scale, then rotate, then translate
    pub fn compute_transform_matrix(&self) -> Mat4f {
        Mat4f::from_scale(self.scale) * self.rotation * self.compute_translation_matrix(false)
    }

    fn local_axis(&self, axis: Vec3f) -> Vec3f {
        (axis.extend(0.0) * self.rotation).truncate()
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3f {
        self.local_axis(-Axis::Z)
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3f {
        self.local_axis(Axis::X)
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3f {
        self.local_axis(Axis::Y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3f::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::assert_approx_eq;
    use crate::vector::{vec3, vec4};

    #[test]
    fn test_transform_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3f::ZERO);
        assert_eq!(t.rotation, Mat4f::identity());
        assert_eq!(t.scale, Vec3f::splat(1.0));
    }

    #[test]
    fn test_transform_matrix() {
        let t = Transform::from_position(vec3(1.0, 2.0, 3.0));
        let matrix = t.compute_transform_matrix();
        assert_eq!(matrix.row(3).truncate(), vec3(1.0, 2.0, 3.0));

        let p = vec4(1.0, 1.0, 1.0, 1.0) * matrix;
        assert_eq!(p, vec4(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn test_reverse_translation() {
        let t = Transform::from_position(vec3(1.0, -2.0, 3.0));
        let p = t.position.extend(1.0) * t.compute_translation_matrix(true);
        assert_eq!(p, vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_axis_angle_rotation() {
        let rot = Mat4f::from_axis_angle(Axis::Z, FRAC_PI_2);
        let v = Axis::X.extend(0.0) * rot;
        assert_approx_eq!(v.truncate(), Axis::Y);

        let rot = Mat4f::from_axis_angle(Axis::Y, FRAC_PI_2);
        assert_approx_eq!((Axis::Z.extend(0.0) * rot).truncate(), Axis::X);
        assert_approx_eq!(rot * rot.transpose(), Mat4f::identity());
    }

    #[test]
    fn test_transform_directions() {
        let mut t = Transform::default();
        assert_approx_eq!(t.forward(), -Axis::Z);
        assert_approx_eq!(t.right(), Axis::X);
        assert_approx_eq!(t.up(), Axis::Y);

        t.rotate(FRAC_PI_2, Axis::Y);
        assert_approx_eq!(t.forward(), -Axis::X);
        assert_approx_eq!(t.up(), Axis::Y);
    }

    #[test]
    fn test_move_follows_orientation() {
        let mut t = Transform::default();
        t.rotate(FRAC_PI_2, Axis::Y);
        t.move_by(vec3(0.0, 0.0, -2.0));
        assert_approx_eq!(t.position, vec3(-2.0, 0.0, 0.0));

        t.translate(1.0, 1.0, 1.0);
        assert_approx_eq!(t.position, vec3(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_scale_then_translate() {
        let mut t = Transform::from_position(vec3(0.0, 1.0, 0.0));
        t.scale_by(Vec3f::splat(2.0));
        let p = vec4(1.0, 1.0, 1.0, 1.0) * t.compute_transform_matrix();
        assert_eq!(p, vec4(2.0, 3.0, 2.0, 1.0));
    }
}
