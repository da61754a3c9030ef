//! Perspective camera
//!
//! The camera owns a [`Transform`] and keeps its view and projection
//! matrices, along with their inverses, in sync with it. Matrices follow
//! the row-vector convention (`v * M`), translation in the last row.
//!
//! The projection maps view-space `z` to clip-space `w = z + 1`.

use serde::{Deserialize, Serialize};
use tessel_math::{Mat4f, Transform, Vec3f, Vector};

use crate::{RenderError, RenderResult};

/// Camera configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Frame width in pixels
    pub frame_width: u32,
    /// Frame height in pixels
    pub frame_height: u32,
    /// Vertical field of view, exclusive range (0, 180)
    pub field_of_view_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            frame_width: 1280,
            frame_height: 720,
            field_of_view_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            position: [0.0; 3],
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> RenderResult<()> {
        check_frame_size(self.frame_width, self.frame_height)?;
        check_field_of_view(self.field_of_view_degrees)?;
        check_clip_planes(self.near_plane, self.far_plane)
    }
}

fn check_frame_size(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidFrameSize { width, height });
    }
    Ok(())
}

fn check_field_of_view(degrees: f32) -> RenderResult<()> {
    if !(degrees > 0.0 && degrees < 180.0) {
        return Err(RenderError::InvalidFieldOfView(degrees));
    }
    Ok(())
}

fn check_clip_planes(near: f32, far: f32) -> RenderResult<()> {
    if !(near > 0.0 && far > near) {
        return Err(RenderError::InvalidClipPlanes { near, far });
    }
    Ok(())
}

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    transform: Transform,
    frame_ratio: f32,
    /// Radians
    field_of_view: f32,
    near_plane: f32,
    far_plane: f32,

    view: Mat4f,
    inverse_view: Mat4f,
    projection: Mat4f,
    inverse_projection: Mat4f,
}

impl Camera {
    pub fn new(config: CameraConfig) -> RenderResult<Self> {
        config.validate()?;

        let mut camera = Self {
            transform: Transform::from_position(Vector::new(config.position)),
            frame_ratio: config.frame_width as f32 / config.frame_height as f32,
            field_of_view: config.field_of_view_degrees.to_radians(),
            near_plane: config.near_plane,
            far_plane: config.far_plane,
            view: Mat4f::identity(),
            inverse_view: Mat4f::identity(),
            projection: Mat4f::identity(),
            inverse_projection: Mat4f::identity(),
        };

        camera.compute_view_matrix();
        camera.compute_perspective_matrix();

        log::debug!(
            "Created camera at {}: ratio {:.3}, fov {:.1} deg, clip [{}, {}]",
            camera.position(),
            camera.frame_ratio,
            config.field_of_view_degrees,
            camera.near_plane,
            camera.far_plane
        );

        Ok(camera)
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn position(&self) -> Vec3f {
        self.transform.position
    }

    pub fn frame_ratio(&self) -> f32 {
        self.frame_ratio
    }

    /// Field of view in radians
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn view_matrix(&self) -> &Mat4f {
        &self.view
    }

    pub fn inverse_view_matrix(&self) -> &Mat4f {
        &self.inverse_view
    }

    pub fn projection_matrix(&self) -> &Mat4f {
        &self.projection
    }

    pub fn inverse_projection_matrix(&self) -> &Mat4f {
        &self.inverse_projection
    }

    /// Move along the camera's local axes
    pub fn move_by(&mut self, displacement: Vec3f) {
        self.transform.move_by(displacement);
        self.compute_view_matrix();
    }

    /// Move in world space
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.transform.translate(x, y, z);
        self.compute_view_matrix();
    }

    /// Rotate by `angle` radians around `axis`
    pub fn rotate(&mut self, angle: f32, axis: Vec3f) {
        self.transform.rotate(angle, axis);
        self.compute_view_matrix();
    }

    /// Rebuild the view matrix from the transform: translation by the
    /// negated position, then the inverse rotation.
    pub fn compute_view_matrix(&mut self) -> &Mat4f {
        let rotation = self.transform.rotation;

        self.view = self.transform.compute_translation_matrix(true) * rotation.transpose();
        self.inverse_view = rotation * self.transform.compute_translation_matrix(false);
        &self.view
    }

    /// Point the view towards `target`.
    ///
    /// Only the view matrices change; the transform's rotation is left
    /// untouched, so the next move or rotation rebuilds the view from it.
    pub fn compute_look_at(&mut self, target: Vec3f, up: Vec3f) -> &Mat4f {
        let position = self.transform.position;

        let forward = (position - target).normalize();
        let right = forward.cross(&up).normalize();
        let true_up = right.cross(&forward);

        self.view = Mat4f::from_rows([
            [right.x(), true_up.x(), -forward.x(), 0.0],
            [right.y(), true_up.y(), -forward.y(), 0.0],
            [right.z(), true_up.z(), -forward.z(), 0.0],
            [right.dot(&-position), true_up.dot(&-position), forward.dot(&position), 1.0],
        ]);

        // Orthonormal basis: the inverse rotation is the transpose
        self.inverse_view = Mat4f::from_rows([
            [right.x(), right.y(), right.z(), 0.0],
            [true_up.x(), true_up.y(), true_up.z(), 0.0],
            [-forward.x(), -forward.y(), -forward.z(), 0.0],
            [position.x(), position.y(), position.z(), 1.0],
        ]);

        &self.view
    }

    pub fn compute_perspective_matrix(&mut self) -> &Mat4f {
        let half_fov_tangent = (self.field_of_view * 0.5).tan();
        let plane_dist = self.far_plane - self.near_plane;
        let plane_mult = self.far_plane * self.near_plane;

        let x_scale = 1.0 / (self.frame_ratio * half_fov_tangent);
        let y_scale = 1.0 / half_fov_tangent;
        let z_scale = self.far_plane / plane_dist;
        let z_offset = -plane_mult / plane_dist;

        self.projection = Mat4f::from_rows([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, z_scale, 1.0],
            [0.0, 0.0, z_offset, 1.0],
        ]);

        // Block inverse; the lower-right 2x2 block is invertible for any
        // positive near plane
        let inv_det = 1.0 / (z_scale - z_offset);
        self.inverse_projection = Mat4f::from_rows([
            [1.0 / x_scale, 0.0, 0.0, 0.0],
            [0.0, 1.0 / y_scale, 0.0, 0.0],
            [0.0, 0.0, inv_det, -inv_det],
            [0.0, 0.0, -z_offset * inv_det, z_scale * inv_det],
        ]);

        &self.projection
    }

    pub fn set_frame_size(&mut self, width: u32, height: u32) -> RenderResult<()> {
        check_frame_size(width, height)?;
        self.frame_ratio = width as f32 / height as f32;
        self.compute_perspective_matrix();
        Ok(())
    }

    pub fn set_field_of_view(&mut self, degrees: f32) -> RenderResult<()> {
        check_field_of_view(degrees)?;
        self.field_of_view = degrees.to_radians();
        self.compute_perspective_matrix();
        Ok(())
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> RenderResult<()> {
        check_clip_planes(near, far)?;
        self.near_plane = near;
        self.far_plane = far;
        self.compute_perspective_matrix();
        Ok(())
    }
}
