//! Conversions to and from `glam`
//!
//! glam matrices are column-major and transform column vectors (`M * v`),
//! while ours are row-major and transform row vectors (`v * M`). The two
//! layouts are transposes of each other, so our rows become glam's columns
//! unchanged.

use crate::matrix::Mat4f;
use crate::vector::{Vec2f, Vec3f, Vec4f, Vector};

impl From<Vec2f> for glam::Vec2 {
    fn from(v: Vec2f) -> Self {
        glam::Vec2::from_array(v.into_array())
    }
}

impl From<glam::Vec2> for Vec2f {
    fn from(v: glam::Vec2) -> Self {
        Vector::new(v.to_array())
    }
}

impl From<Vec3f> for glam::Vec3 {
    fn from(v: Vec3f) -> Self {
        glam::Vec3::from_array(v.into_array())
    }
}

impl From<glam::Vec3> for Vec3f {
    fn from(v: glam::Vec3) -> Self {
        Vector::new(v.to_array())
    }
}

impl From<Vec4f> for glam::Vec4 {
    fn from(v: Vec4f) -> Self {
        glam::Vec4::from_array(v.into_array())
    }
}

impl From<glam::Vec4> for Vec4f {
    fn from(v: glam::Vec4) -> Self {
        Vector::new(v.to_array())
    }
}

impl From<Mat4f> for glam::Mat4 {
    fn from(m: Mat4f) -> Self {
        glam::Mat4::from_cols_array_2d(m.rows())
    }
}

impl From<glam::Mat4> for Mat4f {
    fn from(m: glam::Mat4) -> Self {
        Mat4f::from_rows(m.to_cols_array_2d())
    }
}
