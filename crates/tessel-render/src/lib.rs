//! # Tessel Render
//!
//! Geometry-side rendering support for the Tessel engine.
//!
//! ## Features
//! - Vertex, submesh and mesh containers
//! - Procedural shape generators (plane, triangle, quad, box, UV sphere,
//!   icosphere)
//! - Bounding box computation over meshes
//! - Perspective camera with cached view/projection matrices
//! - A backend seam for uploading and drawing submeshes, with a headless
//!   implementation recording statistics

pub mod backend;
pub mod camera;
pub mod mesh;
pub mod shape;
pub mod submesh;
pub mod vertex;

pub use backend::{BackendStats, GraphicsBackend, HeadlessBackend};
pub use camera::{Camera, CameraConfig};
pub use mesh::Mesh;
pub use shape::SphereMeshType;
pub use submesh::Submesh;
pub use vertex::{Vertex, VertexAttributes};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Render errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("Invalid clip planes: near = {near}, far = {far}")]
    InvalidClipPlanes { near: f32, far: f32 },

    #[error("Invalid field of view: {0} degrees")]
    InvalidFieldOfView(f32),

    #[error("Out of memory: requested {requested} bytes, {available} available")]
    OutOfMemory { requested: u64, available: u64 },
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// How a submesh's indices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Points,
    Lines,
    #[default]
    Triangles,
}
