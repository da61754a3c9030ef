//! Graphics backends
//!
//! A backend receives submeshes to upload and draw. The headless backend
//! performs no GPU work and only records what it was asked to do.

use serde::{Deserialize, Serialize};

use crate::submesh::Submesh;
use crate::{RenderError, RenderResult};

/// Destination for submesh uploads and draw calls
pub trait GraphicsBackend {
    /// Upload a submesh's vertex and index data
    fn load(&mut self, submesh: &Submesh) -> RenderResult<()>;

    /// Issue a draw call for a submesh
    fn draw(&mut self, submesh: &Submesh) -> RenderResult<()>;
}

/// Backend statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStats {
    /// Submeshes uploaded
    pub uploads: u32,
    /// Draw calls issued
    pub draw_calls: u32,
    /// Triangles drawn
    pub triangles: u64,
    /// Vertices uploaded
    pub vertices: u64,
    /// Vertex and index data uploaded, in bytes
    pub bytes_uploaded: u64,
}

/// Backend recording statistics instead of rendering
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    stats: BackendStats,
    /// Upload limit in bytes, unlimited if `None`
    memory_budget: Option<u64>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend refusing uploads past `bytes` in total
    pub fn with_memory_budget(bytes: u64) -> Self {
        Self {
            stats: BackendStats::default(),
            memory_budget: Some(bytes),
        }
    }

    /// Get backend statistics
    pub fn stats(&self) -> &BackendStats {
        &self.stats
    }

    /// Clear the statistics, keeping the memory budget
    pub fn reset(&mut self) {
        self.stats = BackendStats::default();
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn load(&mut self, submesh: &Submesh) -> RenderResult<()> {
        let requested = submesh.compute_byte_size() as u64;

        if let Some(budget) = self.memory_budget {
            let available = budget.saturating_sub(self.stats.bytes_uploaded);
            if requested > available {
                return Err(RenderError::OutOfMemory {
                    requested,
                    available,
                });
            }
        }

        self.stats.uploads += 1;
        self.stats.vertices += submesh.vertex_count() as u64;
        self.stats.bytes_uploaded += requested;

        log::trace!(
            "Uploaded submesh: {} vertices, {} indices, {} bytes",
            submesh.vertex_count(),
            submesh.index_count(),
            requested
        );
        Ok(())
    }

    fn draw(&mut self, submesh: &Submesh) -> RenderResult<()> {
        self.stats.draw_calls += 1;
        self.stats.triangles += submesh.triangle_count() as u64;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::vertex::Vertex;
    use crate::RenderMode;
    use tessel_geometry::{Aabb, Sphere};
    use tessel_math::Vec3f;

    #[test]
    fn test_headless_records_uploads_and_draws() {
        let mut backend = HeadlessBackend::new();
        let mesh = Mesh::from_aabb(
            &Aabb::new(Vec3f::splat(-1.0), Vec3f::splat(1.0)),
            RenderMode::Triangles,
        );

        mesh.load(&mut backend).unwrap();
        mesh.draw(&mut backend).unwrap();
        mesh.draw(&mut backend).unwrap();

        let stats = backend.stats();
        assert_eq!(stats.uploads, 1);
        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.triangles, 24);
        assert_eq!(stats.vertices, 8);
        assert_eq!(stats.bytes_uploaded, (8 * Vertex::SIZE + 36 * 4) as u64);

        backend.reset();
        assert_eq!(*backend.stats(), BackendStats::default());
    }

    #[test]
    fn test_memory_budget() {
        let mesh = Mesh::from_icosphere(&Sphere::new(Vec3f::ZERO, 1.0), 0, RenderMode::Triangles);
        let size = mesh.submeshes()[0].compute_byte_size() as u64;

        let mut backend = HeadlessBackend::with_memory_budget(size + size / 2);
        assert!(mesh.load(&mut backend).is_ok());

        let err = mesh.load(&mut backend).unwrap_err();
        assert_eq!(
            err,
            RenderError::OutOfMemory {
                requested: size,
                available: size / 2,
            }
        );
        assert_eq!(backend.stats().uploads, 1);
    }

    #[test]
    fn test_stats_to_json() {
        let stats = BackendStats {
            uploads: 1,
            draw_calls: 2,
            triangles: 3,
            vertices: 4,
            bytes_uploaded: 5,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["draw_calls"], 2);
        assert_eq!(json["bytes_uploaded"], 5);
    }
}
