//! Meshes
//!
//! A mesh is an ordered list of submeshes plus a cached bounding box
//! enclosing all of them. Procedural constructors live in [`crate::shape`].

use smallvec::{SmallVec, smallvec};
use tessel_geometry::Aabb;

use crate::backend::GraphicsBackend;
use crate::submesh::Submesh;
use crate::{RenderMode, RenderResult};

/// Mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Never empty
    submeshes: SmallVec<[Submesh; 1]>,
    bounding_box: Aabb,
}

impl Mesh {
    /// Create a mesh holding a single empty submesh
    pub fn new() -> Self {
        Self::from_submesh(Submesh::new())
    }

    pub fn from_submesh(submesh: Submesh) -> Self {
        let mut mesh = Self {
            submeshes: smallvec![submesh],
            bounding_box: Aabb::EMPTY,
        };
        mesh.compute_bounding_box();
        mesh
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    /// The cached bounding box becomes stale after editing submeshes;
    /// call [`Mesh::compute_bounding_box`] to refresh it.
    pub fn submeshes_mut(&mut self) -> &mut [Submesh] {
        &mut self.submeshes
    }

    pub fn add_submesh(&mut self, submesh: Submesh) {
        self.submeshes.push(submesh);
    }

    /// Bounding box as of the last call to [`Mesh::compute_bounding_box`]
    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    /// Recompute and cache the box enclosing every submesh
    pub fn compute_bounding_box(&mut self) -> &Aabb {
        self.bounding_box = self
            .submeshes
            .iter()
            .map(Submesh::compute_bounding_box)
            .fold(Aabb::EMPTY, |acc, aabb| acc.merge(&aabb));
        &self.bounding_box
    }

    /// Total number of vertices over all submeshes
    pub fn recover_vertex_count(&self) -> usize {
        self.submeshes.iter().map(Submesh::vertex_count).sum()
    }

    /// Total number of triangles over all submeshes
    pub fn recover_triangle_count(&self) -> usize {
        self.submeshes.iter().map(Submesh::triangle_count).sum()
    }

    /// Apply the same render mode to every submesh
    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        for submesh in &mut self.submeshes {
            submesh.set_render_mode(render_mode);
        }
    }

    /// Upload every submesh, stopping at the first failure
    pub fn load(&self, backend: &mut impl GraphicsBackend) -> RenderResult<()> {
        for submesh in &self.submeshes {
            submesh.load(backend)?;
        }
        Ok(())
    }

    pub fn draw(&self, backend: &mut impl GraphicsBackend) -> RenderResult<()> {
        for submesh in &self.submeshes {
            submesh.draw(backend)?;
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{Vertex, VertexAttributes};
    use tessel_math::{Vec3f, vec3};

    fn submesh_with(positions: &[Vec3f]) -> Submesh {
        let vertices = positions
            .iter()
            .map(|&position| Vertex {
                position,
                ..Vertex::default()
            })
            .collect();
        let indices = (0..positions.len() as u32).collect();
        Submesh::from_data(vertices, indices, VertexAttributes::POSITION)
    }

    #[test]
    fn test_mesh_default() {
        let mesh = Mesh::default();
        assert_eq!(mesh.submeshes().len(), 1);
        assert_eq!(mesh.recover_vertex_count(), 0);
        assert_eq!(mesh.recover_triangle_count(), 0);
        assert_eq!(*mesh.bounding_box(), Aabb::EMPTY);
    }

    #[test]
    fn test_bounding_box_over_submeshes() {
        let mut mesh = Mesh::from_submesh(submesh_with(&[
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 2.0, 0.0),
            vec3(-1.0, 0.5, 3.0),
        ]));
        assert_eq!(
            *mesh.bounding_box(),
            Aabb::new(vec3(-1.0, 0.0, 0.0), vec3(1.0, 2.0, 3.0))
        );

        mesh.add_submesh(submesh_with(&[
            vec3(5.0, -2.0, 1.0),
            vec3(4.0, 0.0, 1.0),
            vec3(4.5, 1.0, -1.0),
        ]));
        // Cached until recomputed
        assert_eq!(
            *mesh.bounding_box(),
            Aabb::new(vec3(-1.0, 0.0, 0.0), vec3(1.0, 2.0, 3.0))
        );

        let aabb = *mesh.compute_bounding_box();
        assert_eq!(aabb, Aabb::new(vec3(-1.0, -2.0, -1.0), vec3(5.0, 2.0, 3.0)));
        assert_eq!(*mesh.bounding_box(), aabb);

        assert_eq!(mesh.recover_vertex_count(), 6);
        assert_eq!(mesh.recover_triangle_count(), 2);
    }

    #[test]
    fn test_empty_submesh_does_not_grow_box() {
        let mut mesh = Mesh::from_submesh(submesh_with(&[vec3(1.0, 1.0, 1.0), vec3(2.0, 2.0, 2.0)]));
        mesh.add_submesh(Submesh::new());
        assert_eq!(
            *mesh.compute_bounding_box(),
            Aabb::new(vec3(1.0, 1.0, 1.0), vec3(2.0, 2.0, 2.0))
        );
    }

    #[test]
    fn test_set_render_mode() {
        let mut mesh = Mesh::new();
        mesh.add_submesh(Submesh::new());
        mesh.set_render_mode(RenderMode::Points);
        assert!(mesh.submeshes().iter().all(|s| s.render_mode() == RenderMode::Points));

        mesh.submeshes_mut()[1].set_render_mode(RenderMode::Lines);
        assert_eq!(mesh.submeshes()[1].render_mode(), RenderMode::Lines);
    }
}
