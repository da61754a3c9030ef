//! Submeshes
//!
//! A submesh is the unit of geometry a backend uploads and draws: one
//! vertex list, one index list, and the material it should be shaded with.

use tessel_geometry::Aabb;

use crate::backend::GraphicsBackend;
use crate::vertex::{Vertex, VertexAttributes};
use crate::{RenderMode, RenderResult};

/// A single drawable unit of geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    /// Index into the owning model's material list
    material_index: usize,
    render_mode: RenderMode,
    attributes: VertexAttributes,
}

impl Submesh {
    /// Create an empty submesh drawn as triangles, with no attributes filled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submesh from already built vertices and indices
    pub fn from_data(vertices: Vec<Vertex>, indices: Vec<u32>, attributes: VertexAttributes) -> Self {
        Self {
            vertices,
            indices,
            attributes,
            ..Self::default()
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn indices_mut(&mut self) -> &mut Vec<u32> {
        &mut self.indices
    }

    pub fn material_index(&self) -> usize {
        self.material_index
    }

    pub fn set_material_index(&mut self, material_index: usize) {
        self.material_index = material_index;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    pub fn attributes(&self) -> VertexAttributes {
        self.attributes
    }

    pub fn set_attributes(&mut self, attributes: VertexAttributes) {
        self.attributes = attributes;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of whole triangles described by the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Size of the vertex and index data in bytes
    pub fn compute_byte_size(&self) -> usize {
        self.vertices.len() * Vertex::SIZE + self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Box enclosing every vertex position; [`Aabb::EMPTY`] without vertices
    pub fn compute_bounding_box(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|vertex| &vertex.position))
    }

    /// Send the vertex and index data to the backend
    pub fn load(&self, backend: &mut impl GraphicsBackend) -> RenderResult<()> {
        backend.load(self)
    }

    pub fn draw(&self, backend: &mut impl GraphicsBackend) -> RenderResult<()> {
        backend.draw(self)
    }
}
