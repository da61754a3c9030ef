//! Procedural mesh generators
//!
//! Each constructor builds a [`Mesh`] holding a single submesh. Nothing is
//! uploaded here; call [`Mesh::load`] with a backend afterwards.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use tessel_geometry::{Aabb, Plane, Quad, Sphere, Triangle};
use tessel_math::{Vec3f, vec2, vec3};

use crate::mesh::Mesh;
use crate::submesh::Submesh;
use crate::vertex::{Vertex, VertexAttributes};
use crate::RenderMode;

/// Lowest UV sphere tessellation the index layout supports; coarser
/// counts would divide by zero or underflow
const MIN_UV_WIDTH_COUNT: u32 = 1;
const MIN_UV_HEIGHT_COUNT: u32 = 2;

const GOLDEN_RATIO: f32 = 1.618_034;

/// Faces of the base icosahedron, all wound the same way
const ICOSAHEDRON_INDICES: [u32; 60] = [
    0, 5, 11, 0, 1, 5, 0, 7, 1, 0, 10, 7, 0, 11, 10, //
    1, 9, 5, 5, 4, 11, 11, 2, 10, 10, 6, 7, 7, 8, 1, //
    3, 4, 9, 3, 2, 4, 3, 6, 2, 3, 8, 6, 3, 9, 8, //
    4, 5, 9, 2, 11, 4, 6, 10, 2, 8, 7, 6, 9, 1, 8,
];

/// Kind of tessellation used for sphere meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SphereMeshType {
    /// Latitude/longitude grid
    #[default]
    Uv,
    /// Icosahedron (subdivision not supported)
    Ico,
}

/// Heuristic tangent: the normal with its X and Y components swapped
fn approximate_tangent(normal: &Vec3f) -> Vec3f {
    vec3(normal.y(), normal.x(), normal.z())
}

fn finish(vertices: Vec<Vertex>, indices: Vec<u32>, attributes: VertexAttributes, mode: RenderMode) -> Mesh {
    let mut submesh = Submesh::from_data(vertices, indices, attributes);
    submesh.set_render_mode(mode);
    Mesh::from_submesh(submesh)
}

impl Mesh {
    /// Horizontal patch at the plane's height, spanning `[-width, width]`
    /// along X and `[-depth, depth]` along Z.
    ///
    /// Only the height is taken from the plane; the patch is not tilted
    /// to follow its normal.
    pub fn from_plane(plane: &Plane, width: f32, depth: f32, mode: RenderMode) -> Mesh {
        let height = (plane.normal * plane.distance).y();

        let corner = |x: f32, z: f32, u: f32, v: f32| Vertex {
            position: vec3(x, height, z),
            texcoords: vec2(u, v),
            normal: plane.normal,
            ..Vertex::default()
        };

        let vertices = vec![
            corner(-width, depth, 0.0, 0.0),
            corner(width, depth, 1.0, 0.0),
            corner(width, -depth, 1.0, 1.0),
            corner(-width, -depth, 0.0, 1.0),
        ];
        let indices = vec![1, 0, 2, 2, 0, 3];

        finish(
            vertices,
            indices,
            VertexAttributes::POSITION | VertexAttributes::TEXCOORDS | VertexAttributes::NORMAL,
            mode,
        )
    }

    pub fn from_triangle(triangle: &Triangle, mode: RenderMode) -> Mesh {
        let normal = triangle.compute_normal();

        let vertex = |position: Vec3f, u: f32, v: f32| Vertex {
            position,
            texcoords: vec2(u, v),
            normal,
            ..Vertex::default()
        };

        let vertices = vec![
            vertex(triangle.first, 0.0, 0.0),
            vertex(triangle.second, 0.5, 1.0),
            vertex(triangle.third, 1.0, 0.0),
        ];

        finish(
            vertices,
            vec![1, 0, 2],
            VertexAttributes::POSITION | VertexAttributes::TEXCOORDS | VertexAttributes::NORMAL,
            mode,
        )
    }

    /// Each corner's normal is the cross product of its two adjacent edges,
    /// so a non-planar quad gets per-corner normals.
    pub fn from_quad(quad: &Quad, mode: RenderMode) -> Mesh {
        let lt = quad.left_top;
        let rt = quad.right_top;
        let rb = quad.right_bottom;
        let lb = quad.left_bottom;

        let vertex = |position: Vec3f, normal: Vec3f, u: f32, v: f32| Vertex {
            position,
            texcoords: vec2(u, v),
            normal: normal.normalize(),
            ..Vertex::default()
        };

        let left_top = vertex(lt, (lt - rt).cross(&(lt - lb)), 0.0, 1.0);
        let right_top = vertex(rt, (rt - rb).cross(&(rt - lt)), 1.0, 1.0);
        let right_bottom = vertex(rb, (rb - lb).cross(&(rb - rt)), 1.0, 0.0);
        let left_bottom = vertex(lb, (lb - lt).cross(&(lb - rb)), 0.0, 0.0);

        finish(
            vec![left_top, left_bottom, right_bottom, right_top],
            vec![0, 1, 2, 0, 2, 3],
            VertexAttributes::POSITION | VertexAttributes::TEXCOORDS | VertexAttributes::NORMAL,
            mode,
        )
    }

    /// Box with its 8 corners shared between faces; normals are left unset.
    pub fn from_aabb(aabb: &Aabb, mode: RenderMode) -> Mesh {
        let min = aabb.left_bottom_back;
        let max = aabb.right_top_front;

        let (right, left) = (max.x(), min.x());
        let (top, bottom) = (max.y(), min.y());
        let (front, back) = (max.z(), min.z());

        let vertex = |x: f32, y: f32, z: f32, u: f32, v: f32| Vertex {
            position: vec3(x, y, z),
            texcoords: vec2(u, v),
            ..Vertex::default()
        };

        let vertices = vec![
            vertex(right, top, back, 0.0, 1.0),
            vertex(right, top, front, 1.0, 1.0),
            vertex(right, bottom, back, 0.0, 0.0),
            vertex(right, bottom, front, 1.0, 0.0),
            vertex(left, top, back, 1.0, 1.0),
            vertex(left, top, front, 0.0, 1.0),
            vertex(left, bottom, back, 1.0, 0.0),
            vertex(left, bottom, front, 0.0, 0.0),
        ];

        #[rustfmt::skip]
        let indices = vec![
            1, 0, 2, 1, 2, 3, // Right
            4, 5, 7, 4, 7, 6, // Left
            4, 0, 1, 4, 1, 5, // Top
            7, 3, 2, 7, 2, 6, // Bottom
            5, 1, 3, 5, 3, 7, // Front
            0, 4, 6, 0, 6, 2, // Back
        ];

        finish(
            vertices,
            indices,
            VertexAttributes::POSITION | VertexAttributes::TEXCOORDS,
            mode,
        )
    }

    /// Sphere mesh of the requested kind. A UV sphere uses `subdiv_count`
    /// for both its width and height counts.
    pub fn from_sphere(sphere: &Sphere, subdiv_count: u32, kind: SphereMeshType, mode: RenderMode) -> Mesh {
        match kind {
            SphereMeshType::Uv => Self::from_uv_sphere(sphere, subdiv_count, subdiv_count, mode),
            SphereMeshType::Ico => Self::from_icosphere(sphere, subdiv_count, mode),
        }
    }

    /// Latitude/longitude sphere with `width_count` segments around the Y
    /// axis and `height_count` rings from pole to pole.
    ///
    /// Produces `(width_count + 1) * (height_count + 1)` vertices; the seam
    /// and pole vertices are duplicated so texture coordinates stay
    /// continuous.
    pub fn from_uv_sphere(sphere: &Sphere, width_count: u32, height_count: u32, mode: RenderMode) -> Mesh {
        if width_count < MIN_UV_WIDTH_COUNT || height_count < MIN_UV_HEIGHT_COUNT {
            log::warn!(
                "UV sphere tessellation {width_count}x{height_count} is too coarse, raising it to at least {MIN_UV_WIDTH_COUNT}x{MIN_UV_HEIGHT_COUNT}"
            );
        }
        let width_count = width_count.max(MIN_UV_WIDTH_COUNT);
        let height_count = height_count.max(MIN_UV_HEIGHT_COUNT);

        let width_step = TAU / width_count as f32;
        let height_step = PI / height_count as f32;
        let inv_radius = 1.0 / sphere.radius;

        let mut vertices = Vec::with_capacity(((height_count + 1) * (width_count + 1)) as usize);

        for height_index in 0..=height_count {
            let height_angle = FRAC_PI_2 - height_index as f32 * height_step;
            let xz = sphere.radius * height_angle.cos();
            let y = sphere.radius * height_angle.sin();

            for width_index in 0..=width_count {
                let width_angle = width_index as f32 * width_step;
                let offset = vec3(xz * width_angle.cos(), y, xz * width_angle.sin());
                let normal = offset * inv_radius;

                vertices.push(Vertex {
                    position: offset + sphere.center,
                    texcoords: vec2(
                        width_index as f32 / width_count as f32,
                        height_index as f32 / height_count as f32,
                    ),
                    normal,
                    tangent: approximate_tangent(&normal),
                });
            }
        }

        let stride = width_count + 1;
        let mut indices =
            Vec::with_capacity((width_count * 6 + (height_count - 2) * width_count * 6) as usize);

        // Top cap
        for width_index in 0..width_count {
            indices.extend([width_index + 1, stride + width_index, stride + width_index + 1]);
        }

        for height_index in 1..height_count - 1 {
            let current_ring = height_index * stride;
            let next_ring = current_ring + stride;

            for width_index in 0..width_count {
                let current = current_ring + width_index;
                let next = next_ring + width_index;

                indices.extend([current, next, current + 1]);
                indices.extend([current + 1, next, next + 1]);
            }
        }

        // Bottom cap
        let current_ring = (height_count - 1) * stride;
        let next_ring = current_ring + stride;
        for width_index in 0..width_count {
            let current = current_ring + width_index;
            indices.extend([current, next_ring + width_index, current + 1]);
        }

        log::debug!(
            "Generated UV sphere: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        finish(vertices, indices, VertexAttributes::all(), mode)
    }

    /// Icosahedron inscribed in the sphere: 12 vertices and 20 faces.
    ///
    /// Subdivision is not supported yet; `subdiv_count` is ignored.
    pub fn from_icosphere(sphere: &Sphere, subdiv_count: u32, mode: RenderMode) -> Mesh {
        if subdiv_count > 0 {
            log::debug!("Icosphere subdivision is not supported, ignoring subdiv_count = {subdiv_count}");
        }

        let radius = sphere.radius;
        let golden_radius = radius * GOLDEN_RATIO;

        let directions = [
            vec3(-radius, golden_radius, 0.0),
            vec3(radius, golden_radius, 0.0),
            vec3(-radius, -golden_radius, 0.0),
            vec3(radius, -golden_radius, 0.0),
            vec3(0.0, -radius, golden_radius),
            vec3(0.0, radius, golden_radius),
            vec3(0.0, -radius, -golden_radius),
            vec3(0.0, radius, -golden_radius),
            vec3(golden_radius, 0.0, -radius),
            vec3(golden_radius, 0.0, radius),
            vec3(-golden_radius, 0.0, -radius),
            vec3(-golden_radius, 0.0, radius),
        ];

        let vertices = directions
            .iter()
            .map(|direction| {
                let normal = direction.normalize();
                Vertex {
                    position: normal * radius + sphere.center,
                    texcoords: vec2(
                        normal.x().atan2(normal.z()) / TAU + 0.5,
                        normal.y() * 0.5 + 0.5,
                    ),
                    normal,
                    tangent: approximate_tangent(&normal),
                }
            })
            .collect();

        finish(vertices, ICOSAHEDRON_INDICES.to_vec(), VertexAttributes::all(), mode)
    }
}
