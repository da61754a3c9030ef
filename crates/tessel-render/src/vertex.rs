//! Vertex data

use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use tessel_math::{Vec2f, Vec3f};

bitflags! {
    /// Vertex attributes a producer actually filled in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VertexAttributes: u8 {
        const POSITION = 0b0001;
        const TEXCOORDS = 0b0010;
        const NORMAL = 0b0100;
        const TANGENT = 0b1000;
    }
}

/// A single mesh vertex
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: Vec3f,
    pub texcoords: Vec2f,
    pub normal: Vec3f,
    pub tangent: Vec3f,
}

impl Vertex {
    /// Size of a vertex in bytes, as laid out in memory
    pub const SIZE: usize = std::mem::size_of::<Vertex>();

    /// Structural hash over every attribute.
    ///
    /// Chained in a fixed order: position, texcoords, normal, tangent.
    pub fn compute_hash(&self) -> u64 {
        let hash = self.position.hash_with_seed(0);
        let hash = self.texcoords.hash_with_seed(hash);
        let hash = self.normal.hash_with_seed(hash);
        self.tangent.hash_with_seed(hash)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.compute_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use tessel_math::{vec2, vec3};

    fn vertex() -> Vertex {
        Vertex {
            position: vec3(1.0, 2.0, 3.0),
            texcoords: vec2(0.25, 0.75),
            normal: vec3(0.0, 1.0, 0.0),
            tangent: vec3(1.0, 0.0, 0.0),
        }
    }

    fn std_hash(vertex: &Vertex) -> u64 {
        let mut hasher = DefaultHasher::new();
        vertex.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_vertices_hash_equal() {
        let a = vertex();
        let b = vertex();
        assert_eq!(a, b);
        assert_eq!(a.compute_hash(), b.compute_hash());
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let v = vertex();
        assert_eq!(v.compute_hash(), v.compute_hash());
    }

    #[test]
    fn test_hash_chain_order() {
        let v = vertex();
        let expected = v.tangent.hash_with_seed(
            v.normal
                .hash_with_seed(v.texcoords.hash_with_seed(v.position.hash_with_seed(0))),
        );
        assert_eq!(v.compute_hash(), expected);
    }

    #[test]
    fn test_hash_depends_on_every_field() {
        let base = vertex();
        let mut moved = base;
        moved.position = vec3(1.0, 2.0, 3.5);
        let mut swapped = base;
        std::mem::swap(&mut swapped.normal, &mut swapped.tangent);

        assert_ne!(base.compute_hash(), moved.compute_hash());
        assert_ne!(base.compute_hash(), swapped.compute_hash());
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        let a = Vertex::default();
        let mut b = Vertex::default();
        b.normal = vec3(-0.0, 0.0, -0.0);
        assert_eq!(a, b);
        assert_eq!(a.compute_hash(), b.compute_hash());
    }

    #[test]
    fn test_attributes() {
        let attributes = VertexAttributes::POSITION | VertexAttributes::NORMAL;
        assert!(attributes.contains(VertexAttributes::NORMAL));
        assert!(!attributes.contains(VertexAttributes::TANGENT));
        assert_eq!(VertexAttributes::default(), VertexAttributes::empty());
        assert_eq!(Vertex::SIZE, 11 * std::mem::size_of::<f32>());
    }
}
