//! Mesh representation for renderable geometry
//!
//! Plain vertex and index data with no GPU coupling. The byte layout of
//! [`Vertex`] is what the vertex array declares to the shader, so the two
//! must be kept in sync with `opengl::vertex_layout`.

/// 2D vertex with an interpolated color
///
/// # Memory Layout
/// The `#[repr(C)]` attribute ensures consistent memory layout across
/// platforms, which is essential for GPU buffer uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub position: [f32; 2],

    /// Linear RGB color
    pub color: [f32; 3],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

/// Geometry data for one indexed draw call
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from vertex and index data
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// The demo triangle: red apex, green and blue base corners
    pub fn triangle() -> Self {
        let vertices = vec![
            Vertex::new([0.0, 0.5], [1.0, 0.0, 0.0]),
            Vertex::new([-0.5, -0.5], [0.0, 1.0, 0.0]),
            Vertex::new([0.5, -0.5], [0.0, 0.0, 1.0]),
        ];
        let indices = vec![0, 1, 2];

        Self::new(vertices, indices)
    }

    /// Number of indices to draw
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(bytemuck::offset_of!(Vertex, position), 0);
        assert_eq!(bytemuck::offset_of!(Vertex, color), 8);
    }

    #[test]
    fn test_triangle_matches_demo_geometry() {
        let mesh = Mesh::triangle();

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.index_count(), 3);

        assert_eq!(mesh.vertices[0], Vertex::new([0.0, 0.5], [1.0, 0.0, 0.0]));
        assert_eq!(mesh.vertices[1], Vertex::new([-0.5, -0.5], [0.0, 1.0, 0.0]));
        assert_eq!(mesh.vertices[2], Vertex::new([0.5, -0.5], [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_mesh_bytes_match_upload_sizes() {
        let mesh = Mesh::triangle();

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&mesh.indices);

        assert_eq!(vertex_bytes.len(), 3 * std::mem::size_of::<Vertex>());
        assert_eq!(index_bytes.len(), 3 * std::mem::size_of::<u32>());
    }
}
