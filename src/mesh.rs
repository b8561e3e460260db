/// CPU-side mesh data: flat vertex positions (3 floats per vertex) and
/// triangle-list indices into them. UVs and normals ride along for meshes
/// loaded from OBJ files but are not consumed by the flat-color pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub uvs: Vec<f32>,
    pub normals: Vec<f32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// A mesh with no vertices or no indices cannot be uploaded or drawn
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }
}

/// Unit cube centered at the origin, 8 shared corners, 12 triangles
pub fn cube_mesh() -> Mesh {
    Mesh {
        vertices: vec![
            -0.5, -0.5, 0.5, //
            0.5, -0.5, 0.5, //
            0.5, 0.5, 0.5, //
            -0.5, 0.5, 0.5, //
            -0.5, -0.5, -0.5, //
            0.5, -0.5, -0.5, //
            0.5, 0.5, -0.5, //
            -0.5, 0.5, -0.5,
        ],
        indices: vec![
            0, 1, 2, 2, 3, 0, // front
            4, 5, 6, 6, 7, 4, // back
            0, 3, 7, 7, 4, 0, // left
            1, 2, 6, 6, 5, 1, // right
            3, 2, 6, 6, 7, 3, // top
            0, 1, 5, 5, 4, 0, // bottom
        ],
        uvs: Vec::new(),
        normals: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_eight_corners_and_twelve_triangles() {
        let cube = cube_mesh();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.indices.len(), 36);
        assert!(!cube.is_empty());
    }

    #[test]
    fn cube_indices_stay_in_range() {
        let cube = cube_mesh();
        let count = cube.vertex_count() as u32;
        assert!(cube.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn empty_mesh_reports_empty() {
        assert!(Mesh::default().is_empty());
        // Indices without vertices are still unusable
        let mesh = Mesh {
            indices: vec![0, 1, 2],
            ..Mesh::default()
        };
        assert!(mesh.is_empty());
    }
}
