use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::loaders::obj;
use crate::mesh::Mesh;
use crate::renderer::{GpuMesh, Renderer};

/// A drawable object: position/rotation/scale plus the mesh it owns.
///
/// GPU-side buffers are held in an optional [`GpuMesh`] handle allocated via
/// [`SceneObject::init_gpu`]; the handle releases its buffers when dropped,
/// so every exit path cleans up exactly once.
#[derive(Debug)]
pub struct SceneObject {
    pub position: Vec3,
    /// Euler degrees, applied X then Y then Z
    pub rotation: Vec3,
    pub scale: Vec3,
    pub mesh: Mesh,
    gpu: Option<GpuMesh>,
}

impl SceneObject {
    pub fn new(mesh: Mesh, position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
            mesh,
            gpu: None,
        }
    }

    /// Builds an object from an OBJ file. The loader output is unindexed, so
    /// the index buffer is the trivial sequence 0..n.
    pub fn from_obj_file(
        path: impl AsRef<Path>,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Result<Self> {
        let data = obj::load_obj(&path)
            .with_context(|| format!("failed to load mesh {}", path.as_ref().display()))?;

        let mesh = Mesh {
            indices: (0..data.vertex_count() as u32).collect(),
            vertices: data.positions,
            uvs: data.uvs,
            normals: data.normals,
        };

        Ok(Self::new(mesh, position, rotation, scale))
    }

    /// World transform: Translate * RotX * RotY * RotZ * Scale.
    /// The order is fixed; reordering changes the visual result.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_scale(self.scale)
    }

    /// Uploads the mesh to the GPU. Fails without allocating anything if the
    /// mesh has no vertices or no indices; the object stays not-drawable.
    pub fn init_gpu(&mut self, renderer: &Renderer) -> Result<()> {
        let gpu = renderer.upload_mesh(&self.mesh)?;
        self.gpu = Some(gpu);
        Ok(())
    }

    /// Drops the GPU buffers if any were allocated. Safe to call repeatedly.
    pub fn release_gpu(&mut self) {
        self.gpu = None;
    }

    pub fn gpu(&self) -> Option<&GpuMesh> {
        self.gpu.as_ref()
    }

    pub fn is_drawable(&self) -> bool {
        self.gpu.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::cube_mesh;
    use glam::Vec4;

    #[test]
    fn identity_transform_for_defaults() {
        let object = SceneObject::new(cube_mesh(), Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
        let matrix = object.model_matrix();
        let point = Vec4::new(0.5, -0.5, 0.5, 1.0);
        assert!((matrix * point - point).length() < 1e-6);
    }

    #[test]
    fn translation_applies_after_scale() {
        let object = SceneObject::new(
            cube_mesh(),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::ZERO,
            Vec3::splat(2.0),
        );
        let mapped = object.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((mapped - Vec4::new(2.0, 3.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn fresh_object_is_not_drawable() {
        let mut object = SceneObject::new(cube_mesh(), Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
        assert!(!object.is_drawable());
        // Releasing before any allocation is a no-op
        object.release_gpu();
        assert!(!object.is_drawable());
    }
}
