use glam::Mat4;

/// Per-object transform uniform for the flat-color pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layout_is_three_matrices() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 3 * 64);
    }

    #[test]
    fn identity_round_trips() {
        let uniform = TransformUniform::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(Mat4::from_cols_array_2d(&uniform.model), Mat4::IDENTITY);
    }
}
