use cubewalk::mesh::cube_mesh;
use cubewalk::object::SceneObject;
use glam::{Mat4, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn assert_mat4_eq(actual: Mat4, expected: Mat4) {
    let a = actual.to_cols_array();
    let e = expected.to_cols_array();
    for (i, (x, y)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            (x - y).abs() < EPS,
            "matrix element {} differs: {} vs {}",
            i,
            x,
            y
        );
    }
}

#[test]
fn model_matrix_matches_hand_computed_reference() {
    let object = SceneObject::new(
        cube_mesh(),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 90.0, 0.0),
        Vec3::new(2.0, 1.0, 1.0),
    );

    // Translate(1,0,0) * RotY(90deg) * Scale(2,1,1), column-major:
    // local +X maps to world -Z (doubled), local +Z maps to world +X.
    let expected = Mat4::from_cols(
        Vec4::new(0.0, 0.0, -2.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(1.0, 0.0, 0.0, 1.0),
    );

    assert_mat4_eq(object.model_matrix(), expected);

    // Local point (1,0,0): scale -> (2,0,0), rotate -> (0,0,-2), translate -> (1,0,-2)
    let world = object.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!((world - Vec4::new(1.0, 0.0, -2.0, 1.0)).length() < EPS);
}

#[test]
fn composition_order_is_translate_rotate_scale() {
    let object = SceneObject::new(
        cube_mesh(),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(30.0, 60.0, 90.0),
        Vec3::new(2.0, 3.0, 4.0),
    );

    let explicit = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
        * Mat4::from_rotation_x(30.0f32.to_radians())
        * Mat4::from_rotation_y(60.0f32.to_radians())
        * Mat4::from_rotation_z(90.0f32.to_radians())
        * Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));

    assert_mat4_eq(object.model_matrix(), explicit);
}

#[test]
fn rotations_apply_x_then_y_then_z() {
    // With X=90 and Z=90 the result differs from Z-then-X, so a wrong order
    // fails this check.
    let object = SceneObject::new(
        cube_mesh(),
        Vec3::ZERO,
        Vec3::new(90.0, 0.0, 90.0),
        Vec3::ONE,
    );

    // RotX(90) * RotZ(90): +X -> RotZ -> +Y -> RotX -> +Z
    let world = object.model_matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!((world - Vec4::new(0.0, 0.0, 1.0, 1.0)).length() < EPS);
}

#[test]
fn default_transform_is_identity() {
    let object = SceneObject::new(cube_mesh(), Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
    assert_mat4_eq(object.model_matrix(), Mat4::IDENTITY);
}
