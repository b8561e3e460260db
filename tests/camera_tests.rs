use cubewalk::camera::{Camera, CameraMovement};
use glam::Vec3;

const EPS: f32 = 1e-5;

fn assert_orthonormal(camera: &Camera) {
    let label = format!(
        "yaw={} pitch={} roll={}",
        camera.yaw, camera.pitch, camera.roll
    );

    assert!(
        (camera.front.length() - 1.0).abs() < EPS,
        "front not unit length ({label})"
    );
    assert!(
        (camera.right.length() - 1.0).abs() < EPS,
        "right not unit length ({label})"
    );
    assert!(
        (camera.up.length() - 1.0).abs() < EPS,
        "up not unit length ({label})"
    );

    assert!(
        camera.front.dot(camera.right).abs() < EPS,
        "front/right not orthogonal ({label})"
    );
    assert!(
        camera.front.dot(camera.up).abs() < EPS,
        "front/up not orthogonal ({label})"
    );
    assert!(
        camera.right.dot(camera.up).abs() < EPS,
        "right/up not orthogonal ({label})"
    );
}

#[test]
fn basis_stays_orthonormal_across_angles() {
    for yaw_step in 0..12 {
        for pitch_step in -4..=4 {
            for roll_step in 0..8 {
                let camera = Camera::with_orientation(
                    Vec3::ZERO,
                    Vec3::Y,
                    90.0,
                    yaw_step as f32 * 30.0,
                    pitch_step as f32 * 20.0,
                    roll_step as f32 * 45.0,
                );
                assert_orthonormal(&camera);
            }
        }
    }
}

#[test]
fn basis_stays_orthonormal_through_mouse_look() {
    let mut camera = Camera::new(Vec3::ZERO);
    for step in 0..200 {
        camera.process_mouse(37.0, if step % 2 == 0 { 11.0 } else { -13.0 }, true);
        assert_orthonormal(&camera);
    }
}

#[test]
fn pitch_clamps_at_positive_limit() {
    let mut camera = Camera::new(Vec3::ZERO);
    // sensitivity 0.1, so this would be +1000 degrees unclamped
    camera.process_mouse(0.0, 10_000.0, true);
    assert_eq!(camera.pitch, 89.0);

    // Still exactly at the limit after more input
    camera.process_mouse(0.0, 500.0, true);
    assert_eq!(camera.pitch, 89.0);
}

#[test]
fn pitch_clamps_at_negative_limit() {
    let mut camera = Camera::new(Vec3::ZERO);
    camera.process_mouse(0.0, -10_000.0, true);
    assert_eq!(camera.pitch, -89.0);
}

#[test]
fn unconstrained_pitch_passes_the_limit() {
    let mut camera = Camera::new(Vec3::ZERO);
    camera.process_mouse(0.0, 1_000.0, false);
    assert!((camera.pitch - 100.0).abs() < 1e-3);
}

#[test]
fn view_matrix_maps_eye_to_origin() {
    let camera = Camera::new(Vec3::new(3.0, 2.0, 1.0));
    let eye = camera.view_matrix().transform_point3(camera.position);
    assert!(eye.length() < EPS);
}

#[test]
fn view_matrix_looks_down_negative_z_in_eye_space() {
    let camera = Camera::new(Vec3::new(3.0, 2.0, 1.0));
    let ahead = camera.position + camera.front;
    let mapped = camera.view_matrix().transform_point3(ahead);
    assert!((mapped - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
}

#[test]
fn keyboard_movement_scales_with_delta_time() {
    let mut camera = Camera::new(Vec3::ZERO);
    camera.process_keyboard(CameraMovement::Backward, 0.5);
    // speed 10, dt 0.5, backward from -Z front
    assert!((camera.position - Vec3::new(0.0, 0.0, 5.0)).length() < EPS);

    camera.process_keyboard(CameraMovement::Left, 0.25);
    assert!((camera.position - Vec3::new(-2.5, 0.0, 5.0)).length() < EPS);
}
