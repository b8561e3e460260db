use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Movement tuning for the player controller
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    /// Horizontal acceleration scale per input unit
    pub move_speed: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Downward acceleration, negative
    pub gravity: f32,
    /// Horizontal damping while airborne
    pub drag: f32,
    /// Horizontal damping while grounded
    pub friction: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            jump_speed: 10.0,
            gravity: -25.0,
            drag: 12.0,
            friction: 15.0,
        }
    }
}

/// Walking player with a two-state vertical machine (grounded/airborne).
///
/// Horizontal movement accumulates into a velocity that is exponentially
/// damped each frame (friction on the ground, drag in the air). Vertical
/// motion integrates gravity until the ground plane at y = 0 is reached.
/// The camera passed to [`Player::walk`] is slaved to the player position.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Facing, informational only
    pub rotation: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub config: PlayerConfig,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: true,
            config: PlayerConfig::default(),
        }
    }

    /// Integrate horizontal movement for one frame.
    ///
    /// `direction` is the planar input (x = strafe, y = forward/back),
    /// expected normalized or zero. Forward is the camera front projected
    /// onto the horizontal plane, so looking up or down does not change
    /// walking speed. The camera position is overwritten with the player
    /// position afterwards.
    pub fn walk(&mut self, direction: Vec2, camera: &mut Camera, delta_time: f32) {
        // Pitch is clamped well away from vertical, so the projection
        // of front onto the plane never degenerates.
        let forward = Vec3::new(camera.front.x, 0.0, camera.front.z).normalize();
        let right = forward.cross(camera.world_up).normalize();

        self.velocity += (forward * direction.y + right * direction.x) * self.config.move_speed;

        let damping = if self.grounded {
            self.config.friction
        } else {
            self.config.drag
        };
        let keep = 1.0 - damping * delta_time;
        self.velocity.x *= keep;
        self.velocity.z *= keep;

        self.position.x += self.velocity.x * delta_time;
        self.position.z += self.velocity.z * delta_time;

        camera.position = self.position;
    }

    /// Start a jump. No-op while airborne (no double jump).
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity.y = self.config.jump_speed;
            self.grounded = false;
        }
    }

    /// Integrate gravity for one frame and land on the ground plane.
    /// No-op while grounded.
    pub fn update_vertical(&mut self, delta_time: f32) {
        if self.grounded {
            return;
        }

        self.velocity.y += self.config.gravity * delta_time;
        self.position.y += self.velocity.y * delta_time;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = 0.0;
            self.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_grounded_at_rest() {
        let player = Player::new(Vec3::ZERO);
        assert!(player.grounded);
        assert_eq!(player.velocity, Vec3::ZERO);
    }

    #[test]
    fn jump_sets_vertical_velocity() {
        let mut player = Player::new(Vec3::ZERO);
        player.jump();
        assert!(!player.grounded);
        assert_eq!(player.velocity.y, player.config.jump_speed);
    }

    #[test]
    fn update_vertical_is_noop_on_ground() {
        let mut player = Player::new(Vec3::ZERO);
        player.update_vertical(0.016);
        assert_eq!(player.position.y, 0.0);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn walk_slaves_camera_to_player() {
        let mut player = Player::new(Vec3::new(5.0, 0.0, 5.0));
        let mut camera = Camera::new(Vec3::ZERO);
        player.walk(Vec2::ZERO, &mut camera, 0.016);
        assert_eq!(camera.position, player.position);
    }

    #[test]
    fn friction_damps_horizontal_velocity() {
        let mut player = Player::new(Vec3::ZERO);
        let mut camera = Camera::new(Vec3::ZERO);
        player.walk(Vec2::new(0.0, 1.0), &mut camera, 0.016);
        let speed_after_push = player.velocity.length();
        assert!(speed_after_push > 0.0);

        // Coasting with no input bleeds speed off
        player.walk(Vec2::ZERO, &mut camera, 0.016);
        assert!(player.velocity.length() < speed_after_push);
    }
}
