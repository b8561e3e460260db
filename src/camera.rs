use glam::{Mat3, Mat4, Vec3};

// Default camera values
pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const ROLL: f32 = 0.0;
pub const SPEED: f32 = 10.0;
pub const SENSITIVITY: f32 = 0.1;
pub const FOV: f32 = 90.0;

/// Abstract movement options, decoupled from any window-system input codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by Euler angles (yaw/pitch/roll, in degrees).
///
/// `front`, `right` and `up` are derived from the angles and recomputed on
/// every angle change; they are never set directly. Roll is applied last as a
/// bank rotation about the front axis, so the look direction stays independent
/// of banking.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub fov: f32,

    // Euler angles, degrees
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,

    pub move_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Camera at `position` with default orientation (looking down -Z)
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::Y, FOV, YAW, PITCH, ROLL)
    }

    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        fov: f32,
        yaw: f32,
        pitch: f32,
        roll: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            fov,
            yaw,
            pitch,
            roll,
            move_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
        };
        camera.update_vectors();
        camera
    }

    /// View matrix looking from `position` toward `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Displace the camera along its basis vectors (free-fly movement)
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.move_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse-look delta. Offsets are scaled by `mouse_sensitivity`;
    /// pitch is clamped to [-89, 89] degrees unless `constrain_pitch` is off.
    pub fn process_mouse(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-89.0, 89.0);
        }

        self.update_vectors();
    }

    /// Set the bank angle in degrees and rebuild the basis
    pub fn set_roll(&mut self, roll: f32) {
        self.roll = roll;
        self.update_vectors();
    }

    /// Rebuild `front`/`right`/`up` from the current Euler angles
    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        let right = self.front.cross(self.world_up).normalize();
        let up = right.cross(self.front).normalize();

        // Bank the right/up pair about the front axis
        let roll = Mat3::from_axis_angle(self.front, self.roll.to_radians());
        self.right = roll * right;
        self.up = roll * up;
    }
}
