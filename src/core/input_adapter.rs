use glam::Vec2;
use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges winit events to the [`Controller`] trait and
/// accumulates raw mouse-look deltas between frames.
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    pressed: HashSet<Button>,
    /// Buttons that went down since the last frame (edge triggers)
    just_pressed: HashSet<Button>,
    /// Accumulated mouse motion since the last take
    mouse_delta: (f32, f32),
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update key state from a window event
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    match event.state {
                        ElementState::Pressed => {
                            if self.pressed.insert(button) {
                                self.just_pressed.insert(button);
                            }
                        }
                        ElementState::Released => {
                            self.pressed.remove(&button);
                        }
                    }
                }
            }
        }
    }

    /// Accumulate raw mouse motion. Device events keep working while the
    /// cursor is grabbed, unlike window-space cursor positions.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_delta.0 += delta.0 as f32;
            self.mouse_delta.1 += delta.1 as f32;
        }
    }

    /// Mouse delta accumulated since the last call, then reset
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// True once per physical key press (no key-repeat retriggers)
    pub fn take_just_pressed(&mut self, button: Button) -> bool {
        self.just_pressed.remove(&button)
    }

    /// Clear edge triggers not consumed this frame
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Planar movement input from WASD: x = strafe, y = forward/back.
    /// Normalized so diagonals are not faster.
    pub fn walk_direction(&self) -> Vec2 {
        let forward = self.is_down(Button::KeyW) as i32 - self.is_down(Button::KeyS) as i32;
        let strafe = self.is_down(Button::KeyD) as i32 - self.is_down(Button::KeyA) as i32;

        let direction = Vec2::new(strafe as f32, forward as f32);
        if direction == Vec2::ZERO {
            direction
        } else {
            direction.normalize()
        }
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            // Escape is handled by the event loop directly, not polled
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}
