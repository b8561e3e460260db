use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use cubewalk::camera::{Camera, CameraMovement};
use cubewalk::cli::Cli;
use cubewalk::core::{Button, Controller, WinitController};
use cubewalk::mesh::cube_mesh;
use cubewalk::object::SceneObject;
use cubewalk::player::Player;
use cubewalk::renderer::Renderer;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_UPDATE_INTERVAL: f32 = 1.0;
/// Degrees per second on every axis, matches the original spinning cube
const CUBE_SPIN_RATE: f32 = 50.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    player: Player,
    objects: Vec<SceneObject>,
    input: WinitController,
    last_frame_time: Instant,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let start = Vec3::new(0.0, 0.0, 3.0);
        Self {
            cli,
            window: None,
            renderer: None,
            camera: Camera::new(start),
            player: Player::new(start),
            objects: Vec::new(),
            input: WinitController::new(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn build_scene(&mut self, renderer: &Renderer) {
        let mut objects = vec![SceneObject::new(
            cube_mesh(),
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ONE,
        )];

        if let Some(path) = &self.cli.mesh {
            match SceneObject::from_obj_file(path, Vec3::new(2.5, 0.0, 0.0), Vec3::ZERO, Vec3::ONE)
            {
                Ok(object) => objects.push(object),
                Err(e) => log::error!("{e:#}"),
            }
        }

        for object in &mut objects {
            // A failed upload leaves the object in the scene but not drawable
            if let Err(e) = object.init_gpu(renderer) {
                log::error!("object initialization failed: {e:#}");
            }
        }

        self.objects = objects;
    }

    fn update(&mut self, delta: f32) {
        let (dx, dy) = self.input.take_mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            // Screen y grows downward, pitch grows looking up
            self.camera.process_mouse(dx, -dy, true);
        }

        if self.cli.fly {
            if self.input.is_down(Button::KeyW) {
                self.camera.process_keyboard(CameraMovement::Forward, delta);
            }
            if self.input.is_down(Button::KeyS) {
                self.camera.process_keyboard(CameraMovement::Backward, delta);
            }
            if self.input.is_down(Button::KeyA) {
                self.camera.process_keyboard(CameraMovement::Left, delta);
            }
            if self.input.is_down(Button::KeyD) {
                self.camera.process_keyboard(CameraMovement::Right, delta);
            }
        } else {
            if self.input.take_just_pressed(Button::Space) {
                self.player.jump();
            }
            // Vertical state lands before the horizontal move is consumed
            self.player.update_vertical(delta);
            let direction = self.input.walk_direction();
            self.player.walk(direction, &mut self.camera, delta);
        }
        self.input.end_frame();

        // Spin the cube
        if let Some(cube) = self.objects.first_mut() {
            cube.rotation += Vec3::splat(1.0) * CUBE_SPIN_RATE * delta;
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::info!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("cubewalk")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            // Capture the mouse for look input
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            self.build_scene(&renderer);
            self.window = Some(window);
            self.renderer = Some(renderer);
            self.last_frame_time = Instant::now();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::KeyboardInput { .. } => self.input.process_window_event(&event),
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);
                self.update(delta);

                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.camera, &self.objects) {
                        log::error!("render error: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    println!("cubewalk - WASD to move, mouse to look, Space to jump, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
