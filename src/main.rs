//! Terra - real-time planet visualizer

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::KeyCode,
    window::{Window, WindowId},
};

use terra::core::{
    camera::Camera, input::InputState, logging, orbit_controller::OrbitCameraController,
    time::FrameTimer,
};
use terra::render::{GpuContext, Renderer};
use terra::scene::{ParameterId, ParameterValue, SceneConfig, SceneState};

const CONFIG_PATH: &str = "scene.json";

/// Sun angle step per key press (radians)
const SUN_ANGLE_STEP: f32 = 0.1;

/// Atmosphere color presets cycled with C (day) and X (twilight)
const DAY_COLORS: [[f32; 3]; 3] = [
    [0.0, 170.0 / 255.0, 1.0],
    [0.2, 0.5, 1.0],
    [0.5, 0.85, 0.9],
];
const TWILIGHT_COLORS: [[f32; 3]; 3] = [
    [1.0, 102.0 / 255.0, 0.0],
    [1.0, 0.25, 0.15],
    [0.8, 0.2, 0.5],
];

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<Renderer>,
    scene: SceneState,
    camera: Camera,
    controller: OrbitCameraController,
    input: InputState,
    timer: FrameTimer,
    day_color_index: usize,
    twilight_color_index: usize,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        let camera = Camera::new(
            config.camera_position_vec(),
            glam::Vec3::ZERO,
            config.camera_fov_degrees,
            16.0 / 9.0,
        );
        let controller = OrbitCameraController::from_camera(&camera);
        let scene = SceneState::new(config);

        Self {
            window: None,
            gpu: None,
            renderer: None,
            scene,
            camera,
            controller,
            input: InputState::new(),
            timer: FrameTimer::new(),
            day_color_index: 0,
            twilight_color_index: 0,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::ArrowUp => {
                let v = self.scene.sun.angles().inclination - SUN_ANGLE_STEP;
                self.scene
                    .apply_parameter(ParameterId::SunInclination, ParameterValue::Scalar(v));
                log::info!("Sun inclination: {:.2} rad", self.scene.sun.angles().inclination);
            }
            KeyCode::ArrowDown => {
                let v = self.scene.sun.angles().inclination + SUN_ANGLE_STEP;
                self.scene
                    .apply_parameter(ParameterId::SunInclination, ParameterValue::Scalar(v));
                log::info!("Sun inclination: {:.2} rad", self.scene.sun.angles().inclination);
            }
            KeyCode::ArrowLeft => {
                let v = self.scene.sun.angles().azimuth - SUN_ANGLE_STEP;
                self.scene
                    .apply_parameter(ParameterId::SunAzimuth, ParameterValue::Scalar(v));
                log::info!("Sun azimuth: {:.2} rad", self.scene.sun.angles().azimuth);
            }
            KeyCode::ArrowRight => {
                let v = self.scene.sun.angles().azimuth + SUN_ANGLE_STEP;
                self.scene
                    .apply_parameter(ParameterId::SunAzimuth, ParameterValue::Scalar(v));
                log::info!("Sun azimuth: {:.2} rad", self.scene.sun.angles().azimuth);
            }
            KeyCode::KeyC => {
                self.day_color_index = (self.day_color_index + 1) % DAY_COLORS.len();
                let c = DAY_COLORS[self.day_color_index];
                self.scene
                    .apply_parameter(ParameterId::AtmosphereDayColor, ParameterValue::Color(c));
                log::info!("Atmosphere day color: {c:?}");
            }
            KeyCode::KeyX => {
                self.twilight_color_index = (self.twilight_color_index + 1) % TWILIGHT_COLORS.len();
                let c = TWILIGHT_COLORS[self.twilight_color_index];
                self.scene.apply_parameter(
                    ParameterId::AtmosphereTwilightColor,
                    ParameterValue::Color(c),
                );
                log::info!("Atmosphere twilight color: {c:?}");
            }
            _ => {}
        }
    }

    fn redraw(&mut self) {
        self.timer.tick();
        let dt = self.timer.delta_secs();

        self.controller.update(&mut self.camera, &self.input, dt);
        self.scene.set_elapsed(self.timer.elapsed_secs());
        self.scene.update_frame_uniforms(&self.camera);

        let mut render_err = None;
        if let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) {
            if let Err(e) = renderer.render(gpu, &self.scene, &self.camera) {
                render_err = Some(e);
            }
        }
        if let Some(e) = render_err {
            log::warn!("Frame skipped: {e}");
            // Surface loss recovers on reconfigure
            if let Some(gpu) = &mut self.gpu {
                let (w, h) = gpu.size();
                gpu.resize(w, h);
            }
        }

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "Terra - {:.0} FPS | drag=orbit, scroll=zoom, arrows=sun, C/X=colors",
                self.timer.fps()
            ));
        }

        self.input.end_frame();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Terra")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let gpu = pollster::block_on(GpuContext::new(window.clone()))
            .expect("Failed to create GPU context");

        let size = window.inner_size();
        self.camera.set_aspect(size.width as f32, size.height as f32);

        log::info!("Window created: {}x{}", size.width, size.height);
        log::info!("GPU: {}", gpu.adapter.get_info().name);

        let renderer = Renderer::new(&gpu, &self.scene);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.gpu = Some(gpu);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(size.width, size.height);
                        self.camera.set_aspect(size.width as f32, size.height as f32);
                        if let Some(renderer) = &mut self.renderer {
                            renderer.resize(gpu);
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                        if code == KeyCode::Escape {
                            event_loop.exit();
                        } else {
                            self.handle_key(code);
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    logging::init();
    log::info!("Terra starting...");

    let config = SceneConfig::load_or_default(CONFIG_PATH);
    let mut app = App::new(config);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.run_app(&mut app).expect("Event loop error");
}
