//! Orbit camera controller

use crate::core::camera::Camera;
use crate::core::input::InputState;
use crate::core::types::Vec3;

/// Damped orbit controller: pointer drag rotates around the target,
/// scroll zooms. Velocities decay exponentially so motion eases out
/// after input stops.
pub struct OrbitCameraController {
    /// Drag sensitivity (radians per pixel)
    pub sensitivity: f32,
    /// Zoom speed (fraction of distance per scroll notch)
    pub zoom_speed: f32,
    /// Velocity decay rate (per second)
    pub damping: f32,
    /// Minimum orbit distance
    pub min_distance: f32,
    /// Maximum orbit distance
    pub max_distance: f32,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

/// Keep the camera off the exact poles so the up vector stays valid
const PITCH_LIMIT: f32 = 1.55;

impl OrbitCameraController {
    /// Create a controller matching the camera's current position
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(0.001);
        let pitch = (offset.y / distance).asin();
        let yaw = offset.x.atan2(offset.z);
        Self {
            sensitivity: 0.005,
            zoom_speed: 0.1,
            damping: 6.0,
            min_distance: 3.0,
            max_distance: 40.0,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }

    /// Accumulate input and move the camera along its damped orbit
    pub fn update(&mut self, camera: &mut Camera, input: &InputState, dt: f32) {
        if input.is_dragging() {
            let (dx, dy) = input.pointer_delta();
            self.yaw_velocity -= dx * self.sensitivity;
            self.pitch_velocity += dy * self.sensitivity;
        }
        self.zoom_velocity -= input.scroll_delta() * self.zoom_speed;

        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance =
            (self.distance * (1.0 + self.zoom_velocity)).clamp(self.min_distance, self.max_distance);

        // Exponential ease-out
        let decay = (-self.damping * dt).exp();
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;

        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        camera.position = camera.target + offset;
    }

    /// Current orbit distance
    pub fn distance(&self) -> f32 {
        self.distance
    }
}
