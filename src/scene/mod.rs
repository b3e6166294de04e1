//! Scene state and parameter dispatch.
//!
//! [`SceneState`] is the explicit context object holding everything the
//! render loop and the parameter controls touch: the sun model, the two
//! uniform structs (planet surface and atmosphere shell), the starfield,
//! and the planet rotation. It is constructed once and passed by reference;
//! there is no global state.

pub mod config;
pub mod params;
pub mod uniforms;

pub use config::SceneConfig;
pub use params::{ParameterId, ParameterValue};
pub use uniforms::{GlobeUniforms, MarkerUniforms, StarUniforms};

use glam::Mat4;

use crate::core::camera::Camera;
use crate::starfield::StarfieldPoints;
use crate::sun::{SphericalAngles, SunModel};

/// CPU-side scene state, independent of any GPU resources.
pub struct SceneState {
    pub config: SceneConfig,
    pub sun: SunModel,
    pub planet_uniforms: GlobeUniforms,
    pub atmosphere_uniforms: GlobeUniforms,
    pub stars: StarfieldPoints,
    /// Planet rotation angle around the polar axis (radians)
    pub rotation_angle: f32,
}

impl SceneState {
    /// Build the scene: sun angles from the startup hour, starfield
    /// generated once, colors seeded from the config into both uniform
    /// copies.
    pub fn new(config: SceneConfig) -> Self {
        let hour = config.startup_hour();
        let sun = SunModel::new(SphericalAngles::for_hour(hour));
        log::info!(
            "Sun initialized for hour {hour}: azimuth {:.2} rad",
            sun.angles().azimuth
        );

        let mut rng = rand::thread_rng();
        let stars = StarfieldPoints::generate(&mut rng, config.star_count, config.star_spread);

        let mut scene = Self {
            sun,
            planet_uniforms: GlobeUniforms::default(),
            atmosphere_uniforms: GlobeUniforms::default(),
            stars,
            rotation_angle: 0.0,
            config,
        };
        scene.apply_parameter(
            ParameterId::AtmosphereDayColor,
            ParameterValue::Color(scene.config.atmosphere_day_color),
        );
        scene.apply_parameter(
            ParameterId::AtmosphereTwilightColor,
            ParameterValue::Color(scene.config.atmosphere_twilight_color),
        );
        scene.push_sun_direction();
        scene
    }

    /// Apply a parameter change, fanning out to every uniform copy that
    /// reads it. Scalars are clamped to the parameter's valid range here.
    pub fn apply_parameter(&mut self, id: ParameterId, value: ParameterValue) {
        match (id, value) {
            (ParameterId::AtmosphereDayColor, ParameterValue::Color(c)) => {
                self.planet_uniforms.atmosphere_day_color = c;
                self.atmosphere_uniforms.atmosphere_day_color = c;
            }
            (ParameterId::AtmosphereTwilightColor, ParameterValue::Color(c)) => {
                self.planet_uniforms.atmosphere_twilight_color = c;
                self.atmosphere_uniforms.atmosphere_twilight_color = c;
            }
            (ParameterId::SunInclination, ParameterValue::Scalar(v)) => {
                self.sun.set_inclination(id.clamp_scalar(v));
                self.push_sun_direction();
            }
            (ParameterId::SunAzimuth, ParameterValue::Scalar(v)) => {
                self.sun.set_azimuth(id.clamp_scalar(v));
                self.push_sun_direction();
            }
            (id, value) => {
                log::warn!("Ignoring mismatched parameter update: {id:?} = {value:?}");
            }
        }
    }

    /// Advance the planet rotation from total elapsed time.
    pub fn set_elapsed(&mut self, elapsed_secs: f32) {
        self.rotation_angle = elapsed_secs * self.config.rotation_rate;
    }

    /// Refresh the per-frame transform and camera fields of every uniform
    /// struct. Called once per frame before uploading.
    pub fn update_frame_uniforms(&mut self, camera: &Camera) {
        let view_proj = camera.view_projection().to_cols_array_2d();
        let camera_position = camera.position.to_array();

        let planet_model = Mat4::from_rotation_y(self.rotation_angle)
            * Mat4::from_scale(glam::Vec3::splat(self.config.planet_radius));
        self.planet_uniforms.view_proj = view_proj;
        self.planet_uniforms.model = planet_model.to_cols_array_2d();
        self.planet_uniforms.camera_position = camera_position;

        let shell_radius = self.config.planet_radius * self.config.atmosphere_scale;
        let atmosphere_model = Mat4::from_scale(glam::Vec3::splat(shell_radius));
        self.atmosphere_uniforms.view_proj = view_proj;
        self.atmosphere_uniforms.model = atmosphere_model.to_cols_array_2d();
        self.atmosphere_uniforms.camera_position = camera_position;
    }

    /// Star pass uniforms for the current camera.
    pub fn star_uniforms(&self, camera: &Camera) -> StarUniforms {
        let view = camera.view_matrix();
        // Rows of the rotation part are the camera basis in world space
        let right = glam::Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = glam::Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        StarUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_right: right.to_array(),
            star_size: self.config.star_size,
            camera_up: up.to_array(),
            _pad0: 0.0,
        }
    }

    /// Sun marker uniforms: a small sphere placed along the sun direction.
    pub fn marker_uniforms(&self, camera: &Camera) -> MarkerUniforms {
        let model = Mat4::from_translation(self.sun.marker_position())
            * Mat4::from_scale(glam::Vec3::splat(0.1));
        MarkerUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
        }
    }

    fn push_sun_direction(&mut self) {
        let dir = self.sun.direction().to_array();
        self.planet_uniforms.sun_direction = dir;
        self.atmosphere_uniforms.sun_direction = dir;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> SceneState {
        SceneState::new(SceneConfig {
            start_hour: Some(9),
            ..Default::default()
        })
    }

    #[test]
    fn test_color_change_updates_both_materials() {
        let mut scene = test_scene();
        let new_color = [0.1, 0.2, 0.9];

        scene.apply_parameter(
            ParameterId::AtmosphereDayColor,
            ParameterValue::Color(new_color),
        );

        assert_eq!(scene.planet_uniforms.atmosphere_day_color, new_color);
        assert_eq!(scene.atmosphere_uniforms.atmosphere_day_color, new_color);

        scene.apply_parameter(
            ParameterId::AtmosphereTwilightColor,
            ParameterValue::Color(new_color),
        );
        assert_eq!(scene.planet_uniforms.atmosphere_twilight_color, new_color);
        assert_eq!(scene.atmosphere_uniforms.atmosphere_twilight_color, new_color);
    }

    #[test]
    fn test_sun_angle_change_updates_both_materials() {
        let mut scene = test_scene();
        let before = scene.planet_uniforms.sun_direction;

        scene.apply_parameter(ParameterId::SunAzimuth, ParameterValue::Scalar(-0.8));

        let planet = scene.planet_uniforms.sun_direction;
        let shell = scene.atmosphere_uniforms.sun_direction;
        assert_eq!(planet, shell, "sun direction desynced between materials");
        assert_ne!(planet, before, "sun direction did not change");
    }

    #[test]
    fn test_out_of_range_scalar_is_clamped() {
        let mut scene = test_scene();
        scene.apply_parameter(ParameterId::SunInclination, ParameterValue::Scalar(10.0));
        assert!((scene.sun.angles().inclination - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_follows_elapsed_time() {
        let mut scene = test_scene();
        scene.set_elapsed(10.0);
        assert!((scene.rotation_angle - 1.0).abs() < 1e-6); // 10 s * 0.1 rad/s
    }

    #[test]
    fn test_startup_hour_buckets_feed_sun() {
        let scene = SceneState::new(SceneConfig {
            start_hour: Some(23),
            ..Default::default()
        });
        let expected = std::f32::consts::TAU * 0.75;
        assert!((scene.sun.angles().azimuth - expected).abs() < 1e-6);
    }

    #[test]
    fn test_starfield_respects_config_count() {
        let scene = SceneState::new(SceneConfig {
            start_hour: Some(9),
            star_count: 250,
            ..Default::default()
        });
        assert_eq!(scene.stars.len(), 250);
    }

    #[test]
    fn test_mismatched_value_is_ignored() {
        let mut scene = test_scene();
        let before = scene.planet_uniforms.atmosphere_day_color;
        scene.apply_parameter(ParameterId::AtmosphereDayColor, ParameterValue::Scalar(1.0));
        assert_eq!(scene.planet_uniforms.atmosphere_day_color, before);
    }
}
