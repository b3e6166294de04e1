//! Scene configuration

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;

/// Full scene configuration, loadable from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Planet radius in world units
    pub planet_radius: f32,
    /// Sphere tessellation (segments around and rings top to bottom)
    pub sphere_segments: u32,
    /// Atmosphere shell scale relative to the planet radius
    pub atmosphere_scale: f32,
    /// Planet rotation rate around the polar axis (radians per second)
    pub rotation_rate: f32,

    /// Number of stars
    pub star_count: usize,
    /// Star box extents (X, Y, Z)
    pub star_spread: [f32; 3],
    /// Star sprite size in world units
    pub star_size: f32,

    /// Initial camera position
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees
    pub camera_fov_degrees: f32,

    /// Atmosphere color on the day side
    pub atmosphere_day_color: [f32; 3],
    /// Atmosphere color near the terminator
    pub atmosphere_twilight_color: [f32; 3],

    /// Override the startup hour (0-23); `None` uses the local clock
    pub start_hour: Option<u32>,

    /// Texture paths, relative to the working directory
    pub day_texture: String,
    pub night_texture: String,
    pub specular_clouds_texture: String,
    pub star_sprite: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            planet_radius: 2.0,
            sphere_segments: 64,
            atmosphere_scale: 1.04,
            rotation_rate: 0.1,
            star_count: crate::starfield::STAR_COUNT,
            star_spread: crate::starfield::SPREAD,
            star_size: 0.7,
            camera_position: [12.0, 5.0, 4.0],
            camera_fov_degrees: 25.0,
            // #00aaff
            atmosphere_day_color: [0.0, 170.0 / 255.0, 1.0],
            // #ff6600
            atmosphere_twilight_color: [1.0, 102.0 / 255.0, 0.0],
            start_hour: None,
            day_texture: "assets/earth/day.jpg".to_string(),
            night_texture: "assets/earth/night.jpg".to_string(),
            specular_clouds_texture: "assets/earth/specular_clouds.jpg".to_string(),
            star_sprite: "assets/particles/star.png".to_string(),
        }
    }
}

impl SceneConfig {
    /// Load from a JSON file, falling back to defaults if the file is
    /// missing or malformed (a warning is logged; startup never fails on
    /// config problems).
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => {
                    log::info!("Loaded scene config from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// The hour the sun angles are derived from: the configured override,
    /// or the local wall clock.
    pub fn startup_hour(&self) -> u32 {
        self.start_hour.unwrap_or_else(|| {
            use chrono::Timelike;
            chrono::Local::now().hour()
        })
    }

    /// Initial camera position as a vector
    pub fn camera_position_vec(&self) -> Vec3 {
        Vec3::from_array(self.camera_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors_match_hex() {
        let config = SceneConfig::default();
        // #00aaff
        assert_eq!(config.atmosphere_day_color[0], 0.0);
        assert!((config.atmosphere_day_color[1] - 0.6667).abs() < 1e-3);
        assert_eq!(config.atmosphere_day_color[2], 1.0);
        // #ff6600
        assert_eq!(config.atmosphere_twilight_color[0], 1.0);
        assert!((config.atmosphere_twilight_color[1] - 0.4).abs() < 1e-3);
        assert_eq!(config.atmosphere_twilight_color[2], 0.0);
    }

    #[test]
    fn test_roundtrip_json() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sphere_segments, config.sphere_segments);
        assert_eq!(back.atmosphere_day_color, config.atmosphere_day_color);
    }

    #[test]
    fn test_start_hour_override() {
        let config = SceneConfig {
            start_hour: Some(21),
            ..Default::default()
        };
        assert_eq!(config.startup_hour(), 21);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = SceneConfig::load_or_default("definitely/not/a/file.json");
        assert_eq!(config.planet_radius, 2.0);
    }
}
