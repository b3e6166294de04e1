//! Sun direction model.
//!
//! Converts spherical angles into the unit direction vector that lights the
//! planet, and derives the startup azimuth from the local hour of day.

use crate::core::types::Vec3;

/// Distance of the debug sun marker from the origin, in world units.
pub const MARKER_DISTANCE: f32 = 5.0;

/// Sun position in spherical coordinates relative to the planet.
///
/// `inclination` is measured from the +Y polar axis in `[0, PI]`;
/// `azimuth` is measured in the XZ equatorial plane in `[-PI, PI]`.
/// Callers clamp before handing values to this module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalAngles {
    pub inclination: f32,
    pub azimuth: f32,
}

impl SphericalAngles {
    /// Angles for the startup sun: equatorial inclination, hour-derived azimuth.
    pub fn for_hour(hour: u32) -> Self {
        Self {
            inclination: std::f32::consts::FRAC_PI_2,
            azimuth: azimuth_for_hour(hour),
        }
    }
}

/// Startup azimuth from the local hour, as a coarse three-bucket rule:
/// morning light before noon, afternoon light until 20:00, then
/// evening/night-side light. A style choice, not an ephemeris.
pub fn azimuth_for_hour(hour: u32) -> f32 {
    if hour < 12 {
        0.5
    } else if hour < 20 {
        -0.8
    } else {
        std::f32::consts::TAU * 0.75
    }
}

/// Convert spherical angles to a unit direction vector.
///
/// Y-up convention: `x = sin(phi) sin(theta), y = cos(phi), z = sin(phi) cos(theta)`.
pub fn direction_from_angles(angles: SphericalAngles) -> Vec3 {
    let (sin_phi, cos_phi) = angles.inclination.sin_cos();
    let (sin_theta, cos_theta) = angles.azimuth.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta).normalize()
}

/// Owns the sun angles and the cached direction derived from them.
///
/// Both shading models read [`direction`](Self::direction) every frame;
/// the debug marker reads [`marker_position`](Self::marker_position).
/// Updating either angle recomputes both synchronously.
pub struct SunModel {
    angles: SphericalAngles,
    direction: Vec3,
}

impl SunModel {
    /// Create a model from initial angles
    pub fn new(angles: SphericalAngles) -> Self {
        Self {
            angles,
            direction: direction_from_angles(angles),
        }
    }

    /// Create a model lit for the given local hour
    pub fn for_hour(hour: u32) -> Self {
        Self::new(SphericalAngles::for_hour(hour))
    }

    /// Current angles
    #[inline]
    pub fn angles(&self) -> SphericalAngles {
        self.angles
    }

    /// Current unit sun direction
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Debug marker position along the sun direction
    #[inline]
    pub fn marker_position(&self) -> Vec3 {
        self.direction * MARKER_DISTANCE
    }

    /// Set the inclination and recompute the direction
    pub fn set_inclination(&mut self, inclination: f32) {
        self.angles.inclination = inclination;
        self.direction = direction_from_angles(self.angles);
    }

    /// Set the azimuth and recompute the direction
    pub fn set_azimuth(&mut self, azimuth: f32) {
        self.angles.azimuth = azimuth;
        self.direction = direction_from_angles(self.angles);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_direction_is_unit_length() {
        // Sweep the full valid angle ranges
        for i in 0..=16 {
            let inclination = PI * i as f32 / 16.0;
            for j in 0..=16 {
                let azimuth = -PI + TAU * j as f32 / 16.0;
                let dir = direction_from_angles(SphericalAngles { inclination, azimuth });
                assert!(
                    (dir.length() - 1.0).abs() < 1e-5,
                    "non-unit direction {dir:?} at phi={inclination} theta={azimuth}"
                );
            }
        }
    }

    #[test]
    fn test_hour_buckets() {
        assert_eq!(azimuth_for_hour(0), 0.5);
        assert_eq!(azimuth_for_hour(11), 0.5);
        assert_eq!(azimuth_for_hour(12), -0.8);
        assert_eq!(azimuth_for_hour(19), -0.8);
        assert_eq!(azimuth_for_hour(20), TAU * 0.75);
        assert_eq!(azimuth_for_hour(23), TAU * 0.75);
    }

    #[test]
    fn test_for_hour_inclination_is_equatorial() {
        for hour in [0, 11, 12, 19, 20, 23] {
            let angles = SphericalAngles::for_hour(hour);
            assert_eq!(angles.inclination, FRAC_PI_2, "hour {hour}");
        }
    }

    #[test]
    fn test_poles() {
        // Inclination 0 points along +Y, PI along -Y, regardless of azimuth
        for azimuth in [-PI, -0.8, 0.0, 0.5, PI] {
            let up = direction_from_angles(SphericalAngles { inclination: 0.0, azimuth });
            assert!((up - Vec3::Y).length() < 1e-6, "expected +Y, got {up:?}");
            let down = direction_from_angles(SphericalAngles { inclination: PI, azimuth });
            assert!((down + Vec3::Y).length() < 1e-5, "expected -Y, got {down:?}");
        }
    }

    #[test]
    fn test_equatorial_azimuth_zero_is_plus_z() {
        let dir = direction_from_angles(SphericalAngles {
            inclination: FRAC_PI_2,
            azimuth: 0.0,
        });
        assert!((dir - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_setters_recompute_direction_and_marker() {
        let mut sun = SunModel::for_hour(8);
        let before = sun.direction();

        sun.set_azimuth(-0.8);
        let after = sun.direction();
        assert!((after - before).length() > 1e-3, "direction did not change");
        assert!((after.length() - 1.0).abs() < 1e-5);
        assert!((sun.marker_position() - after * MARKER_DISTANCE).length() < 1e-6);

        sun.set_inclination(0.3);
        assert!((sun.direction().length() - 1.0).abs() < 1e-5);
        assert!(
            (sun.marker_position().length() - MARKER_DISTANCE).abs() < 1e-4,
            "marker must sit at fixed distance"
        );
    }
}
