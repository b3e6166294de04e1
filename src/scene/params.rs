//! Tweakable parameter identities.
//!
//! Every runtime-adjustable value has an id here; all changes flow through
//! [`crate::scene::SceneState::apply_parameter`], which is the single place
//! that knows which uniform copies a parameter fans out to. This keeps the
//! "both materials update together" rule in one spot instead of per-control
//! callbacks.

use std::f32::consts::PI;

/// Identity of a tweakable parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterId {
    AtmosphereDayColor,
    AtmosphereTwilightColor,
    SunInclination,
    SunAzimuth,
}

/// New value for a parameter
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParameterValue {
    Color([f32; 3]),
    Scalar(f32),
}

impl ParameterId {
    /// Clamp a scalar into this parameter's valid range. The sun model
    /// itself performs no validation, so clamping happens here, at the
    /// panel boundary.
    pub fn clamp_scalar(&self, value: f32) -> f32 {
        match self {
            ParameterId::SunInclination => value.clamp(0.0, PI),
            ParameterId::SunAzimuth => value.clamp(-PI, PI),
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping_ranges() {
        assert_eq!(ParameterId::SunInclination.clamp_scalar(-1.0), 0.0);
        assert_eq!(ParameterId::SunInclination.clamp_scalar(4.0), PI);
        assert_eq!(ParameterId::SunAzimuth.clamp_scalar(-4.0), -PI);
        assert_eq!(ParameterId::SunAzimuth.clamp_scalar(4.0), PI);
        assert_eq!(ParameterId::SunAzimuth.clamp_scalar(0.5), 0.5);
    }
}
