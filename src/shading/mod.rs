//! Per-pixel shading math for the planet surface and atmosphere shell.
//!
//! This module is the source of truth for the shading formulas and their
//! constants; the WGSL in `shaders/` mirrors it term for term. Keeping the
//! math on the CPU side as well makes the blending rules directly testable.
//!
//! Conventions: normals are unit world-space vectors, the view direction
//! points from the camera toward the surface, and `sun_orientation` is
//! `dot(normal, sun_direction)` in `[-1, 1]` (+1 subsolar, -1 antisolar,
//! 0 on the terminator).

pub mod atmosphere;
pub mod surface;

/// Day/night blend band around the terminator. Inside this band the surface
/// fades from night texture to day texture.
pub const DAY_NIGHT_BAND: (f32, f32) = (-0.25, 0.5);

/// Band over which the atmosphere color fades from twilight to day. Shared
/// by the surface tint and the atmosphere shell so they stay in step.
pub const ATMOSPHERE_COLOR_BAND: (f32, f32) = (-0.5, 1.0);

/// Band over which the atmosphere glow fades out on the night side.
pub const NIGHT_FADE_BAND: (f32, f32) = (-0.5, 0.0);

/// Hermite smoothstep, clamped outside `[edge0, edge1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_endpoints() {
        assert_eq!(smoothstep(-0.25, 0.5, -1.0), 0.0);
        assert_eq!(smoothstep(-0.25, 0.5, -0.25), 0.0);
        assert_eq!(smoothstep(-0.25, 0.5, 0.5), 1.0);
        assert_eq!(smoothstep(-0.25, 0.5, 1.0), 1.0);
        let mid = smoothstep(0.0, 1.0, 0.5);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let x = -1.0 + 2.0 * i as f32 / 100.0;
            let v = smoothstep(-0.25, 0.5, x);
            assert!(v >= prev - 1e-6, "not monotonic at x={x}");
            prev = v;
        }
    }
}
