//! Atmosphere shell shading.
//!
//! The glow shell is the planet sphere scaled up slightly and rendered
//! inside-out; color comes from the sun angle, alpha from a Fresnel-like
//! edge factor attenuated on the night side. Mirrored by
//! `shaders/atmosphere.wgsl`.

use crate::core::types::Vec3;
use crate::shading::{smoothstep, NIGHT_FADE_BAND};

use super::surface::atmosphere_color;

/// Edge band: the glow only appears in the most grazing part of the view
/// range, producing a thin rim around the silhouette.
pub const EDGE_BAND: (f32, f32) = (0.5, 1.0);

/// Fresnel-like edge factor: 0 when the surface faces the camera head-on,
/// 1 at the silhouette. `view` points from the camera toward the surface.
#[inline]
pub fn edge_factor(view: Vec3, normal: Vec3) -> f32 {
    let grazing = 1.0 - view.dot(normal).abs();
    smoothstep(EDGE_BAND.0, EDGE_BAND.1, grazing)
}

/// Night attenuation: 1 on the day side, fading to 0 once the surface is
/// well past the terminator so the dark hemisphere shows no halo.
#[inline]
pub fn night_fade(sun_orientation: f32) -> f32 {
    smoothstep(NIGHT_FADE_BAND.0, NIGHT_FADE_BAND.1, sun_orientation)
}

/// Full per-pixel atmosphere shading: RGB from the sun-angle color blend,
/// alpha from edge factor times night attenuation.
pub fn shade(
    normal: Vec3,
    view: Vec3,
    sun_direction: Vec3,
    atmosphere_day: Vec3,
    atmosphere_twilight: Vec3,
) -> (Vec3, f32) {
    let sun_orientation = normal.dot(sun_direction);
    let color = atmosphere_color(atmosphere_day, atmosphere_twilight, sun_orientation);
    let alpha = edge_factor(view, normal) * night_fade(sun_orientation);
    (color, alpha)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Vec3 = Vec3::new(0.0, 0.67, 1.0);
    const TWILIGHT: Vec3 = Vec3::new(1.0, 0.4, 0.0);

    #[test]
    fn test_rim_brighter_than_center_on_day_side() {
        let sun = Vec3::Z;
        let normal = Vec3::Z; // subsolar, fully day-lit

        // Head-on view
        let (_, center_alpha) = shade(normal, -normal, sun, DAY, TWILIGHT);
        // Grazing view, perpendicular to the normal
        let (_, rim_alpha) = shade(normal, Vec3::X, sun, DAY, TWILIGHT);

        assert!(
            rim_alpha > center_alpha,
            "rim alpha {rim_alpha} not above center alpha {center_alpha}"
        );
        assert!(rim_alpha > 0.9);
        assert!(center_alpha < 0.1);
    }

    #[test]
    fn test_dark_hemisphere_has_no_glow() {
        let sun = Vec3::Z;
        for i in 0..64 {
            let a = std::f32::consts::TAU * i as f32 / 64.0;
            let view = Vec3::new(a.cos(), a.sin(), 0.0);
            for t in 0..=10 {
                // Normals from just past the fade band to the antisolar point
                let s = -0.5 - 0.5 * t as f32 / 10.0;
                let normal = Vec3::new((1.0 - s * s).max(0.0).sqrt(), 0.0, s);
                let (_, alpha) = shade(normal.normalize(), view, sun, DAY, TWILIGHT);
                assert_eq!(alpha, 0.0, "glow on dark side: normal {normal:?} view {view:?}");
            }
        }
    }

    #[test]
    fn test_color_blends_toward_twilight_at_terminator() {
        let sun = Vec3::Z;
        let view = Vec3::X;

        let (day_color, _) = shade(Vec3::Z, view, sun, DAY, TWILIGHT);
        let (term_color, _) = shade(Vec3::Y, view, sun, DAY, TWILIGHT);

        assert!((day_color - DAY).length() < 1e-6, "subsolar color not day color");
        assert!(term_color.x > day_color.x, "terminator color not reddened");
    }

    #[test]
    fn test_edge_factor_symmetric_for_inverted_normal() {
        // The shell is rendered inside-out; the factor must not depend on
        // which way the normal faces relative to the view.
        let view = Vec3::new(0.8, 0.0, 0.6).normalize();
        let normal = Vec3::new(0.0, 0.3, 0.954).normalize();
        let a = edge_factor(view, normal);
        let b = edge_factor(view, -normal);
        assert!((a - b).abs() < 1e-6);
    }
}
