//! Planet surface shading.
//!
//! Blends day/night textures across the terminator, overlays clouds, adds a
//! sun-masked specular highlight, and tints the rim with the atmosphere
//! color. Mirrored by `shaders/planet.wgsl`.

use crate::core::types::Vec3;
use crate::shading::{smoothstep, ATMOSPHERE_COLOR_BAND, DAY_NIGHT_BAND};

/// Specular highlight tightness
pub const SPECULAR_EXPONENT: f32 = 32.0;

/// Cloud mask band: mask values below 0.5 are ignored, full cover at 1.0
pub const CLOUD_BAND: (f32, f32) = (0.5, 1.0);

/// Cloud brightness factor on the fully dark side (clouds stay visible at
/// night, just dimmed)
pub const NIGHT_CLOUD_DIM: f32 = 0.3;

/// Texture samples for one surface point.
///
/// `specular` and `clouds` come from the r and g channels of the combined
/// specular+clouds mask: r marks reflective areas (oceans), g marks cloud
/// cover. The night texture itself carries the city-lights emission; the
/// mask is not reused for it.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSample {
    pub day_color: Vec3,
    pub night_color: Vec3,
    pub specular: f32,
    pub clouds: f32,
}

/// Day/night blend factor: 0 fully night, 1 fully day, smooth across the
/// terminator band.
#[inline]
pub fn day_mix(sun_orientation: f32) -> f32 {
    smoothstep(DAY_NIGHT_BAND.0, DAY_NIGHT_BAND.1, sun_orientation)
}

/// Fresnel-like rim factor: 0 head-on, rising toward grazing view angles.
/// `view` points from the camera toward the surface.
#[inline]
pub fn fresnel(view: Vec3, normal: Vec3) -> f32 {
    let f = view.dot(normal) + 1.0;
    f * f
}

/// Atmosphere color at the given sun orientation: twilight near the
/// terminator, day color toward the subsolar point.
#[inline]
pub fn atmosphere_color(day: Vec3, twilight: Vec3, sun_orientation: f32) -> Vec3 {
    let t = smoothstep(ATMOSPHERE_COLOR_BAND.0, ATMOSPHERE_COLOR_BAND.1, sun_orientation);
    twilight.lerp(day, t)
}

/// Specular highlight intensity before masking: reflection of the sun about
/// the normal, against the view direction, attenuated to zero on the night
/// side so the antisolar point never glints.
#[inline]
pub fn specular_intensity(normal: Vec3, view: Vec3, sun_direction: Vec3) -> f32 {
    let incident = -sun_direction;
    let reflection = incident - 2.0 * incident.dot(normal) * normal;
    let s = (-reflection.dot(view)).max(0.0).powf(SPECULAR_EXPONENT);
    s * day_mix(normal.dot(sun_direction))
}

/// Full per-pixel surface color.
pub fn shade(
    normal: Vec3,
    view: Vec3,
    sample: SurfaceSample,
    sun_direction: Vec3,
    atmosphere_day: Vec3,
    atmosphere_twilight: Vec3,
) -> Vec3 {
    let sun_orientation = normal.dot(sun_direction);
    let day = day_mix(sun_orientation);

    // Day/night texture blend
    let mut color = sample.night_color.lerp(sample.day_color, day);

    // Cloud overlay, dimmed but not hidden at night
    let cloud_mix = smoothstep(CLOUD_BAND.0, CLOUD_BAND.1, sample.clouds)
        * (NIGHT_CLOUD_DIM + (1.0 - NIGHT_CLOUD_DIM) * day);
    color = color.lerp(Vec3::ONE, cloud_mix);

    // Atmosphere tint on the rim, strongest at grazing sun angles
    let rim = fresnel(view, normal);
    let atmo_mix = smoothstep(ATMOSPHERE_COLOR_BAND.0, ATMOSPHERE_COLOR_BAND.1, sun_orientation);
    let atmo = atmosphere_color(atmosphere_day, atmosphere_twilight, sun_orientation);
    color = color.lerp(atmo, (rim * atmo_mix).clamp(0.0, 1.0));

    // Specular, masked by the ocean channel and tinted by the rim color
    let specular = specular_intensity(normal, view, sun_direction) * sample.specular;
    let specular_color = Vec3::ONE.lerp(atmo, rim.clamp(0.0, 1.0));
    color + specular * specular_color
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Vec3 = Vec3::new(0.0, 0.67, 1.0);
    const TWILIGHT: Vec3 = Vec3::new(1.0, 0.4, 0.0);

    fn flat_sample() -> SurfaceSample {
        SurfaceSample {
            day_color: Vec3::new(0.2, 0.5, 0.3),
            night_color: Vec3::new(0.05, 0.05, 0.1),
            specular: 0.0,
            clouds: 0.0,
        }
    }

    #[test]
    fn test_day_mix_continuous_across_terminator() {
        // Lipschitz bound: max smoothstep slope is 1.5 / band width = 2.0
        let eps = 1e-3;
        let mut prev = day_mix(-1.0);
        let mut x = -1.0 + eps;
        while x <= 1.0 {
            let v = day_mix(x);
            assert!(
                (v - prev).abs() <= 2.0 * eps + 1e-5,
                "discontinuity at sun_orientation={x}: {prev} -> {v}"
            );
            prev = v;
            x += eps;
        }
    }

    #[test]
    fn test_blended_color_continuous() {
        let sample = flat_sample();
        let sun = Vec3::Z;
        let eps = 1e-3;
        // Walk normals across the terminator in the XZ plane
        let mut prev: Option<Vec3> = None;
        for i in 0..=2000 {
            let angle = std::f32::consts::PI * i as f32 / 2000.0;
            let normal = Vec3::new(angle.sin(), 0.0, angle.cos());
            let view = -normal; // head-on, isolates the day/night blend
            let color = shade(normal, view, sample, sun, DAY, TWILIGHT);
            if let Some(p) = prev {
                assert!(
                    (color - p).length() < 50.0 * eps,
                    "color jump at step {i}: {p:?} -> {color:?}"
                );
            }
            prev = Some(color);
        }
    }

    #[test]
    fn test_specular_zero_at_antisolar_for_all_views() {
        let sun = Vec3::Z;
        let normal = -sun; // antisolar point
        for i in 0..32 {
            let a = std::f32::consts::TAU * i as f32 / 32.0;
            for j in 1..8 {
                let b = std::f32::consts::PI * j as f32 / 8.0;
                let view = Vec3::new(b.sin() * a.cos(), b.sin() * a.sin(), b.cos());
                assert_eq!(
                    specular_intensity(normal, view, sun),
                    0.0,
                    "specular nonzero at antisolar point, view {view:?}"
                );
            }
        }
    }

    #[test]
    fn test_subsolar_head_on_is_pure_day_color() {
        let sun = Vec3::Z;
        let normal = sun; // subsolar point
        let view = -normal; // camera straight above it
        let sample = flat_sample();
        let color = shade(normal, view, sample, sun, DAY, TWILIGHT);
        assert!(
            (color - sample.day_color).length() < 1e-6,
            "expected pure day color, got {color:?}"
        );
    }

    #[test]
    fn test_night_side_uses_night_color() {
        let sun = Vec3::Z;
        let normal = -sun;
        let view = -normal;
        let sample = flat_sample();
        let color = shade(normal, view, sample, sun, DAY, TWILIGHT);
        assert!(
            (color - sample.night_color).length() < 1e-6,
            "expected pure night color, got {color:?}"
        );
    }

    #[test]
    fn test_clouds_dimmed_but_visible_at_night() {
        let sun = Vec3::Z;
        let sample = SurfaceSample {
            clouds: 1.0,
            ..flat_sample()
        };

        let day_color = shade(sun, -sun, sample, sun, DAY, TWILIGHT);
        let night_color = shade(-sun, sun, sample, sun, DAY, TWILIGHT);

        let base = flat_sample();
        let day_base = shade(sun, -sun, base, sun, DAY, TWILIGHT);
        let night_base = shade(-sun, sun, base, sun, DAY, TWILIGHT);

        // Clouds brighten both hemispheres, more by day than by night
        let day_lift = (day_color - day_base).length();
        let night_lift = (night_color - night_base).length();
        assert!(night_lift > 1e-3, "clouds invisible at night");
        assert!(day_lift > night_lift, "clouds not dimmed at night");
    }

    #[test]
    fn test_terminator_tint_leans_twilight() {
        let sun = Vec3::Z;
        let tint_terminator = atmosphere_color(DAY, TWILIGHT, 0.0);
        let tint_subsolar = atmosphere_color(DAY, TWILIGHT, 1.0);
        // Red channel: twilight is red-heavy, day is blue-heavy
        assert!(tint_terminator.x > tint_subsolar.x);
        assert!((tint_subsolar - DAY).length() < 1e-6);
        let _ = sun;
    }

    #[test]
    fn test_specular_masked_by_ocean_channel() {
        let sun = Vec3::Z;
        // Grazing geometry that actually produces a reflection toward the view
        let normal = Vec3::new(0.5, 0.0, 0.5).normalize();
        let incident = -sun;
        let reflection = incident - 2.0 * incident.dot(normal) * normal;
        let view = -reflection.normalize(); // looking straight into the reflection
        let land = SurfaceSample { specular: 0.0, ..flat_sample() };
        let ocean = SurfaceSample { specular: 1.0, ..flat_sample() };
        let land_color = shade(normal, view, land, sun, DAY, TWILIGHT);
        let ocean_color = shade(normal, view, ocean, sun, DAY, TWILIGHT);
        assert!(
            ocean_color.length() > land_color.length() + 1e-4,
            "ocean should glint brighter than land"
        );
    }
}
