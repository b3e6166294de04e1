//! GPU uniform structs.
//!
//! All `vec3` fields are padded to 16-byte alignment for WGSL compatibility.

use bytemuck::{Pod, Zeroable};

/// Per-draw uniforms shared by the planet surface and atmosphere shell
/// passes. Each pass binds its own buffer holding one of these; the two
/// copies of the sun direction and atmosphere colors are kept identical by
/// [`crate::scene::SceneState::apply_parameter`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlobeUniforms {
    /// Combined view-projection matrix
    pub view_proj: [[f32; 4]; 4],
    /// Model (object to world) matrix
    pub model: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub sun_direction: [f32; 3],
    pub _pad1: f32,
    pub atmosphere_day_color: [f32; 3],
    pub _pad2: f32,
    pub atmosphere_twilight_color: [f32; 3],
    pub _pad3: f32,
}

impl Default for GlobeUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_position: [0.0; 3],
            _pad0: 0.0,
            sun_direction: [0.0, 0.0, 1.0],
            _pad1: 0.0,
            atmosphere_day_color: [0.0, 170.0 / 255.0, 1.0],
            _pad2: 0.0,
            atmosphere_twilight_color: [1.0, 102.0 / 255.0, 0.0],
            _pad3: 0.0,
        }
    }
}

/// Uniforms for the starfield pass: camera basis vectors for billboarding
/// plus the world-space sprite size.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 3],
    pub star_size: f32,
    pub camera_up: [f32; 3],
    pub _pad0: f32,
}

impl Default for StarUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_right: [1.0, 0.0, 0.0],
            star_size: 0.7,
            camera_up: [0.0, 1.0, 0.0],
            _pad0: 0.0,
        }
    }
}

/// Uniforms for the unlit debug sun marker.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MarkerUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
}

impl Default for MarkerUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<GlobeUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<StarUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<MarkerUniforms>() % 16, 0);
    }

    #[test]
    fn test_bytemuck_cast() {
        let g = GlobeUniforms::default();
        assert_eq!(bytemuck::bytes_of(&g).len(), std::mem::size_of::<GlobeUniforms>());
        let s = StarUniforms::default();
        assert_eq!(bytemuck::bytes_of(&s).len(), std::mem::size_of::<StarUniforms>());
    }
}
