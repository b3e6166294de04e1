//! Texture loading and upload.
//!
//! Textures are decoded with the `image` crate and uploaded once at startup.
//! Every slot gets a placeholder first, so a missing or corrupt file
//! degrades to flat shading instead of halting the loop; the outcome is
//! recorded per texture in [`TextureLoadState`].

use crate::scene::SceneConfig;

/// Load outcome for one texture slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureLoadState {
    /// Not yet attempted
    Pending,
    /// Decoded and uploaded
    Ready,
    /// Decode or read failed; placeholder stays bound
    Failed,
}

/// A GPU texture together with its load outcome
pub struct LoadedTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub state: TextureLoadState,
}

/// All textures the scene binds, plus the shared sampler.
pub struct SceneTextures {
    pub day: LoadedTexture,
    pub night: LoadedTexture,
    pub specular_clouds: LoadedTexture,
    pub star_sprite: LoadedTexture,
    pub sampler: wgpu::Sampler,
}

impl SceneTextures {
    /// Load every configured texture, falling back to placeholders.
    pub fn load(device: &wgpu::Device, queue: &wgpu::Queue, config: &SceneConfig) -> Self {
        // Color maps are sRGB; the mask and sprite hold data, not color
        let day = load_texture(device, queue, &config.day_texture, true, [90, 120, 160, 255]);
        let night = load_texture(device, queue, &config.night_texture, true, [2, 2, 8, 255]);
        let specular_clouds = load_texture(
            device,
            queue,
            &config.specular_clouds_texture,
            false,
            [0, 0, 0, 255],
        );
        let star_sprite = load_star_sprite(device, queue, &config.star_sprite);

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("scene_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Self {
            day,
            night,
            specular_clouds,
            star_sprite,
            sampler,
        }
    }
}

/// Load a texture from disk, or upload a 1x1 placeholder on failure.
pub fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &str,
    srgb: bool,
    placeholder: [u8; 4],
) -> LoadedTexture {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let (texture, view) = upload_rgba(device, queue, path, width, height, &rgba, srgb);
            log::info!("Loaded texture {path} ({width}x{height})");
            LoadedTexture {
                texture,
                view,
                state: TextureLoadState::Ready,
            }
        }
        Err(e) => {
            log::error!("Failed to load texture {path}: {e}; using placeholder");
            let (texture, view) = upload_rgba(device, queue, path, 1, 1, &placeholder, srgb);
            LoadedTexture {
                texture,
                view,
                state: TextureLoadState::Failed,
            }
        }
    }
}

/// Load the star sprite, or generate a soft radial falloff sprite if the
/// file is missing.
pub fn load_star_sprite(device: &wgpu::Device, queue: &wgpu::Queue, path: &str) -> LoadedTexture {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let (texture, view) = upload_rgba(device, queue, path, width, height, &rgba, false);
            log::info!("Loaded star sprite {path} ({width}x{height})");
            LoadedTexture {
                texture,
                view,
                state: TextureLoadState::Ready,
            }
        }
        Err(e) => {
            log::warn!("Star sprite {path} unavailable ({e}); generating one");
            const SIZE: u32 = 64;
            let pixels = radial_sprite(SIZE);
            let (texture, view) = upload_rgba(device, queue, path, SIZE, SIZE, &pixels, false);
            LoadedTexture {
                texture,
                view,
                state: TextureLoadState::Failed,
            }
        }
    }
}

/// Soft circular alpha mask: white with alpha fading quadratically from
/// center to edge.
pub fn radial_sprite(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let center = (size as f32 - 1.0) / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - center) / center;
            let dy = (y as f32 - center) / center;
            let d = (dx * dx + dy * dy).sqrt().min(1.0);
            let falloff = (1.0 - d) * (1.0 - d);
            let alpha = (falloff * 255.0) as u8;
            pixels.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }
    pixels
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
    srgb: bool,
) -> (wgpu::Texture, wgpu::TextureView) {
    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_sprite_dimensions() {
        let pixels = radial_sprite(32);
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_radial_sprite_fades_outward() {
        let size = 64u32;
        let pixels = radial_sprite(size);
        let alpha_at = |x: u32, y: u32| pixels[((y * size + x) * 4 + 3) as usize];

        let center = alpha_at(size / 2, size / 2);
        let edge = alpha_at(0, size / 2);
        let corner = alpha_at(0, 0);

        assert!(center > 200, "center alpha too dim: {center}");
        assert!(edge < center, "edge not dimmer than center");
        assert_eq!(corner, 0, "corner should be fully transparent");
    }

    #[test]
    fn test_load_state_variants() {
        assert_ne!(TextureLoadState::Pending, TextureLoadState::Ready);
        assert_ne!(TextureLoadState::Ready, TextureLoadState::Failed);
    }
}
