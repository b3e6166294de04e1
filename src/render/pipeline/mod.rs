//! Render pipelines, one module per pass.
//!
//! All passes draw into a single render pass sharing one depth buffer, in
//! fixed order: planet surface, sun marker, starfield, atmosphere shell.
//! The shell goes last so its alpha blend composites over the stars visible
//! beyond the limb.

pub mod atmosphere;
pub mod planet;
pub mod stars;
pub mod sun_marker;

pub use atmosphere::AtmospherePipeline;
pub use planet::PlanetPipeline;
pub use stars::StarPipeline;
pub use sun_marker::SunMarkerPipeline;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Create the shared depth buffer. Recreated on resize.
pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
