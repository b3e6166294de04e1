//! Frame assembly.
//!
//! Owns every GPU resource built from the scene (meshes, textures, the four
//! pipelines, the depth buffer) and records one render pass per frame.

use crate::core::camera::Camera;
use crate::core::error::Error;
use crate::render::context::GpuContext;
use crate::render::mesh::SphereMesh;
use crate::render::pipeline::{
    self, AtmospherePipeline, PlanetPipeline, StarPipeline, SunMarkerPipeline,
};
use crate::render::texture::SceneTextures;
use crate::scene::SceneState;

/// Background clear color (#000011), converted to linear
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.00518,
    a: 1.0,
};

pub struct Renderer {
    planet: PlanetPipeline,
    atmosphere: AtmospherePipeline,
    stars: StarPipeline,
    sun_marker: SunMarkerPipeline,
    sphere: SphereMesh,
    marker_sphere: SphereMesh,
    depth_view: wgpu::TextureView,
    pub textures: SceneTextures,
}

impl Renderer {
    pub fn new(gpu: &GpuContext, scene: &SceneState) -> Self {
        let textures = SceneTextures::load(&gpu.device, &gpu.queue, &scene.config);

        let segments = scene.config.sphere_segments;
        let sphere = SphereMesh::new(&gpu.device, "sphere_mesh", segments, segments);
        let marker_sphere = SphereMesh::new(&gpu.device, "marker_mesh", 16, 16);

        let format = gpu.format();
        let planet = PlanetPipeline::new(&gpu.device, format, &textures);
        let atmosphere = AtmospherePipeline::new(&gpu.device, format);
        let stars = StarPipeline::new(&gpu.device, format, &textures, &scene.stars);
        let sun_marker = SunMarkerPipeline::new(&gpu.device, format);

        let (width, height) = gpu.size();
        let depth_view = pipeline::create_depth_texture(&gpu.device, width, height);

        Self {
            planet,
            atmosphere,
            stars,
            sun_marker,
            sphere,
            marker_sphere,
            depth_view,
            textures,
        }
    }

    /// Rebuild the depth buffer after a surface resize.
    pub fn resize(&mut self, gpu: &GpuContext) {
        let (width, height) = gpu.size();
        self.depth_view = pipeline::create_depth_texture(&gpu.device, width, height);
    }

    /// Upload this frame's uniforms and record the render pass.
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        scene: &SceneState,
        camera: &Camera,
    ) -> Result<(), Error> {
        self.planet.update(&gpu.queue, &scene.planet_uniforms);
        self.atmosphere.update(&gpu.queue, &scene.atmosphere_uniforms);
        self.stars.update(&gpu.queue, &scene.star_uniforms(camera));
        self.sun_marker.update(&gpu.queue, &scene.marker_uniforms(camera));

        let frame = gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // Opaque first, then blended passes that depth-test but do not
            // write. The shell goes last so its alpha composites over the
            // stars visible beyond the limb.
            self.planet.draw(&mut pass, &self.sphere);
            self.sun_marker.draw(&mut pass, &self.marker_sphere);
            self.stars.draw(&mut pass);
            self.atmosphere.draw(&mut pass, &self.sphere);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
