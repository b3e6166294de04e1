//! Sphere mesh generation

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Vertex for the planet and atmosphere spheres
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SphereVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 24,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Generate a unit UV sphere with equirectangular texture mapping.
///
/// `segments` runs around the equator, `rings` from pole to pole. Radius is
/// applied later through the model matrix so the planet and atmosphere can
/// share one mesh.
pub fn generate_uv_sphere(segments: u32, rings: u32) -> (Vec<SphereVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            vertices.push(SphereVertex {
                position: [x, y, z],
                normal: [x, y, z],
                uv: [1.0 - seg as f32 / segments as f32, ring as f32 / rings as f32],
            });
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    (vertices, indices)
}

/// Sphere mesh uploaded to the GPU. The planet and atmosphere passes share
/// one of these; the sun marker uses a coarser one.
pub struct SphereMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl SphereMesh {
    pub fn new(device: &wgpu::Device, label: &str, segments: u32, rings: u32) -> Self {
        let (vertices, indices) = generate_uv_sphere(segments, rings);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        let (vertices, indices) = generate_uv_sphere(64, 64);
        assert_eq!(vertices.len(), 65 * 65);
        assert_eq!(indices.len(), 64 * 64 * 6);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let (vertices, _) = generate_uv_sphere(16, 16);
        for v in &vertices {
            let len = (v.position[0] * v.position[0]
                + v.position[1] * v.position[1]
                + v.position[2] * v.position[2])
                .sqrt();
            assert!((len - 1.0).abs() < 1e-5, "vertex off unit sphere: {len}");
        }
    }

    #[test]
    fn test_normals_match_positions() {
        let (vertices, _) = generate_uv_sphere(8, 8);
        for v in &vertices {
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let (vertices, indices) = generate_uv_sphere(12, 10);
        for &i in &indices {
            assert!((i as usize) < vertices.len());
        }
    }

    #[test]
    fn test_uv_covers_unit_square() {
        let (vertices, _) = generate_uv_sphere(8, 8);
        for v in &vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }
}
