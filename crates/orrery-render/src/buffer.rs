//! Vertex buffer management for non-indexed point and strip geometry.

use bytemuck::{Pod, Zeroable};

/// Scene vertex: position plus flat RGB color, matching the pass-through
/// color shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl SceneVertex {
    /// Vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// A vertex buffer ready for non-indexed rendering.
///
/// All scene geometry is drawn without indices: orbit paths, starfields, and
/// galaxy clouds as point lists, spheres and rings as triangle strips.
pub struct VertexBuffer {
    pub buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl VertexBuffer {
    /// Bind this buffer to slot 0 of a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.buffer.slice(..));
    }

    /// Draw every vertex in the buffer.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Create an immutable vertex buffer from scene vertices.
///
/// Geometry buffers are created once at startup and never written again.
pub fn create_vertex_buffer(
    device: &wgpu::Device,
    label: &str,
    vertices: &[SceneVertex],
) -> VertexBuffer {
    use wgpu::util::DeviceExt;

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    VertexBuffer {
        buffer,
        vertex_count: vertices.len() as u32,
    }
}
