//! Scene rendering pipelines for flat-colored geometry.
//!
//! One WGSL shader (model/view-projection transform, pass-through color)
//! feeds two pipelines: a triangle-strip pipeline for spheres and rings and
//! a point-list pipeline for orbit paths, starfields, and galaxy clouds.
//! Per-object model matrices live in a single dynamic-offset uniform buffer
//! rewritten each frame.

use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;

use crate::buffer::{SceneVertex, VertexBuffer};
use crate::depth::DepthBuffer;

/// Uniform buffer for the camera view-projection matrix (group 0).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Uniform slot for one drawable's model matrix (group 1, dynamic offset).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

/// The WGSL source shared by both scene pipelines.
pub const SCENE_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> object: ModelUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * object.model * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color, 1.0);
}
"#;

/// A dynamic-offset uniform buffer holding one model matrix per drawable.
///
/// Slots are spaced by the device's minimum uniform offset alignment and
/// rewritten every frame; slot 0 conventionally holds the identity matrix
/// for geometry drawn in world space (orbit paths, starfield).
pub struct ModelBuffer {
    pub buffer: wgpu::Buffer,
    stride: u32,
    capacity: u32,
}

impl ModelBuffer {
    /// Allocate a buffer with `capacity` model matrix slots.
    pub fn new(device: &wgpu::Device, capacity: u32) -> Self {
        let stride = aligned_stride(device);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("model-matrices"),
            size: u64::from(stride) * u64::from(capacity),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            stride,
            capacity,
        }
    }

    /// Write one model matrix into the given slot.
    ///
    /// Panics in debug builds if `slot` is out of capacity; writes past the
    /// end would be rejected by wgpu validation anyway.
    pub fn write(&self, queue: &wgpu::Queue, slot: u32, model: &glam::Mat4) {
        debug_assert!(slot < self.capacity, "model slot {slot} out of capacity");
        let uniform = ModelUniform {
            model: model.to_cols_array_2d(),
        };
        queue.write_buffer(
            &self.buffer,
            u64::from(slot) * u64::from(self.stride),
            bytemuck::bytes_of(&uniform),
        );
    }

    /// Dynamic offset for binding the given slot.
    pub fn offset(&self, slot: u32) -> u32 {
        slot * self.stride
    }

    /// Number of slots this buffer holds.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// Slot stride honoring the device's uniform offset alignment.
fn aligned_stride(device: &wgpu::Device) -> u32 {
    let align = device.limits().min_uniform_buffer_offset_alignment;
    let size = std::mem::size_of::<ModelUniform>() as u32;
    size.div_ceil(align) * align
}

/// The two scene pipelines plus their shared bind group layouts.
pub struct ScenePipelines {
    /// Triangle-strip pipeline for spheres and rings (no culling).
    pub strip: wgpu::RenderPipeline,
    /// Point-list pipeline for orbit paths, starfields, and galaxies.
    pub points: wgpu::RenderPipeline,
    /// Camera uniform layout (group 0).
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    /// Model uniform layout (group 1, dynamic offset).
    pub model_bind_group_layout: wgpu::BindGroupLayout,
}

impl ScenePipelines {
    /// Create both pipelines against the given surface format.
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene-shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(64), // mat4x4<f32>
                    },
                    count: None,
                }],
            });

        let model_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("model-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: NonZeroU64::new(64), // mat4x4<f32>
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &model_bind_group_layout],
            immediate_size: 0,
        });

        let strip = create_pipeline(
            device,
            &shader,
            &pipeline_layout,
            surface_format,
            wgpu::PrimitiveTopology::TriangleStrip,
            "scene-strip-pipeline",
        );
        let points = create_pipeline(
            device,
            &shader,
            &pipeline_layout,
            surface_format,
            wgpu::PrimitiveTopology::PointList,
            "scene-points-pipeline",
        );

        Self {
            strip,
            points,
            camera_bind_group_layout,
            model_bind_group_layout,
        }
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[SceneVertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Lat/long strips fold back on themselves, so winding is mixed.
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthBuffer::FORMAT,
            depth_write_enabled: true,
            depth_compare: DepthBuffer::COMPARE_FUNCTION, // reverse-Z
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None, // opaque
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        multiview_mask: None,
        cache: None,
    })
}

/// Draw a vertex buffer as a triangle strip with the given model slot.
pub fn draw_strip<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &ScenePipelines,
    camera_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    model_offset: u32,
    vertices: &'a VertexBuffer,
) {
    render_pass.set_pipeline(&pipelines.strip);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[model_offset]);
    vertices.bind(render_pass);
    vertices.draw(render_pass);
}

/// Draw a vertex buffer as a point list with the given model slot.
pub fn draw_points<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &ScenePipelines,
    camera_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    model_offset: u32,
    vertices: &'a VertexBuffer,
) {
    render_pass.set_pipeline(&pipelines.points);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[model_offset]);
    vertices.bind(render_pass);
    vertices.draw(render_pass);
}
