//! wgpu rendering layer: GPU context and surface management, reverse-Z depth
//! buffer, render pass helpers, vertex/uniform buffers, the point/strip scene
//! pipelines, and the orbiting camera.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod pass;
pub mod pipeline;

pub use buffer::{SceneVertex, VertexBuffer, create_vertex_buffer};
pub use camera::{MAX_ORBIT_DISTANCE, MIN_ORBIT_DISTANCE, OrbitCamera};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use pass::{DEEP_SPACE, FrameEncoder, RenderPassBuilder};
pub use pipeline::{
    CameraUniform, ModelBuffer, SCENE_SHADER_SOURCE, ScenePipelines, draw_points, draw_strip,
};
