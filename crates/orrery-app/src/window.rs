//! Window creation and the winit event loop.
//!
//! [`OrreryApp`] implements winit's [`ApplicationHandler`]: `resumed` creates
//! the window and GPU state, and `RedrawRequested` drives the fixed-timestep
//! simulation and draws one frame, then immediately requests the next redraw
//! for a continuous render loop.

use std::num::NonZeroU64;
use std::sync::Arc;

use glam::{Mat4, Vec2};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::Config;
use orrery_render::{
    DepthBuffer, FrameEncoder, ModelBuffer, OrbitCamera, RenderContext, RenderPassBuilder,
    ScenePipelines, SurfaceError, draw_points, draw_strip, init_render_context_blocking,
};
use orrery_scene::{
    CelestialBody, GalaxyField, GalaxyInstance, Ring, body_model_matrix, body_world_position,
    galaxy_model_matrix, saturn_ring, solar_system,
};

use crate::game_loop::FrameClock;
use crate::input::MouseState;
use crate::scene::{IDENTITY_SLOT, SceneBuffers};

/// Window attributes from the loaded configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// GPU-side state built once the device exists.
struct Renderer {
    pipelines: ScenePipelines,
    depth: DepthBuffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    models: ModelBuffer,
    model_bind_group: wgpu::BindGroup,
    scene: SceneBuffers,
}

impl Renderer {
    fn new(
        gpu: &RenderContext,
        config: &Config,
        catalog: &[CelestialBody],
        ring: &Ring,
        galaxies: &[GalaxyInstance],
        camera: &OrbitCamera,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let pipelines = ScenePipelines::new(&gpu.device, gpu.surface_format);
        let depth = DepthBuffer::new(
            &gpu.device,
            gpu.surface_config.width,
            gpu.surface_config.height,
        );
        let scene = SceneBuffers::build(&gpu.device, &config.scene, catalog, ring, galaxies);

        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera-uniform"),
                contents: bytemuck::bytes_of(&camera.to_uniform()),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &pipelines.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let models = ModelBuffer::new(&gpu.device, scene.slot_count());
        let model_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model-bind-group"),
            layout: &pipelines.model_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &models.buffer,
                    offset: 0,
                    size: NonZeroU64::new(64),
                }),
            }],
        });

        Self {
            pipelines,
            depth,
            camera_buffer,
            camera_bind_group,
            models,
            model_bind_group,
            scene,
        }
    }
}

/// Application state driving the window, simulation, and renderer.
pub struct OrreryApp {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    renderer: Option<Renderer>,
    camera: OrbitCamera,
    mouse: MouseState,
    clock: FrameClock,
    catalog: Vec<CelestialBody>,
    ring: Ring,
    galaxies: Vec<GalaxyInstance>,
}

impl OrreryApp {
    /// Generate the scene and set up pre-window state from the config.
    pub fn new(config: Config) -> Self {
        let catalog = solar_system();
        let ring = saturn_ring();
        let galaxies = GalaxyField::new(
            config.scene.seed,
            config.scene.galaxy_count,
            config.scene.stars_per_galaxy,
            config.scene.spiral_arms,
        )
        .generate();

        let mut camera = OrbitCamera::new(config.camera.orbit_distance, config.camera.drift_speed);
        camera.drag_sensitivity = config.camera.drag_sensitivity;
        camera.scroll_sensitivity = config.camera.scroll_sensitivity;

        Self {
            config,
            window: None,
            gpu: None,
            renderer: None,
            camera,
            mouse: MouseState::new(),
            clock: FrameClock::new(),
            catalog,
            ring,
            galaxies,
        }
    }

    /// Run simulation ticks and draw one frame.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let drag = self.mouse.take_drag_delta();
        if drag != Vec2::ZERO {
            self.camera.orbit(drag.x, drag.y);
        }
        let scroll = self.mouse.take_scroll();
        if scroll != 0.0 {
            self.camera.zoom(scroll);
        }

        let camera = &mut self.camera;
        let alpha = self.clock.advance(|dt| camera.advance_drift(dt));
        let t = self.clock.render_time(alpha);

        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        gpu.queue.write_buffer(
            &renderer.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera.to_uniform()),
        );

        renderer
            .models
            .write(&gpu.queue, IDENTITY_SLOT, &Mat4::IDENTITY);
        for index in 0..self.catalog.len() {
            renderer.models.write(
                &gpu.queue,
                renderer.scene.body_slot(index),
                &body_model_matrix(&self.catalog, index, t),
            );
        }
        renderer.models.write(
            &gpu.queue,
            renderer.scene.ring_slot(),
            &body_model_matrix(&self.catalog, self.ring.body, t),
        );
        for (k, path) in renderer.scene.orbit_paths.iter().enumerate() {
            // A path circles the orbiting body's parent; unparented bodies
            // circle the origin.
            let center = match self.catalog[path.body].parent {
                Some(parent) => {
                    Mat4::from_translation(body_world_position(&self.catalog, parent, t))
                }
                None => Mat4::IDENTITY,
            };
            renderer
                .models
                .write(&gpu.queue, renderer.scene.orbit_slot(k), &center);
        }
        for (k, galaxy) in self.galaxies.iter().enumerate() {
            renderer.models.write(
                &gpu.queue,
                renderer.scene.galaxy_slot(k),
                &galaxy_model_matrix(galaxy, self.camera.position),
            );
        }

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::Timeout) => return, // skip this frame
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(SurfaceError::Lost) => {
                error!("surface lost and could not be recovered");
                return;
            }
        };

        let mut frame = FrameEncoder::new(
            &gpu.device,
            Arc::new(gpu.queue.clone()),
            surface_texture,
        );
        let pass_builder = RenderPassBuilder::new().with_depth(&renderer.depth);
        {
            let mut pass = frame.begin_render_pass(&pass_builder);

            for (k, path) in renderer.scene.orbit_paths.iter().enumerate() {
                draw_points(
                    &mut pass,
                    &renderer.pipelines,
                    &renderer.camera_bind_group,
                    &renderer.model_bind_group,
                    renderer.models.offset(renderer.scene.orbit_slot(k)),
                    &path.buffer,
                );
            }
            draw_points(
                &mut pass,
                &renderer.pipelines,
                &renderer.camera_bind_group,
                &renderer.model_bind_group,
                renderer.models.offset(IDENTITY_SLOT),
                &renderer.scene.starfield,
            );
            for (index, body) in renderer.scene.bodies.iter().enumerate() {
                draw_strip(
                    &mut pass,
                    &renderer.pipelines,
                    &renderer.camera_bind_group,
                    &renderer.model_bind_group,
                    renderer.models.offset(renderer.scene.body_slot(index)),
                    body,
                );
            }
            draw_strip(
                &mut pass,
                &renderer.pipelines,
                &renderer.camera_bind_group,
                &renderer.model_bind_group,
                renderer.models.offset(renderer.scene.ring_slot()),
                &renderer.scene.ring,
            );
            for (k, galaxy) in renderer.scene.galaxies.iter().enumerate() {
                draw_points(
                    &mut pass,
                    &renderer.pipelines,
                    &renderer.camera_bind_group,
                    &renderer.model_bind_group,
                    renderer.models.offset(renderer.scene.galaxy_slot(k)),
                    galaxy,
                );
            }
        }
        frame.submit();
    }
}

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.camera.set_viewport(size.width, size.height);
                self.renderer = Some(Renderer::new(
                    &gpu,
                    &self.config,
                    &self.catalog,
                    &self.ring,
                    &self.galaxies,
                    &self.camera,
                ));
                self.gpu = Some(gpu);
                info!("renderer initialized at {}x{}", size.width, size.height);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(
                    "close requested after {} frames, {} ticks",
                    self.clock.frame_count(),
                    self.clock.tick_count()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                if let (Some(renderer), Some(gpu)) = (&mut self.renderer, &self.gpu) {
                    renderer
                        .depth
                        .resize(&gpu.device, new_size.width.max(1), new_size.height.max(1));
                }
                self.camera.set_viewport(new_size.width, new_size.height);
                info!("window resized to {}x{}", new_size.width, new_size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse.on_button(button, state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.on_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Build the event loop and run the viewer until the window closes.
pub fn run(config: Config) -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = OrreryApp::new(config);
    event_loop.run_app(&mut app)
}
