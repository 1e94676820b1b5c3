//! Scene buffer assembly: interleaves the procedural geometry into GPU
//! vertex buffers once at startup, and assigns each drawable a slot in the
//! per-frame model matrix buffer.
//!
//! Slot layout: slot 0 holds the identity matrix for world-space point
//! clouds (the starfield), followed by one slot per body, the ring, one per
//! orbit path, and one per galaxy instance.

use glam::Vec3;
use tracing::info;

use orrery_config::SceneConfig;
use orrery_render::{SceneVertex, VertexBuffer, create_vertex_buffer};
use orrery_scene::geometry::{
    DEFAULT_ORBIT_SEGMENTS, DEFAULT_RING_SEGMENTS, DEFAULT_SPHERE_SEGMENTS,
};
use orrery_scene::{
    CelestialBody, GalaxyInstance, ORBIT_PATH_COLOR, Ring, STARFIELD_COLOR, StarfieldGenerator,
    orbit_circle_vertices, ring_vertices, sphere_vertices,
};

/// Model slot holding the identity matrix.
pub const IDENTITY_SLOT: u32 = 0;

/// An orbit path point cloud plus the index of the body tracing it.
pub struct OrbitPath {
    /// Catalog index of the orbiting body; the path is centered on that
    /// body's parent (or the origin for unparented bodies).
    pub body: usize,
    pub buffer: VertexBuffer,
}

/// All static vertex buffers for the scene.
pub struct SceneBuffers {
    /// One sphere per catalog body, index-aligned with the catalog.
    pub bodies: Vec<VertexBuffer>,
    /// Saturn's ring strip.
    pub ring: VertexBuffer,
    /// Orbit path circles for every orbiting body.
    pub orbit_paths: Vec<OrbitPath>,
    /// Background starfield, drawn in world space.
    pub starfield: VertexBuffer,
    /// One point cloud per galaxy instance.
    pub galaxies: Vec<VertexBuffer>,
}

impl SceneBuffers {
    /// Build every vertex buffer from the catalog and the seeded generators.
    pub fn build(
        device: &wgpu::Device,
        scene_config: &SceneConfig,
        catalog: &[CelestialBody],
        ring: &Ring,
        galaxies: &[GalaxyInstance],
    ) -> Self {
        let bodies = catalog
            .iter()
            .map(|body| {
                let positions = sphere_vertices(body.radius, DEFAULT_SPHERE_SEGMENTS);
                create_vertex_buffer(device, body.name, &colored(&positions, body.color))
            })
            .collect();

        let ring_buffer = {
            let positions = ring_vertices(ring.inner_radius, ring.outer_radius, DEFAULT_RING_SEGMENTS);
            create_vertex_buffer(device, "saturn-ring", &colored(&positions, ring.color))
        };

        let orbit_paths = catalog
            .iter()
            .enumerate()
            .filter(|(_, body)| body.orbital_distance > 0.0)
            .map(|(index, body)| {
                let positions = orbit_circle_vertices(body.orbital_distance, DEFAULT_ORBIT_SEGMENTS);
                OrbitPath {
                    body: index,
                    buffer: create_vertex_buffer(
                        device,
                        &format!("{}-orbit", body.name),
                        &colored(&positions, ORBIT_PATH_COLOR),
                    ),
                }
            })
            .collect::<Vec<_>>();

        let starfield = {
            let positions =
                StarfieldGenerator::new(scene_config.seed, scene_config.starfield_stars).generate();
            create_vertex_buffer(device, "starfield", &colored(&positions, STARFIELD_COLOR))
        };

        let galaxy_buffers = galaxies
            .iter()
            .enumerate()
            .map(|(index, galaxy)| {
                let vertices: Vec<SceneVertex> = galaxy
                    .cloud
                    .positions
                    .iter()
                    .zip(galaxy.cloud.colors.iter())
                    .map(|(position, color)| SceneVertex {
                        position: position.to_array(),
                        color: *color,
                    })
                    .collect();
                create_vertex_buffer(device, &format!("galaxy-{index}"), &vertices)
            })
            .collect::<Vec<_>>();

        info!(
            "scene buffers built: {} bodies, {} orbit paths, {} starfield points, {} galaxies",
            catalog.len(),
            orbit_paths.len(),
            scene_config.starfield_stars,
            galaxy_buffers.len()
        );

        Self {
            bodies,
            ring: ring_buffer,
            orbit_paths,
            starfield,
            galaxies: galaxy_buffers,
        }
    }

    /// Model slot for the body at the given catalog index.
    pub fn body_slot(&self, index: usize) -> u32 {
        1 + index as u32
    }

    /// Model slot for the ring.
    pub fn ring_slot(&self) -> u32 {
        1 + self.bodies.len() as u32
    }

    /// Model slot for the k-th orbit path.
    pub fn orbit_slot(&self, k: usize) -> u32 {
        self.ring_slot() + 1 + k as u32
    }

    /// Model slot for the k-th galaxy instance.
    pub fn galaxy_slot(&self, k: usize) -> u32 {
        self.orbit_slot(self.orbit_paths.len()) + k as u32
    }

    /// Total model slots the scene needs.
    pub fn slot_count(&self) -> u32 {
        self.galaxy_slot(self.galaxies.len())
    }
}

/// Attach a uniform color to every position.
fn colored(positions: &[Vec3], color: [f32; 3]) -> Vec<SceneVertex> {
    positions
        .iter()
        .map(|p| SceneVertex {
            position: p.to_array(),
            color,
        })
        .collect()
}
