//! Procedural scene model: celestial body catalog, parametric geometry
//! generation, spiral galaxy and starfield point clouds, and the per-frame
//! transform pipeline.
//!
//! Everything in this crate is CPU-side and deterministic: generators are
//! pure functions of their inputs (and an explicit seed), and body positions
//! are pure functions of elapsed time. Geometry is generated once at startup
//! and never mutated; only transform matrices change per frame.

pub mod body;
pub mod galaxy;
pub mod geometry;
pub mod starfield;
pub mod transform;

pub use body::{CelestialBody, ORBIT_PATH_COLOR, Ring, saturn_ring, solar_system};
pub use galaxy::{GalaxyField, GalaxyInstance, GalaxyPointCloud, SpiralGalaxyParams};
pub use geometry::{orbit_circle_vertices, ring_vertices, sphere_vertices};
pub use starfield::{STARFIELD_COLOR, StarfieldGenerator};
pub use transform::{
    body_model_matrix, body_world_position, galaxy_model_matrix, orbital_position,
};
