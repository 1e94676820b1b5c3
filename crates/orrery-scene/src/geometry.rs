//! Parametric geometry generation: spheres, rings, and orbit circles.
//!
//! All generators return plain vertex position lists. Sphere and ring
//! vertices are ordered for triangle-strip submission; orbit circles are
//! point samples. Colors are attached later when the caller interleaves
//! vertices for GPU upload.

use glam::Vec3;

/// Default tessellation for body spheres.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 12;

/// Default tessellation for planetary rings.
pub const DEFAULT_RING_SEGMENTS: u32 = 30;

/// Default sample count for orbit path circles.
pub const DEFAULT_ORBIT_SEGMENTS: u32 = 100;

/// Generate a latitude/longitude sphere as a strip-ordered vertex list.
///
/// Samples `(segments + 1)` latitudes by `(segments + 1)` longitudes,
/// producing `(segments + 1)²` vertices, each at exactly `radius` from the
/// origin.
pub fn sphere_vertices(radius: f32, segments: u32) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(((segments + 1) * (segments + 1)) as usize);

    for i in 0..=segments {
        let theta = i as f32 * std::f32::consts::PI / segments as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for j in 0..=segments {
            let phi = j as f32 * std::f32::consts::TAU / segments as f32;
            let direction = Vec3::new(phi.cos() * sin_theta, cos_theta, phi.sin() * sin_theta);
            vertices.push(direction * radius);
        }
    }

    vertices
}

/// Generate a flat ring in the horizontal plane as a triangle strip.
///
/// Produces `2 · (segments + 1)` vertices alternating between the inner and
/// outer radius around the circle, closing back on the starting pair.
pub fn ring_vertices(inner_radius: f32, outer_radius: f32, segments: u32) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity((2 * (segments + 1)) as usize);

    for i in 0..=segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        vertices.push(Vec3::new(cos_a * inner_radius, 0.0, sin_a * inner_radius));
        vertices.push(Vec3::new(cos_a * outer_radius, 0.0, sin_a * outer_radius));
    }

    vertices
}

/// Sample `segments` points on the horizontal circle of the given radius.
///
/// Used for orbit path rendering as a point cloud, so the circle is left
/// open (the first sample is not repeated).
pub fn orbit_circle_vertices(distance: f32, segments: u32) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(segments as usize);

    for i in 0..segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        vertices.push(Vec3::new(cos_a * distance, 0.0, sin_a * distance));
    }

    vertices
}
