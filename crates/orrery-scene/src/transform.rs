//! Per-frame transform pipeline: body positions from uniform circular
//! motion and model matrices for submission to the renderer.
//!
//! Positions are pure functions of elapsed time, recomputed from scratch
//! every frame. No state, no interpolation.

use glam::{Mat4, Vec3};

use crate::body::CelestialBody;
use crate::galaxy::GalaxyInstance;

/// Position on a circular orbit in the horizontal plane.
///
/// `(cos(ωt)·D, 0, sin(ωt)·D)`; a distance of zero pins the body to the
/// origin regardless of speed.
pub fn orbital_position(distance: f32, angular_speed: f32, t: f32) -> Vec3 {
    if distance <= 0.0 {
        return Vec3::ZERO;
    }
    let angle = angular_speed * t;
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// World position of the body at `index`: its own circular offset plus the
/// parent's world position at the same instant.
///
/// Parent chains resolve iteratively, though the catalog only ever nests one
/// level (the Moon around Earth).
pub fn body_world_position(bodies: &[CelestialBody], index: usize, t: f32) -> Vec3 {
    let body = &bodies[index];
    let mut position = orbital_position(body.orbital_distance, body.angular_speed, t);

    let mut parent = body.parent;
    while let Some(parent_index) = parent {
        let parent_body = &bodies[parent_index];
        position += orbital_position(parent_body.orbital_distance, parent_body.angular_speed, t);
        parent = parent_body.parent;
    }

    position
}

/// Model matrix for a body: pure translation to its world position.
pub fn body_model_matrix(bodies: &[CelestialBody], index: usize, t: f32) -> Mat4 {
    Mat4::from_translation(body_world_position(bodies, index, t))
}

/// Model matrix for a galaxy instance, rendered camera-relative:
/// `translate(offset − camera_position) · scale · rotation`.
///
/// Subtracting the camera position keeps the galaxy field receding as the
/// camera drifts, simulating depth far beyond the solar system.
pub fn galaxy_model_matrix(galaxy: &GalaxyInstance, camera_position: Vec3) -> Mat4 {
    Mat4::from_translation(galaxy.offset - camera_position)
        * Mat4::from_scale(Vec3::splat(galaxy.scale))
        * galaxy.rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{EARTH, MOON, solar_system};
    use crate::galaxy::GalaxyPointCloud;

    #[test]
    fn test_orbit_stays_on_circle() {
        let (distance, speed) = (7.0_f32, 0.25_f32);
        for i in 0..50 {
            let t = i as f32 * 0.73;
            let p = orbital_position(distance, speed, t);
            assert!(
                (p.x * p.x + p.z * p.z - distance * distance).abs() < 1e-3,
                "at t={t}, x²+z² = {}",
                p.x * p.x + p.z * p.z
            );
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_orbit_angle_matches_time() {
        let (distance, speed) = (5.0_f32, 0.3_f32);
        let t = 4.2_f32;
        let p = orbital_position(distance, speed, t);
        let angle = p.z.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        let expected = (speed * t).rem_euclid(std::f32::consts::TAU);
        assert!(
            (angle - expected).abs() < 1e-4,
            "angle {angle} != ωt {expected}"
        );
    }

    #[test]
    fn test_zero_distance_pins_to_origin() {
        let p = orbital_position(0.0, 0.5, 123.0);
        assert_eq!(p, Vec3::ZERO);
    }

    #[test]
    fn test_moon_relative_to_earth_is_own_circle() {
        let bodies = solar_system();
        let moon = &bodies[MOON];

        for i in 0..20 {
            let t = i as f32 * 1.3;
            let moon_world = body_world_position(&bodies, MOON, t);
            let earth_world = body_world_position(&bodies, EARTH, t);
            let relative = moon_world - earth_world;
            let expected = orbital_position(moon.orbital_distance, moon.angular_speed, t);
            assert!(
                (relative - expected).length() < 1e-4,
                "at t={t}: relative {relative}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_unparented_world_equals_orbital() {
        let bodies = solar_system();
        let t = 2.5;
        let earth = &bodies[EARTH];
        let world = body_world_position(&bodies, EARTH, t);
        let orbital = orbital_position(earth.orbital_distance, earth.angular_speed, t);
        assert_eq!(world, orbital);
    }

    #[test]
    fn test_body_model_matrix_is_translation() {
        let bodies = solar_system();
        let t = 1.7;
        let m = body_model_matrix(&bodies, EARTH, t);
        let expected = body_world_position(&bodies, EARTH, t);
        assert!((m.col(3).truncate() - expected).length() < 1e-6);
        // Upper 3×3 stays identity: bodies only translate.
        assert!((m.col(0).truncate() - Vec3::X).length() < 1e-6);
        assert!((m.col(1).truncate() - Vec3::Y).length() < 1e-6);
        assert!((m.col(2).truncate() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_galaxy_matrix_is_camera_relative() {
        let galaxy = GalaxyInstance {
            cloud: GalaxyPointCloud {
                positions: vec![],
                colors: vec![],
            },
            offset: Vec3::new(100.0, -50.0, 30.0),
            scale: 0.6,
            rotation: Mat4::IDENTITY,
        };
        let camera = Vec3::new(0.0, 5.0, 25.0);
        let m = galaxy_model_matrix(&galaxy, camera);

        // The local origin lands at offset − camera.
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - (galaxy.offset - camera)).length() < 1e-5);

        // A local unit point is scaled by the instance scale.
        let unit = m.transform_point3(Vec3::X) - origin;
        assert!((unit.length() - galaxy.scale).abs() < 1e-5);
    }

    #[test]
    fn test_galaxy_matrix_applies_rotation_before_scale_translate() {
        let galaxy = GalaxyInstance {
            cloud: GalaxyPointCloud {
                positions: vec![],
                colors: vec![],
            },
            offset: Vec3::ZERO,
            scale: 2.0,
            rotation: Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
        };
        let m = galaxy_model_matrix(&galaxy, Vec3::ZERO);
        // +X rotates onto −Z, then scales by 2.
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }
}
