//! Orbiting camera with mouse-drag rotation, scroll zoom, and a slow
//! forward drift along +Z.

use glam::{Mat4, Vec3};

use crate::pipeline::CameraUniform;

/// Closest the camera may orbit to its target.
pub const MIN_ORBIT_DISTANCE: f32 = 5.0;
/// Farthest the camera may orbit from its target.
pub const MAX_ORBIT_DISTANCE: f32 = 50.0;

/// A camera that orbits a target point at a clamped distance.
///
/// Dragging adjusts the pitch/yaw angles, scrolling adjusts the orbit
/// distance, and the anchor position drifts slowly along +Z every tick so
/// the scene glides past even when the user does nothing.
pub struct OrbitCamera {
    /// Anchor position the orbit offset is applied to.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Distance from target to eye, clamped to the orbit range.
    orbit_distance: f32,
    /// Pitch accumulated from vertical drag, radians.
    pub rotation_x: f32,
    /// Yaw accumulated from horizontal drag, radians.
    pub rotation_y: f32,
    /// Units per second of +Z drift.
    pub drift_speed: f32,
    /// Radians of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Distance change per scroll line.
    pub scroll_sensitivity: f32,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl OrbitCamera {
    pub fn new(orbit_distance: f32, drift_speed: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 25.0),
            target: Vec3::ZERO,
            orbit_distance: orbit_distance.clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE),
            rotation_x: 0.0,
            rotation_y: 0.0,
            drift_speed,
            drag_sensitivity: 0.01,
            scroll_sensitivity: 0.5,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 300.0,
        }
    }

    /// Apply a mouse drag delta in pixels.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.rotation_y += delta_x * self.drag_sensitivity;
        self.rotation_x += delta_y * self.drag_sensitivity;
    }

    /// Apply scroll wheel lines; positive lines zoom in.
    pub fn zoom(&mut self, lines: f32) {
        self.orbit_distance = (self.orbit_distance - lines * self.scroll_sensitivity)
            .clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    }

    /// Advance the constant +Z drift by one timestep.
    pub fn advance_drift(&mut self, dt: f32) {
        self.position.z += self.drift_speed * dt;
    }

    /// Update the projection aspect ratio after a window resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Current clamped orbit distance.
    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Eye position: the drift anchor plus the rotated orbit offset.
    pub fn eye(&self) -> Vec3 {
        let rotation =
            Mat4::from_rotation_x(self.rotation_x) * Mat4::from_rotation_y(self.rotation_y);
        let offset = rotation.transform_vector3(Vec3::new(0.0, 0.0, -self.orbit_distance));
        self.position + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Reverse-Z projection: near and far planes are swapped so depth 1.0
    /// is the near plane and 0.0 the far plane.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.far, self.near)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
        }
    }
}
