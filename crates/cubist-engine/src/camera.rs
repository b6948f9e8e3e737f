//! Perspective camera.
//!
//! The demos share one fixed viewpoint; the camera exists so view/projection
//! setup is explicit configuration rather than scattered matrix code.

use glam::{Mat4, Vec3};

/// Look-at perspective camera.
///
/// Defaults reproduce the demo viewpoint: eye at `(0, 0, -8)` looking at the
/// origin, 45° vertical field of view, near 0.1, far 1000.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -8.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

impl Camera {
    /// View matrix (world → camera).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix for the given surface aspect ratio (width / height).
    ///
    /// Right-handed with a `[0, 1]` depth range, matching wgpu clip space.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect_ratio.max(f32::EPSILON), self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_moves_origin_to_eye_distance() {
        let cam = Camera::default();
        let origin_in_view = cam.view().transform_point3(Vec3::ZERO);
        // Camera sits 8 units from the origin along -Z; in view space the
        // origin ends up 8 units down the view axis.
        assert!((origin_in_view.length() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let cam = Camera::default();
        let proj = cam.projection(16.0 / 9.0);
        let p = proj.project_point3(Vec3::new(0.0, 0.0, -cam.z_near));
        assert!(p.z.abs() < 1e-5);
    }

    #[test]
    fn projection_tolerates_degenerate_aspect() {
        let cam = Camera::default();
        let proj = cam.projection(0.0);
        assert!(proj.is_finite());
    }
}
