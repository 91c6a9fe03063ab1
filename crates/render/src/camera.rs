//! Fixed perspective camera
//!
//! Projects world points (z up) onto image pixels.

use glam::{DMat4, DVec3, DVec4};
use physics::Vec3;

/// Pinhole camera looking at a fixed target
pub struct Camera {
    /// Camera position
    pub eye: DVec3,
    /// Point the camera looks at
    pub target: DVec3,
    /// Up vector
    pub up: DVec3,
    /// Render target aspect ratio
    pub aspect: f64,
    /// Field of view in radians
    pub fovy: f64,
    /// Near clipping plane distance
    pub znear: f64,
    /// Far clipping plane distance
    pub zfar: f64,
}

impl Camera {
    /// Camera framing the vertical axis between the ground and `focus_z`.
    #[must_use]
    pub fn new(width: u32, height: u32, focus_z: f64) -> Self {
        let target = DVec3::new(0.0, 0.0, focus_z * 0.5);
        Self {
            eye: target + DVec3::new(6.0, -8.0, 3.0),
            target,
            up: DVec3::Z,
            aspect: f64::from(width) / f64::from(height),
            fovy: 45.0f64.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Computes a view projection matrix from the camera parameters
    #[must_use]
    pub fn build_view_projection_matrix(&self) -> DMat4 {
        let view = DMat4::look_at_rh(self.eye, self.target, self.up);
        let proj = DMat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Pixel coordinates of `point`, or `None` when it lies behind the camera.
    #[must_use]
    pub fn project(&self, point: Vec3, width: u32, height: u32) -> Option<(f64, f64)> {
        let clip = self.build_view_projection_matrix()
            * DVec4::new(point.x, point.y, point.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let px = (ndc.x + 1.0) * 0.5 * f64::from(width);
        let py = (1.0 - ndc.y) * 0.5 * f64::from(height);
        Some((px, py))
    }
}
