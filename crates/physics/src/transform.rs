//! Orientation helpers
//!
//! Orientations are stored as `[x, y, z, w]` quaternions. The heavy lifting is
//! delegated to `glam`'s double precision types.

use crate::types::Vec3;
use glam::{DQuat, DVec3};

/// Identity orientation in `[x, y, z, w]` order.
pub const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[must_use]
pub fn to_quat(orientation: [f64; 4]) -> DQuat {
    DQuat::from_xyzw(orientation[0], orientation[1], orientation[2], orientation[3])
}

#[must_use]
pub fn from_quat(q: DQuat) -> [f64; 4] {
    [q.x, q.y, q.z, q.w]
}

/// Rotate a body-frame vector into the world frame.
#[must_use]
pub fn body_to_world(orientation: [f64; 4], v: Vec3) -> Vec3 {
    (to_quat(orientation) * DVec3::from(v)).into()
}

/// Advance an orientation by a body-frame angular velocity over `dt`.
///
/// Uses the exponential map so a zero rate leaves the orientation untouched.
#[must_use]
pub fn integrate_orientation(orientation: [f64; 4], angular_vel: Vec3, dt: f64) -> [f64; 4] {
    let delta = DQuat::from_scaled_axis(DVec3::from(angular_vel * dt));
    from_quat((to_quat(orientation) * delta).normalize())
}

/// Tilt of the body z axis away from world z, in radians.
#[must_use]
pub fn tilt_angle(orientation: [f64; 4]) -> f64 {
    let up = body_to_world(orientation, Vec3::Z);
    up.z.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rotation_is_exact() {
        let v = Vec3::new(0.25, -1.5, 8.0);
        assert_eq!(body_to_world(IDENTITY, v), v);
    }

    #[test]
    fn zero_rate_keeps_orientation() {
        let q = integrate_orientation(IDENTITY, Vec3::ZERO, 0.01);
        assert_eq!(q, IDENTITY);
    }

    #[test]
    fn roll_rate_tilts_body() {
        let q = integrate_orientation(IDENTITY, Vec3::new(1.0, 0.0, 0.0), 0.5);
        assert!((tilt_angle(q) - 0.5).abs() < 1e-12);
    }
}
