//! # Rigid Body Integration
//!
//! Semi-implicit Euler: velocities are updated first and the new velocities
//! drive the position update.

use crate::transform::integrate_orientation;
use crate::types::Vec3;

/// Translational state of a single body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearState {
    pub pos: Vec3,
    pub vel: Vec3,
}

/// Rotational state of a single body; `angular_vel` is expressed in the body frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularState {
    pub orientation: [f64; 4],
    pub angular_vel: Vec3,
}

pub fn integrate_linear(state: &mut LinearState, acceleration: Vec3, dt: f64) {
    state.vel += acceleration * dt;
    state.pos += state.vel * dt;
}

/// Euler's rotation equations for a diagonal inertia tensor.
#[must_use]
pub fn angular_acceleration(torque: Vec3, angular_vel: Vec3, inertia: Vec3) -> Vec3 {
    let gyroscopic = angular_vel.cross(angular_vel.scale(inertia));
    let net = torque - gyroscopic;
    Vec3::new(net.x / inertia.x, net.y / inertia.y, net.z / inertia.z)
}

pub fn integrate_angular(state: &mut AngularState, torque: Vec3, inertia: Vec3, dt: f64) {
    let alpha = angular_acceleration(torque, state.angular_vel, inertia);
    state.angular_vel += alpha * dt;
    state.orientation = integrate_orientation(state.orientation, state.angular_vel, dt);
}

/// Keep a body above a horizontal ground plane, killing downward velocity on contact.
pub fn clamp_to_ground(state: &mut LinearState, ground_z: f64) {
    if state.pos.z < ground_z {
        state.pos.z = ground_z;
        if state.vel.z < 0.0 {
            state.vel.z = 0.0;
        }
    }
}
