//! Quadrotor entity
//!
//! A single rigid body lifted by four rotors in `+` configuration: motor 0 on
//! +x, motor 1 on +y, motor 2 on -x, motor 3 on -y. Motors 0 and 2 spin one
//! way and 1 and 3 the other, so their drag torques oppose around z.

use crate::error::PhysicsError;
use crate::integrator::{clamp_to_ground, integrate_angular, integrate_linear, AngularState, LinearState};
use crate::transform::{body_to_world, IDENTITY};
use crate::types::Vec3;
use serde::{Deserialize, Serialize};

/// Physical parameters of a quadrotor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadcopterConfig {
    /// Total mass in kg
    pub mass: f64,
    /// Gravitational acceleration in m/s², pointing down -z
    pub gravity: f64,
    /// Distance from the center of mass to each rotor in meters
    pub arm_length: f64,
    /// Thrust of one motor at full command, in newtons
    pub max_motor_thrust: f64,
    /// Linear drag coefficient (N per m/s)
    pub drag_coefficient: f64,
    /// Reaction torque per newton of rotor thrust
    pub yaw_torque_coefficient: f64,
    /// Diagonal of the body inertia tensor in kg·m²
    pub inertia: Vec3,
    /// Height of the ground plane; `None` lets the body fall forever
    pub ground_level: Option<f64>,
}

impl Default for QuadcopterConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: 9.81,
            arm_length: 0.17,
            max_motor_thrust: 5.0,
            drag_coefficient: 0.1,
            yaw_torque_coefficient: 0.01,
            inertia: Vec3::new(0.0123, 0.0123, 0.0224),
            ground_level: Some(0.0),
        }
    }
}

impl QuadcopterConfig {
    /// Motor command that exactly balances gravity when applied to all four rotors.
    #[must_use]
    pub fn hover_command(&self) -> f64 {
        self.mass * self.gravity / (4.0 * self.max_motor_thrust)
    }
}

/// A simulated quadrotor.
#[derive(Clone, Debug)]
pub struct Quadcopter {
    pub config: QuadcopterConfig,
    linear: LinearState,
    angular: AngularState,
    /// Motor commands in `[0, 1]`
    thrust: [f64; 4],
    /// Simulated time in seconds
    t: f64,
}

impl Quadcopter {
    /// Create a quadrotor at rest, level, at `position`, with its clock at zero.
    #[must_use]
    pub fn new(config: QuadcopterConfig, position: Vec3) -> Self {
        Self {
            config,
            linear: LinearState { pos: position, vel: Vec3::ZERO },
            angular: AngularState { orientation: IDENTITY, angular_vel: Vec3::ZERO },
            thrust: [0.0; 4],
            t: 0.0,
        }
    }

    /// Set the four motor commands. Values are clamped to `[0, 1]`; NaN is
    /// kept as is and surfaces as [`PhysicsError::Diverged`] on the next step.
    pub fn set_thrust(&mut self, m0: f64, m1: f64, m2: f64, m3: f64) {
        self.thrust = [m0, m1, m2, m3].map(|pwm| pwm.clamp(0.0, 1.0));
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        let cfg = &self.config;
        let [f0, f1, f2, f3] = self.thrust.map(|pwm| pwm * cfg.max_motor_thrust);

        // 1. Translational forces
        let lift = body_to_world(self.angular.orientation, Vec3::Z * (f0 + f1 + f2 + f3));
        let weight = Vec3::Z * (cfg.mass * cfg.gravity);
        let drag = self.linear.vel * cfg.drag_coefficient;
        let acceleration = (lift - weight - drag) / cfg.mass;

        // 2. Body torques
        let torque = Vec3::new(
            cfg.arm_length * (f1 - f3),
            cfg.arm_length * (f2 - f0),
            cfg.yaw_torque_coefficient * (f0 - f1 + f2 - f3),
        );

        // 3. Integrate
        integrate_linear(&mut self.linear, acceleration, dt);
        integrate_angular(&mut self.angular, torque, cfg.inertia, dt);
        if let Some(ground) = cfg.ground_level {
            clamp_to_ground(&mut self.linear, ground);
        }
        self.t += dt;

        if !self.is_finite() {
            tracing::debug!(t = self.t, "quadcopter state diverged");
            return Err(PhysicsError::Diverged { t: self.t });
        }
        Ok(())
    }

    /// Run `steps` steps with the current motor commands.
    pub fn run(&mut self, dt: f64, steps: usize) -> Result<(), PhysicsError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    fn is_finite(&self) -> bool {
        self.linear.pos.is_finite()
            && self.linear.vel.is_finite()
            && self.angular.angular_vel.is_finite()
            && self.angular.orientation.iter().all(|c| c.is_finite())
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.linear.pos
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.linear.vel
    }

    /// Orientation quaternion `[x, y, z, w]`.
    #[must_use]
    pub fn orientation(&self) -> [f64; 4] {
        self.angular.orientation
    }

    /// Body-frame angular velocity in rad/s.
    #[must_use]
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular.angular_vel
    }

    #[must_use]
    pub fn thrust(&self) -> [f64; 4] {
        self.thrust
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    #[must_use]
    pub fn hover_command(&self) -> f64 {
        self.config.hover_command()
    }
}
