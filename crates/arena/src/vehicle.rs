//! Capability traits for the vehicle dynamics collaborator.

use physics::transform::IDENTITY;
use physics::{PhysicsError, Quadcopter, QuadcopterConfig, Vec3};

/// A simulated vehicle the harness can drive.
pub trait Vehicle {
    /// Set the four actuator commands.
    fn set_actuators(&mut self, commands: [f64; 4]);

    /// Advance position, velocity and clock by `dt` seconds.
    fn step(&mut self, dt: f64) -> Result<(), PhysicsError>;

    fn position(&self) -> Vec3;

    /// Simulated time since spawn, in seconds.
    fn clock(&self) -> f64;

    /// Attitude as `[x, y, z, w]`; only used for visualization.
    fn orientation(&self) -> [f64; 4] {
        IDENTITY
    }
}

/// Factory for fresh vehicles, one per evaluation run.
pub trait Dynamics {
    type Vehicle: Vehicle;

    /// A vehicle at rest at `position` with its clock at zero.
    fn spawn(&self, position: Vec3) -> Self::Vehicle;
}

impl Vehicle for Quadcopter {
    fn set_actuators(&mut self, [m0, m1, m2, m3]: [f64; 4]) {
        self.set_thrust(m0, m1, m2, m3);
    }

    fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        Quadcopter::step(self, dt)
    }

    fn position(&self) -> Vec3 {
        Quadcopter::position(self)
    }

    fn clock(&self) -> f64 {
        self.t()
    }

    fn orientation(&self) -> [f64; 4] {
        Quadcopter::orientation(self)
    }
}

impl Dynamics for QuadcopterConfig {
    type Vehicle = Quadcopter;

    fn spawn(&self, position: Vec3) -> Quadcopter {
        Quadcopter::new(self.clone(), position)
    }
}
