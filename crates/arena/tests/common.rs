#![allow(dead_code)]

use arena::{Dynamics, Frame, Marker, Vehicle, Visualizer};
use physics::{PhysicsError, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

fn check_symmetric(commands: [f64; 4]) -> f64 {
    assert!(
        commands.iter().all(|c| c.to_bits() == commands[0].to_bits()),
        "actuators received different commands: {commands:?}"
    );
    commands[0]
}

/// Vehicle whose vertical velocity equals the command.
pub struct VelocityDynamics;

pub struct VelocityVehicle {
    pos: Vec3,
    t: f64,
    command: f64,
}

impl Vehicle for VelocityVehicle {
    fn set_actuators(&mut self, commands: [f64; 4]) {
        self.command = check_symmetric(commands);
    }

    fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        self.pos.z += self.command * dt;
        self.t += dt;
        Ok(())
    }

    fn position(&self) -> Vec3 {
        self.pos
    }

    fn clock(&self) -> f64 {
        self.t
    }
}

impl Dynamics for VelocityDynamics {
    type Vehicle = VelocityVehicle;

    fn spawn(&self, position: Vec3) -> VelocityVehicle {
        VelocityVehicle { pos: position, t: 0.0, command: 0.0 }
    }
}

/// Vehicle that jumps to the commanded altitude on every step.
pub struct TeleportDynamics;

pub struct TeleportVehicle {
    pos: Vec3,
    t: f64,
    command: f64,
}

impl Vehicle for TeleportVehicle {
    fn set_actuators(&mut self, commands: [f64; 4]) {
        self.command = check_symmetric(commands);
    }

    fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        self.pos.z = self.command;
        self.t += dt;
        Ok(())
    }

    fn position(&self) -> Vec3 {
        self.pos
    }

    fn clock(&self) -> f64 {
        self.t
    }
}

impl Dynamics for TeleportDynamics {
    type Vehicle = TeleportVehicle;

    fn spawn(&self, position: Vec3) -> TeleportVehicle {
        TeleportVehicle { pos: position, t: 0.0, command: 0.0 }
    }
}

#[derive(Default, Debug)]
pub struct SinkLog {
    pub marks: Vec<(Vec3, Marker)>,
    pub frames: Vec<Frame>,
    pub shown: usize,
}

/// Sink that records every call into a shared log.
pub struct RecordingVisualizer(pub Rc<RefCell<SinkLog>>);

impl Visualizer for RecordingVisualizer {
    fn mark(&mut self, point: Vec3, marker: Marker) -> anyhow::Result<()> {
        self.0.borrow_mut().marks.push((point, marker));
        Ok(())
    }

    fn update(&mut self, frame: &Frame) -> anyhow::Result<()> {
        self.0.borrow_mut().frames.push(*frame);
        Ok(())
    }

    fn show_step(&mut self) -> anyhow::Result<()> {
        self.0.borrow_mut().shown += 1;
        Ok(())
    }
}

/// Sink whose every call fails.
pub struct FailingVisualizer;

impl Visualizer for FailingVisualizer {
    fn mark(&mut self, _point: Vec3, _marker: Marker) -> anyhow::Result<()> {
        anyhow::bail!("no display")
    }

    fn update(&mut self, _frame: &Frame) -> anyhow::Result<()> {
        anyhow::bail!("no display")
    }

    fn show_step(&mut self) -> anyhow::Result<()> {
        anyhow::bail!("no display")
    }
}
