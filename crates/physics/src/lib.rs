#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::many_single_char_names)]
//! # Quadrotor Physics
//!
//! A small rigid-body model of a `+` configuration quadrotor, stepped on the
//! CPU with a fixed time step.
//!
//! ## Key Components
//!
//! -   **Vehicle:** [`Quadcopter`] owns position, velocity, attitude, motor
//!     commands and a simulated clock. Its parameters live in
//!     [`QuadcopterConfig`].
//! -   **Integration:** the [`integrator`] module advances linear and angular
//!     state with semi-implicit Euler, and [`transform`] wraps the quaternion
//!     math.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Quadcopter, QuadcopterConfig, Vec3};
//!
//! let mut quad = Quadcopter::new(QuadcopterConfig::default(), Vec3::new(0.0, 0.0, 3.0));
//! let hover = quad.hover_command();
//! quad.set_thrust(hover, hover, hover, hover);
//! quad.run(0.01, 100).unwrap();
//! assert!((quad.position().z - 3.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod integrator;
pub mod quadcopter;
pub mod transform;
pub mod types;

pub use error::PhysicsError;
pub use quadcopter::{Quadcopter, QuadcopterConfig};
pub use types::Vec3;
