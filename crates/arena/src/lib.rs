#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! # Arena: Creature Evaluation Harness
//!
//! Scores a control policy ("creature") on a vertical flight task: a
//! quadrotor starts at one altitude and must reach and hold another. The
//! score is the time-integrated distance to the setpoint, with steps that
//! move away from it counted three times. Lower is better.
//!
//! ## Key Components
//!
//! -   **Scenario:** [`ScenarioConfig`] holds the validated task parameters.
//! -   **Driver:** [`Environment`] owns a run: it spawns a vehicle through a
//!     [`Dynamics`] factory, queries the [`Policy`] each step and feeds the
//!     optional [`Visualizer`].
//! -   **Scoring:** [`FitnessAccumulator`] applies the overshoot penalty.
//!
//! Every collaborator sits behind a narrow trait, so tests can swap in
//! scripted vehicles and policies.
//!
//! ```rust
//! use arena::{Environment, ScenarioConfig};
//! use ml::{AltitudeController, AltitudeGains};
//! use physics::QuadcopterConfig;
//!
//! let config = ScenarioConfig::new(3.0, 5.0)?;
//! let mut env = Environment::new(config, QuadcopterConfig::default());
//! let mut creature = AltitudeController::new(AltitudeGains::default(), 0.01);
//! let fitness = env.evaluate(&mut creature)?;
//! assert!(fitness > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod fitness;
pub mod policy;
pub mod vehicle;
pub mod visualize;

pub use config::{ConfigError, ScenarioConfig};
pub use environment::{Environment, EvaluationReport, StepRecord};
pub use error::EvalError;
pub use fitness::{FitnessAccumulator, StepScore, OVERSHOOT_PENALTY, STEADY_PENALTY};
pub use policy::{policy_fn, FnPolicy, Policy};
pub use vehicle::{Dynamics, Vehicle};
pub use visualize::{Frame, Marker, NoopVisualizer, Visualizer};
