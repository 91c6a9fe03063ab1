//! Scenario configuration
//!
//! A [`ScenarioConfig`] is validated once at construction and never changes
//! afterwards. The same validation runs when a scenario is deserialized.

use physics::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DURATION: f64 = 2.0;
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Fraction of a step below which clock drift is ignored when counting steps.
pub(crate) const STEP_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("duration must be positive and finite, got {0}")]
    NonPositiveDuration(f64),
    #[error("{name} altitude must be finite, got {value}")]
    NonFiniteAltitude { name: &'static str, value: f64 },
}

/// Parameters of the vertical flight task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioDoc", into = "ScenarioDoc")]
pub struct ScenarioConfig {
    start_altitude: f64,
    target_altitude: f64,
    duration_seconds: f64,
    time_step_seconds: f64,
    visualize: bool,
}

/// Wire form of [`ScenarioConfig`]; optional fields fall back to the defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioDoc {
    start_altitude: f64,
    target_altitude: f64,
    #[serde(default = "default_duration")]
    duration_seconds: f64,
    #[serde(default = "default_time_step")]
    time_step_seconds: f64,
    #[serde(default)]
    visualize: bool,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

impl TryFrom<ScenarioDoc> for ScenarioConfig {
    type Error = ConfigError;

    fn try_from(doc: ScenarioDoc) -> Result<Self, ConfigError> {
        Self {
            start_altitude: doc.start_altitude,
            target_altitude: doc.target_altitude,
            duration_seconds: doc.duration_seconds,
            time_step_seconds: doc.time_step_seconds,
            visualize: doc.visualize,
        }
        .validated()
    }
}

impl From<ScenarioConfig> for ScenarioDoc {
    fn from(c: ScenarioConfig) -> Self {
        Self {
            start_altitude: c.start_altitude,
            target_altitude: c.target_altitude,
            duration_seconds: c.duration_seconds,
            time_step_seconds: c.time_step_seconds,
            visualize: c.visualize,
        }
    }
}

impl ScenarioConfig {
    /// Fly from `start_altitude` to `target_altitude` with the default
    /// duration and time step, without visualization.
    pub fn new(start_altitude: f64, target_altitude: f64) -> Result<Self, ConfigError> {
        Self {
            start_altitude,
            target_altitude,
            duration_seconds: DEFAULT_DURATION,
            time_step_seconds: DEFAULT_TIME_STEP,
            visualize: false,
        }
        .validated()
    }

    pub fn with_duration(self, duration_seconds: f64) -> Result<Self, ConfigError> {
        Self { duration_seconds, ..self }.validated()
    }

    pub fn with_time_step(self, time_step_seconds: f64) -> Result<Self, ConfigError> {
        Self { time_step_seconds, ..self }.validated()
    }

    pub fn with_visualize(self, visualize: bool) -> Result<Self, ConfigError> {
        Self { visualize, ..self }.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !(self.time_step_seconds.is_finite() && self.time_step_seconds > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step_seconds));
        }
        if !(self.duration_seconds.is_finite() && self.duration_seconds > 0.0) {
            return Err(ConfigError::NonPositiveDuration(self.duration_seconds));
        }
        for (name, value) in [("start", self.start_altitude), ("target", self.target_altitude)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteAltitude { name, value });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn start_altitude(&self) -> f64 {
        self.start_altitude
    }

    #[must_use]
    pub fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    #[must_use]
    pub fn time_step_seconds(&self) -> f64 {
        self.time_step_seconds
    }

    #[must_use]
    pub fn visualize(&self) -> bool {
        self.visualize
    }

    /// Where the vehicle is spawned.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        Vec3::on_axis(self.start_altitude)
    }

    /// The target point, always on the vertical axis.
    #[must_use]
    pub fn setpoint(&self) -> Vec3 {
        Vec3::on_axis(self.target_altitude)
    }

    /// Number of steps in one run: `ceil(duration / dt)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_count(&self) -> usize {
        ((self.duration_seconds / self.time_step_seconds - STEP_TOLERANCE).ceil() as usize).max(1)
    }
}
