//! # Fitness Accumulation
//!
//! Each step contributes the distance between the vehicle and the setpoint.
//! Steps that move the vehicle farther away than the previous step pay
//! [`OVERSHOOT_PENALTY`] times their distance, which favors trajectories that
//! converge monotonically over ones that oscillate around the target.

use physics::Vec3;

pub const STEADY_PENALTY: f64 = 1.0;
pub const OVERSHOOT_PENALTY: f64 = 3.0;

/// Breakdown of one step's contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepScore {
    pub distance: f64,
    pub penalty: f64,
    pub contribution: f64,
}

/// Per-run scoring state. Create a fresh accumulator for every run.
#[derive(Clone, Debug)]
pub struct FitnessAccumulator {
    previous_distance: Option<f64>,
}

impl Default for FitnessAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl FitnessAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self { previous_distance: None }
    }

    /// Distance scored by the last step, `-inf` before the first one.
    #[must_use]
    pub fn previous_distance(&self) -> f64 {
        self.previous_distance.unwrap_or(f64::NEG_INFINITY)
    }

    /// Score the vehicle at `position` against the setpoint `(0, 0, setpoint_altitude)`.
    pub fn score_step(&mut self, position: Vec3, setpoint_altitude: f64) -> StepScore {
        let distance = position.distance(Vec3::on_axis(setpoint_altitude));
        // the first step has nothing to overshoot; equal distance is steady
        let penalty = match self.previous_distance {
            Some(previous) if distance > previous => OVERSHOOT_PENALTY,
            _ => STEADY_PENALTY,
        };
        self.previous_distance = Some(distance);
        StepScore { distance, penalty, contribution: distance * penalty }
    }

    pub fn score(&mut self, position: Vec3, setpoint_altitude: f64) -> f64 {
        self.score_step(position, setpoint_altitude).contribution
    }
}
