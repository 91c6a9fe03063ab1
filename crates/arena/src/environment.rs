//! # Simulation Driver
//!
//! [`Environment`] runs one creature through the flight task: spawn a fresh
//! vehicle at the start altitude, then step it in lockstep with the policy
//! until the vehicle clock reaches the scenario duration, scoring every step.

use crate::config::{ScenarioConfig, STEP_TOLERANCE};
use crate::error::EvalError;
use crate::fitness::FitnessAccumulator;
use crate::policy::Policy;
use crate::vehicle::{Dynamics, Vehicle};
use crate::visualize::{select_sink, Frame, Marker, Visualizer};
use physics::QuadcopterConfig;

/// Diagnostics for a single simulation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub step: usize,
    /// Vehicle clock after the step
    pub t: f64,
    pub altitude: f64,
    /// Command applied to all four actuators
    pub command: f64,
    pub distance: f64,
    pub penalty: f64,
    pub contribution: f64,
}

/// Result of [`Environment::evaluate_detailed`].
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationReport {
    pub fitness: f64,
    pub steps: Vec<StepRecord>,
}

impl EvaluationReport {
    /// Steps that paid the overshoot penalty.
    pub fn penalized_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| s.penalty > 1.0)
    }
}

/// The evaluation harness.
pub struct Environment<D: Dynamics = QuadcopterConfig> {
    config: ScenarioConfig,
    dynamics: D,
    visualizer: Box<dyn Visualizer>,
}

impl<D: Dynamics> Environment<D> {
    /// Build a harness, choosing the visualization sink from the scenario.
    pub fn new(config: ScenarioConfig, dynamics: D) -> Self {
        let visualizer = select_sink(&config);
        Self::with_visualizer(config, dynamics, visualizer)
    }

    /// Build a harness with an explicit sink. The sink is only used when the
    /// scenario enables visualization.
    pub fn with_visualizer(config: ScenarioConfig, dynamics: D, visualizer: Box<dyn Visualizer>) -> Self {
        let mut env = Self { config, dynamics, visualizer };
        if env.config.visualize() {
            let markers = [
                (env.config.start(), Marker::Start),
                (env.config.setpoint(), Marker::Target),
            ];
            for (point, marker) in markers {
                if let Err(e) = env.visualizer.mark(point, marker) {
                    tracing::warn!(?marker, "visualization failed: {e:#}");
                }
            }
        }
        env
    }

    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Fly `policy` through the scenario and return its fitness (lower is better).
    pub fn evaluate(&mut self, policy: &mut dyn Policy) -> Result<f64, EvalError> {
        self.run(policy, |_| {})
    }

    /// Like [`evaluate`](Self::evaluate), also returning a record of every step.
    pub fn evaluate_detailed(&mut self, policy: &mut dyn Policy) -> Result<EvaluationReport, EvalError> {
        let mut steps = Vec::with_capacity(self.config.step_count());
        let fitness = self.run(policy, |record| steps.push(record))?;
        Ok(EvaluationReport { fitness, steps })
    }

    fn run(&mut self, policy: &mut dyn Policy, mut on_step: impl FnMut(StepRecord)) -> Result<f64, EvalError> {
        let setpoint = self.config.target_altitude();
        let dt = self.config.time_step_seconds();
        // any positive duration gets at least one step
        let end = (self.config.duration_seconds() - dt * STEP_TOLERANCE).max(f64::MIN_POSITIVE);

        let mut vehicle = self.dynamics.spawn(self.config.start());
        let mut accumulator = FitnessAccumulator::new();
        policy.reset();
        tracing::debug!(
            start = self.config.start_altitude(),
            setpoint,
            steps = self.config.step_count(),
            "evaluation started"
        );

        let mut fitness = 0.0;
        let mut step = 0;
        while vehicle.clock() < end {
            let observation = [setpoint, vehicle.position().z];
            let outputs = policy
                .run_step(&observation)
                .map_err(|e| EvalError::Policy { step, source: e.into() })?;
            let command = match outputs.as_slice() {
                [command] => *command,
                _ => {
                    return Err(EvalError::ContractViolation { step, expected: 1, actual: outputs.len() })
                }
            };

            vehicle.set_actuators([command; 4]);
            vehicle.step(dt)?;

            let position = vehicle.position();
            let score = accumulator.score_step(position, setpoint);
            fitness += score.contribution;
            tracing::trace!(step, z = position.z, command, contribution = score.contribution);
            on_step(StepRecord {
                step,
                t: vehicle.clock(),
                altitude: position.z,
                command,
                distance: score.distance,
                penalty: score.penalty,
                contribution: score.contribution,
            });

            if self.config.visualize() {
                self.show(&vehicle);
            }
            step += 1;
        }

        tracing::debug!(fitness, steps = step, "evaluation finished");
        Ok(fitness)
    }

    fn show(&mut self, vehicle: &D::Vehicle) {
        let frame = Frame {
            position: vehicle.position(),
            orientation: vehicle.orientation(),
            t: vehicle.clock(),
        };
        let shown = self
            .visualizer
            .update(&frame)
            .and_then(|()| self.visualizer.show_step());
        if let Err(e) = shown {
            tracing::warn!(t = frame.t, "visualization failed: {e:#}");
        }
    }
}
