//! The creature under evaluation, seen as an observation-to-command function.

use anyhow::ensure;
use ml::{AltitudeController, Network};

/// A control policy.
///
/// Each call receives `[setpoint, measured_altitude]` and must return exactly
/// one actuator command.
pub trait Policy {
    fn run_step(&mut self, inputs: &[f64]) -> anyhow::Result<Vec<f64>>;

    /// Called before every evaluation run. Stateful policies clear their
    /// memory here so repeated runs stay comparable.
    fn reset(&mut self) {}
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn run_step(&mut self, inputs: &[f64]) -> anyhow::Result<Vec<f64>> {
        (**self).run_step(inputs)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl Policy for Network {
    fn run_step(&mut self, inputs: &[f64]) -> anyhow::Result<Vec<f64>> {
        Ok(self.forward(inputs)?)
    }
}

impl Policy for AltitudeController {
    fn run_step(&mut self, inputs: &[f64]) -> anyhow::Result<Vec<f64>> {
        ensure!(inputs.len() == 2, "altitude controller expects 2 inputs, got {}", inputs.len());
        Ok(vec![self.command(inputs[0], inputs[1])])
    }

    fn reset(&mut self) {
        AltitudeController::reset(self);
    }
}

/// Adapter turning a closure into a [`Policy`].
pub struct FnPolicy<F>(pub F);

impl<F> Policy for FnPolicy<F>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn run_step(&mut self, inputs: &[f64]) -> anyhow::Result<Vec<f64>> {
        Ok((self.0)(inputs))
    }
}

pub fn policy_fn<F>(f: F) -> FnPolicy<F>
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    FnPolicy(f)
}
