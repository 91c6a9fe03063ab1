use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("vehicle state diverged at t={t}: non-finite position, velocity or attitude")]
    Diverged { t: f64 },
}
