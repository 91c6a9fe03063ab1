use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    /// The policy produced the wrong number of actuator commands.
    #[error("policy returned {actual} outputs at step {step}, expected exactly {expected}")]
    ContractViolation { step: usize, expected: usize, actual: usize },
    #[error("policy failed at step {step}: {source}")]
    Policy {
        step: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("vehicle dynamics failed: {0}")]
    Dynamics(#[from] PhysicsError),
}
