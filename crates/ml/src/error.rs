use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlError {
    #[error("layer expects {expected} weights ({out_dim}x{in_dim}), got {actual}")]
    WeightCount { expected: usize, actual: usize, in_dim: usize, out_dim: usize },
    #[error("layer expects {expected} biases, got {actual}")]
    BiasCount { expected: usize, actual: usize },
    #[error("layer {index} takes {expected} inputs but the previous layer produces {actual}")]
    LayerMismatch { index: usize, expected: usize, actual: usize },
    #[error("network expects {expected} inputs, got {actual}")]
    InputArity { expected: usize, actual: usize },
    #[error("network has no layers")]
    EmptyNetwork,
    #[error("invalid network document: {0}")]
    Json(#[from] serde_json::Error),
}
