use crate::activation::Activation;
use crate::error::MlError;
use serde::{Deserialize, Serialize};

/// A fully connected neural network layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DenseDoc")]
pub struct Dense {
    /// Row-major `[out_dim, in_dim]` weight matrix.
    pub w: Vec<f64>,
    /// The bias vector for the layer.
    pub b: Vec<f64>,
    pub in_dim: usize,
    pub out_dim: usize,
    pub activation: Activation,
}

#[derive(Deserialize)]
struct DenseDoc {
    w: Vec<f64>,
    b: Vec<f64>,
    in_dim: usize,
    out_dim: usize,
    #[serde(default)]
    activation: Activation,
}

impl TryFrom<DenseDoc> for Dense {
    type Error = MlError;

    fn try_from(doc: DenseDoc) -> Result<Self, MlError> {
        Dense::new(doc.w, doc.b, doc.in_dim, doc.out_dim, doc.activation)
    }
}

impl Dense {
    /// Creates a new `Dense` layer with the given weights and biases.
    pub fn new(
        weights: Vec<f64>,
        bias: Vec<f64>,
        in_d: usize,
        out_d: usize,
        activation: Activation,
    ) -> Result<Self, MlError> {
        if weights.len() != in_d * out_d {
            return Err(MlError::WeightCount {
                expected: in_d * out_d,
                actual: weights.len(),
                in_dim: in_d,
                out_dim: out_d,
            });
        }
        if bias.len() != out_d {
            return Err(MlError::BiasCount { expected: out_d, actual: bias.len() });
        }
        Ok(Self { w: weights, b: bias, in_dim: in_d, out_dim: out_d, activation })
    }

    /// Glorot-uniform weights, zero bias.
    pub fn random(in_d: usize, out_d: usize, activation: Activation, rng: &mut fastrand::Rng) -> Self {
        let limit = (6.0 / (in_d + out_d) as f64).sqrt();
        let w = (0..in_d * out_d)
            .map(|_| rng.f64() * 2.0 * limit - limit)
            .collect();
        Self { w, b: vec![0.0; out_d], in_dim: in_d, out_dim: out_d, activation }
    }

    /// Performs the forward pass through the layer.
    pub fn forward(&self, x: &[f64]) -> Result<Vec<f64>, MlError> {
        if x.len() != self.in_dim {
            return Err(MlError::InputArity { expected: self.in_dim, actual: x.len() });
        }
        Ok((0..self.out_dim)
            .map(|o| {
                let row = &self.w[o * self.in_dim..(o + 1) * self.in_dim];
                let wx: f64 = row.iter().zip(x).map(|(w, x)| w * x).sum();
                self.activation.apply(wx + self.b[o])
            })
            .collect())
    }
}

/// A feed-forward stack of [`Dense`] layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetworkDoc")]
pub struct Network {
    layers: Vec<Dense>,
}

#[derive(Deserialize)]
struct NetworkDoc {
    layers: Vec<Dense>,
}

impl TryFrom<NetworkDoc> for Network {
    type Error = MlError;

    fn try_from(doc: NetworkDoc) -> Result<Self, MlError> {
        Network::new(doc.layers)
    }
}

impl Network {
    /// Chains `layers`, checking that each layer consumes what the previous one produces.
    pub fn new(layers: Vec<Dense>) -> Result<Self, MlError> {
        if layers.is_empty() {
            return Err(MlError::EmptyNetwork);
        }
        for (index, pair) in layers.windows(2).enumerate() {
            if pair[1].in_dim != pair[0].out_dim {
                return Err(MlError::LayerMismatch {
                    index: index + 1,
                    expected: pair[1].in_dim,
                    actual: pair[0].out_dim,
                });
            }
        }
        Ok(Self { layers })
    }

    /// Random network with layer widths `sizes`, e.g. `[2, 8, 1]`.
    ///
    /// Hidden layers use `hidden`; the last layer uses `output`.
    pub fn random(sizes: &[usize], hidden: Activation, output: Activation, seed: u64) -> Result<Self, MlError> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let count = sizes.len().saturating_sub(1);
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, dims)| {
                let activation = if i + 1 == count { output } else { hidden };
                Dense::random(dims[0], dims[1], activation, &mut rng)
            })
            .collect();
        tracing::debug!(?sizes, seed, "random network");
        Self::new(layers)
    }

    pub fn from_json(json: &str) -> Result<Self, MlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MlError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.layers[0].in_dim
    }

    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1].out_dim
    }

    /// Number of trainable parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|l| l.w.len() + l.b.len()).sum()
    }

    pub fn forward(&self, x: &[f64]) -> Result<Vec<f64>, MlError> {
        let mut activations = self.layers[0].forward(x)?;
        for layer in &self.layers[1..] {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}
