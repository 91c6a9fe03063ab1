#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! JSON documents describing creatures and scenarios.
//!
//! ```json
//! { "kind": "network", "layers": [ { "inputs": 2, "outputs": 1, "weights": [0.4, -0.4], "bias": [0.5] } ] }
//! { "kind": "random_network", "sizes": [2, 8, 1], "seed": 7 }
//! { "kind": "altitude_controller", "kp": 0.3 }
//! ```

use anyhow::{Context, Result};
use arena::{Policy, ScenarioConfig};
use ml::{Activation, AltitudeController, AltitudeGains, Dense, Network};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Creature {
    #[serde(rename = "network")]
    Network { layers: Vec<LayerDef> },
    #[serde(rename = "random_network")]
    RandomNetwork {
        sizes: Vec<usize>,
        #[serde(default = "default_hidden")]
        hidden: Activation,
        #[serde(default = "default_output")]
        output: Activation,
        seed: u64,
    },
    #[serde(rename = "altitude_controller")]
    AltitudeController {
        #[serde(default)]
        hover: Option<f64>,
        #[serde(default)]
        kp: Option<f64>,
        #[serde(default)]
        kd: Option<f64>,
        #[serde(default)]
        dt: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerDef {
    pub inputs: usize,
    pub outputs: usize,
    /// Row-major, one row of `inputs` weights per output
    pub weights: Vec<f64>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

fn default_hidden() -> Activation {
    Activation::Tanh
}

fn default_output() -> Activation {
    Activation::Sigmoid
}

impl FromStr for Creature {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Network> for Creature {
    fn from(net: &Network) -> Self {
        let layers = net
            .layers()
            .iter()
            .map(|l| LayerDef {
                inputs: l.in_dim,
                outputs: l.out_dim,
                weights: l.w.clone(),
                bias: l.b.clone(),
                activation: l.activation,
            })
            .collect();
        Creature::Network { layers }
    }
}

impl Creature {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading creature {}", path.display()))?;
        let creature: Self = json
            .parse()
            .with_context(|| format!("parsing creature {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?creature, "creature loaded");
        Ok(creature)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing creature {}", path.display()))
    }

    /// Build the network described by a network document.
    pub fn into_network(self) -> Result<Network> {
        match self {
            Creature::Network { layers } => {
                let layers = layers
                    .into_iter()
                    .enumerate()
                    .map(|(i, l)| {
                        Dense::new(l.weights, l.bias, l.inputs, l.outputs, l.activation)
                            .with_context(|| format!("layer {i}"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Network::new(layers)?)
            }
            Creature::RandomNetwork { sizes, hidden, output, seed } => {
                Ok(Network::random(&sizes, hidden, output, seed)?)
            }
            Creature::AltitudeController { .. } => {
                anyhow::bail!("an altitude controller is not a network")
            }
        }
    }

    /// Instantiate the creature. `default_dt` is used by controllers that
    /// need the step size and do not specify one.
    pub fn into_policy(self, default_dt: f64) -> Result<Box<dyn Policy>> {
        match self {
            Creature::AltitudeController { hover, kp, kd, dt } => {
                let defaults = AltitudeGains::default();
                let gains = AltitudeGains {
                    hover: hover.unwrap_or(defaults.hover),
                    kp: kp.unwrap_or(defaults.kp),
                    kd: kd.unwrap_or(defaults.kd),
                };
                Ok(Box::new(AltitudeController::new(gains, dt.unwrap_or(default_dt))))
            }
            network => Ok(Box::new(network.into_network()?)),
        }
    }
}

/// Read a [`ScenarioConfig`] from a JSON file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let config: ScenarioConfig =
        serde_json::from_str(&json).with_context(|| format!("parsing scenario {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "scenario loaded");
    Ok(config)
}
