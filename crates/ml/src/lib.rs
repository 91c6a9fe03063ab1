#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Creature Policies
//!
//! Controllers that map observation vectors to motor commands: small
//! feed-forward networks ([`Network`] built from [`Dense`] layers) and a
//! hand-tuned [`AltitudeController`] baseline.

pub mod activation;
pub mod controller;
pub mod error;
pub mod nn;

pub use activation::Activation;
pub use controller::{AltitudeController, AltitudeGains, DEFAULT_HOVER};
pub use error::MlError;
pub use nn::{Dense, Network};
