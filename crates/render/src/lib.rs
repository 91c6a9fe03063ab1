#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Quadrotor Plotter
//!
//! A headless visualization sink: markers, a position trail and the vehicle
//! itself are drawn with a fixed perspective camera and written out as PNG
//! frames.

pub mod camera;
pub mod plotter;
pub mod raster;

pub use camera::Camera;
pub use plotter::{PlotterConfig, QuadPlotter, BLUE, GREEN, RED};
