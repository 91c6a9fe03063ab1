//! Optional visualization sink.
//!
//! Visualization never influences control flow or fitness: the driver logs
//! and drops every error a sink returns.

use crate::config::ScenarioConfig;
use physics::Vec3;

/// Fixed points shown in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    Target,
}

/// Vehicle state handed to the sink after every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: Vec3,
    pub orientation: [f64; 4],
    pub t: f64,
}

pub trait Visualizer {
    fn mark(&mut self, point: Vec3, marker: Marker) -> anyhow::Result<()>;

    fn update(&mut self, frame: &Frame) -> anyhow::Result<()>;

    /// Render or flush the current step.
    fn show_step(&mut self) -> anyhow::Result<()>;
}

/// Sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    fn mark(&mut self, _point: Vec3, _marker: Marker) -> anyhow::Result<()> {
        Ok(())
    }

    fn update(&mut self, _frame: &Frame) -> anyhow::Result<()> {
        Ok(())
    }

    fn show_step(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "render")]
impl Visualizer for render::QuadPlotter {
    fn mark(&mut self, point: Vec3, marker: Marker) -> anyhow::Result<()> {
        let color = match marker {
            Marker::Start => render::GREEN,
            Marker::Target => render::RED,
        };
        self.add_marker(point, color);
        Ok(())
    }

    fn update(&mut self, frame: &Frame) -> anyhow::Result<()> {
        render::QuadPlotter::update(self, frame.position, frame.orientation);
        Ok(())
    }

    fn show_step(&mut self) -> anyhow::Result<()> {
        render::QuadPlotter::show_step(self).map(|_| ())
    }
}

/// Pick the sink for a scenario: the PNG plotter when visualization is
/// requested and compiled in, the no-op sink otherwise.
#[must_use]
pub fn select_sink(config: &ScenarioConfig) -> Box<dyn Visualizer> {
    if !config.visualize() {
        return Box::new(NoopVisualizer);
    }
    plotter_sink(config)
}

#[cfg(feature = "render")]
fn plotter_sink(config: &ScenarioConfig) -> Box<dyn Visualizer> {
    let plotter_config = render::PlotterConfig {
        focus_altitude: config.start_altitude().max(config.target_altitude()) + 1.0,
        ..render::PlotterConfig::default()
    };
    match render::QuadPlotter::new(plotter_config) {
        Ok(plotter) => Box::new(plotter),
        Err(e) => {
            tracing::warn!("visualization disabled, plotter unavailable: {e:#}");
            Box::new(NoopVisualizer)
        }
    }
}

#[cfg(not(feature = "render"))]
fn plotter_sink(_config: &ScenarioConfig) -> Box<dyn Visualizer> {
    tracing::warn!("visualization requested but this build has no `render` feature");
    Box::new(NoopVisualizer)
}
