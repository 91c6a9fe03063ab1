//! Wires the scenario, creature and visualization together for one run.

use anyhow::Result;
use arena::{Environment, EvaluationReport, Policy, ScenarioConfig, Visualizer};
use ml::Activation;
use phenotype::Creature;
use physics::QuadcopterConfig;

use crate::Cli;

const RANDOM_LAYOUT: [usize; 3] = [2, 8, 1];

pub fn run(cli: &Cli) -> Result<EvaluationReport> {
    let config = scenario(cli)?;
    let creature = creature(cli)?;
    tracing::info!(
        start = config.start_altitude(),
        target = config.target_altitude(),
        steps = config.step_count(),
        "evaluating {}",
        describe(&creature)
    );

    let mut policy: Box<dyn Policy> = creature.into_policy(config.time_step_seconds())?;
    let mut env = match visualizer(cli, &config) {
        Some(sink) => Environment::with_visualizer(config, QuadcopterConfig::default(), sink),
        None => Environment::new(config, QuadcopterConfig::default()),
    };

    let report = env.evaluate_detailed(&mut *policy)?;
    tracing::info!(
        fitness = report.fitness,
        overshoots = report.penalized_steps().count(),
        "evaluation finished"
    );
    Ok(report)
}

/// Scenario from file or defaults, with command-line overrides applied.
pub fn scenario(cli: &Cli) -> Result<ScenarioConfig> {
    let base = match &cli.scenario {
        Some(path) => phenotype::load_scenario(path)?,
        None => ScenarioConfig::new(cli.start.unwrap_or(0.0), cli.target.unwrap_or(5.0))?,
    };
    let mut config = if cli.start.is_some() || cli.target.is_some() {
        ScenarioConfig::new(
            cli.start.unwrap_or(base.start_altitude()),
            cli.target.unwrap_or(base.target_altitude()),
        )?
        .with_duration(base.duration_seconds())?
        .with_time_step(base.time_step_seconds())?
        .with_visualize(base.visualize())?
    } else {
        base
    };
    if let Some(duration) = cli.duration {
        config = config.with_duration(duration)?;
    }
    if let Some(dt) = cli.dt {
        config = config.with_time_step(dt)?;
    }
    if cli.draw || cli.frames.is_some() {
        config = config.with_visualize(true)?;
    }
    Ok(config)
}

pub fn creature(cli: &Cli) -> Result<Creature> {
    if let Some(path) = &cli.creature {
        return Creature::load(path);
    }
    Ok(match cli.seed {
        Some(seed) => Creature::RandomNetwork {
            sizes: RANDOM_LAYOUT.to_vec(),
            hidden: Activation::Tanh,
            output: Activation::Sigmoid,
            seed,
        },
        None => Creature::AltitudeController { hover: None, kp: None, kd: None, dt: None },
    })
}

fn describe(creature: &Creature) -> String {
    match creature {
        Creature::Network { layers } => format!("network with {} layers", layers.len()),
        Creature::RandomNetwork { sizes, seed, .. } => format!("random network {sizes:?} seed {seed}"),
        Creature::AltitudeController { .. } => "altitude controller".to_string(),
    }
}

/// An explicit plotter when a frame directory was given.
#[cfg(feature = "render")]
fn visualizer(cli: &Cli, config: &ScenarioConfig) -> Option<Box<dyn Visualizer>> {
    let plotter_config = render::PlotterConfig {
        output_dir: cli.frames.clone()?,
        focus_altitude: config.start_altitude().max(config.target_altitude()) + 1.0,
        ..render::PlotterConfig::default()
    };
    match render::QuadPlotter::new(plotter_config) {
        Ok(plotter) => Some(Box::new(plotter)),
        Err(e) => {
            tracing::warn!("drawing disabled: {e:#}");
            Some(Box::new(arena::NoopVisualizer))
        }
    }
}

#[cfg(not(feature = "render"))]
fn visualizer(cli: &Cli, _config: &ScenarioConfig) -> Option<Box<dyn Visualizer>> {
    if cli.frames.is_some() {
        tracing::warn!("--frames ignored, built without the `render` feature");
    }
    None
}
