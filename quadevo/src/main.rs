//! # quadevo
//!
//! Runs one evaluation of a creature against a vertical flight scenario and
//! prints its fitness (lower is better). Set `RUST_LOG=arena=trace` to see
//! every step.

mod app;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Cli {
    /// Scenario JSON file
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Creature JSON file; defaults to the altitude controller
    #[arg(long)]
    pub creature: Option<PathBuf>,

    /// Starting altitude in metres
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<f64>,

    /// Target altitude in metres
    #[arg(long, allow_hyphen_values = true)]
    pub target: Option<f64>,

    /// Flight duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Simulation step in seconds
    #[arg(long)]
    pub dt: Option<f64>,

    /// Render PNG frames of the flight
    #[arg(long)]
    pub draw: bool,

    /// Directory for rendered frames; implies --draw
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Evaluate a random network with this seed instead of a creature file
    #[arg(long, conflicts_with = "creature")]
    pub seed: Option<u64>,

    /// Print a per-step breakdown
    #[arg(long)]
    pub detailed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let report = app::run(&cli)?;
    if cli.detailed {
        for s in &report.steps {
            println!(
                "{:>5} t={:.3} z={:.4} cmd={:.4} d={:.4} x{} {:.4}",
                s.step, s.t, s.altitude, s.command, s.distance, s.penalty, s.contribution
            );
        }
    }
    println!("{}", report.fitness);
    Ok(())
}
