//! Run a single simulation.

use super::ParameterArgs;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use psi_hydrogen::render::{self, ChartStyle};
use psi_hydrogen::{AppConfig, SimulationParameters, Trajectory};
use serde_json::json;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Output formats for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text chart plus summary
    Text,
    /// time_h,h2_percent_mass rows
    Csv,
    /// Parameters, rate constant and trajectory
    Json,
}

/// Run arguments
#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart width [characters]
    #[arg(long, default_value = "64")]
    pub width: usize,

    /// Chart height [lines]
    #[arg(long, default_value = "16")]
    pub height: usize,
}

/// Formats one run in the requested format.
pub fn format_output(
    format: OutputFormat,
    params: &SimulationParameters,
    rate_constant: f64,
    trajectory: &Trajectory,
    style: ChartStyle,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render::render_report(params, trajectory, style),
        OutputFormat::Csv => trajectory.to_csv(),
        OutputFormat::Json => {
            let document = json!({
                "parameters": params,
                "rate_constant": rate_constant,
                "final_yield": trajectory.final_yield(),
                "trajectory": trajectory,
            });
            serde_json::to_string_pretty(&document)? + "\n"
        }
    })
}

/// Execute the run command
pub fn execute(args: RunArgs, config: &AppConfig) -> Result<()> {
    let controls = config.controls();
    let simulator = config.simulator();
    let params = args.params.resolve(&controls);
    info!(?params, "starting run");

    let start = Instant::now();
    let trajectory = simulator.run(params).context("simulation failed")?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1e3, "run complete");

    let rate_constant = simulator.generator(params).rate_constant();
    let style = ChartStyle { width: args.width, height: args.height };
    let output = format_output(args.format, &params, rate_constant, &trajectory, style)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))?;
            info!("output written to {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
