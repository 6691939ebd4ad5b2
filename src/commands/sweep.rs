//! Parameter sweep: final yield across one control's range.

use super::ParameterArgs;
use anyhow::{Context, Result};
use clap::Args;
use psi_hydrogen::{AppConfig, Controls, ParameterKind, SimulationParameters, Simulator, SolverResult};
use tracing::info;

/// Sweep arguments
#[derive(Args)]
pub struct SweepArgs {
    /// Parameter to vary (temperature, concentration, area, duration)
    #[arg(value_parser = parse_kind)]
    pub parameter: ParameterKind,

    /// Number of values across the control range
    #[arg(long, default_value = "11")]
    pub steps: usize,

    /// Fixed values for the other parameters
    #[command(flatten)]
    pub params: ParameterArgs,
}

fn parse_kind(s: &str) -> Result<ParameterKind, psi_hydrogen::ControlError> {
    s.parse()
}

/// One row of a sweep: parameter value and final yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub value: f64,
    pub final_yield: f64,
}

/// Runs one simulation per swept value, others held at `base`.
pub fn sweep(
    simulator: &Simulator,
    controls: &Controls,
    base: SimulationParameters,
    kind: ParameterKind,
    steps: usize,
) -> SolverResult<Vec<SweepRow>> {
    controls
        .get(kind)
        .sweep(steps)
        .into_iter()
        .map(|value| -> SolverResult<SweepRow> {
            let trajectory = simulator.run(kind.set(base, value))?;
            Ok(SweepRow { value, final_yield: trajectory.final_yield().unwrap_or(0.0) })
        })
        .collect()
}

/// Formats sweep rows as a table.
pub fn format_table(kind: ParameterKind, rows: &[SweepRow]) -> String {
    let mut table = format!("{:>28}  {:>18}\n", kind.label(), "Final H2 (% mass)");
    for row in rows {
        table.push_str(&format!("{:>28}  {:>18.6e}\n", row.value, row.final_yield));
    }
    table
}

/// Execute the sweep command
pub fn execute(args: SweepArgs, config: &AppConfig) -> Result<()> {
    let controls = config.controls();
    let base = args.params.resolve(&controls);
    info!(parameter = args.parameter.name(), steps = args.steps, "starting sweep");

    let rows = sweep(&config.simulator(), &controls, base, args.parameter, args.steps).context("sweep failed")?;
    print!("{}", format_table(args.parameter, &rows));
    Ok(())
}
