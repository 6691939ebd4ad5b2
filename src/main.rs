//! psi-hydrogen command-line interface.
//!
//! Interactive front-end for the hydrogen release model: one-shot runs,
//! a slider-like interactive session, parameter sweeps and sensitivities.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Hydrogen generation from porous silicon: kinetics simulator
#[derive(Parser)]
#[command(name = "psi-hydrogen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Simulate hydrogen release from porous silicon in alkaline solution", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print the chart
    Run(commands::run::RunArgs),
    /// Adjust parameters interactively, re-rendering after every change
    Interactive(commands::interactive::InteractiveArgs),
    /// Vary one parameter across its range and tabulate the final yield
    Sweep(commands::sweep::SweepArgs),
    /// Partial derivatives of the release rate
    #[cfg(feature = "autodiff")]
    Sensitivity(commands::sensitivity::SensitivityArgs),
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &config),
        Commands::Interactive(args) => commands::interactive::execute(args, &config),
        Commands::Sweep(args) => commands::sweep::execute(args, &config),
        #[cfg(feature = "autodiff")]
        Commands::Sensitivity(args) => commands::sensitivity::execute(args, &config),
        Commands::Config => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}
