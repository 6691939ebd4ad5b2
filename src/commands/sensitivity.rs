//! Rate sensitivities via automatic differentiation.

use super::ParameterArgs;
use anyhow::Result;
use clap::Args;
use psi_hydrogen::autodiff::{rate_sensitivities, RateSensitivities};
use psi_hydrogen::AppConfig;
use tracing::{info, warn};

/// Sensitivity arguments
#[derive(Args)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub params: ParameterArgs,

    /// Current yield at which to evaluate [% mass]
    #[arg(long = "yield", default_value = "0.0")]
    pub h2: f64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Formats sensitivities as aligned text.
pub fn format_text(s: &RateSensitivities) -> String {
    format!(
        "dH2/dt                 {:>14.6e} % mass/h\n\
         d/d temperature        {:>14.6e} per °C\n\
         d/d concentration      {:>14.6e} per mol/L\n\
         d/d surface area       {:>14.6e} per cm²\n\
         d/d yield              {:>14.6e} per % mass\n",
        s.rate, s.d_temperature, s.d_concentration, s.d_surface_area, s.d_yield
    )
}

/// Bounds the evaluation yield to `[0, max_yield]`; NaN falls back to zero.
pub fn current_yield(h2: f64, max_yield: f64) -> f64 {
    if h2.is_nan() {
        warn!("yield is not a number, using 0");
        return 0.0;
    }
    h2.clamp(0.0, max_yield)
}

/// Execute the sensitivity command
pub fn execute(args: SensitivityArgs, config: &AppConfig) -> Result<()> {
    let params = args.params.resolve(&config.controls());
    let h2 = current_yield(args.h2, config.kinetics.max_yield);
    info!(?params, h2, "computing sensitivities");

    let sensitivities = rate_sensitivities(&config.simulator(), params, h2);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&sensitivities)?);
    } else {
        print!("{}", format_text(&sensitivities));
    }
    Ok(())
}
