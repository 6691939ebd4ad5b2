//! Interactive session emulating the four parameter sliders.
//!
//! Every accepted change recomputes the whole trajectory and re-renders it.
//! Nothing is cached between interactions; the current parameters are the
//! only state and are replaced by value on each change.

use anyhow::Result;
use clap::Args;
use psi_hydrogen::render::{self, ChartStyle};
use psi_hydrogen::{AppConfig, Controls, ParameterKind, SimulationParameters, Simulator};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Interactive session arguments
#[derive(Args)]
pub struct InteractiveArgs {
    /// Chart width [characters]
    #[arg(long, default_value = "64")]
    pub width: usize,

    /// Chart height [lines]
    #[arg(long, default_value = "16")]
    pub height: usize,
}

/// Result of handling one input line.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Text to print
    Output(String),
    /// End the session
    Quit,
}

/// Session state: controls, simulator and current parameter positions.
pub struct Session {
    controls: Controls,
    simulator: Simulator,
    params: SimulationParameters,
    style: ChartStyle,
}

impl Session {
    pub fn new(controls: Controls, simulator: Simulator, style: ChartStyle) -> Self {
        Session { params: controls.defaults(), controls, simulator, style }
    }

    /// Current parameter positions.
    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    /// Recomputes and renders the current parameters.
    pub fn render(&self) -> String {
        match self.simulator.run(self.params) {
            Ok(trajectory) => render::render_report(&self.params, &trajectory, self.style),
            Err(e) => format!("simulation failed: {}\n", e),
        }
    }

    /// Help text listing commands and control ranges.
    pub fn help(&self) -> String {
        let mut text = String::from(
            "Commands:\n  set <parameter> <value>   move a control and re-run\n  show                      re-run with the current values\n  reset                     restore defaults\n  help                      this message\n  quit                      leave the session\n\nControls:\n",
        );
        for kind in ParameterKind::ALL {
            let control = self.controls.get(kind);
            text.push_str(&format!(
                "  {:<14} {:<28} [{} .. {}] step {} (now {})\n",
                kind.name(),
                kind.label(),
                control.min,
                control.max,
                control.step,
                kind.get(&self.params)
            ));
        }
        text
    }

    /// Handles one line of user input.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Outcome::Output(String::new()),
            ["quit"] | ["exit"] | ["q"] => Outcome::Quit,
            ["help"] | ["?"] => Outcome::Output(self.help()),
            ["show"] => Outcome::Output(self.render()),
            ["reset"] => {
                self.params = self.controls.defaults();
                Outcome::Output(self.render())
            }
            ["set", name, value] => match self.controls.set_from_str(self.params, name, value) {
                Ok(params) => {
                    debug!(?params, "parameters updated");
                    self.params = params;
                    Outcome::Output(self.render())
                }
                Err(e) => Outcome::Output(format!("{}\n", e)),
            },
            _ => Outcome::Output(format!("Unrecognised command '{}'. Type 'help' for usage.\n", line.trim())),
        }
    }
}

/// Execute the interactive command
pub fn execute(args: InteractiveArgs, config: &AppConfig) -> Result<()> {
    info!("starting interactive session");

    let style = ChartStyle { width: args.width, height: args.height };
    let mut session = Session::new(config.controls(), config.simulator(), style);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Hydrogen generation from porous silicon. Type 'help' for commands.\n")?;
    write!(out, "{}", session.render())?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line) {
            Outcome::Output(text) => write!(out, "{}", text)?,
            Outcome::Quit => break,
        }
    }

    info!("interactive session ended");
    Ok(())
}
