use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use monte_pi::app::run_task;
use monte_pi::config::load_task;
use monte_pi::logging::init_logging;
use monte_pi::ui::cli::drivers::InquireDriver;
use monte_pi::ui::cli::wizard::prompt_choice;
use monte_pi::ui::types::choices::TaskChoice;

/// Estimates pi by Monte Carlo sampling and draws a histogram of the estimates.
#[derive(Debug, Parser)]
#[command(
    name = "monte-pi",
    version,
    long_about = "Estimates pi by Monte Carlo sampling and draws a histogram of the estimates.\n\n\
                  Without a task file an interactive wizard asks for the parameters.\n\
                  Log filtering is read from MONTE_PI_LOG (default: info)."
)]
struct Cli {
    /// Task file (JSON) to run instead of the wizard.
    #[arg(value_name = "TASK.json")]
    task: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let task = match cli.task {
        Some(path) => {
            info!(path = %path.display(), "Loading task file.");
            load_task(&path)?
        }
        None => prompt_choice::<TaskChoice, _>(&InquireDriver)?,
    };

    run_task(task)?;
    Ok(())
}
