//! Entry point wiring CLI dispatch to the command handlers.

use std::process::ExitCode;

use anyhow::{Context, Result};
use liri::{cli::Cli, config::Settings, logging};
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    logging::init_tracing().context("initialising tracing")?;
    let settings = Settings::load().context("loading settings")?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    match cli.dispatch(settings).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_usage() => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            debug!(error = ?err, "command failed");
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
