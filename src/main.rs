use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use graphgen::cli::{run_cli, Cli};
use graphgen::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.debug) {
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }
    debug!(?cli, "parsed arguments");

    match run_cli(&cli) {
        Ok(summary) => {
            debug!(seed = summary.seed, arcs = summary.stats.arcs, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "generation failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
