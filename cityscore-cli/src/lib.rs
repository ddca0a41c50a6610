//! Command-line interface for scoring a location's amenities.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod request;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score};

const ARG_SCORE_REQUEST: &str = "request-path";
const ARG_SCORE_PRETTY: &str = "pretty";
const ENV_SCORE_REQUEST: &str = "CITYSCORE_CMDS_SCORE_REQUEST_PATH";

/// Run the cityscore CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading the
/// request or writing the scores fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cityscore",
    about = "Score the amenities around a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a location from a JSON request of nearby points.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
