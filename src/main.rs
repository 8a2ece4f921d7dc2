//! Showroom CLI

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

mod cli;

fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = cli.logging.init() {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    if let Err(error) = cli.run() {
        tracing::error!("{error:#}");

        #[expect(clippy::print_stderr, reason = "top-level error report for the user")]
        {
            eprintln!("{error:#}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
