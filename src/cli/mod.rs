//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use showroom::fixtures::Fixture;

use crate::cli::logging::LoggingConfig;

mod cart;
mod dashboard;
mod listings;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "showroom", about = "Storefront and marketplace demo CLI", long_about = None)]
pub(crate) struct Cli {
    /// Fixture settings.
    #[command(flatten)]
    pub fixtures: FixtureConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

/// Where fixture sets are read from.
#[derive(Debug, Args)]
pub(crate) struct FixtureConfig {
    /// Directory holding `products/`, `listings/` and `requests/` fixture sets
    #[arg(long, env = "SHOWROOM_FIXTURES_DIR", default_value = "./fixtures", global = true)]
    pub fixtures_dir: PathBuf,
}

impl FixtureConfig {
    fn fixture(&self) -> Fixture<'static> {
        Fixture::with_base_path(&self.fixtures_dir)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter listings and print the matches
    Listings(listings::ListingsArgs),

    /// Print the makes offered by the make filter
    Makes(listings::MakesArgs),

    /// Build a cart from a sequence of intents and print it
    Cart(cart::CartArgs),

    /// Print admin dashboard counts and purchase requests
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    pub(crate) fn run(self) -> anyhow::Result<()> {
        let fixture = self.fixtures.fixture();

        match self.command {
            Commands::Listings(args) => listings::run(fixture, &args),
            Commands::Makes(args) => listings::makes(fixture, &args),
            Commands::Cart(args) => cart::run(fixture, &args),
            Commands::Dashboard(args) => dashboard::run(fixture, &args),
        }
    }
}
