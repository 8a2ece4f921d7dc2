//! `dashboard` command

use std::io;

use anyhow::Context;
use clap::Args;
use showroom::{
    dashboard::{DashboardStats, request_rows},
    fixtures::Fixture,
    report::write_dashboard,
};

#[derive(Debug, Args)]
pub(crate) struct DashboardArgs {
    /// Listing and request fixture set
    #[arg(short, long, default_value = "marketplace")]
    set: String,
}

pub(crate) fn run(mut fixture: Fixture<'static>, args: &DashboardArgs) -> anyhow::Result<()> {
    fixture
        .load_listings(&args.set)
        .and_then(|fixture| fixture.load_requests(&args.set))
        .with_context(|| format!("failed to load marketplace set '{}'", args.set))?;

    let stats = DashboardStats::collect(fixture.listings(), fixture.requests());
    let rows = request_rows(fixture.listings(), fixture.requests());

    let mut handle = io::stdout().lock();

    write_dashboard(&mut handle, &stats, &rows)?;

    Ok(())
}
