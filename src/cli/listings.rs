//! `listings` and `makes` commands

use std::io::{self, Write};

use anyhow::Context;
use clap::Args;
use showroom::{
    fixtures::Fixture,
    listings::{
        criteria::{FilterCriteria, FilterForm},
        view::ListingView,
    },
    report::write_listings,
};

#[derive(Debug, Args)]
pub(crate) struct ListingsArgs {
    /// Listing fixture set
    #[arg(short, long, default_value = "marketplace")]
    set: String,

    /// Case-insensitive search over make, model and location
    #[arg(long, default_value = "")]
    search: String,

    /// Exact make
    #[arg(long, default_value = "")]
    make: String,

    /// Price range, e.g. `10000-20000` or `50000` for "and above"
    #[arg(long, default_value = "")]
    price_range: String,

    /// Fuel type (Petrol, Diesel, Electric, Hybrid)
    #[arg(long, default_value = "")]
    fuel_type: String,

    /// Transmission (Manual, Automatic)
    #[arg(long, default_value = "")]
    transmission: String,
}

impl ListingsArgs {
    fn form(&self) -> FilterForm {
        FilterForm {
            search_term: self.search.clone(),
            make: self.make.clone(),
            price_range: self.price_range.clone(),
            fuel_type: self.fuel_type.clone(),
            transmission: self.transmission.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct MakesArgs {
    /// Listing fixture set
    #[arg(short, long, default_value = "marketplace")]
    set: String,
}

fn load_view(mut fixture: Fixture<'static>, set: &str) -> anyhow::Result<ListingView> {
    fixture
        .load_listings(set)
        .with_context(|| format!("failed to load listing set '{set}'"))?;

    Ok(ListingView::new(fixture.listings().to_vec()))
}

pub(crate) fn run(fixture: Fixture<'static>, args: &ListingsArgs) -> anyhow::Result<()> {
    let criteria = FilterCriteria::try_from(&args.form()).context("invalid filter")?;

    let mut view = load_view(fixture, &args.set)?;
    view.set_criteria(criteria);

    let mut handle = io::stdout().lock();

    write_listings(&mut handle, &view.visible())?;

    Ok(())
}

pub(crate) fn makes(fixture: Fixture<'static>, args: &MakesArgs) -> anyhow::Result<()> {
    let view = load_view(fixture, &args.set)?;

    let mut handle = io::stdout().lock();

    for make in view.available_makes() {
        writeln!(handle, "{make}")?;
    }

    Ok(())
}
