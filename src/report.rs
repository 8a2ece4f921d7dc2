//! Report
//!
//! Plain-text tables for the command line.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::CartState,
    dashboard::{DashboardStats, RequestRow},
    display::{format_mileage, format_price, listing_title, status_label},
    listings::Listing,
    pricing::{TotalPriceError, line_total},
};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error calculating cart totals.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    right_aligned: &[usize],
) -> Result<(), ReportError> {
    let mut table = builder.build();
    table.with(Style::rounded());

    for column in right_aligned {
        table.modify(Columns::new(*column..=*column), Alignment::right());
    }

    writeln!(out, "{table}").map_err(|_err| ReportError::IO)
}

/// Write listings as a table, one row per listing.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if writing fails.
pub fn write_listings(out: &mut impl io::Write, listings: &[&Listing]) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Vehicle",
        "Price",
        "Mileage",
        "Fuel",
        "Transmission",
        "Location",
        "Status",
    ]);

    for listing in listings {
        builder.push_record([
            listing_title(listing),
            format_price(listing.price),
            format_mileage(listing.mileage),
            listing.fuel_type.to_string(),
            listing.transmission.to_string(),
            listing.location.clone(),
            status_label(listing.status.as_str()),
        ]);
    }

    write_table(out, builder, &[1, 2])?;

    writeln!(out, "{} listing(s)", listings.len()).map_err(|_err| ReportError::IO)
}

/// Write the cart lines followed by the item count and total.
///
/// # Errors
///
/// Returns [`ReportError::TotalPrice`] if the totals can't be computed, or
/// [`ReportError::IO`] if writing fails.
pub fn write_cart(out: &mut impl io::Write, cart: &CartState<'_>) -> Result<(), ReportError> {
    if cart.is_empty() {
        return writeln!(out, "Your cart is empty").map_err(|_err| ReportError::IO);
    }

    let mut builder = Builder::default();

    builder.push_record(["Product", "Unit price", "Qty", "Line total"]);

    for item in cart.items() {
        builder.push_record([
            item.product().name.clone(),
            item.product().price.to_string(),
            item.quantity().to_string(),
            line_total(item)?.to_string(),
        ]);
    }

    write_table(out, builder, &[1, 2, 3])?;

    writeln!(
        out,
        "Items: {}\nTotal: {}",
        cart.total_item_count(),
        cart.total_price()?
    )
    .map_err(|_err| ReportError::IO)
}

/// Write dashboard counts and the purchase request list.
///
/// # Errors
///
/// Returns [`ReportError::IO`] if writing fails.
pub fn write_dashboard(
    out: &mut impl io::Write,
    stats: &DashboardStats,
    rows: &[RequestRow<'_>],
) -> Result<(), ReportError> {
    let mut summary = Builder::default();

    summary.push_record(["Total listings", "Available", "Pending requests", "Total requests"]);
    summary.push_record([
        stats.total_listings.to_string(),
        stats.available_listings.to_string(),
        stats.pending_requests.to_string(),
        stats.total_requests.to_string(),
    ]);

    write_table(out, summary, &[0, 1, 2, 3])?;

    if rows.is_empty() {
        return writeln!(out, "No purchase requests found").map_err(|_err| ReportError::IO);
    }

    let mut requests = Builder::default();

    requests.push_record(["Status", "Vehicle", "Customer", "Email", "Phone", "Message"]);

    for row in rows {
        requests.push_record([
            status_label(row.request.status.as_str()),
            row.listing
                .map_or_else(|| "Car not found".to_string(), listing_title),
            row.request.user_name.clone(),
            row.request.user_email.clone(),
            row.request.user_phone.clone(),
            row.request.message.clone(),
        ]);
    }

    write_table(out, requests, &[])
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        cart::CartIntent,
        dashboard::request_rows,
        fixtures::{listings::listing, requests::request},
        products::Product,
        requests::RequestStatus,
    };

    use super::*;

    #[test]
    fn listings_table_has_formatted_cells() -> TestResult {
        let car = listing("1", "Toyota", "Corolla", "Austin", 18_500);
        let mut out = Vec::new();

        write_listings(&mut out, &[&car])?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("2019 Toyota Corolla"), "{text}");
        assert!(text.contains("$18,500"), "{text}");
        assert!(text.contains("50,000 km"), "{text}");
        assert!(text.contains("Available"), "{text}");
        assert!(text.contains("1 listing(s)"), "{text}");

        Ok(())
    }

    #[test]
    fn empty_cart_message() -> TestResult {
        let mut out = Vec::new();

        write_cart(&mut out, &CartState::new(iso::USD))?;

        assert_eq!(String::from_utf8(out)?, "Your cart is empty\n");

        Ok(())
    }

    #[test]
    fn cart_lists_lines_and_count() -> TestResult {
        let mug = Product::new("mug", "Mug", Money::from_minor(1250, iso::USD), "");
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(mug.clone()))
            .apply(CartIntent::AddItem(mug));
        let mut out = Vec::new();

        write_cart(&mut out, &cart)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Mug"), "{text}");
        assert!(text.contains("Items: 2"), "{text}");

        Ok(())
    }

    #[test]
    fn dashboard_marks_missing_listing() -> TestResult {
        let listings = vec![listing("car-1", "Honda", "Civic", "Dallas", 9_000)];
        let requests = vec![
            request("r-1", "car-1", RequestStatus::Pending),
            request("r-2", "gone", RequestStatus::Rejected),
        ];
        let stats = DashboardStats::collect(&listings, &requests);
        let mut out = Vec::new();

        write_dashboard(&mut out, &stats, &request_rows(&listings, &requests))?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("2019 Honda Civic"), "{text}");
        assert!(text.contains("Car not found"), "{text}");
        assert!(text.contains("Rejected"), "{text}");

        Ok(())
    }

    #[test]
    fn dashboard_without_requests() -> TestResult {
        let mut out = Vec::new();

        write_dashboard(&mut out, &DashboardStats::default(), &[])?;

        assert!(String::from_utf8(out)?.contains("No purchase requests found"));

        Ok(())
    }
}
