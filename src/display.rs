//! Display
//!
//! Text formatting shared by listing cards, the details modal and the dashboard.

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::listings::Listing;

/// Shown when a listing has no images.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/116675/pexels-photo-116675.jpeg?auto=compress&cs=tinysrgb&w=800";

/// `"{year} {make} {model}"`
pub fn listing_title(listing: &Listing) -> String {
    format!("{} {} {}", listing.year, listing.make, listing.model)
}

/// First image of the listing, or the placeholder.
pub fn cover_image(listing: &Listing) -> &str {
    listing
        .images
        .first()
        .map_or(PLACEHOLDER_IMAGE, String::as_str)
}

/// Insert comma separators every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Listing price with a dollar sign and separators. Cents are only shown when present.
pub fn format_price(price: Decimal) -> String {
    let price = price.normalize();

    let Some(whole) = price.trunc().to_u64() else {
        return format!("${price}");
    };

    let fraction = (price - price.trunc()).to_string();

    match fraction.strip_prefix('0') {
        Some(cents) if !cents.is_empty() => format!("${}{cents}", group_thousands(whole)),
        _ => format!("${}", group_thousands(whole)),
    }
}

/// Odometer reading, e.g. `"42,000 km"`.
pub fn format_mileage(mileage: u64) -> String {
    format!("{} km", group_thousands(mileage))
}

/// Capitalise a backend status name for a badge, e.g. `"available"` -> `"Available"`.
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
