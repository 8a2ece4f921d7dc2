//! Listing Fixtures

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    ids::{ListingId, UserId},
    listings::{BodyType, FuelType, Listing, ListingStatus, Transmission},
};

/// Wrapper for listings in YAML
#[derive(Debug, Deserialize)]
pub struct ListingsFixture {
    /// Listings, newest first
    pub listings: Vec<Listing>,
}

/// Build an available 2019 petrol automatic sedan with the given identifying fields.
///
/// Handy for tests and demos that only care about what the filter looks at.
pub fn listing(id: &str, make: &str, model: &str, location: &str, price: i64) -> Listing {
    Listing {
        id: ListingId::new(id),
        make: make.to_string(),
        model: model.to_string(),
        year: 2019,
        price: Decimal::from(price),
        mileage: 50_000,
        fuel_type: FuelType::Petrol,
        transmission: Transmission::Automatic,
        body_type: BodyType::Sedan,
        color: "Black".to_string(),
        description: String::new(),
        images: vec![format!("https://img.example/{id}.jpg")],
        location: location.to_string(),
        seller_id: UserId::new("seller"),
        status: ListingStatus::Available,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
