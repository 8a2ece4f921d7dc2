//! Listings
//!
//! Vehicle listings as they come back from the `cars` table.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::{ListingId, UserId},
    listings::criteria::CriteriaError,
};

pub mod criteria;
pub mod filter;
pub mod view;

/// Fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    /// Petrol
    Petrol,

    /// Diesel
    Diesel,

    /// Electric
    Electric,

    /// Hybrid
    Hybrid,
}

impl FuelType {
    /// Every fuel type, in the order the filter menu offers them.
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];

    /// Name as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownFuelType(s.to_string()))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    /// Manual
    Manual,

    /// Automatic
    Automatic,
}

impl Transmission {
    /// Every transmission, in the order the filter menu offers them.
    pub const ALL: [Transmission; 2] = [Transmission::Manual, Transmission::Automatic];

    /// Name as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|transmission| transmission.as_str() == s)
            .ok_or_else(|| CriteriaError::UnknownTransmission(s.to_string()))
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    /// Sedan
    Sedan,

    /// SUV
    #[serde(rename = "SUV")]
    Suv,

    /// Hatchback
    Hatchback,

    /// Coupe
    Coupe,

    /// Convertible
    Convertible,

    /// Wagon
    Wagon,
}

/// Listing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Open for purchase requests
    Available,

    /// A purchase is being arranged
    Pending,

    /// Sold
    Sold,
}

impl ListingStatus {
    /// Name as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Pending => "pending",
            ListingStatus::Sold => "sold",
        }
    }
}

/// A vehicle listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing id
    pub id: ListingId,

    /// Manufacturer, e.g. "Toyota"
    pub make: String,

    /// Model, e.g. "Corolla"
    pub model: String,

    /// Model year
    pub year: u16,

    /// Asking price in whole currency units
    pub price: Decimal,

    /// Odometer reading in kilometres
    pub mileage: u64,

    /// Fuel type
    pub fuel_type: FuelType,

    /// Transmission
    pub transmission: Transmission,

    /// Body type
    pub body_type: BodyType,

    /// Exterior colour
    pub color: String,

    /// Free-text description
    pub description: String,

    /// Image URLs, cover image first
    pub images: Vec<String>,

    /// Where the vehicle can be viewed
    pub location: String,

    /// Seller
    pub seller_id: UserId,

    /// Status
    pub status: ListingStatus,

    /// Created at
    pub created_at: Timestamp,

    /// Updated at
    pub updated_at: Timestamp,
}

impl Listing {
    /// Check if the listing is open for purchase requests.
    pub fn is_available(&self) -> bool {
        self.status == ListingStatus::Available
    }
}
