//! Filter Criteria
//!
//! Typed criteria consumed by [`filter_listings`](crate::listings::filter::filter_listings),
//! and the raw form values they are parsed from.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listings::{FuelType, Transmission};

/// Errors raised while turning raw form values into [`FilterCriteria`].
#[derive(Debug, Error, PartialEq)]
pub enum CriteriaError {
    /// Price range isn't `MIN`, `MIN-` or `MIN-MAX`.
    #[error("Invalid price range: {0}")]
    InvalidPriceRange(String),

    /// Upper bound is below the lower bound.
    #[error("Price range upper bound {max} is below lower bound {min}")]
    InvertedPriceRange {
        /// Lower bound
        min: Decimal,
        /// Upper bound
        max: Decimal,
    },

    /// Fuel type isn't one the backend knows about.
    #[error("Unknown fuel type: {0}")]
    UnknownFuelType(String),

    /// Transmission isn't one the backend knows about.
    #[error("Unknown transmission: {0}")]
    UnknownTransmission(String),
}

/// Inclusive price bounds. `max` of `None` means there is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest accepted price
    pub min: Decimal,

    /// Highest accepted price
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Prices from `min` upwards.
    pub fn at_least(min: impl Into<Decimal>) -> Self {
        Self {
            min: min.into(),
            max: None,
        }
    }

    /// Prices between `min` and `max`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::InvertedPriceRange`] if `max` is below `min`.
    pub fn between(
        min: impl Into<Decimal>,
        max: impl Into<Decimal>,
    ) -> Result<Self, CriteriaError> {
        let (min, max) = (min.into(), max.into());

        if max < min {
            return Err(CriteriaError::InvertedPriceRange { min, max });
        }

        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// Check whether a price falls inside the range.
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = CriteriaError;

    /// Parse the encoding used by the price select: `"10000-20000"`, or `"50000"` for "and
    /// above". A missing or zero upper bound is unbounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CriteriaError::InvalidPriceRange(s.to_string());

        let (min, max) = match s.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (s, None),
        };

        let min = min.trim().parse::<Decimal>().map_err(|_err| invalid())?;

        if min.is_sign_negative() {
            return Err(invalid());
        }

        let max = match max.map(str::trim) {
            None | Some("") => None,
            Some(max) => Some(max.parse::<Decimal>().map_err(|_err| invalid())?),
        };

        match max {
            Some(max) if !max.is_zero() => Self::between(min, max),
            _ => Ok(Self::at_least(min)),
        }
    }
}

/// Active listing filters.
///
/// The default value has no filters set and lets every listing through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search over make, model and location. Empty disables it.
    pub search_term: String,

    /// Exact make
    pub make: Option<String>,

    /// Price bounds
    pub price_range: Option<PriceRange>,

    /// Exact fuel type
    pub fuel_type: Option<FuelType>,

    /// Exact transmission
    pub transmission: Option<Transmission>,
}

impl FilterCriteria {
    /// Check if no filter is set.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.make.is_none()
            && self.price_range.is_none()
            && self.fuel_type.is_none()
            && self.transmission.is_none()
    }
}

/// Raw filter values as entered in the search box and select menus.
///
/// An empty string stands for the "All ..." option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterForm {
    /// Search box
    pub search_term: String,

    /// Make select
    pub make: String,

    /// Price range select
    pub price_range: String,

    /// Fuel type select
    pub fuel_type: String,

    /// Transmission select
    pub transmission: String,
}

impl TryFrom<&FilterForm> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(form: &FilterForm) -> Result<Self, Self::Error> {
        Ok(Self {
            search_term: form.search_term.clone(),
            make: non_empty(&form.make).map(str::to_string),
            price_range: non_empty(&form.price_range)
                .map(str::parse)
                .transpose()?,
            fuel_type: non_empty(&form.fuel_type).map(str::parse).transpose()?,
            transmission: non_empty(&form.transmission)
                .map(str::parse)
                .transpose()?,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
