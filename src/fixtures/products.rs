//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Product price (e.g., "24.99 USD")
    pub price: String,

    /// Image URL
    #[serde(default)]
    pub image: String,
}

impl ProductFixture {
    /// Build the product, giving it the id it was keyed under.
    ///
    /// # Errors
    ///
    /// Returns an error if the price can't be parsed.
    pub fn try_into_product(self, id: String) -> Result<Product<'static>, FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;

        Ok(Product::new(
            id,
            self.name,
            Money::from_minor(minor_units, currency),
            self.image,
        ))
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("2.99 GBP")?, (299, GBP));
        assert_eq!(parse_price("  10 USD ")?, (1000, USD));
        assert_eq!(parse_price("0.005 EUR")?, (0, EUR));

        Ok(())
    }

    #[test]
    fn rejects_malformed_prices() {
        for raw in ["2.99", "GBP", "abc GBP", "-1.00 GBP", "1 2 GBP"] {
            assert!(
                matches!(parse_price(raw), Err(FixtureError::InvalidPrice(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_currency() {
        assert!(matches!(
            parse_price("1.00 JPY"),
            Err(FixtureError::UnknownCurrency(code)) if code == "JPY"
        ));
    }

    #[test]
    fn fixture_becomes_product() -> TestResult {
        let fixture = ProductFixture {
            name: "Headphones".to_string(),
            price: "199.99 USD".to_string(),
            image: "https://img.example/h.jpg".to_string(),
        };

        let product = fixture.try_into_product("headphones".to_string())?;

        assert_eq!(product.id.as_str(), "headphones");
        assert_eq!(product.price, Money::from_minor(19_999, USD));

        Ok(())
    }
}
