//! Pricing
//!
//! Cart totals are derived on every read and never stored on the cart itself.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::{CartItem, CartState};

/// Errors that can occur while calculating cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// A line total didn't fit in minor units.
    #[error("line total overflowed minor units")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the price of a single cart line (unit price × quantity).
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the line total can't be represented in minor units.
pub fn line_total<'a>(item: &CartItem<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let price = item.product().price;

    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(item.quantity().get()))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Calculates the total price of every line in the cart.
///
/// An empty cart totals to zero in the cart's currency.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total can't be represented in minor units.
/// - [`TotalPriceError::Money`]: a product is priced in a different currency to the cart.
pub fn total_price<'a>(cart: &CartState<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    cart.items()
        .iter()
        .try_fold(Money::from_minor(0, cart.currency()), |acc, item| {
            Ok(acc.add(line_total(item)?)?)
        })
}

impl<'a> CartState<'a> {
    /// Total price of the cart. See [`total_price`].
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] on currency mismatch or overflow.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(self)
    }
}
