//! Money and currency types for threshold tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency codes used by the RTS 2 threshold tables.
///
/// The regulatory thresholds are all denominated in EUR; the other majors are
/// here for notional-currency test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// Euro
    #[default]
    EUR,
    /// United States Dollar
    USD,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An amount of money in a specific currency.
///
/// Used for ADNA thresholds and SSTI/LIS floors; never arithmetic-heavy, so
/// only construction and display are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount.
    pub amount: Decimal,
    /// The denomination currency.
    pub currency: Currency,
}

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a EUR amount from a whole number, the common case in the
    /// threshold tables.
    #[must_use]
    pub fn eur(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency: Currency::EUR,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_eur_constructor() {
        let m = Money::eur(5_000_000);
        assert_eq!(m.currency, Currency::EUR);
        assert_eq!(m.amount, dec!(5000000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::eur(4_000_000).to_string(), "EUR 4000000");
        assert_eq!(Currency::USD.to_string(), "USD");
    }
}
