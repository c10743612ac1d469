//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so balances, deposits and interest keep
//! exact decimal precision. Arithmetic is checked: operations that would
//! leave the representable range return `None` instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A signed monetary amount in the ledger's single currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use bank_ledger::models::Money;
    /// let amount = Money::from_units(1000);
    /// assert_eq!(amount.to_string(), "1000.00");
    /// ```
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a Money amount from cents (hundredths of the currency unit)
    ///
    /// # Examples
    /// ```
    /// use bank_ledger::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Add two amounts, or `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract `other`, or `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scale by a dimensionless factor (rates, ratios), or `None` on overflow
    pub fn checked_mul(self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimal notation: "10.50", "-10.50", "10", "0.125"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units_and_cents() {
        assert_eq!(Money::from_units(10), Money::from_cents(1000));
        assert_eq!(Money::from_cents(1050).amount(), Decimal::new(1050, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_units(1200).to_string(), "1200.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(300);

        assert_eq!(a.checked_add(b), Some(Money::from_units(1300)));
        assert_eq!(a.checked_sub(b), Some(Money::from_units(700)));
        assert_eq!(b.checked_sub(a), Some(Money::from_units(-700)));

        let rate = Decimal::from(10) / Decimal::ONE_HUNDRED;
        assert_eq!(a.checked_mul(rate), Some(Money::from_units(100)));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::from(Decimal::MAX);
        let min = Money::from(Decimal::MIN);

        assert_eq!(max.checked_add(Money::from_units(1)), None);
        assert_eq!(max.checked_sub(Money::from_units(-1)), None);
        assert_eq!(min.checked_sub(Money::from_units(1)), None);
        assert_eq!(Money::from_units(1000).checked_mul(Decimal::MAX), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse(" -10.50 ").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_units(10));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_comparison_ignores_scale() {
        assert_eq!(Money::parse("1000").unwrap(), Money::parse("1000.00").unwrap());
        assert!(Money::from_units(1000) > Money::from_cents(99999));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::from_cents(-1).is_positive());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
