use serde::Deserialize;
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An exact amount of money, stored as whole cents.
///
/// Prices come in from configuration as decimals (`8.50`) and are converted
/// once; all arithmetic after that is integer arithmetic, so totals never
/// drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "f64")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }
}

/// Why a decimal could not be turned into [`Money`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount must be a finite number, got {0}")]
    NotFinite(f64),
    #[error("amount must not be negative, got {0}")]
    Negative(f64),
    #[error("amount has more than two decimal places: {0}")]
    SubCent(f64),
    #[error("amount is too large: {0}")]
    TooLarge(f64),
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(MoneyError::Negative(value));
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(MoneyError::SubCent(value));
        }
        if cents > u32::MAX as f64 {
            return Err(MoneyError::TooLarge(value));
        }
        Ok(Self(cents as u64))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * u64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

// Pads like a string so receipt columns can use `{:>5}`.
impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_prices_convert_to_exact_cents() {
        assert_eq!(Money::try_from(8.5).unwrap(), Money::from_cents(850));
        assert_eq!(Money::try_from(13.5).unwrap(), Money::from_cents(1350));
        assert_eq!(Money::try_from(0.1).unwrap(), Money::from_cents(10));
        assert_eq!(Money::try_from(3.0).unwrap(), Money::from_cents(300));
    }

    #[test]
    fn test_rejects_amounts_that_are_not_prices() {
        assert_eq!(Money::try_from(-1.0), Err(MoneyError::Negative(-1.0)));
        assert!(matches!(Money::try_from(f64::NAN), Err(MoneyError::NotFinite(_))));
        assert_eq!(Money::try_from(1.005), Err(MoneyError::SubCent(1.005)));
    }

    #[test]
    fn test_display_pads_to_requested_width() {
        let price = Money::from_cents(850);
        assert_eq!(price.to_string(), "8.50");
        assert_eq!(format!("{:>6}", price), "  8.50");
        assert_eq!(Money::from_cents(2005).to_string(), "20.05");
    }

    #[test]
    fn test_line_arithmetic() {
        let total: Money = [Money::from_cents(850) * 2, Money::from_cents(300)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(2000));
    }
}
