use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use derive_more::Deref;
use rust_decimal::{Decimal, RoundingStrategy};

/// Non-negative unit price of a product.
#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value < Decimal::ZERO {
            return Err(PriceError::Negative);
        }

        Ok(Self(value.normalize()))
    }

    #[must_use]
    pub fn times(self, quantity: u32) -> Amount {
        Amount(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl TryFrom<&str> for Price {
    type Error = PriceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match Decimal::from_str(value.replace(',', ".").trim()) {
            Ok(parsed_value) => Price::new(parsed_value),
            Err(_) => Err(PriceError::Invalid),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Amount(self.0), f)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must be a decimal number")]
    Invalid,
    #[error("Price must not be negative")]
    Negative,
}

/// A monetary sum kept at full decimal precision.
///
/// Rounding to two decimal places only happens when the amount is displayed.
#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn rounded(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}
