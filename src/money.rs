use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    currency::Currency,
    error::{CommissionError, Result},
};

/// Any discarded remainder moves the value to the next larger magnitude.
pub const UP: RoundingStrategy = RoundingStrategy::AwayFromZero;

/// Limits `amount` to at most `scale` fractional digits.
///
/// Values that already fit are returned as they are, trailing zeros are never added.
pub fn rescale(amount: Decimal, scale: u32, rounding: RoundingStrategy) -> Decimal {
    amount.round_dp_with_strategy(scale, rounding)
}

pub fn add(lhs: Decimal, rhs: Decimal, scale: u32, rounding: RoundingStrategy) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .map(|sum| rescale(sum, scale, rounding))
        .ok_or(CommissionError::Overflow)
}

pub fn subtract(
    lhs: Decimal,
    rhs: Decimal,
    scale: u32,
    rounding: RoundingStrategy,
) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .map(|diff| rescale(diff, scale, rounding))
        .ok_or(CommissionError::Overflow)
}

/// Exact product, the scale of the result may grow.
pub fn multiply(amount: Decimal, rate: Decimal) -> Result<Decimal> {
    amount.checked_mul(rate).ok_or(CommissionError::Overflow)
}

pub fn divide(
    amount: Decimal,
    divisor: Decimal,
    scale: u32,
    rounding: RoundingStrategy,
) -> Result<Decimal> {
    amount
        .checked_div(divisor)
        .map(|quotient| rescale(quotient, scale, rounding))
        .ok_or(CommissionError::Overflow)
}

/// Decimal amount bound to its currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Adds an amount expressed in the same currency.
    pub fn plus(self, amount: Decimal, scale: u32, rounding: RoundingStrategy) -> Result<Self> {
        Ok(Self {
            amount: add(self.amount, amount, scale, rounding)?,
            currency: self.currency,
        })
    }
}
