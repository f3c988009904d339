use std::fmt;

use rust_decimal::Decimal;

use crate::{
    config::{Config, CurrencyConfig},
    error::{CommissionError, Result},
    money::{self, UP},
};

pub const EUR: &str = "EUR";
pub const USD: &str = "USD";
pub const JPY: &str = "JPY";

/// Currency code that is known to be supported by the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str, currencies: &CurrencyConfig) -> Result<Self> {
        if currencies.supported.iter().any(|c| c == code) {
            Ok(Self(code.to_owned()))
        } else {
            Err(CommissionError::UnsupportedCurrency(code.to_owned()))
        }
    }

    /// The pivot currency all rates are expressed against.
    pub fn main(currencies: &CurrencyConfig) -> Self {
        Self(currencies.main.clone())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converts amounts through the main currency.
///
/// Leaving the main currency multiplies by the target rate, entering it
/// divides by the source rate. A conversion between two foreign currencies
/// takes both legs and rounds after each one.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'c> {
    currencies: &'c CurrencyConfig,
    scale: u32,
}

impl<'c> Exchange<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            currencies: &config.currencies,
            scale: config.scale,
        }
    }

    pub fn main_currency(&self) -> Currency {
        Currency::main(self.currencies)
    }

    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Result<Decimal> {
        self.check_supported(from)?;
        self.check_supported(to)?;
        if from == to {
            return Ok(amount);
        }

        let main = self.currencies.main.as_str();
        let in_main = if from == main {
            amount
        } else {
            money::divide(amount, self.rate(from)?, self.scale, UP)?
        };
        if to == main {
            return Ok(in_main);
        }
        let converted = money::multiply(in_main, self.rate(to)?)?;
        Ok(money::rescale(converted, self.scale, UP))
    }

    pub fn to_main(&self, amount: Decimal, from: &Currency) -> Result<Decimal> {
        self.convert(amount, from.code(), &self.currencies.main)
    }

    pub fn from_main(&self, amount: Decimal, to: &Currency) -> Result<Decimal> {
        self.convert(amount, &self.currencies.main, to.code())
    }

    fn check_supported(&self, code: &str) -> Result<()> {
        Currency::new(code, self.currencies).map(|_| ())
    }

    fn rate(&self, code: &str) -> Result<Decimal> {
        match self.currencies.exchange_rates.get(code) {
            Some(rate) if rate.is_sign_positive() && !rate.is_zero() => Ok(*rate),
            _ => Err(CommissionError::InvalidExchangeRate {
                currency: code.to_owned(),
            }),
        }
    }
}
