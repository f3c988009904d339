use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    currency::{EUR, JPY, USD},
    error::{CommissionError, Result},
    operation::OperationType,
    person::PersonType,
};

/// Fee schedule and currency table shared by every component.
///
/// There is no global instance: the processor owns one and lends it to
/// the currency exchange, the operations and the history queries.
#[derive(Debug, Clone)]
pub struct Config {
    /// Decimal places kept by currency conversions.
    pub scale: u32,
    /// Decimal places of a rounded commission, unless the currency has no fraction.
    pub rounding_scale: u32,
    pub currencies: CurrencyConfig,
    pub person_types: Vec<PersonType>,
    pub operation_types: Vec<OperationType>,
    pub deposit: DepositRules,
    pub withdrawal: WithdrawalRules,
}

#[derive(Debug, Clone)]
pub struct CurrencyConfig {
    /// Pivot currency, every rate is expressed against it.
    pub main: String,
    pub supported: Vec<String>,
    /// Units of a currency per one unit of the main currency.
    pub exchange_rates: HashMap<String, Decimal>,
    /// Currencies rendered without fractional digits.
    pub zero_decimal: Vec<String>,
}

/// An amount tied to the currency it is configured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAmount {
    pub amount: Decimal,
    pub currency: String,
}

impl FixedAmount {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepositRules {
    pub default_percent: Decimal,
    /// Commission ceiling for a single deposit.
    pub max_commission: FixedAmount,
}

#[derive(Debug, Clone)]
pub struct WithdrawalRules {
    pub default_percent: Decimal,
    /// Commission floor for a single legal person withdrawal.
    pub legal_min_commission: FixedAmount,
    /// Weekly volume a natural person withdraws free of charge.
    pub natural_free_amount: FixedAmount,
    /// Weekly number of withdrawals that may use the free volume.
    pub natural_free_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 5,
            rounding_scale: 2,
            currencies: CurrencyConfig {
                main: EUR.to_owned(),
                supported: vec![EUR.to_owned(), USD.to_owned(), JPY.to_owned()],
                exchange_rates: HashMap::from([
                    (USD.to_owned(), Decimal::new(11497, 4)),
                    (JPY.to_owned(), Decimal::new(12953, 2)),
                ]),
                zero_decimal: vec![JPY.to_owned()],
            },
            person_types: vec![PersonType::Legal, PersonType::Natural],
            operation_types: vec![OperationType::Deposit, OperationType::Withdrawal],
            deposit: DepositRules {
                default_percent: Decimal::new(3, 4),
                max_commission: FixedAmount::new(Decimal::new(500, 2), EUR),
            },
            withdrawal: WithdrawalRules {
                default_percent: Decimal::new(3, 3),
                legal_min_commission: FixedAmount::new(Decimal::new(50, 2), EUR),
                natural_free_amount: FixedAmount::new(Decimal::new(100000, 2), EUR),
                natural_free_count: 3,
            },
        }
    }
}

impl Config {
    pub fn default_percent(&self, kind: OperationType) -> Decimal {
        match kind {
            OperationType::Deposit => self.deposit.default_percent,
            OperationType::Withdrawal => self.withdrawal.default_percent,
        }
    }

    /// Checks that the currency table forms a usable conversion hub.
    pub fn validate(&self) -> Result<()> {
        let currencies = &self.currencies;
        if !currencies.supported.contains(&currencies.main) {
            return Err(CommissionError::UnsupportedCurrency(currencies.main.clone()));
        }
        for code in currencies.supported.iter().filter(|c| **c != currencies.main) {
            match currencies.exchange_rates.get(code) {
                Some(rate) if rate.is_sign_positive() && !rate.is_zero() => {}
                _ => {
                    return Err(CommissionError::InvalidExchangeRate {
                        currency: code.clone(),
                    });
                }
            }
        }
        for amount in [
            &self.deposit.max_commission,
            &self.withdrawal.legal_min_commission,
            &self.withdrawal.natural_free_amount,
        ] {
            if !currencies.supported.contains(&amount.currency) {
                return Err(CommissionError::UnsupportedCurrency(amount.currency.clone()));
            }
        }
        Ok(())
    }
}
