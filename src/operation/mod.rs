use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::{
    config::Config,
    currency::Currency,
    error::{CommissionError, Result},
    money::{self, Money},
    person::Person,
    rounding,
};

pub mod deposit;
pub mod withdrawal;

pub use deposit::Deposit;
pub use withdrawal::Withdrawal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Deposit,
    Withdrawal,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Deposit => "cash_in",
            OperationType::Withdrawal => "cash_out",
        }
    }

    /// Parses an operation type that is enabled by the configuration.
    pub fn enabled(s: &str, config: &Config) -> Result<Self> {
        let kind: OperationType = s.parse()?;
        if config.operation_types.contains(&kind) {
            Ok(kind)
        } else {
            Err(CommissionError::UnsupportedOperationType(s.to_owned()))
        }
    }
}

impl FromStr for OperationType {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cash_in" => Ok(OperationType::Deposit),
            "cash_out" => Ok(OperationType::Withdrawal),
            _ => Err(CommissionError::UnsupportedOperationType(s.to_owned())),
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything an operation knows at construction time.
///
/// `sequence_number` and `already_used_this_week` are a snapshot of the weekly
/// history taken right before this operation, so they never include it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDetails {
    date: NaiveDateTime,
    person: Person,
    amount: Decimal,
    currency: Currency,
    sequence_number: u32,
    already_used_this_week: Money,
}

impl OperationDetails {
    pub fn new(
        date: NaiveDateTime,
        person: Person,
        amount: Decimal,
        currency: &str,
        sequence_number: u32,
        already_used_this_week: Money,
        config: &Config,
    ) -> Result<Self> {
        let currency = Currency::new(currency, &config.currencies)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CommissionError::NegativeAmount(amount));
        }
        Ok(Self {
            date,
            person,
            amount,
            currency,
            sequence_number,
            already_used_this_week,
        })
    }
}

/// The two hooks every operation kind fills in.
pub trait CommissionRule {
    fn details(&self) -> &OperationDetails;

    /// Part of the operation amount, in its own currency, that is charged.
    fn amount_for_commission(&self, config: &Config) -> Result<Decimal>;

    /// Applies limits to the percentage based commission.
    fn validate_commission(&self, actual: Decimal, config: &Config) -> Result<Decimal>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Deposit(Deposit),
    Withdrawal(Withdrawal),
}

impl Operation {
    pub fn new(kind: OperationType, details: OperationDetails) -> Result<Self> {
        match kind {
            OperationType::Deposit => Ok(Operation::Deposit(Deposit::new(kind, details)?)),
            OperationType::Withdrawal => {
                Ok(Operation::Withdrawal(Withdrawal::new(kind, details)?))
            }
        }
    }

    pub fn kind(&self) -> OperationType {
        match self {
            Operation::Deposit(_) => OperationType::Deposit,
            Operation::Withdrawal(_) => OperationType::Withdrawal,
        }
    }

    fn details(&self) -> &OperationDetails {
        match self {
            Operation::Deposit(deposit) => deposit.details(),
            Operation::Withdrawal(withdrawal) => withdrawal.details(),
        }
    }

    /// Commission in the operation currency, not rounded yet.
    pub fn commission(&self, config: &Config) -> Result<Decimal> {
        match self {
            Operation::Deposit(deposit) => charge(deposit, OperationType::Deposit, config),
            Operation::Withdrawal(withdrawal) => {
                charge(withdrawal, OperationType::Withdrawal, config)
            }
        }
    }

    pub fn rounded_commission(&self, config: &Config) -> Result<String> {
        Ok(rounding::round(
            self.commission(config)?,
            self.currency(),
            config,
        ))
    }

    pub fn date(&self) -> NaiveDateTime {
        self.details().date
    }

    pub fn person(&self) -> &Person {
        &self.details().person
    }

    pub fn amount(&self) -> Decimal {
        self.details().amount
    }

    pub fn currency(&self) -> &Currency {
        &self.details().currency
    }

    pub fn sequence_number(&self) -> u32 {
        self.details().sequence_number
    }

    pub fn already_used_this_week(&self) -> &Money {
        &self.details().already_used_this_week
    }
}

fn charge<R: CommissionRule>(rule: &R, kind: OperationType, config: &Config) -> Result<Decimal> {
    let amount = rule.amount_for_commission(config)?;
    let commission = money::multiply(amount, config.default_percent(kind))?;
    rule.validate_commission(commission, config)
}
