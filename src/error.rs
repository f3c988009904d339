use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::operation::OperationType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommissionError {
    #[error("Unsupported currency was provided {0}")]
    UnsupportedCurrency(String),
    #[error("Unsupported person type was provided {0}")]
    UnsupportedPersonType(String),
    #[error("Unsupported operation type was provided {0}")]
    UnsupportedOperationType(String),
    #[error("Unexpected operation type was provided, passed - {passed}, allowed - {allowed}")]
    UnexpectedOperationType {
        passed: OperationType,
        allowed: OperationType,
    },
    #[error("Exchange rate for {currency} must be a positive number")]
    InvalidExchangeRate { currency: String },
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Date {0} is too close to the calendar limits to place it in a week")]
    DateOutOfRange(NaiveDateTime),
    #[error("Arithmetic overflow while calculating commission")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, CommissionError>;
