use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::{currency::Currency, error::CommissionError, person::PersonId};

pub mod in_memory_processor;

/// One parsed input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    pub date: NaiveDateTime,
    pub person_id: PersonId,
    pub person_type: String,
    pub operation_type: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Commission of one operation, in the operation currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commission {
    pub amount: Decimal,
    pub currency: Currency,
    /// `amount` rounded up to the display scale of `currency`.
    pub rounded: String,
}

pub trait CommissionProcessor {
    /// Records must be processed in input order, a failed record leaves no trace.
    fn process_operation(
        &mut self,
        record: OperationRecord,
    ) -> Result<Commission, CommissionError>;
}
