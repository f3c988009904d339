use tracing::debug;

use crate::{
    config::Config,
    error::CommissionError,
    history::WeeklyHistory,
    operation::{Operation, OperationDetails, OperationType},
    person::Person,
    rounding,
};

use super::{Commission, CommissionProcessor, OperationRecord};

#[derive(Debug, Default)]
pub struct InMemoryCommissionProcessor {
    config: Config,
    pub history: WeeklyHistory,
}

impl InMemoryCommissionProcessor {
    pub fn new(config: Config) -> Result<Self, CommissionError> {
        config.validate()?;
        Ok(Self {
            config,
            history: WeeklyHistory::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl CommissionProcessor for InMemoryCommissionProcessor {
    fn process_operation(
        &mut self,
        record: OperationRecord,
    ) -> Result<Commission, CommissionError> {
        let config = &self.config;
        let kind = OperationType::enabled(&record.operation_type, config)?;
        let person = Person::new(record.person_id, &record.person_type, config)?;

        // snapshot of the week before this operation joins it
        let sequence_number = 1 + self.history.operations_count_in_week(
            &person,
            record.date,
            Some(OperationType::Withdrawal),
        )?;
        let already_used = self.history.amount_used_in_week(
            &person,
            record.date,
            Some(OperationType::Withdrawal),
            config,
        )?;

        let details = OperationDetails::new(
            record.date,
            person,
            record.amount,
            &record.currency,
            sequence_number,
            already_used,
            config,
        )?;
        let operation = Operation::new(kind, details)?;
        let amount = operation.commission(config)?;
        let rounded = rounding::round(amount, operation.currency(), config);
        debug!(
            person_id = record.person_id,
            kind = %kind,
            sequence_number,
            already_used = %operation.already_used_this_week().amount(),
            commission = %rounded,
            currency = %operation.currency(),
            "commission calculated"
        );

        let commission = Commission {
            amount,
            currency: operation.currency().clone(),
            rounded,
        };
        // insert only when commission was calculated
        self.history.push(operation)?;
        Ok(commission)
    }
}
