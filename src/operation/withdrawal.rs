use rust_decimal::Decimal;

use crate::{
    config::Config,
    currency::Exchange,
    error::{CommissionError, Result},
    money::{self, UP},
    person::PersonType,
};

use super::{CommissionRule, OperationDetails, OperationType};

/// Cash out.
///
/// Natural persons withdraw a weekly volume free of charge, but only within
/// their first few withdrawals of the week. Legal persons always pay at least
/// a fixed minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    details: OperationDetails,
}

impl Withdrawal {
    pub fn new(kind: OperationType, details: OperationDetails) -> Result<Self> {
        if kind != OperationType::Withdrawal {
            return Err(CommissionError::UnexpectedOperationType {
                passed: kind,
                allowed: OperationType::Withdrawal,
            });
        }
        Ok(Self { details })
    }

    fn natural_amount_for_commission(&self, config: &Config) -> Result<Decimal> {
        let exchange = Exchange::new(config);
        let rules = &config.withdrawal;
        let details = &self.details;

        let amount_in_main = exchange.to_main(details.amount, &details.currency)?;
        let free_amount = &rules.natural_free_amount;
        let free_amount_in_main = exchange.convert(
            free_amount.amount,
            &free_amount.currency,
            exchange.main_currency().code(),
        )?;
        let used = &details.already_used_this_week;
        let already_used = exchange.to_main(used.amount(), used.currency())?;
        let projected = money::add(already_used, amount_in_main, config.scale, UP)?;

        // free withdrawals are used up, either by count or by volume
        if details.sequence_number > rules.natural_free_count
            || already_used >= free_amount_in_main
        {
            Ok(details.amount)
        } else if projected > free_amount_in_main {
            let exceeded = money::subtract(projected, free_amount_in_main, config.scale, UP)?;
            exchange.from_main(exceeded, &details.currency)
        } else {
            Ok(Decimal::ZERO)
        }
    }
}

impl CommissionRule for Withdrawal {
    fn details(&self) -> &OperationDetails {
        &self.details
    }

    fn amount_for_commission(&self, config: &Config) -> Result<Decimal> {
        match self.details.person.kind() {
            PersonType::Legal => Ok(self.details.amount),
            PersonType::Natural => self.natural_amount_for_commission(config),
        }
    }

    fn validate_commission(&self, actual: Decimal, config: &Config) -> Result<Decimal> {
        match self.details.person.kind() {
            PersonType::Natural => Ok(actual),
            PersonType::Legal => {
                let floor = &config.withdrawal.legal_min_commission;
                let floor = Exchange::new(config).convert(
                    floor.amount,
                    &floor.currency,
                    self.details.currency.code(),
                )?;
                Ok(if actual >= floor { actual } else { floor })
            }
        }
    }
}
