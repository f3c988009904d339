use rust_decimal::Decimal;

use crate::{
    config::Config,
    currency::Exchange,
    error::{CommissionError, Result},
};

use super::{CommissionRule, OperationDetails, OperationType};

/// Cash in. Charged on the whole amount, capped by a fixed ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    details: OperationDetails,
}

impl Deposit {
    pub fn new(kind: OperationType, details: OperationDetails) -> Result<Self> {
        if kind != OperationType::Deposit {
            return Err(CommissionError::UnexpectedOperationType {
                passed: kind,
                allowed: OperationType::Deposit,
            });
        }
        Ok(Self { details })
    }
}

impl CommissionRule for Deposit {
    fn details(&self) -> &OperationDetails {
        &self.details
    }

    fn amount_for_commission(&self, _config: &Config) -> Result<Decimal> {
        Ok(self.details.amount)
    }

    fn validate_commission(&self, actual: Decimal, config: &Config) -> Result<Decimal> {
        let cap = &config.deposit.max_commission;
        let cap = Exchange::new(config).convert(
            cap.amount,
            &cap.currency,
            self.details.currency.code(),
        )?;
        Ok(if actual <= cap { actual } else { cap })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        config::FixedAmount,
        currency::{EUR, JPY, USD},
        operation::{Operation, tests::details},
    };

    use super::*;

    fn cash_in(config: &Config, amount: Decimal, currency: &str) -> Deposit {
        Deposit::new(
            OperationType::Deposit,
            details(config, "2014-12-31", 1, "natural", amount, currency, 1, dec!(0)),
        )
        .unwrap()
    }

    #[test]
    fn withdrawal_kind_is_unexpected() {
        let config = Config::default();
        let err = Deposit::new(
            OperationType::Withdrawal,
            details(&config, "2014-12-31", 1, "natural", dec!(1200), EUR, 1, dec!(0)),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected operation type was provided, passed - cash_out, allowed - cash_in"
        );
    }

    #[test]
    fn whole_amount_is_charged() {
        let config = Config::default();
        for person_type in ["natural", "legal"] {
            let deposit = Deposit::new(
                OperationType::Deposit,
                details(&config, "2014-12-31", 1, person_type, dec!(100.50), USD, 4, dec!(5000)),
            )
            .unwrap();
            assert_eq!(deposit.amount_for_commission(&config).unwrap(), dec!(100.50));
        }
    }

    #[test]
    fn commission_below_cap_is_kept() {
        let config = Config::default();
        let deposit = cash_in(&config, dec!(200.00), EUR);
        assert_eq!(deposit.validate_commission(dec!(0.06), &config).unwrap(), dec!(0.06));
        // exactly at the cap
        assert_eq!(deposit.validate_commission(dec!(5), &config).unwrap(), dec!(5));
    }

    #[test]
    fn commission_above_cap_is_limited() {
        let config = Config::default();
        let deposit = cash_in(&config, dec!(25000), EUR);
        assert_eq!(deposit.validate_commission(dec!(7.5), &config).unwrap(), dec!(5));

        let operation = Operation::Deposit(deposit);
        assert_eq!(operation.commission(&config).unwrap(), dec!(5));
        assert_eq!(operation.rounded_commission(&config).unwrap(), "5.00");
    }

    #[test]
    fn cap_is_converted_into_operation_currency() {
        let config = Config::default();
        let yen = Operation::Deposit(cash_in(&config, dec!(100000000), JPY));
        // 5 EUR * 129.53
        assert_eq!(yen.commission(&config).unwrap(), dec!(647.65));
        assert_eq!(yen.rounded_commission(&config).unwrap(), "648");

        let dollars = Operation::Deposit(cash_in(&config, dec!(1000000), USD));
        assert_eq!(dollars.commission(&config).unwrap(), dec!(5.7485));
        assert_eq!(dollars.rounded_commission(&config).unwrap(), "5.75");
    }

    #[test]
    fn commission_never_exceeds_cap() {
        let config = Config::default();
        let cap = dec!(5);
        for amount in [dec!(0), dec!(1), dec!(16666.66), dec!(16666.67), dec!(16666.68), dec!(1000000000)] {
            let operation = Operation::Deposit(cash_in(&config, amount, EUR));
            assert!(operation.commission(&config).unwrap() <= cap, "{amount}");
        }
    }

    #[test]
    fn cap_in_another_currency_is_converted() {
        let mut config = Config::default();
        config.deposit.max_commission = FixedAmount::new(dec!(5), USD);

        // 5 USD -> 4.34897 EUR
        let operation = Operation::Deposit(cash_in(&config, dec!(1000000), EUR));
        assert_eq!(operation.commission(&config).unwrap(), dec!(4.34897));
        assert_eq!(operation.rounded_commission(&config).unwrap(), "4.35");

        // same currency as the cap, no conversion
        let operation = Operation::Deposit(cash_in(&config, dec!(1000000), USD));
        assert_eq!(operation.commission(&config).unwrap(), dec!(5));
    }
}
