use rust_decimal::Decimal;

use crate::{
    config::Config,
    currency::Currency,
    money::{self, UP},
};

/// Renders a commission with the fractional digits its currency is shown with.
///
/// Zero-decimal currencies get no fraction, the rest get exactly
/// `rounding_scale` digits, padded with zeros when needed.
pub fn round(amount: Decimal, currency: &Currency, config: &Config) -> String {
    let scale = display_scale(currency, config);
    let mut rounded = money::rescale(amount, scale, UP);
    rounded.rescale(scale);
    rounded.to_string()
}

pub fn display_scale(currency: &Currency, config: &Config) -> u32 {
    if config
        .currencies
        .zero_decimal
        .iter()
        .any(|c| c == currency.code())
    {
        0
    } else {
        config.rounding_scale
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::currency::{EUR, JPY, USD};

    use super::*;

    #[test]
    fn two_decimal_currencies() {
        let config = Config::default();
        for code in [EUR, USD] {
            let currency = Currency::new(code, &config.currencies).unwrap();
            for (amount, expected) in [
                (dec!(5), "5.00"),
                (dec!(5.1), "5.10"),
                (dec!(5.12), "5.12"),
                (dec!(0.023), "0.03"),
                (dec!(5.1234), "5.13"),
                (dec!(5.54321), "5.55"),
                (dec!(55.043210), "55.05"),
                (dec!(123.5506432), "123.56"),
                (dec!(5432.610598751), "5432.62"),
                (dec!(5432.6705987512), "5432.68"),
                (dec!(0.000), "0.00"),
            ] {
                assert_eq!(round(amount, &currency, &config), expected, "{code} {amount}");
            }
        }
    }

    #[test]
    fn zero_decimal_currency() {
        let config = Config::default();
        let jpy = Currency::new(JPY, &config.currencies).unwrap();
        for (amount, expected) in [
            (dec!(5), "5"),
            (dec!(5.1), "6"),
            (dec!(0.023), "1"),
            (dec!(55.043210), "56"),
            (dec!(123.5506432), "124"),
            (dec!(5432.6705987512), "5433"),
            (dec!(8611.41000285), "8612"),
        ] {
            assert_eq!(round(amount, &jpy, &config), expected, "{amount}");
        }
    }

    #[test]
    fn display_scale_follows_config() {
        let mut config = Config::default();
        config.rounding_scale = 3;
        let usd = Currency::new(USD, &config.currencies).unwrap();
        assert_eq!(display_scale(&usd, &config), 3);
        assert_eq!(round(dec!(0.0231), &usd, &config), "0.024");
    }
}
