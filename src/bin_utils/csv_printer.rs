use std::io::Write;

use csv::{Writer, WriterBuilder};

use crate::processor::Commission;

/// Writes one rounded commission per line, in input order.
pub struct CommissionPrinter<W: Write> {
    writer: Writer<W>,
}

impl<W> CommissionPrinter<W>
where
    W: Write,
{
    pub fn new(output: W) -> Self {
        Self {
            writer: WriterBuilder::new().has_headers(false).from_writer(output),
        }
    }

    pub fn print(&mut self, commission: &Commission) -> anyhow::Result<()> {
        if let Err(err) = self.writer.write_record([commission.rounded.as_str()]) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
        Ok(())
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        // Ensure all data is flushed to the output
        if let Err(err) = self.writer.flush() {
            anyhow::bail!("Failed to flush CSV writer: {err}")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{config::Config, currency::Currency};

    use super::*;

    #[test]
    fn prints_rounded_commissions() {
        let config = Config::default();
        let mut output = Vec::new();
        let mut printer = CommissionPrinter::new(&mut output);
        for (amount, currency, rounded) in [
            (dec!(0.6), "EUR", "0.60"),
            (dec!(8611.41000285), "JPY", "8612"),
        ] {
            printer
                .print(&Commission {
                    amount,
                    currency: Currency::new(currency, &config.currencies).unwrap(),
                    rounded: rounded.to_owned(),
                })
                .unwrap();
        }
        printer.finish().unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(), ["0.60", "8612"]);
    }
}
