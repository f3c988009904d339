//! This module could be a separate crate on its own, to bootstrap the library within binary
//! but it is kept here so the integration tests can drive the same pipeline.

use std::io::{Read, Write};

use anyhow::Result;
use thiserror::Error;
use tracing::warn;

use crate::{
    config::Config,
    error::CommissionError,
    processor::{CommissionProcessor, in_memory_processor::InMemoryCommissionProcessor},
};
use csv_parser::{CsvOperationParser, RowParseError};
use csv_printer::CommissionPrinter;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    ParseErr(#[from] RowParseError),
    #[error(transparent)]
    CommissionErr(#[from] CommissionError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: Config,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    /// Rejected rows are handed to `error_printer` and skipped, the rest are
    /// charged in input order.
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);
        let mut processor = InMemoryCommissionProcessor::new(self.config)?;
        let mut printer = CommissionPrinter::new(self.output);

        for (line, row) in parser {
            let commission = row
                .map_err(RowError::from)
                .and_then(|record| processor.process_operation(record).map_err(RowError::from));
            match commission {
                Ok(commission) => printer.print(&commission)?,
                Err(err) => {
                    warn!(line, error = %err, "row rejected");
                    (self.error_printer)(line, err);
                }
            }
        }

        printer.finish()
    }
}
