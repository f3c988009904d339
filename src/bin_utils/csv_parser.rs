use std::{io::Read, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{person::PersonId, processor::OperationRecord};

#[derive(Debug, Error)]
pub enum RowParseError {
    #[error("Malformed row: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid date `{value}`: {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },
    #[error("Invalid amount `{value}`: {source}")]
    Amount {
        value: String,
        source: rust_decimal::Error,
    },
}

// Amounts stay text until they become a Decimal, the CSV reader would
// otherwise guess a float for them.
#[derive(Debug, Deserialize)]
struct OperationRow {
    date: String,
    person_id: PersonId,
    person_type: String,
    operation_type: String,
    amount: String,
    currency: String,
}

impl TryFrom<OperationRow> for OperationRecord {
    type Error = RowParseError;

    fn try_from(row: OperationRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date).map_err(|source| RowParseError::Date {
            value: row.date.clone(),
            source,
        })?;
        let amount = Decimal::from_str(&row.amount).map_err(|source| RowParseError::Amount {
            value: row.amount.clone(),
            source,
        })?;
        Ok(Self {
            date,
            person_id: row.person_id,
            person_type: row.person_type,
            operation_type: row.operation_type,
            amount,
            currency: row.currency,
        })
    }
}

/// Accepts `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").or_else(|_| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
    })
}

/// Parses header-less operation rows:
/// `date,person_id,person_type,operation_type,amount,currency`
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, OperationRow>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, Result<OperationRecord, RowParseError>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| {
            let record = row
                .map_err(RowParseError::from)
                .and_then(OperationRecord::try_from);
            (curr_line, record)
        })
    }
}
