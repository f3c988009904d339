use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::{
    config::Config,
    currency::Exchange,
    error::{CommissionError, Result},
    money::{Money, UP},
    operation::{Operation, OperationType},
    person::{Person, PersonId},
};

/// Monday to Sunday week of one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekKey {
    monday: NaiveDate,
    sunday: NaiveDate,
    person_id: PersonId,
}

impl WeekKey {
    /// Fails when the Monday or the Sunday of the week is not a representable date.
    pub fn new(date: NaiveDateTime, person_id: PersonId) -> Result<Self> {
        let day = date.date();
        let from_monday = u64::from(day.weekday().num_days_from_monday());
        let monday = day.checked_sub_days(Days::new(from_monday));
        let sunday = day.checked_add_days(Days::new(6 - from_monday));
        match (monday, sunday) {
            (Some(monday), Some(sunday)) => Ok(Self {
                monday,
                sunday,
                person_id,
            }),
            _ => Err(CommissionError::DateOutOfRange(date)),
        }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.sunday
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }
}

/// Operations grouped by person and week, in the order they were pushed.
///
/// Nothing is ever removed, a run keeps every operation it has seen.
#[derive(Debug, Default)]
pub struct WeeklyHistory {
    buckets: HashMap<WeekKey, Vec<Operation>>,
}

impl WeeklyHistory {
    pub fn push(&mut self, operation: Operation) -> Result<&mut Self> {
        let key = WeekKey::new(operation.date(), operation.person().id())?;
        trace!(
            person_id = key.person_id,
            monday = %key.monday,
            kind = %operation.kind(),
            "push operation to history"
        );
        self.buckets.entry(key).or_default().push(operation);
        Ok(self)
    }

    /// Total amount of the week's operations, converted to the main currency.
    pub fn amount_used_in_week(
        &self,
        person: &Person,
        date: NaiveDateTime,
        kind: Option<OperationType>,
        config: &Config,
    ) -> Result<Money> {
        let exchange = Exchange::new(config);
        let mut used = Money::zero(exchange.main_currency());
        for operation in self.week_operations(person, date, kind)? {
            let amount = exchange.to_main(operation.amount(), operation.currency())?;
            used = used.plus(amount, config.scale, UP)?;
        }
        Ok(used)
    }

    pub fn operations_count_in_week(
        &self,
        person: &Person,
        date: NaiveDateTime,
        kind: Option<OperationType>,
    ) -> Result<u32> {
        let count = self.week_operations(person, date, kind)?.count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    pub fn week(&self, key: &WeekKey) -> &[Operation] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn week_operations(
        &self,
        person: &Person,
        date: NaiveDateTime,
        kind: Option<OperationType>,
    ) -> Result<impl Iterator<Item = &Operation>> {
        let key = WeekKey::new(date, person.id())?;
        Ok(self
            .week(&key)
            .iter()
            .filter(move |op| kind.is_none_or(|kind| op.kind() == kind)))
    }
}
