use std::{fmt, str::FromStr};

use crate::{
    config::Config,
    error::{CommissionError, Result},
};

pub type PersonId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonType {
    Natural,
    Legal,
}

impl PersonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonType::Natural => "natural",
            PersonType::Legal => "legal",
        }
    }
}

impl FromStr for PersonType {
    type Err = CommissionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "natural" => Ok(PersonType::Natural),
            "legal" => Ok(PersonType::Legal),
            _ => Err(CommissionError::UnsupportedPersonType(s.to_owned())),
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    kind: PersonType,
}

impl Person {
    /// Builds a person whose type is enabled by the configuration.
    pub fn new(id: PersonId, kind: &str, config: &Config) -> Result<Self> {
        let kind: PersonType = kind.parse()?;
        if !config.person_types.contains(&kind) {
            return Err(CommissionError::UnsupportedPersonType(kind.to_string()));
        }
        Ok(Self { id, kind })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn kind(&self) -> PersonType {
        self.kind
    }
}
