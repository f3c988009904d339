/// Errors raised while validating and charging an operation.
pub mod error;

/// Fee schedule and currency table, passed explicitly to every component.
pub mod config;

/// Decimal arithmetic with explicit rounding, plus [`money::Money`].
pub mod money;

/// Supported currencies and conversion through the main currency.
pub mod currency;

/// Rounds a commission to the scale its currency is displayed with.
pub mod rounding;

/// Natural and legal persons, identified by id.
pub mod person;

/// Deposits and withdrawals, each with its own commission rules.
pub mod operation;

/// Operations grouped by person and Monday to Sunday week.
/// The only state carried from one record to the next.
pub mod history;

/// Commission processor interface, plus "in memory" implementation.
/// Takes the weekly snapshot, builds the operation, charges it and
/// records it, one record at a time.
pub mod processor;

/// CSV input/output and a runner used by the binary and the integration test.
pub mod bin_utils;
