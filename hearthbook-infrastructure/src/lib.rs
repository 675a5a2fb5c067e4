#![warn(clippy::uninlined_format_args)]

pub mod exchange_rates;
pub mod snapshot;

pub use exchange_rates::InMemoryExchangeRates;
pub use snapshot::{HouseholdSnapshot, MAX_AMOUNT, MAX_RATE, SnapshotError, parse_snapshot};
