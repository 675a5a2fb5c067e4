#![warn(clippy::uninlined_format_args)]

pub mod balance_processor;
pub mod error;
pub mod model;
pub mod ports;

pub use balance_processor::BalanceProcessor;
pub use error::HouseholdValidationError;
pub use model::{BalanceReport, ExpenseRecord, ExpenseStatus, Household, RateSource};
pub use ports::{ExchangeRateProvider, MemberDirectory};
