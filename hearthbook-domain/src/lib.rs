#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balance, BalanceSheet, Currency, ExchangeRate, ExchangeRateError, ExpenseId, IncomeEntry,
    Member, MemberId, Money, PaidExpenseRecord, Period, PeriodParseError, RecordId, Transfer,
};
pub use services::{BalanceCalculator, SETTLEMENT_EPSILON, SettlementCalculator, apply_transfers};
