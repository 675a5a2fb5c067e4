#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod error_presenter;
pub mod labels;
pub mod money_format;
pub mod text_table;

pub use balance_presenter::{BalancePresenter, BalanceView};
pub use error_presenter::format_validation_error;
pub use money_format::{CurrencyLabels, format_money, format_percent, format_signed_money};
