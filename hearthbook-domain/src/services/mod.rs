pub mod balance_calculator;
pub mod settlement_calculator;

pub use balance_calculator::BalanceCalculator;
pub use settlement_calculator::{SETTLEMENT_EPSILON, SettlementCalculator, apply_transfers};
