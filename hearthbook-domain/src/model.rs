use rust_decimal::Decimal;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount of money in some currency, backed by a decimal so that cents add up exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1234, 2)` is 12.34.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The two currencies a household keeps books in. All balance arithmetic
/// happens in `Reference`; `Secondary` amounts are converted first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Reference,
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExchangeRateError {
    #[error("exchange rate must be positive (got {0})")]
    NonPositive(Decimal),
}

/// Reference-currency units per one unit of the secondary currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub const IDENTITY: Self = Self(Decimal::ONE);

    pub fn new(rate: Decimal) -> Result<Self, ExchangeRateError> {
        if rate <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositive(rate));
        }
        Ok(Self(rate))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn to_reference(self, amount: Money, currency: Currency) -> Money {
        match currency {
            Currency::Reference => amount,
            Currency::Secondary => amount * self.0,
        }
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    #[error("expected a period in YYYY-MM form, got '{0}'")]
    Malformed(String),
    #[error("month must be between 1 and 12 (got {0})")]
    MonthOutOfRange(u32),
}

/// A calendar month. Exchange rates and expense records are scoped to one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PeriodParseError::Malformed(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncomeEntry {
    pub amount: Money,
    pub currency: Currency,
}

/// A household participant. A member may have several income entries in
/// either currency; the single-salary case is just one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub color: Option<String>,
    pub incomes: Vec<IncomeEntry>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            incomes: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_income(mut self, amount: Money, currency: Currency) -> Self {
        self.incomes.push(IncomeEntry { amount, currency });
        self
    }

    pub fn income_in_reference(&self, rate: ExchangeRate) -> Money {
        self.incomes
            .iter()
            .map(|entry| rate.to_reference(entry.amount, entry.currency))
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaidExpenseRecord {
    pub id: RecordId,
    pub expense_id: ExpenseId,
    pub amount: Money,
    pub currency: Currency,
    pub payer: MemberId,
}

/// Per-member outcome of a balance calculation, in the reference currency.
/// A positive `net_balance` means the household owes the member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Balance {
    pub member_id: MemberId,
    pub income_share_percent: Decimal,
    pub total_owed: Money,
    pub total_paid: Money,
    pub net_balance: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet {
    pub total_income: Money,
    pub total_paid_expenses: Money,
    pub balances: Vec<Balance>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::plain("2026-10", Ok((2026, 10)))]
    #[case::single_digit_month("2026-3", Ok((2026, 3)))]
    #[case::padded_whitespace(" 2025-01 ", Ok((2025, 1)))]
    #[case::month_zero("2026-00", Err(PeriodParseError::MonthOutOfRange(0)))]
    #[case::month_thirteen("2026-13", Err(PeriodParseError::MonthOutOfRange(13)))]
    #[case::missing_dash("202610", Err(PeriodParseError::Malformed("202610".into())))]
    #[case::short_year("26-10", Err(PeriodParseError::Malformed("26-10".into())))]
    #[case::letters("2026-ab", Err(PeriodParseError::Malformed("2026-ab".into())))]
    fn period_parses_year_month(
        #[case] input: &str,
        #[case] expected: Result<(i32, u32), PeriodParseError>,
    ) {
        let parsed = input.parse::<Period>().map(|p| (p.year(), p.month()));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn period_displays_zero_padded() {
        let period = Period::new(2026, 4).expect("valid period");
        assert_eq!(period.to_string(), "2026-04");
    }

    #[rstest]
    #[case::zero(dec!(0))]
    #[case::negative(dec!(-4.2))]
    fn exchange_rate_rejects_non_positive(#[case] rate: Decimal) {
        assert_eq!(
            ExchangeRate::new(rate),
            Err(ExchangeRateError::NonPositive(rate))
        );
    }

    #[test]
    fn exchange_rate_defaults_to_identity() {
        let rate = ExchangeRate::default();
        assert_eq!(
            rate.to_reference(Money::from_i64(25), Currency::Secondary),
            Money::from_i64(25)
        );
    }

    #[test]
    fn only_secondary_amounts_are_converted() {
        let rate = ExchangeRate::new(dec!(4.25)).expect("positive rate");
        assert_eq!(
            rate.to_reference(Money::from_i64(10), Currency::Reference),
            Money::from_i64(10)
        );
        assert_eq!(
            rate.to_reference(Money::from_i64(10), Currency::Secondary),
            Money::from_decimal(dec!(42.5))
        );
    }

    #[test]
    fn member_income_sums_converted_entries() {
        let rate = ExchangeRate::new(dec!(2)).expect("positive rate");
        let member = Member::new(MemberId(1), "Alice")
            .with_income(Money::from_i64(100), Currency::Reference)
            .with_income(Money::from_i64(30), Currency::Secondary);
        assert_eq!(member.income_in_reference(rate), Money::from_i64(160));
    }

    #[test]
    fn money_sign_helpers_treat_zero_as_neither() {
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::new(1, 2).is_positive());
        assert!(Money::new(-1, 2).is_negative());
    }
}
