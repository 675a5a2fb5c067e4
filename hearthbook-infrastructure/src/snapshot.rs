use crate::exchange_rates::InMemoryExchangeRates;
use hearthbook_application::{ExpenseRecord, ExpenseStatus, Household};
use hearthbook_domain::{
    Currency, ExchangeRate, ExchangeRateError, ExpenseId, Member, MemberId, Money, Period,
    PeriodParseError, RecordId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Largest absolute income or expense amount a snapshot may carry (10^12).
///
/// Together with [`MAX_RATE`] and non-negative incomes this keeps every
/// converted amount, sum and share product inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Largest exchange rate a snapshot may carry (10^6).
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid period in {context}: {source}")]
    Period {
        context: String,
        source: PeriodParseError,
    },
    #[error("invalid exchange rate for {period}: {source}")]
    Rate {
        period: Period,
        source: ExchangeRateError,
    },
    #[error("exchange rate for {0} is listed more than once")]
    DuplicateRate(Period),
    #[error("expense record {0} has no period and the snapshot declares no default period")]
    MissingPeriod(u64),
    #[error("income of member {member} is negative: {amount}")]
    NegativeIncome { member: u64, amount: Decimal },
    #[error("{context} is out of range: {value} (limit {limit})")]
    AmountOutOfRange {
        context: String,
        value: Decimal,
        limit: Decimal,
    },
}

/// Everything a balance report needs, as loaded from a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdSnapshot {
    pub default_period: Option<Period>,
    pub household: Household,
    pub exchange_rates: InMemoryExchangeRates,
}

#[derive(Debug, Deserialize)]
struct SnapshotDto {
    period: Option<String>,
    #[serde(default)]
    members: Vec<MemberDto>,
    #[serde(default)]
    expenses: Vec<ExpenseDto>,
    #[serde(default)]
    exchange_rates: Vec<RateDto>,
}

#[derive(Debug, Deserialize)]
struct MemberDto {
    id: u64,
    name: String,
    color: Option<String>,
    income: Option<IncomeDto>,
    #[serde(default)]
    incomes: Vec<IncomeDto>,
}

#[derive(Debug, Deserialize)]
struct IncomeDto {
    amount: Decimal,
    #[serde(default)]
    currency: CurrencyDto,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CurrencyDto {
    #[default]
    Reference,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StatusDto {
    #[default]
    Paid,
    Pending,
    Overdue,
}

#[derive(Debug, Deserialize)]
struct ExpenseDto {
    id: u64,
    expense_id: Option<u64>,
    amount: Decimal,
    #[serde(default)]
    currency: CurrencyDto,
    payer: Option<u64>,
    #[serde(default)]
    status: StatusDto,
    period: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RateDto {
    period: String,
    rate: Decimal,
}

impl From<CurrencyDto> for Currency {
    fn from(dto: CurrencyDto) -> Self {
        match dto {
            CurrencyDto::Reference => Currency::Reference,
            CurrencyDto::Secondary => Currency::Secondary,
        }
    }
}

impl From<StatusDto> for ExpenseStatus {
    fn from(dto: StatusDto) -> Self {
        match dto {
            StatusDto::Paid => ExpenseStatus::Paid,
            StatusDto::Pending => ExpenseStatus::Pending,
            StatusDto::Overdue => ExpenseStatus::Overdue,
        }
    }
}

fn parse_period(raw: &str, context: impl Into<String>) -> Result<Period, SnapshotError> {
    raw.parse().map_err(|source| SnapshotError::Period {
        context: context.into(),
        source,
    })
}

fn check_range(
    value: Decimal,
    limit: Decimal,
    context: impl FnOnce() -> String,
) -> Result<Decimal, SnapshotError> {
    if value.abs() > limit {
        return Err(SnapshotError::AmountOutOfRange {
            context: context(),
            value,
            limit,
        });
    }
    Ok(value)
}

fn to_member(dto: MemberDto) -> Result<Member, SnapshotError> {
    let MemberDto {
        id,
        name,
        color,
        income,
        incomes,
    } = dto;

    let mut member = Member::new(MemberId(id), name);
    if let Some(color) = color {
        member = member.with_color(color);
    }
    for entry in income.into_iter().chain(incomes) {
        if entry.amount.is_sign_negative() && !entry.amount.is_zero() {
            return Err(SnapshotError::NegativeIncome {
                member: id,
                amount: entry.amount,
            });
        }
        let amount = check_range(entry.amount, MAX_AMOUNT, || format!("income of member {id}"))?;
        member = member.with_income(Money::from_decimal(amount), entry.currency.into());
    }
    Ok(member)
}

fn to_record(dto: ExpenseDto, default_period: Option<Period>) -> Result<ExpenseRecord, SnapshotError> {
    let period = match &dto.period {
        Some(raw) => parse_period(raw, format!("expense record {}", dto.id))?,
        None => default_period.ok_or(SnapshotError::MissingPeriod(dto.id))?,
    };
    let amount = check_range(dto.amount, MAX_AMOUNT, || {
        format!("amount of expense record {}", dto.id)
    })?;

    Ok(ExpenseRecord {
        id: RecordId(dto.id),
        expense_id: ExpenseId(dto.expense_id.unwrap_or(dto.id)),
        amount: Money::from_decimal(amount),
        currency: dto.currency.into(),
        payer: dto.payer.map(MemberId),
        status: dto.status.into(),
        period,
    })
}

/// Parses a household snapshot.
///
/// A member may list a single `income`, several `incomes`, or both; they are
/// merged. Expense records default to `paid` and to the snapshot's `period`.
/// Incomes must be non-negative; amounts are capped at [`MAX_AMOUNT`] and rates
/// at [`MAX_RATE`].
pub fn parse_snapshot(json: &str) -> Result<HouseholdSnapshot, SnapshotError> {
    let dto: SnapshotDto = serde_json::from_str(json)?;

    let default_period = dto
        .period
        .as_deref()
        .map(|raw| parse_period(raw, "snapshot header"))
        .transpose()?;

    let members = dto
        .members
        .into_iter()
        .map(to_member)
        .collect::<Result<Vec<_>, _>>()?;
    let records = dto
        .expenses
        .into_iter()
        .map(|expense| to_record(expense, default_period))
        .collect::<Result<Vec<_>, _>>()?;

    let mut exchange_rates = InMemoryExchangeRates::new();
    for RateDto { period, rate } in dto.exchange_rates {
        let period = parse_period(&period, "exchange rate")?;
        let rate = check_range(rate, MAX_RATE, || format!("exchange rate for {period}"))?;
        let rate =
            ExchangeRate::new(rate).map_err(|source| SnapshotError::Rate { period, source })?;
        if exchange_rates.insert(period, rate).is_some() {
            return Err(SnapshotError::DuplicateRate(period));
        }
    }

    tracing::debug!(
        member_count = members.len(),
        record_count = records.len(),
        rate_count = exchange_rates.len(),
        "Loaded household snapshot"
    );

    Ok(HouseholdSnapshot {
        default_period,
        household: Household { members, records },
        exchange_rates,
    })
}
