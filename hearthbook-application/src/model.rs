use hearthbook_domain::{
    Balance, Currency, ExchangeRate, ExpenseId, Member, MemberId, Money, Period, RecordId, Transfer,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpenseStatus {
    #[default]
    Paid,
    Pending,
    Overdue,
}

/// One occurrence of a recurring expense within a period. Only paid records
/// with a payer take part in balance calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub expense_id: ExpenseId,
    pub amount: Money,
    pub currency: Currency,
    pub payer: Option<MemberId>,
    pub status: ExpenseStatus,
    pub period: Period,
}

impl ExpenseRecord {
    pub fn is_paid(&self) -> bool {
        self.status == ExpenseStatus::Paid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Household {
    pub members: Vec<Member>,
    pub records: Vec<ExpenseRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// The household recorded a rate for the period.
    Recorded,
    /// No rate was recorded; amounts were taken as-is.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub period: Period,
    pub exchange_rate: ExchangeRate,
    pub rate_source: RateSource,
    pub total_income: Money,
    pub total_paid_expenses: Money,
    pub balances: Vec<Balance>,
    pub transfers: Vec<Transfer>,
}

impl BalanceReport {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
