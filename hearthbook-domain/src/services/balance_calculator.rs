use crate::model::{Balance, BalanceSheet, ExchangeRate, Member, MemberId, Money, PaidExpenseRecord};
use fxhash::FxHashMap;
use rust_decimal::Decimal;

/// Splits paid household expenses between members in proportion to income.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Per-member balances in member input order.
    pub fn compute_balances(
        &self,
        members: &[Member],
        paid_expenses: &[PaidExpenseRecord],
        exchange_rate: ExchangeRate,
    ) -> Vec<Balance> {
        self.compute_balance_sheet(members, paid_expenses, exchange_rate)
            .balances
    }

    /// Same as [`Self::compute_balances`] but also reports the household totals.
    ///
    /// Expenses are split strictly by income share: a member earning 70% of the
    /// household income owes 70% of everything paid. With no income at all every
    /// share is zero, so nobody owes anything and payers are owed in full.
    pub fn compute_balance_sheet(
        &self,
        members: &[Member],
        paid_expenses: &[PaidExpenseRecord],
        exchange_rate: ExchangeRate,
    ) -> BalanceSheet {
        let incomes: Vec<Money> = members
            .iter()
            .map(|member| member.income_in_reference(exchange_rate))
            .collect();
        let total_income: Money = incomes.iter().sum();

        let mut paid_by_member: FxHashMap<MemberId, Money> = FxHashMap::default();
        let mut total_paid_expenses = Money::ZERO;
        for record in paid_expenses {
            let amount = exchange_rate.to_reference(record.amount, record.currency);
            total_paid_expenses += amount;
            *paid_by_member.entry(record.payer).or_insert(Money::ZERO) += amount;
        }

        let balances: Vec<Balance> = members
            .iter()
            .zip(&incomes)
            .map(|(member, &income)| {
                let income_share_percent = if total_income.is_zero() {
                    Decimal::ZERO
                } else {
                    income.as_decimal() / total_income.as_decimal() * Decimal::ONE_HUNDRED
                };
                let total_owed = Money::from_decimal(
                    total_paid_expenses.as_decimal() * income_share_percent
                        / Decimal::ONE_HUNDRED,
                );
                let total_paid = paid_by_member
                    .get(&member.id)
                    .copied()
                    .unwrap_or(Money::ZERO);

                Balance {
                    member_id: member.id,
                    income_share_percent,
                    total_owed,
                    total_paid,
                    net_balance: total_paid - total_owed,
                }
            })
            .collect();

        tracing::debug!(
            member_count = members.len(),
            record_count = paid_expenses.len(),
            exchange_rate = %exchange_rate,
            total_income = %total_income,
            total_paid_expenses = %total_paid_expenses,
            "Computed household balances"
        );

        BalanceSheet {
            total_income,
            total_paid_expenses,
            balances,
        }
    }
}
