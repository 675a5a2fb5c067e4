use crate::{
    error::HouseholdValidationError,
    model::{BalanceReport, Household, RateSource},
    ports::ExchangeRateProvider,
};
use fxhash::FxHashSet;
use hearthbook_domain::{
    BalanceCalculator, ExchangeRate, MemberId, PaidExpenseRecord, Period, SettlementCalculator,
};

/// Turns a household snapshot into the balance report for one period.
#[derive(Clone, Copy)]
pub struct BalanceProcessor<'a> {
    rates: &'a dyn ExchangeRateProvider,
}

impl<'a> BalanceProcessor<'a> {
    pub fn new(rates: &'a dyn ExchangeRateProvider) -> Self {
        Self { rates }
    }

    pub fn resolve_rate(&self, period: Period) -> (ExchangeRate, RateSource) {
        match self.rates.rate_for(period) {
            Some(rate) => (rate, RateSource::Recorded),
            None => {
                tracing::warn!(%period, "No exchange rate recorded; using identity rate");
                (ExchangeRate::default(), RateSource::Default)
            }
        }
    }

    /// Paid records of the period, after checking that every one of them has a
    /// known payer.
    pub fn paid_records(
        &self,
        household: &Household,
        period: Period,
    ) -> Result<Vec<PaidExpenseRecord>, HouseholdValidationError> {
        let member_ids = unique_member_ids(household)?;

        household
            .records
            .iter()
            .filter(|record| record.period == period && record.is_paid())
            .map(|record| {
                let payer = record
                    .payer
                    .ok_or(HouseholdValidationError::MissingPayer { record: record.id })?;
                if !member_ids.contains(&payer) {
                    return Err(HouseholdValidationError::UnknownPayer {
                        record: record.id,
                        payer,
                    });
                }
                Ok(PaidExpenseRecord {
                    id: record.id,
                    expense_id: record.expense_id,
                    amount: record.amount,
                    currency: record.currency,
                    payer,
                })
            })
            .collect()
    }

    pub fn build_report(
        &self,
        household: &Household,
        period: Period,
    ) -> Result<BalanceReport, HouseholdValidationError> {
        let paid_records = self.paid_records(household, period)?;
        let (exchange_rate, rate_source) = self.resolve_rate(period);

        let sheet = BalanceCalculator.compute_balance_sheet(
            &household.members,
            &paid_records,
            exchange_rate,
        );
        let transfers = SettlementCalculator.compute_settlements(&sheet.balances);

        tracing::info!(
            %period,
            member_count = household.members.len(),
            paid_record_count = paid_records.len(),
            skipped_record_count = household.records.len() - paid_records.len(),
            transfer_count = transfers.len(),
            "Built balance report"
        );

        Ok(BalanceReport {
            period,
            exchange_rate,
            rate_source,
            total_income: sheet.total_income,
            total_paid_expenses: sheet.total_paid_expenses,
            balances: sheet.balances,
            transfers,
        })
    }
}

fn unique_member_ids(household: &Household) -> Result<FxHashSet<MemberId>, HouseholdValidationError> {
    let mut ids = FxHashSet::default();
    for member in &household.members {
        if !ids.insert(member.id) {
            return Err(HouseholdValidationError::DuplicateMember(member.id));
        }
    }
    Ok(ids)
}
