use crate::{
    labels,
    money_format::{CurrencyLabels, format_money, format_percent, format_signed_money},
    text_table::{Alignment, TextTableBuilder},
};
use hearthbook_application::{BalanceReport, MemberDirectory, RateSource};
use hearthbook_domain::{Balance, Currency, MemberId, Transfer};
use std::borrow::Cow;

pub struct BalancePresenter;

pub struct BalanceView {
    pub header: String,
    pub balance_table: String,
    pub transfer_table: Option<String>,
}

impl BalanceView {
    /// Header, balances and transfers joined for terminal output.
    pub fn to_text(&self) -> String {
        let transfers = self
            .transfer_table
            .as_deref()
            .unwrap_or(labels::ALL_SETTLED);
        format!(
            "{}\n\n{}\n{}",
            self.header,
            self.balance_table,
            transfers.trim_end()
        )
    }
}

impl BalancePresenter {
    pub fn render(
        report: &BalanceReport,
        member_directory: &dyn MemberDirectory,
        currencies: &CurrencyLabels,
    ) -> BalanceView {
        let code = currencies.code(Currency::Reference);
        let header = Self::build_header(report, currencies);
        let balance_table = Self::build_balance_table(&report.balances, member_directory, code);

        let transfer_table = if report.transfers.is_empty() {
            None
        } else {
            Some(Self::build_transfer_table(
                &report.transfers,
                member_directory,
                code,
            ))
        };

        BalanceView {
            header,
            balance_table,
            transfer_table,
        }
    }

    pub fn build_header(report: &BalanceReport, currencies: &CurrencyLabels) -> String {
        let code = currencies.code(Currency::Reference);
        let rate = match report.rate_source {
            RateSource::Recorded => format!(
                "1 {} = {} {code}",
                currencies.code(Currency::Secondary),
                report.exchange_rate.value().normalize()
            ),
            RateSource::Default => labels::RATE_NOT_RECORDED.to_string(),
        };

        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {rate}",
            labels::PERIOD,
            report.period,
            labels::INCOME,
            format_money(report.total_income, code),
            labels::PAID_EXPENSES,
            format_money(report.total_paid_expenses, code),
            labels::RATE,
        )
    }

    pub fn build_balance_table(
        balances: &[Balance],
        member_directory: &dyn MemberDirectory,
        code: &str,
    ) -> String {
        let headers = [
            Cow::Borrowed(labels::MEMBER),
            Cow::Borrowed(labels::SHARE),
            Cow::Borrowed(labels::OWED),
            Cow::Borrowed(labels::PAID),
            Cow::Borrowed(labels::BALANCE),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&headers);

        for balance in balances {
            builder = builder.row([
                format_member_label(balance.member_id, member_directory),
                Cow::Owned(format_percent(balance.income_share_percent)),
                Cow::Owned(format_money(balance.total_owed, code)),
                Cow::Owned(format_money(balance.total_paid, code)),
                Cow::Owned(format_signed_money(balance.net_balance, code)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(
        transfers: &[Transfer],
        member_directory: &dyn MemberDirectory,
        code: &str,
    ) -> String {
        let headers = [
            Cow::Borrowed(labels::FROM),
            Cow::Borrowed(labels::TO),
            Cow::Borrowed(labels::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                format_member_label(transfer.from, member_directory),
                format_member_label(transfer.to, member_directory),
                Cow::Owned(format_money(transfer.amount, code)),
            ]);
        }

        builder.build()
    }
}

fn format_member_label<'a>(
    member_id: MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(member_id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearthbook_domain::{ExchangeRate, Money, Period};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn sample_report(transfers: Vec<Transfer>) -> BalanceReport {
        BalanceReport {
            period: Period::new(2026, 10).expect("valid period"),
            exchange_rate: ExchangeRate::new(dec!(4.30)).expect("positive rate"),
            rate_source: RateSource::Recorded,
            total_income: Money::from_i64(100),
            total_paid_expenses: Money::from_i64(100),
            balances: vec![
                Balance {
                    member_id: MemberId(1),
                    income_share_percent: dec!(70),
                    total_owed: Money::from_i64(70),
                    total_paid: Money::from_i64(100),
                    net_balance: Money::from_i64(30),
                },
                Balance {
                    member_id: MemberId(2),
                    income_share_percent: Decimal::from(30),
                    total_owed: Money::from_i64(30),
                    total_paid: Money::ZERO,
                    net_balance: Money::from_i64(-30),
                },
            ],
            transfers,
        }
    }

    fn bob_to_alice() -> Vec<Transfer> {
        vec![Transfer {
            from: MemberId(2),
            to: MemberId(1),
            amount: Money::from_i64(30),
        }]
    }

    #[test]
    fn render_uses_display_name_when_available() {
        let directory = HashMap::from([
            (MemberId(1), "Alice".to_string()),
            (MemberId(2), "Bob".to_string()),
        ]);

        let view = BalancePresenter::render(
            &sample_report(bob_to_alice()),
            &directory,
            &CurrencyLabels::default(),
        );

        assert!(view.balance_table.contains("Alice"));
        assert!(view.balance_table.contains("70.0%"));
        assert!(view.balance_table.contains("+30.00 PLN"));
        assert!(view.balance_table.contains("-30.00 PLN"));
        let transfers = view.transfer_table.expect("transfer table");
        let row = transfers.lines().nth(2).expect("transfer row");
        assert!(row.starts_with("Bob"));
        assert!(row.contains("Alice"));
        assert!(row.ends_with("30.00 PLN"));
    }

    #[test]
    fn render_falls_back_to_member_ids_when_missing() {
        let directory: HashMap<MemberId, String> = HashMap::new();

        let view = BalancePresenter::render(
            &sample_report(bob_to_alice()),
            &directory,
            &CurrencyLabels::default(),
        );

        assert!(view.balance_table.contains("#1"));
        assert!(
            view.transfer_table
                .as_ref()
                .expect("transfer table")
                .contains("#2")
        );
    }

    #[test]
    fn settled_report_has_no_transfer_table() {
        let directory: HashMap<MemberId, String> = HashMap::new();

        let view = BalancePresenter::render(
            &sample_report(Vec::new()),
            &directory,
            &CurrencyLabels::default(),
        );

        assert!(view.transfer_table.is_none());
        assert!(view.to_text().ends_with(labels::ALL_SETTLED));
    }

    #[test]
    fn header_describes_period_totals_and_rate() {
        let mut report = sample_report(Vec::new());
        let currencies = CurrencyLabels::new("PLN", "EUR");

        let header = BalancePresenter::build_header(&report, &currencies);
        assert!(header.contains("2026-10"));
        assert!(header.contains("100.00 PLN"));
        assert!(header.contains("1 EUR = 4.3 PLN"));

        report.rate_source = RateSource::Default;
        let header = BalancePresenter::build_header(&report, &currencies);
        assert!(header.contains(labels::RATE_NOT_RECORDED));
    }
}
