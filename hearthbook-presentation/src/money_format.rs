use hearthbook_domain::{Currency, Money};
use rust_decimal::{Decimal, RoundingStrategy};

/// Display codes for the household's two currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLabels {
    pub reference: String,
    pub secondary: String,
}

impl CurrencyLabels {
    pub fn new(reference: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            secondary: secondary.into(),
        }
    }

    pub fn code(&self, currency: Currency) -> &str {
        match currency {
            Currency::Reference => &self.reference,
            Currency::Secondary => &self.secondary,
        }
    }
}

impl Default for CurrencyLabels {
    fn default() -> Self {
        Self::new("PLN", "EUR")
    }
}

/// `1234.5` → `1,234.50 PLN`. Half-cents round away from zero.
pub fn format_money(amount: Money, code: &str) -> String {
    let (negative, digits) = cents(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{digits} {code}")
}

/// Like [`format_money`] but always signed, so credits read as `+30.00 PLN`.
pub fn format_signed_money(amount: Money, code: &str) -> String {
    let (negative, digits) = cents(amount);
    let sign = if negative { "-" } else { "+" };
    format!("{sign}{digits} {code}")
}

pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

fn cents(amount: Money) -> (bool, String) {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    (negative, format!("{}.{fraction}", group_thousands(whole)))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
