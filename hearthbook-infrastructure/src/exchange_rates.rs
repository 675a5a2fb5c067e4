use fxhash::FxHashMap;
use hearthbook_application::ExchangeRateProvider;
use hearthbook_domain::{ExchangeRate, Period};

/// Exchange rates recorded by the household, one per month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryExchangeRates {
    rates: FxHashMap<Period, ExchangeRate>,
}

impl InMemoryExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rate previously stored for the period, if any.
    pub fn insert(&mut self, period: Period, rate: ExchangeRate) -> Option<ExchangeRate> {
        self.rates.insert(period, rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(Period, ExchangeRate)> for InMemoryExchangeRates {
    fn from_iter<I: IntoIterator<Item = (Period, ExchangeRate)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl ExchangeRateProvider for InMemoryExchangeRates {
    fn rate_for(&self, period: Period) -> Option<ExchangeRate> {
        self.rates.get(&period).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rates_are_scoped_to_their_period() {
        let october = Period::new(2026, 10).expect("valid period");
        let november = Period::new(2026, 11).expect("valid period");
        let rate = ExchangeRate::new(dec!(4.31)).expect("positive rate");
        let rates: InMemoryExchangeRates = [(october, rate)].into_iter().collect();

        assert_eq!(rates.rate_for(october), Some(rate));
        assert_eq!(rates.rate_for(november), None);
    }

    #[test]
    fn insert_reports_replaced_rate() {
        let period = Period::new(2026, 1).expect("valid period");
        let first = ExchangeRate::new(dec!(4.2)).expect("positive rate");
        let second = ExchangeRate::new(dec!(4.3)).expect("positive rate");
        let mut rates = InMemoryExchangeRates::new();

        assert_eq!(rates.insert(period, first), None);
        assert_eq!(rates.insert(period, second), Some(first));
        assert_eq!(rates.len(), 1);
    }
}
