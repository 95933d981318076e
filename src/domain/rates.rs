use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const USD_TO_EUR: &str = "USD_TO_EUR";
pub const USD_TO_KZT: &str = "USD_TO_KZT";

/// Mapping from currency-pair key (e.g. `"USD_TO_EUR"`) to its rate.
///
/// Keys are unique; writing an existing key replaces its value. Rates are
/// `Decimal` so the "new value equals the current value" check in
/// `CurrencyExchange::set_rate` is exact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed table used when no rates file is given.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.set(USD_TO_EUR, dec!(0.92));
        table.set(USD_TO_KZT, dec!(470.5));
        table
    }

    pub fn get(&self, pair: &str) -> Option<Decimal> {
        self.rates.get(pair).copied()
    }

    /// Inserts or replaces a rate, returning the previous value if the
    /// pair was already present.
    pub fn set(&mut self, pair: &str, rate: Decimal) -> Option<Decimal> {
        self.rates.insert(pair.to_string(), rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
