use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// All exchange rates, keyed by pair (`"BTC_USD"`, `"USDT_RUB"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    /// Rate per currency pair
    pub rates: BTreeMap<String, f64>,
}

impl ExchangeRates {
    /// Returns the rate for `base`/`quote`, e.g. `rate("BTC", "USD")`.
    #[must_use]
    pub fn rate(&self, base: &str, quote: &str) -> Option<f64> {
        self.rates.get(&format!("{base}_{quote}")).copied()
    }
}
