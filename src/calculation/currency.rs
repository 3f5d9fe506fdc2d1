//! Currency normalization.
//!
//! Converts amounts from a staff member's base currency into the single
//! reporting currency. Manual overrides shadow fetched rates per currency;
//! an unknown currency converts at 1 so computation never blocks on a
//! missing rate.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reporting currency used when none is configured.
pub const DEFAULT_REPORTING_CURRENCY: &str = "GBP";

/// A table of multipliers from source currencies to the reporting currency.
///
/// Every rate is expressed as "1 unit of X equals this much reporting
/// currency". Manual rates, once set, persist until explicitly cleared and
/// always win over fetched rates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::ExchangeRateTable;
/// use rust_decimal::Decimal;
///
/// let mut table = ExchangeRateTable::default_table();
/// let fetched = table.convert(Decimal::new(100, 0), "USD");
///
/// table.set_manual_rate("USD", Decimal::new(80, 2)); // 0.80
/// assert_eq!(table.convert(Decimal::new(100, 0), "USD"), Decimal::new(80, 0));
///
/// table.clear_manual_rate("USD");
/// assert_eq!(table.convert(Decimal::new(100, 0), "USD"), fetched);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    reporting_currency: String,
    fetched: HashMap<String, Decimal>,
    #[serde(default)]
    manual: HashMap<String, Decimal>,
}

impl ExchangeRateTable {
    /// Builds a table over fetched rates with no manual overrides.
    pub fn new(reporting_currency: impl Into<String>, fetched: HashMap<String, Decimal>) -> Self {
        Self {
            reporting_currency: reporting_currency.into(),
            fetched,
            manual: HashMap::new(),
        }
    }

    /// The compiled-in fallback table, used when no external rate source is
    /// reachable. Reports in GBP.
    pub fn default_table() -> Self {
        let fetched = [
            ("GBP", Decimal::new(1, 0)),
            ("USD", Decimal::new(79, 2)),
            ("EUR", Decimal::new(85, 2)),
            ("INR", Decimal::new(95, 4)),
            ("AED", Decimal::new(215, 3)),
            ("AUD", Decimal::new(52, 2)),
            ("CAD", Decimal::new(58, 2)),
            ("PHP", Decimal::new(14, 3)),
            ("ZAR", Decimal::new(42, 3)),
            ("NGN", Decimal::new(52, 5)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self::new(DEFAULT_REPORTING_CURRENCY, fetched)
    }

    /// The currency all conversions target.
    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    /// Sets a manual override for a currency, shadowing the fetched rate.
    pub fn set_manual_rate(&mut self, currency: &str, rate: Decimal) {
        self.manual.insert(currency.to_string(), rate);
    }

    /// Clears a manual override, reverting to the fetched rate.
    pub fn clear_manual_rate(&mut self, currency: &str) {
        self.manual.remove(currency);
    }

    /// The effective multiplier for a currency: manual override first, then
    /// the fetched rate, then 1.
    pub fn rate_for(&self, currency: &str) -> Decimal {
        self.manual
            .get(currency)
            .or_else(|| self.fetched.get(currency))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Converts an amount from the given currency to the reporting currency.
    pub fn convert(&self, amount: Decimal, currency: &str) -> Decimal {
        amount * self.rate_for(currency)
    }
}
