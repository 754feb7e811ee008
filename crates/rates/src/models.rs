//! Data models for fetched rate tables.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A full exchange-rate table fetched from a remote source.
///
/// Rates are multipliers relative to `base`: 1 unit of `base` equals
/// `rates[code]` units of `code`. A snapshot is only constructed from a
/// fully validated response; consumers may still re-validate against their
/// own supported-currency set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    /// Currency all rates are expressed against, e.g. "USD".
    pub base: String,
    /// When the snapshot was fetched.
    pub timestamp: DateTime<Utc>,
    /// Currency code to multiplier.
    pub rates: HashMap<String, Decimal>,
}

impl RateSnapshot {
    /// Returns the rate for `code`, if present.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }
}
