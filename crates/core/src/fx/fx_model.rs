use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyCode;
use crate::fx::fx_errors::FxError;

/// The active currency to multiplier table used for conversion at a given
/// moment.
///
/// Rates express "1 unit of the base currency = rate units of this
/// currency". Sets built by this crate are complete over every supported
/// code and carry an exact 1 for the base currency. A `RateSet` is a
/// value: the provider replaces it wholesale, never edits it in place, so
/// a reader holding one can never observe a partial update.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RateSet {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateSet {
    /// Builds the static fallback table compiled into the binary.
    pub fn fallback() -> Self {
        let rates = CurrencyCode::ALL
            .iter()
            .map(|code| (*code, code.fallback_rate()))
            .collect();
        Self { rates }
    }

    /// Builds a set from an already-validated complete map.
    pub fn from_rates(rates: BTreeMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }

    /// Returns the multiplier for `code`.
    pub fn rate_of(&self, code: CurrencyCode) -> Result<Decimal, FxError> {
        self.rates
            .get(&code)
            .copied()
            .ok_or_else(|| FxError::RateNotFound(code.to_string()))
    }

    /// Returns a copy of this set with `overrides` merged on top. Codes
    /// absent from `overrides` retain their prior values.
    pub fn merged(&self, overrides: &BTreeMap<CurrencyCode, Decimal>) -> Self {
        let mut rates = self.rates.clone();
        for (code, rate) in overrides {
            rates.insert(*code, *rate);
        }
        Self { rates }
    }

    /// Iterates over (code, rate) pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, Decimal)> + '_ {
        self.rates.iter().map(|(code, rate)| (*code, *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
