//! Tests for the RateProvider contract.
//!
//! # Critical Contract Points
//!
//! 1. Quoting must be fully correct from the static fallback table alone
//! 2. Overrides merge, never replace, and applying one twice is a no-op
//! 3. A failed refresh leaves the active table identical by value
//! 4. A successful refresh replaces the base wholesale and reapplies
//!    overrides on top

#[cfg(test)]
mod tests {
    use crate::currency::CurrencyCode;
    use crate::errors::Error;
    use crate::fx::{FxError, RateProvider};
    use async_trait::async_trait;
    use chrono::Utc;
    use pricekit_rates::{RateFetchError, RateSnapshot, RateSourceProvider};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock rate source
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockRateSource {
        rates: Arc<Mutex<HashMap<String, Decimal>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MockRateSource {
        fn with_uniform_rate(rate: Decimal) -> Self {
            let rates = CurrencyCode::ALL
                .iter()
                .map(|code| (code.as_str().to_string(), rate))
                .collect();
            Self {
                rates: Arc::new(Mutex::new(rates)),
                fail: Arc::new(Mutex::new(false)),
            }
        }

        fn failing() -> Self {
            Self {
                rates: Arc::new(Mutex::new(HashMap::new())),
                fail: Arc::new(Mutex::new(true)),
            }
        }

        fn remove_rate(&self, code: &str) {
            self.rates.lock().unwrap().remove(code);
        }
    }

    #[async_trait]
    impl RateSourceProvider for MockRateSource {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot, RateFetchError> {
            if *self.fail.lock().unwrap() {
                return Err(RateFetchError::InvalidStatus {
                    provider: "MOCK".to_string(),
                    status: 503,
                });
            }
            Ok(RateSnapshot {
                base: base.to_string(),
                timestamp: Utc::now(),
                rates: self.rates.lock().unwrap().clone(),
            })
        }
    }

    fn overrides(entries: &[(CurrencyCode, Decimal)]) -> BTreeMap<CurrencyCode, Decimal> {
        entries.iter().copied().collect()
    }

    // =========================================================================
    // Fallback table
    // =========================================================================

    #[test]
    fn test_starts_from_static_fallback_table() {
        let provider = RateProvider::new();

        assert_eq!(provider.rate_of(CurrencyCode::Usd).unwrap(), Decimal::ONE);
        assert_eq!(provider.rate_of(CurrencyCode::Inr).unwrap(), dec!(83.12));
        assert_eq!(provider.rate_of(CurrencyCode::Zar).unwrap(), dec!(18.75));
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn test_override_merges_without_discarding_rest() {
        let provider = RateProvider::new();

        provider
            .apply_override(overrides(&[(CurrencyCode::Inr, dec!(85.00))]))
            .unwrap();

        assert_eq!(provider.rate_of(CurrencyCode::Inr).unwrap(), dec!(85.00));
        assert_eq!(provider.rate_of(CurrencyCode::Eur).unwrap(), dec!(0.85));
    }

    #[test]
    fn test_override_is_idempotent() {
        let provider = RateProvider::new();
        let partial = overrides(&[(CurrencyCode::Gbp, dec!(0.80)), (CurrencyCode::Php, dec!(56.25))]);

        provider.apply_override(partial.clone()).unwrap();
        let once = provider.current_rates().unwrap();

        provider.apply_override(partial).unwrap();
        let twice = provider.current_rates().unwrap();

        assert_eq!(*once, *twice);
    }

    #[test]
    fn test_override_drops_non_positive_entries_but_applies_valid_ones() {
        let provider = RateProvider::new();

        provider
            .apply_override(overrides(&[
                (CurrencyCode::Eur, dec!(-1)),
                (CurrencyCode::Cad, dec!(1.30)),
            ]))
            .unwrap();

        assert_eq!(provider.rate_of(CurrencyCode::Eur).unwrap(), dec!(0.85));
        assert_eq!(provider.rate_of(CurrencyCode::Cad).unwrap(), dec!(1.30));
    }

    #[test]
    fn test_override_cannot_move_base_currency_off_one() {
        let provider = RateProvider::new();

        provider
            .apply_override(overrides(&[(CurrencyCode::Usd, dec!(2))]))
            .unwrap();

        assert_eq!(provider.rate_of(CurrencyCode::Usd).unwrap(), Decimal::ONE);
    }

    // =========================================================================
    // Remote refresh
    // =========================================================================

    #[tokio::test]
    async fn test_refresh_replaces_base_wholesale() {
        let source = MockRateSource::with_uniform_rate(dec!(2.00));
        let provider = RateProvider::with_source(Arc::new(source));

        provider.refresh_from_remote().await.unwrap();

        assert_eq!(provider.rate_of(CurrencyCode::Inr).unwrap(), dec!(2.00));
        assert_eq!(provider.rate_of(CurrencyCode::Jpy).unwrap(), dec!(2.00));
        // The base currency is pinned at exactly 1 regardless of the payload.
        assert_eq!(provider.rate_of(CurrencyCode::Usd).unwrap(), Decimal::ONE);
    }

    #[tokio::test]
    async fn test_refresh_reapplies_overrides_on_top() {
        let source = MockRateSource::with_uniform_rate(dec!(2.00));
        let provider = RateProvider::with_source(Arc::new(source));

        provider
            .apply_override(overrides(&[(CurrencyCode::Inr, dec!(85.00))]))
            .unwrap();
        provider.refresh_from_remote().await.unwrap();

        assert_eq!(provider.rate_of(CurrencyCode::Inr).unwrap(), dec!(85.00));
        assert_eq!(provider.rate_of(CurrencyCode::Eur).unwrap(), dec!(2.00));
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_table_identical() {
        let provider = RateProvider::with_source(Arc::new(MockRateSource::failing()));
        let before = provider.current_rates().unwrap();

        let err = provider.refresh_from_remote().await.unwrap_err();

        assert!(matches!(err, Error::RateFetch(_)));
        let after = provider.current_rates().unwrap();
        assert_eq!(*before, *after);
    }

    #[tokio::test]
    async fn test_refresh_with_missing_currency_fails_atomically() {
        let source = MockRateSource::with_uniform_rate(dec!(2.00));
        source.remove_rate("PHP");
        let provider = RateProvider::with_source(Arc::new(source));
        let before = provider.current_rates().unwrap();

        let err = provider.refresh_from_remote().await.unwrap_err();

        assert!(matches!(
            err,
            Error::RateFetch(RateFetchError::MissingCurrency { ref code, .. }) if code == "PHP"
        ));
        assert_eq!(*before, *provider.current_rates().unwrap());
    }

    #[tokio::test]
    async fn test_refresh_without_source_is_an_error() {
        let provider = RateProvider::new();

        let err = provider.refresh_from_remote().await.unwrap_err();

        assert!(matches!(err, Error::Fx(FxError::SourceNotConfigured)));
    }
}
