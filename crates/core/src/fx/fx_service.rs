use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::warn;
use rust_decimal::Decimal;

use crate::constants::BASE_CURRENCY;
use crate::currency::CurrencyCode;
use crate::errors::Result;
use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::RateSet;
use crate::settings::AdminSettings;
use pricekit_rates::{RateFetchError, RateSnapshot, RateSourceProvider};

struct ProviderState {
    /// Full base table: the static fallback until a successful remote
    /// refresh replaces it wholesale.
    base: RateSet,
    /// Admin overrides, reapplied on top of every new base table.
    overrides: BTreeMap<CurrencyCode, Decimal>,
    /// `base` merged with `overrides`. Handed out to readers as a shared
    /// reference and swapped as a whole, never mutated in place.
    active: Arc<RateSet>,
}

impl ProviderState {
    fn rebuild_active(&mut self) {
        self.active = Arc::new(self.base.merged(&self.overrides));
    }
}

/// Resolves the active rate table: the static fallback, overlaid with
/// admin overrides, optionally refreshed wholesale from a remote source.
///
/// Quoting must stay fully correct with zero network access; the remote
/// source is strictly additive freshness. A failed refresh leaves the
/// active table untouched.
pub struct RateProvider {
    state: RwLock<ProviderState>,
    source: Option<Arc<dyn RateSourceProvider>>,
}

impl RateProvider {
    /// Provider over the static fallback table, with no remote source.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Provider that can additionally refresh from `source`.
    pub fn with_source(source: Arc<dyn RateSourceProvider>) -> Self {
        Self::build(Some(source))
    }

    /// Provider initialized from the admin configuration: the override
    /// map is applied on top of the fallback table at construction.
    pub fn from_settings(
        settings: &AdminSettings,
        source: Option<Arc<dyn RateSourceProvider>>,
    ) -> Self {
        let provider = Self::build(source);
        let overrides = settings.rate_overrides();
        if !overrides.is_empty() {
            if let Err(e) = provider.apply_override(overrides) {
                warn!("Failed to apply configured rate overrides: {}", e);
            }
        }
        provider
    }

    fn build(source: Option<Arc<dyn RateSourceProvider>>) -> Self {
        let base = RateSet::fallback();
        let active = Arc::new(base.clone());
        Self {
            state: RwLock::new(ProviderState {
                base,
                overrides: BTreeMap::new(),
                active,
            }),
            source,
        }
    }

    /// Returns the active table. The returned reference stays internally
    /// consistent even if a refresh swaps the table afterwards.
    pub fn current_rates(&self) -> Result<Arc<RateSet>> {
        let state = self
            .state
            .read()
            .map_err(|e| FxError::Cache(e.to_string()))?;
        Ok(state.active.clone())
    }

    /// Returns the active multiplier for `code`.
    pub fn rate_of(&self, code: CurrencyCode) -> Result<Decimal> {
        Ok(self.current_rates()?.rate_of(code)?)
    }

    /// Merges `partial` into the active table; unspecified codes retain
    /// their prior values. Applying the same override twice yields the
    /// same table as applying it once.
    ///
    /// Entries are validated one by one: a non-positive rate, or an
    /// attempt to move the base currency off exactly 1, is dropped with a
    /// warning while the remaining entries still apply.
    pub fn apply_override(&self, partial: BTreeMap<CurrencyCode, Decimal>) -> Result<()> {
        let mut accepted = BTreeMap::new();
        for (code, rate) in partial {
            if rate <= Decimal::ZERO {
                warn!("Dropping rate override for {}: {} is not positive", code, rate);
                continue;
            }
            if code == BASE_CURRENCY && rate != Decimal::ONE {
                warn!(
                    "Dropping rate override for {}: base currency rate is fixed at 1",
                    code
                );
                continue;
            }
            accepted.insert(code, rate);
        }

        let mut state = self
            .state
            .write()
            .map_err(|e| FxError::Cache(e.to_string()))?;
        state.overrides.extend(accepted);
        state.rebuild_active();
        Ok(())
    }

    /// Attempts to fetch a fresh full table from the configured remote
    /// source. On success the entire base table is replaced and the
    /// recorded overrides are reapplied on top, all in one swap. On any
    /// failure the active table is left identical and the error is
    /// returned; callers log it and keep quoting from the existing table.
    pub async fn refresh_from_remote(&self) -> Result<Arc<RateSet>> {
        let source = self
            .source
            .as_ref()
            .ok_or(FxError::SourceNotConfigured)?
            .clone();

        // Fetch and validate before taking the write lock; the lock is
        // only held for the swap itself.
        let snapshot = source.fetch_latest(BASE_CURRENCY.as_str()).await?;
        let base = validate_snapshot(&snapshot, source.id())?;

        let mut state = self
            .state
            .write()
            .map_err(|e| FxError::Cache(e.to_string()))?;
        state.base = base;
        state.rebuild_active();
        Ok(state.active.clone())
    }
}

impl Default for RateProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a complete [`RateSet`] from a snapshot, or fails without
/// touching anything.
///
/// Every supported currency must be present with a positive rate and the
/// snapshot's base must match ours. The base currency's own entry is
/// pinned at exactly 1 regardless of how the source spelled it.
fn validate_snapshot(
    snapshot: &RateSnapshot,
    provider_id: &str,
) -> std::result::Result<RateSet, RateFetchError> {
    if snapshot.base != BASE_CURRENCY.as_str() {
        return Err(RateFetchError::BaseMismatch {
            provider: provider_id.to_string(),
            base: snapshot.base.clone(),
        });
    }

    let mut rates = BTreeMap::new();
    for code in CurrencyCode::ALL {
        let rate = snapshot
            .rate(code.as_str())
            .ok_or_else(|| RateFetchError::MissingCurrency {
                provider: provider_id.to_string(),
                code: code.to_string(),
            })?;
        if rate <= Decimal::ZERO {
            return Err(RateFetchError::InvalidRate {
                provider: provider_id.to_string(),
                code: code.to_string(),
            });
        }
        rates.insert(code, rate);
    }
    rates.insert(BASE_CURRENCY, Decimal::ONE);

    Ok(RateSet::from_rates(rates))
}
