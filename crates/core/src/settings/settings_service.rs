use std::sync::Arc;

use log::warn;

use crate::constants::ADMIN_SETTINGS_KEY;
use crate::currency::{region, CurrencyCode};
use crate::errors::Result;
use crate::settings::settings_model::AdminSettings;
use crate::settings::settings_traits::SettingsStore;

/// Reads and interprets the admin configuration document.
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Loads the admin document. An absent entry yields defaults; a
    /// malformed one is dropped wholesale and logged, also yielding
    /// defaults. Configuration problems must never block quoting.
    pub fn admin_settings(&self) -> Result<AdminSettings> {
        let raw = self.store.get(ADMIN_SETTINGS_KEY)?;
        Ok(match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Ignoring malformed admin settings document: {}", e);
                    AdminSettings::default()
                }
            },
            None => AdminSettings::default(),
        })
    }

    /// Resolves the currency to present first: the admin default wins,
    /// then region detection from the supplied hints, then the base
    /// currency.
    pub fn default_currency(
        &self,
        timezone: Option<&str>,
        country: Option<&str>,
    ) -> Result<CurrencyCode> {
        let settings = self.admin_settings()?;
        Ok(settings
            .preferred_currency()
            .unwrap_or_else(|| region::detect_currency(timezone, country)))
    }
}
