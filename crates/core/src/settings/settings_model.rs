use std::collections::BTreeMap;

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// The persisted admin configuration document.
///
/// Mirrors the JSON stored in the client-local key-value store. Every
/// field is optional and unknown fields are ignored, so documents written
/// by older and newer admin panels both parse. The core only ever reads
/// this document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminSettings {
    /// Overrides the detected presentation currency when present and
    /// supported.
    pub default_currency: Option<String>,
    /// Partial rate table merged over the static fallback rates. Keys are
    /// raw currency codes; entries are validated before use.
    pub fallback_rate_overrides: Option<BTreeMap<String, Decimal>>,
    pub holiday_banner: Option<HolidayBannerSettings>,
}

/// Admin control over the holiday banner, independent of the calendar.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HolidayBannerSettings {
    /// Show the banner regardless of the calendar.
    pub force_show: bool,
    /// Hide the banner regardless of the calendar. `force_show` wins.
    pub disable: bool,
    /// Gates the date-driven auto-enable; absent means enabled.
    pub auto_enable: Option<bool>,
    /// Replacement banner copy.
    pub custom_text: Option<String>,
}

impl HolidayBannerSettings {
    pub fn auto_enabled(&self) -> bool {
        self.auto_enable.unwrap_or(true)
    }
}

impl AdminSettings {
    /// Validated rate overrides: unsupported codes and non-positive rates
    /// are dropped entry by entry with a warning, the rest still apply.
    pub fn rate_overrides(&self) -> BTreeMap<CurrencyCode, Decimal> {
        let mut accepted = BTreeMap::new();
        let Some(overrides) = &self.fallback_rate_overrides else {
            return accepted;
        };

        for (code, rate) in overrides {
            match code.parse::<CurrencyCode>() {
                Ok(parsed) if *rate > Decimal::ZERO => {
                    accepted.insert(parsed, *rate);
                }
                Ok(_) => {
                    warn!("Dropping rate override for {}: {} is not positive", code, rate);
                }
                Err(_) => {
                    warn!("Dropping rate override for unsupported currency '{}'", code);
                }
            }
        }
        accepted
    }

    /// The admin's default currency, if set and supported.
    pub fn preferred_currency(&self) -> Option<CurrencyCode> {
        let code = self.default_currency.as_deref()?;
        match code.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("Ignoring unsupported default currency '{}'", code);
                None
            }
        }
    }

    /// Banner settings, or the all-defaults document when absent.
    pub fn banner(&self) -> HolidayBannerSettings {
        self.holiday_banner.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_document_round_trip() {
        let json = r#"{
            "defaultCurrency": "INR",
            "fallbackRateOverrides": { "INR": 85.0, "EUR": 0.9 },
            "holidayBanner": { "forceShow": true, "customText": "Sale!" }
        }"#;

        let settings: AdminSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.preferred_currency(), Some(CurrencyCode::Inr));
        let overrides = settings.rate_overrides();
        assert_eq!(overrides.get(&CurrencyCode::Inr), Some(&dec!(85.0)));
        assert_eq!(overrides.get(&CurrencyCode::Eur), Some(&dec!(0.9)));
        let banner = settings.banner();
        assert!(banner.force_show);
        assert_eq!(banner.custom_text.as_deref(), Some("Sale!"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{ "defaultCurrency": "EUR", "testimonials": [] }"#;
        let settings: AdminSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.preferred_currency(), Some(CurrencyCode::Eur));
    }

    #[test]
    fn test_bad_override_entries_are_dropped_individually() {
        let json = r#"{
            "fallbackRateOverrides": { "XYZ": 5.0, "EUR": -1.0, "GBP": 0.80 }
        }"#;

        let settings: AdminSettings = serde_json::from_str(json).unwrap();
        let overrides = settings.rate_overrides();

        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get(&CurrencyCode::Gbp), Some(&dec!(0.80)));
    }

    #[test]
    fn test_unsupported_default_currency_is_ignored() {
        let json = r#"{ "defaultCurrency": "XYZ" }"#;
        let settings: AdminSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.preferred_currency(), None);
    }

    #[test]
    fn test_auto_enable_defaults_to_on() {
        assert!(HolidayBannerSettings::default().auto_enabled());
        let gated = HolidayBannerSettings {
            auto_enable: Some(false),
            ..Default::default()
        };
        assert!(!gated.auto_enabled());
    }
}
