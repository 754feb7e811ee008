//! Region to currency mappings.
//!
//! Pure lookups used to pick a presentation currency for a visitor. The
//! embedding application supplies the timezone and country it detected;
//! how it obtains them (browser APIs, geolocation services) is its own
//! concern.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::CurrencyCode;

static TIMEZONE_CURRENCIES: OnceLock<HashMap<&'static str, CurrencyCode>> = OnceLock::new();
static COUNTRY_CURRENCIES: OnceLock<HashMap<&'static str, CurrencyCode>> = OnceLock::new();

fn timezone_map() -> &'static HashMap<&'static str, CurrencyCode> {
    TIMEZONE_CURRENCIES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert("America/New_York", CurrencyCode::Usd);
        map.insert("America/Chicago", CurrencyCode::Usd);
        map.insert("America/Denver", CurrencyCode::Usd);
        map.insert("America/Los_Angeles", CurrencyCode::Usd);
        map.insert("America/Toronto", CurrencyCode::Cad);
        map.insert("America/Vancouver", CurrencyCode::Cad);
        map.insert("Europe/London", CurrencyCode::Gbp);
        map.insert("Europe/Dublin", CurrencyCode::Eur);
        map.insert("Europe/Paris", CurrencyCode::Eur);
        map.insert("Europe/Berlin", CurrencyCode::Eur);
        map.insert("Europe/Amsterdam", CurrencyCode::Eur);
        map.insert("Asia/Kolkata", CurrencyCode::Inr);
        map.insert("Asia/Mumbai", CurrencyCode::Inr);
        map.insert("Asia/Manila", CurrencyCode::Php);
        map.insert("Africa/Johannesburg", CurrencyCode::Zar);
        map.insert("Australia/Sydney", CurrencyCode::Aud);
        map.insert("Australia/Melbourne", CurrencyCode::Aud);
        map.insert("Asia/Tokyo", CurrencyCode::Jpy);
        map.insert("Asia/Shanghai", CurrencyCode::Cny);

        map
    })
}

fn country_map() -> &'static HashMap<&'static str, CurrencyCode> {
    COUNTRY_CURRENCIES.get_or_init(|| {
        let mut map = HashMap::new();

        map.insert("US", CurrencyCode::Usd);
        map.insert("IN", CurrencyCode::Inr);
        map.insert("GB", CurrencyCode::Gbp);
        map.insert("CA", CurrencyCode::Cad);
        map.insert("PH", CurrencyCode::Php);
        map.insert("ZA", CurrencyCode::Zar);
        map.insert("AU", CurrencyCode::Aud);
        map.insert("JP", CurrencyCode::Jpy);
        map.insert("CN", CurrencyCode::Cny);

        // Eurozone
        map.insert("DE", CurrencyCode::Eur);
        map.insert("FR", CurrencyCode::Eur);
        map.insert("IT", CurrencyCode::Eur);
        map.insert("ES", CurrencyCode::Eur);
        map.insert("NL", CurrencyCode::Eur);
        map.insert("BE", CurrencyCode::Eur);
        map.insert("AT", CurrencyCode::Eur);
        map.insert("PT", CurrencyCode::Eur);
        map.insert("IE", CurrencyCode::Eur);

        map
    })
}

/// Returns the currency for an IANA timezone name, if one is mapped.
pub fn currency_for_timezone(timezone: &str) -> Option<CurrencyCode> {
    timezone_map().get(timezone).copied()
}

/// Returns the currency for an ISO 3166-1 alpha-2 country code, if one is
/// mapped.
pub fn currency_for_country(country: &str) -> Option<CurrencyCode> {
    country_map().get(country).copied()
}

/// Picks a currency from whatever region hints are available: timezone
/// first (cheapest to obtain), then country, then the base currency.
pub fn detect_currency(timezone: Option<&str>, country: Option<&str>) -> CurrencyCode {
    timezone
        .and_then(currency_for_timezone)
        .or_else(|| country.and_then(currency_for_country))
        .unwrap_or(CurrencyCode::Usd)
}
