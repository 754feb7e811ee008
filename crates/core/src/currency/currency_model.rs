use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Supported currency codes. The set is fixed at build time; callers
/// validate free-form input by parsing it into this type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Inr,
    Eur,
    Gbp,
    Cad,
    Php,
    Zar,
    Aud,
    Jpy,
    Cny,
}

/// Where the symbol sits relative to the formatted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// How integer digits are grouped for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// Groups of three, comma separator, dot decimal: 1,234,567.89
    Western,
    /// Last three digits then groups of two, comma separator, dot
    /// decimal: 12,34,567.89
    Indian,
    /// Groups of three, dot separator, comma decimal: 1.234.567,89
    EuropeanDot,
}

/// Immutable display metadata for a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub symbol: &'static str,
    pub name: &'static str,
    /// BCP-47 locale tag the number formatting conventions are taken from.
    pub locale: &'static str,
    /// Minor-unit digits shown in display amounts. Zero for currencies
    /// with no minor unit.
    pub fraction_digits: u32,
    pub symbol_position: SymbolPosition,
    pub grouping: DigitGrouping,
}

const USD_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Usd,
    symbol: "$",
    name: "US Dollar",
    locale: "en-US",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const INR_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Inr,
    symbol: "₹",
    name: "Indian Rupee",
    locale: "en-IN",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Indian,
};

const EUR_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Eur,
    symbol: "€",
    name: "Euro",
    locale: "de-DE",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Suffix,
    grouping: DigitGrouping::EuropeanDot,
};

const GBP_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Gbp,
    symbol: "£",
    name: "British Pound",
    locale: "en-GB",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const CAD_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Cad,
    symbol: "C$",
    name: "Canadian Dollar",
    locale: "en-CA",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const PHP_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Php,
    symbol: "₱",
    name: "Philippine Peso",
    locale: "en-PH",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const ZAR_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Zar,
    symbol: "R",
    name: "South African Rand",
    locale: "en-ZA",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const AUD_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Aud,
    symbol: "A$",
    name: "Australian Dollar",
    locale: "en-AU",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const JPY_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Jpy,
    symbol: "¥",
    name: "Japanese Yen",
    locale: "ja-JP",
    fraction_digits: 0,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

const CNY_INFO: CurrencyInfo = CurrencyInfo {
    code: CurrencyCode::Cny,
    symbol: "¥",
    name: "Chinese Yuan",
    locale: "zh-CN",
    fraction_digits: 2,
    symbol_position: SymbolPosition::Prefix,
    grouping: DigitGrouping::Western,
};

impl CurrencyCode {
    /// Every supported code, in display order.
    pub const ALL: [CurrencyCode; 10] = [
        CurrencyCode::Usd,
        CurrencyCode::Inr,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Cad,
        CurrencyCode::Php,
        CurrencyCode::Zar,
        CurrencyCode::Aud,
        CurrencyCode::Jpy,
        CurrencyCode::Cny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Php => "PHP",
            CurrencyCode::Zar => "ZAR",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Cny => "CNY",
        }
    }

    /// Display metadata for this currency.
    pub fn info(&self) -> &'static CurrencyInfo {
        match self {
            CurrencyCode::Usd => &USD_INFO,
            CurrencyCode::Inr => &INR_INFO,
            CurrencyCode::Eur => &EUR_INFO,
            CurrencyCode::Gbp => &GBP_INFO,
            CurrencyCode::Cad => &CAD_INFO,
            CurrencyCode::Php => &PHP_INFO,
            CurrencyCode::Zar => &ZAR_INFO,
            CurrencyCode::Aud => &AUD_INFO,
            CurrencyCode::Jpy => &JPY_INFO,
            CurrencyCode::Cny => &CNY_INFO,
        }
    }

    /// Static fallback multiplier: 1 USD = this many units. These values
    /// back every quote when no remote refresh has succeeded; the base
    /// currency is exactly 1.
    pub fn fallback_rate(&self) -> Decimal {
        match self {
            CurrencyCode::Usd => Decimal::ONE,
            CurrencyCode::Inr => dec!(83.12),
            CurrencyCode::Eur => dec!(0.85),
            CurrencyCode::Gbp => dec!(0.73),
            CurrencyCode::Cad => dec!(1.25),
            CurrencyCode::Php => dec!(55.50),
            CurrencyCode::Zar => dec!(18.75),
            CurrencyCode::Aud => dec!(1.52),
            CurrencyCode::Jpy => dec!(149.85),
            CurrencyCode::Cny => dec!(7.24),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(CurrencyCode::Usd),
            "INR" => Ok(CurrencyCode::Inr),
            "EUR" => Ok(CurrencyCode::Eur),
            "GBP" => Ok(CurrencyCode::Gbp),
            "CAD" => Ok(CurrencyCode::Cad),
            "PHP" => Ok(CurrencyCode::Php),
            "ZAR" => Ok(CurrencyCode::Zar),
            "AUD" => Ok(CurrencyCode::Aud),
            "JPY" => Ok(CurrencyCode::Jpy),
            "CNY" => Ok(CurrencyCode::Cny),
            other => Err(Error::UnsupportedCurrency(other.to_string())),
        }
    }
}
