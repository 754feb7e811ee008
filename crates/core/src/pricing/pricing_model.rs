use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::CurrencyCode;

/// A fully computed price for display. Derived on demand and never
/// stored; the same inputs always produce the same quote.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Price as authored, in the base currency.
    pub base_amount: Decimal,
    pub currency: CurrencyCode,
    /// Multiplier used for the conversion.
    pub rate: Decimal,
    /// Amount after conversion, before any discount.
    pub converted_amount: Decimal,
    pub discount_applied: bool,
    pub final_amount: Decimal,
    /// `final_amount` rendered with the currency's locale conventions.
    pub display: String,
}
