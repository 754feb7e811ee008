use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::currency::CurrencyCode;

/// Currency all catalog prices are authored in.
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::Usd;

/// Fraction taken off during an active holiday promotion.
pub const HOLIDAY_DISCOUNT: Decimal = dec!(0.15);

/// Decimal precision for converted and discounted amounts.
pub const AMOUNT_DECIMAL_PRECISION: u32 = 2;

/// Client-local key under which the admin settings document is stored.
pub const ADMIN_SETTINGS_KEY: &str = "admin_settings";
