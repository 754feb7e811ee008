use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{AMOUNT_DECIMAL_PRECISION, BASE_CURRENCY, HOLIDAY_DISCOUNT};
use crate::currency::{format_amount, CurrencyCode};
use crate::errors::{Error, Result};
use crate::fx::RateProvider;
use crate::pricing::catalog::ServicePlan;
use crate::pricing::pricing_model::PriceQuote;

/// Stateless price computation over the provider's active rate table.
///
/// Quoting is a pure function of (amount, rate, discount flag); the only
/// shared state is the rate table itself, which the provider swaps
/// atomically.
pub struct PriceCalculator {
    rates: Arc<RateProvider>,
}

impl PriceCalculator {
    pub fn new(rates: Arc<RateProvider>) -> Self {
        Self { rates }
    }

    /// Rounds to two decimal places, half-up (midpoints round away from
    /// zero: 2.675 becomes 2.68). Every converted and discounted amount
    /// goes through this.
    pub fn round2(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(
            AMOUNT_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Quotes `base_amount` (authored in the base currency) in `target`.
    ///
    /// Base-currency quotes pass through unrounded; anything else is the
    /// rate multiply rounded to two places. An active discount takes 15%
    /// off the converted amount, rounded again. The result is
    /// non-negative for valid input.
    pub fn quote(
        &self,
        base_amount: Decimal,
        target: CurrencyCode,
        discount_active: bool,
    ) -> Result<Decimal> {
        validate_amount(base_amount)?;

        let converted = if target == BASE_CURRENCY {
            base_amount
        } else {
            Self::round2(base_amount * self.rates.rate_of(target)?)
        };

        if discount_active {
            Ok(Self::round2(converted * (Decimal::ONE - HOLIDAY_DISCOUNT)))
        } else {
            Ok(converted)
        }
    }

    /// Like [`quote`](Self::quote) but takes a raw currency code, so an
    /// unsupported code surfaces `UnsupportedCurrency` before any math.
    pub fn quote_for(
        &self,
        base_amount: Decimal,
        target: &str,
        discount_active: bool,
    ) -> Result<Decimal> {
        let code: CurrencyCode = target.parse()?;
        self.quote(base_amount, code, discount_active)
    }

    /// Full quote record for the presentation layer, including the rate
    /// used and the locale-formatted amount.
    pub fn quote_detailed(
        &self,
        base_amount: Decimal,
        target: CurrencyCode,
        discount_active: bool,
    ) -> Result<PriceQuote> {
        validate_amount(base_amount)?;

        let rate = self.rates.rate_of(target)?;
        let converted = if target == BASE_CURRENCY {
            base_amount
        } else {
            Self::round2(base_amount * rate)
        };
        let final_amount = if discount_active {
            Self::round2(converted * (Decimal::ONE - HOLIDAY_DISCOUNT))
        } else {
            converted
        };

        Ok(PriceQuote {
            base_amount,
            currency: target,
            rate,
            converted_amount: converted,
            discount_applied: discount_active,
            final_amount,
            display: format_amount(final_amount, target),
        })
    }

    /// Quotes a catalog plan's base price.
    pub fn quote_plan(
        &self,
        plan: &ServicePlan,
        target: CurrencyCode,
        discount_active: bool,
    ) -> Result<PriceQuote> {
        self.quote_detailed(plan.base_price, target, discount_active)
    }
}

/// Amounts are authored prices: zero is allowed, negative is not.
/// `Decimal` carries no NaN or infinity, so finiteness holds by
/// construction.
fn validate_amount(amount: Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(Error::InvalidAmount(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    Ok(())
}
