//! Tests for the price calculator contract.
//!
//! # Critical Contract Points
//!
//! 1. Base-currency amounts pass through unrounded
//! 2. Conversion rounds half-up to two places before discounting
//! 3. The 15% discount rounds again after applying
//! 4. Malformed input is surfaced, never silently defaulted

#[cfg(test)]
mod tests {
    use crate::currency::CurrencyCode;
    use crate::errors::Error;
    use crate::fx::RateProvider;
    use crate::pricing::catalog;
    use crate::pricing::PriceCalculator;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn calculator() -> PriceCalculator {
        PriceCalculator::new(Arc::new(RateProvider::new()))
    }

    #[test]
    fn test_base_currency_quote_passes_through() {
        assert_eq!(
            calculator()
                .quote(dec!(100), CurrencyCode::Usd, false)
                .unwrap(),
            dec!(100)
        );
    }

    #[test]
    fn test_discounted_base_quote() {
        // 100 USD with the 15% holiday discount.
        assert_eq!(
            calculator()
                .quote(dec!(100), CurrencyCode::Usd, true)
                .unwrap(),
            dec!(85.00)
        );
    }

    #[test]
    fn test_conversion_rounds_to_two_places() {
        // 499 * 83.12 = 41476.88 exactly; 19.99 * 0.73 = 14.5927 -> 14.59
        let calc = calculator();
        assert_eq!(
            calc.quote(dec!(499), CurrencyCode::Inr, false).unwrap(),
            dec!(41476.88)
        );
        assert_eq!(
            calc.quote(dec!(19.99), CurrencyCode::Gbp, false).unwrap(),
            dec!(14.59)
        );
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(PriceCalculator::round2(dec!(2.675)), dec!(2.68));
        assert_eq!(PriceCalculator::round2(dec!(2.665)), dec!(2.67));
        assert_eq!(PriceCalculator::round2(dec!(-2.675)), dec!(-2.68));
    }

    #[test]
    fn test_discount_applies_after_conversion() {
        // 100 * 18.75 = 1875.00; 1875.00 * 0.85 = 1593.75
        assert_eq!(
            calculator()
                .quote(dec!(100), CurrencyCode::Zar, true)
                .unwrap(),
            dec!(1593.75)
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        assert_eq!(
            calculator()
                .quote(dec!(0), CurrencyCode::Eur, true)
                .unwrap(),
            dec!(0)
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = calculator()
            .quote(dec!(-1), CurrencyCode::Usd, false)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(_)));
    }

    #[test]
    fn test_unsupported_code_is_rejected_before_any_math() {
        let err = calculator().quote_for(dec!(100), "XYZ", false).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(code) if code == "XYZ"));
    }

    #[test]
    fn test_quote_for_accepts_supported_codes() {
        assert_eq!(
            calculator().quote_for(dec!(100), "USD", true).unwrap(),
            dec!(85.00)
        );
    }

    #[test]
    fn test_quote_reflects_overridden_rates() {
        let provider = Arc::new(RateProvider::new());
        let mut overrides = BTreeMap::new();
        overrides.insert(CurrencyCode::Eur, dec!(0.90));
        provider.apply_override(overrides).unwrap();

        let calc = PriceCalculator::new(provider);
        assert_eq!(
            calc.quote(dec!(100), CurrencyCode::Eur, false).unwrap(),
            dec!(90.00)
        );
    }

    #[test]
    fn test_detailed_quote_carries_rate_and_display() {
        let quote = calculator()
            .quote_detailed(dec!(999), CurrencyCode::Inr, false)
            .unwrap();

        assert_eq!(quote.rate, dec!(83.12));
        assert_eq!(quote.converted_amount, dec!(83036.88));
        assert_eq!(quote.final_amount, quote.converted_amount);
        assert_eq!(quote.display, "₹83,036.88");
    }

    #[test]
    fn test_detailed_quote_display_honors_minor_units() {
        let quote = calculator()
            .quote_detailed(dec!(15), CurrencyCode::Jpy, false)
            .unwrap();

        // 15 * 149.85 = 2247.75 kept at two places internally, rendered
        // without decimals.
        assert_eq!(quote.final_amount, dec!(2247.75));
        assert_eq!(quote.display, "¥2,248");
    }

    #[test]
    fn test_plan_quote_uses_catalog_base_price() {
        let plan = catalog::plan("hosting-business").unwrap();
        let quote = calculator()
            .quote_plan(plan, CurrencyCode::Usd, true)
            .unwrap();

        // 49 * 0.85 = 41.65
        assert_eq!(quote.final_amount, dec!(41.65));
        assert!(quote.discount_applied);
    }
}
