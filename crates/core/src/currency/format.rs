//! Locale-aware amount formatting.
//!
//! Rendering follows the fixed conventions carried by [`CurrencyInfo`]:
//! fraction digits, digit grouping, and symbol placement. Currencies with
//! no minor unit show no decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use super::{CurrencyCode, DigitGrouping, SymbolPosition};

/// Formats `amount` for display in `code`.
///
/// The amount is rounded half-up to the currency's fraction digits before
/// rendering.
pub fn format_amount(amount: Decimal, code: CurrencyCode) -> String {
    let info = code.info();
    let rounded = amount.round_dp_with_strategy(
        info.fraction_digits,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.*}", info.fraction_digits as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut number = group_integer(int_part, info.grouping);
    if let Some(frac) = frac_part {
        number.push(decimal_separator(info.grouping));
        number.push_str(frac);
    }

    let sign = if negative { "-" } else { "" };
    match info.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", sign, info.symbol, number),
        SymbolPosition::Suffix => format!("{}{} {}", sign, number, info.symbol),
    }
}

fn decimal_separator(grouping: DigitGrouping) -> char {
    match grouping {
        DigitGrouping::Western | DigitGrouping::Indian => '.',
        DigitGrouping::EuropeanDot => ',',
    }
}

fn group_separator(grouping: DigitGrouping) -> char {
    match grouping {
        DigitGrouping::Western | DigitGrouping::Indian => ',',
        DigitGrouping::EuropeanDot => '.',
    }
}

/// Inserts group separators into an unsigned integer digit string.
///
/// The rightmost group is always three digits; Indian grouping continues
/// in twos after that, everything else in threes.
fn group_integer(digits: &str, grouping: DigitGrouping) -> String {
    let sep = group_separator(grouping);
    let mut parts: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut first = true;

    while end > 0 {
        let size = match (first, grouping) {
            (true, _) => 3,
            (false, DigitGrouping::Indian) => 2,
            (false, _) => 3,
        };
        let start = end.saturating_sub(size);
        parts.push(&digits[start..end]);
        end = start;
        first = false;
    }

    parts.reverse();
    parts.join(&sep.to_string())
}
