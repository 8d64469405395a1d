//! Currency rounding and display-typing helpers.
//!
//! All monetary values are exact decimals. Rounding to currency precision
//! (2 fractional digits, half-up) happens exactly once per field, when the
//! field is finalized; intermediate sums are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Standard currency precision (fractional digits).
pub const CURRENCY_DP: u32 = 2;

/// Rounds a value to currency precision, half-up.
///
/// # Examples
///
/// ```
/// use loadgen_core::money::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let v = Decimal::from_str("10.005").unwrap();
/// assert_eq!(round_currency(v), Decimal::from_str("10.01").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an already-finalized monetary value with fixed 2-digit precision.
///
/// The value is rounded first, so callers may pass unrounded input; display
/// formatting itself only pads.
///
/// # Examples
///
/// ```
/// use loadgen_core::money::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(120)), "120.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

/// Returns true if the value has no fractional part.
///
/// Used by the canonicalizer to render whole-currency-unit fields (limit
/// amounts) without fractional digits.
///
/// # Examples
///
/// ```
/// use loadgen_core::money::is_whole;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert!(is_whole(Decimal::from(10_000)));
/// assert!(!is_whole(Decimal::from_str("10.50").unwrap()));
/// ```
pub fn is_whole(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Formats an integer-valued field without fractional digits.
///
/// Whole values render as plain integers; a value that unexpectedly carries
/// a fraction falls back to currency formatting rather than losing digits.
pub fn format_integer(value: Decimal) -> String {
    if is_whole(value) {
        value.trunc().to_string()
    } else {
        format_currency(value)
    }
}
