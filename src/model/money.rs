//! Money helpers.
//!
//! Amounts are `rust_decimal::Decimal` end to end. Rounding to cents happens only
//! when a value is shown, never while accumulating.

use rust_decimal::{Decimal, RoundingStrategy};

/// Cents.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount for display, e.g. `$25.50`.
pub fn format_money(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}
