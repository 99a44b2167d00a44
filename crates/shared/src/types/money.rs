//! Money display helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; rounding happens only at the
//! display boundary, never before summation.

use rust_decimal::Decimal;

/// Decimal places used for display rounding of monetary amounts.
pub const DISPLAY_DP: u32 = 2;

/// Rounds an amount to display precision using banker's rounding.
///
/// Raw amounts keep full precision through aggregation; this is applied
/// only when a value is handed to the presentation layer.
#[must_use]
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_DP)
}
