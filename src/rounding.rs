//! Fixed-point rounding rules for the simulation
//!
//! Every monetary amount is held to 2 decimal places and every unit count to
//! 6 decimal places, rounded half-up immediately after computation. The
//! rounded value is what flows into subsequent steps, so these helpers are
//! part of the engine's correctness contract, not display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for currency amounts (domestic and foreign)
pub const MONEY_DP: u32 = 2;

/// Decimal places for fund unit counts
pub const UNIT_DP: u32 = 6;

/// Round a currency amount to 2 decimal places, half-up.
///
/// `MidpointAwayFromZero` is round-half-up on the non-negative amounts this
/// engine produces.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a unit count to 6 decimal places, half-up.
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(141.4205)), dec!(141.42));
        assert_eq!(round_money(dec!(0.095595)), dec!(0.10));
    }

    #[test]
    fn test_units_round_half_up() {
        assert_eq!(round_units(dec!(2.5012385)), dec!(2.501239));
        assert_eq!(round_units(dec!(2.5012384)), dec!(2.501238));
        assert_eq!(round_units(dec!(0.0000005)), dec!(0.000001));
    }

    #[test]
    fn test_already_exact_values_unchanged() {
        assert_eq!(round_money(dec!(2000.00)), dec!(2000.00));
        assert_eq!(round_units(dec!(1.128582)), dec!(1.128582));
    }
}
