//! Running state carried across the month recurrence

use rust_decimal::Decimal;

/// Accumulators threaded through the month-by-month fold
///
/// Each simulated month consumes the previous state and yields the next one;
/// the carryover field is why months can never be computed out of order. The
/// state is owned by a single engine run and starts from zero on every run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Running sum of domestic contributions, rounded per-month values
    pub cumulative_contribution_domestic: Decimal,

    /// Running sum of purchased units (never sold, so non-decreasing)
    pub cumulative_units: Decimal,

    /// Prior month's net dividend in domestic currency, added to the next
    /// month's recurring contribution
    pub carryover_domestic: Decimal,
}

impl SimulationState {
    /// State before month 1: zero accumulators, no carryover
    pub fn initial() -> Self {
        Self {
            cumulative_contribution_domestic: Decimal::ZERO,
            cumulative_units: Decimal::ZERO,
            carryover_domestic: Decimal::ZERO,
        }
    }
}
