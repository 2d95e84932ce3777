//! Configuration error taxonomy
//!
//! A `ConfigError` is a caller mistake: the engine fails fast before any
//! month record is produced. There is no retry path — the computation is
//! pure, so retrying the same config would fail identically.

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failure for a [`crate::SimulationConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Horizon must cover at least one month
    #[error("horizon_months must be >= 1, got {0}")]
    InvalidHorizon(u32),

    /// Effective buy rate (mid + buy_spread) must be positive
    #[error("effective buy rate must be > 0, got mid {mid} + spread {spread}")]
    NonPositiveBuyRate { mid: Decimal, spread: Decimal },

    /// Effective sell rate (mid + sell_spread) must be positive
    #[error("effective sell rate must be > 0, got mid {mid} + spread {spread}")]
    NonPositiveSellRate { mid: Decimal, spread: Decimal },

    /// Unit price of zero makes units-purchased undefined
    #[error("unit_price_foreign must be > 0, got {0}")]
    NonPositiveUnitPrice(Decimal),

    /// Amounts, prices, and rates may not be negative (spreads excluded)
    #[error("{field} must be non-negative, got {value}")]
    NegativeField {
        field: &'static str,
        value: Decimal,
    },
}
