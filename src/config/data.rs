//! Simulation configuration matching the plan-file format

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Full parameter set for one simulation run
///
/// All monetary and rate fields are exact decimals; the engine never touches
/// binary floating point. Market parameters (unit price, dividend rate,
/// exchange rate) are constants for the whole horizon — there is no market
/// data feed behind them.
///
/// The two historical variants of the simulator (symmetric ±0.1 spread with
/// no trading fees, and +0.1/−0.5 spread with commission and VAT) are both
/// expressed through `buy_spread`/`sell_spread`/`fees_enabled` rather than
/// separate code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Domestic-currency amount invested in month 1
    pub initial_contribution: Decimal,

    /// Domestic-currency amount invested in months 2..N, before the prior
    /// month's dividend carryover is added
    pub recurring_contribution: Decimal,

    /// Quoted domestic-per-foreign mid exchange rate
    pub exchange_rate_mid: Decimal,

    /// Signed adjustment to the mid rate for domestic → foreign conversion
    pub buy_spread: Decimal,

    /// Signed adjustment to the mid rate for foreign → domestic conversion
    pub sell_spread: Decimal,

    /// Foreign-currency price per fund unit
    pub unit_price_foreign: Decimal,

    /// Foreign-currency dividend paid per held unit each month
    pub dividend_per_unit_foreign: Decimal,

    /// Fraction withheld from gross dividends at the source (e.g. 0.15)
    pub withholding_tax_rate: Decimal,

    /// Fraction of the converted foreign amount charged as trading commission
    pub commission_rate: Decimal,

    /// Fraction of the commission charged as VAT
    pub vat_rate: Decimal,

    /// Whether commission and VAT are deducted before the unit purchase
    pub fees_enabled: bool,

    /// Number of months to simulate (1-based, inclusive)
    pub horizon_months: u32,
}

impl SimulationConfig {
    /// Effective rate for converting domestic currency into the fund currency
    pub fn buy_rate(&self) -> Decimal {
        self.exchange_rate_mid + self.buy_spread
    }

    /// Effective rate for converting dividends back into domestic currency
    pub fn sell_rate(&self) -> Decimal {
        self.exchange_rate_mid + self.sell_spread
    }

    /// Check the config for caller mistakes
    ///
    /// Tax, commission, and VAT rates are expected in [0, 1] but are NOT
    /// clamped here; out-of-range values propagate mathematically.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_months < 1 {
            return Err(ConfigError::InvalidHorizon(self.horizon_months));
        }

        for (field, value) in [
            ("initial_contribution", self.initial_contribution),
            ("recurring_contribution", self.recurring_contribution),
            ("exchange_rate_mid", self.exchange_rate_mid),
            ("unit_price_foreign", self.unit_price_foreign),
            ("dividend_per_unit_foreign", self.dividend_per_unit_foreign),
            ("withholding_tax_rate", self.withholding_tax_rate),
            ("commission_rate", self.commission_rate),
            ("vat_rate", self.vat_rate),
        ] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(ConfigError::NegativeField { field, value });
            }
        }

        if self.buy_rate() <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveBuyRate {
                mid: self.exchange_rate_mid,
                spread: self.buy_spread,
            });
        }
        if self.sell_rate() <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveSellRate {
                mid: self.exchange_rate_mid,
                spread: self.sell_spread,
            });
        }
        if self.unit_price_foreign <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveUnitPrice(self.unit_price_foreign));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_config() -> SimulationConfig {
        SimulationConfig {
            initial_contribution: dec!(4500),
            recurring_contribution: dec!(2000),
            exchange_rate_mid: dec!(31.74),
            buy_spread: dec!(0.1),
            sell_spread: dec!(-0.5),
            unit_price_foreign: dec!(56.82),
            dividend_per_unit_foreign: dec!(0.44),
            withholding_tax_rate: dec!(0.15),
            commission_rate: dec!(0.0015),
            vat_rate: dec!(0.07),
            fees_enabled: true,
            horizon_months: 12,
        }
    }

    #[test]
    fn test_effective_rates() {
        let config = base_config();
        assert_eq!(config.buy_rate(), dec!(31.84));
        assert_eq!(config.sell_rate(), dec!(31.24));
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let mut config = base_config();
        config.horizon_months = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidHorizon(0)));
    }

    #[test]
    fn test_non_positive_effective_rates_rejected() {
        let mut config = base_config();
        config.buy_spread = dec!(-31.74);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveBuyRate { .. })
        ));

        let mut config = base_config();
        config.sell_spread = dec!(-40);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSellRate { .. })
        ));
    }

    #[test]
    fn test_zero_unit_price_rejected() {
        let mut config = base_config();
        config.unit_price_foreign = Decimal::ZERO;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveUnitPrice(Decimal::ZERO))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut config = base_config();
        config.recurring_contribution = dec!(-1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeField {
                field: "recurring_contribution",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_spreads_allowed() {
        // Sell spreads are negative in both historical variants
        let config = base_config();
        assert!(config.sell_spread < Decimal::ZERO);
        assert!(config.validate().is_ok());
    }
}
