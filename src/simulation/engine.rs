//! Core engine for monthly DCA compounding simulations

use rust_decimal::Decimal;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::rounding::{round_money, round_units};
use super::records::{MonthRecord, SimulationResult};
use super::state::SimulationState;

/// Deterministic monthly simulation engine
///
/// Identical configs always yield identical output: no randomness, no clock,
/// no state carried between runs. Each run owns its accumulators, so
/// concurrent runs over different configs need no coordination.
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Create an engine for the given config
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Borrow the engine's config
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the full simulation horizon
    ///
    /// Fails fast on an invalid config: no partial record sequence is ever
    /// returned. The month loop is unconditional for the whole horizon —
    /// there are no skipped months and no early termination.
    pub fn run(&self) -> Result<SimulationResult, ConfigError> {
        self.config.validate()?;

        let mut result =
            SimulationResult::new(self.config.horizon_months, self.config.sell_rate());
        let mut state = SimulationState::initial();

        for month in 1..=self.config.horizon_months {
            let (next_state, record) = self.step(state, month);
            result.add_record(record);
            state = next_state;
        }

        Ok(result)
    }

    /// Advance one month: consume the prior state, produce the next state
    /// and the month's record
    ///
    /// Every intermediate quantity is rounded to its fixed precision (2 dp
    /// money, 6 dp units, half-up) immediately, and the ROUNDED value is
    /// what flows onward. This is not equivalent to computing at full
    /// precision and rounding at display time; the order of the rounding
    /// points is part of the contract.
    fn step(&self, state: SimulationState, month: u32) -> (SimulationState, MonthRecord) {
        let config = &self.config;

        // Month 1 has no prior dividend to reinvest
        let contribution_domestic = if month == 1 {
            config.initial_contribution
        } else {
            config.recurring_contribution + state.carryover_domestic
        };
        let cumulative_contribution_domestic =
            state.cumulative_contribution_domestic + contribution_domestic;

        let gross_converted_foreign = round_money(contribution_domestic / config.buy_rate());

        let converted_foreign_after_fees = if config.fees_enabled {
            // Commission and VAT are each charged on the converted amount and
            // rounded independently before subtraction
            let commission = round_money(gross_converted_foreign * config.commission_rate);
            let vat = round_money(commission * config.vat_rate);
            gross_converted_foreign - commission - vat
        } else {
            gross_converted_foreign
        };

        let units_purchased =
            round_units(converted_foreign_after_fees / config.unit_price_foreign);
        let cumulative_units = state.cumulative_units + units_purchased;

        // Dividend accrues on the post-purchase holding: units bought this
        // month count as held for the full period before the record date
        let gross_dividend_foreign =
            round_money(cumulative_units * config.dividend_per_unit_foreign);
        let net_dividend_foreign = round_money(
            gross_dividend_foreign * (Decimal::ONE - config.withholding_tax_rate),
        );
        let net_dividend_domestic = round_money(net_dividend_foreign * config.sell_rate());

        let record = MonthRecord {
            month_index: month,
            contribution_domestic,
            cumulative_contribution_domestic,
            converted_foreign_after_fees,
            units_purchased,
            cumulative_units,
            gross_dividend_foreign,
            net_dividend_foreign,
            net_dividend_domestic,
        };

        let next_state = SimulationState {
            cumulative_contribution_domestic,
            cumulative_units,
            carryover_domestic: net_dividend_domestic,
        };

        (next_state, record)
    }
}
