//! Scenario runner for batch simulations
//!
//! Single runs are sequential by necessity (each month's contribution
//! depends on the prior month's dividend), but separate runs share nothing
//! and parallelize freely.

use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::simulation::{SimulationEngine, SimulationResult};

/// Runs families of related simulations from a base config
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(base_config);
/// let results = runner.sweep_horizon(1..=240);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_config: SimulationConfig,
}

impl ScenarioRunner {
    /// Create a runner around a base config
    pub fn new(base_config: SimulationConfig) -> Self {
        Self { base_config }
    }

    /// Run the base config as-is
    pub fn run(&self) -> Result<SimulationResult, ConfigError> {
        SimulationEngine::new(self.base_config.clone()).run()
    }

    /// Run a set of configs in parallel, preserving input order
    pub fn run_batch(
        &self,
        configs: &[SimulationConfig],
    ) -> Vec<Result<SimulationResult, ConfigError>> {
        configs
            .par_iter()
            .map(|config| SimulationEngine::new(config.clone()).run())
            .collect()
    }

    /// Run the base config at each horizon, in parallel
    ///
    /// Mirrors the interactive display-horizon slider: same parameters, a
    /// range of month counts.
    pub fn sweep_horizon(
        &self,
        horizons: impl IntoIterator<Item = u32>,
    ) -> Vec<Result<SimulationResult, ConfigError>> {
        let configs: Vec<SimulationConfig> = horizons
            .into_iter()
            .map(|horizon_months| SimulationConfig {
                horizon_months,
                ..self.base_config.clone()
            })
            .collect();
        self.run_batch(&configs)
    }

    /// Get reference to the base config
    pub fn base_config(&self) -> &SimulationConfig {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use rust_decimal::Decimal;

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
    fn test_sweep_horizon_prefix_stability() {
        let runner = ScenarioRunner::new(base_config());
        let results = runner.sweep_horizon([1, 6, 12]);
        assert_eq!(results.len(), 3);

        let short = results[0].as_ref().unwrap();
        let long = results[2].as_ref().unwrap();
        assert_eq!(short.records.len(), 1);
        assert_eq!(long.records.len(), 12);

        // A shorter horizon is an exact prefix of a longer one
        assert_eq!(short.records[0], long.records[0]);
    }

    #[test]
    fn test_run_batch_preserves_order_and_errors() {
        let mut bad = base_config();
        bad.horizon_months = 0;
        let good = base_config();

        let runner = ScenarioRunner::new(good.clone());
        let results = runner.run_batch(&[good, bad]);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &crate::error::ConfigError::InvalidHorizon(0)
        );
    }

    #[test]
    fn test_parallel_runs_match_sequential() {
        let runner = ScenarioRunner::new(base_config());
        let parallel = runner.sweep_horizon([12, 12]);
        let sequential = runner.run().unwrap();

        assert_eq!(parallel[0].as_ref().unwrap(), &sequential);
        assert_eq!(parallel[1].as_ref().unwrap(), &sequential);
    }

    #[test]
    fn test_zero_dividend_base_runs() {
        let mut config = base_config();
        config.dividend_per_unit_foreign = Decimal::ZERO;
        let result = ScenarioRunner::new(config).run().unwrap();
        assert!(result
            .records
            .iter()
            .all(|r| r.net_dividend_domestic.is_zero()));
    }
}
