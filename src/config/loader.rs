//! Load simulation plans from CSV files
//!
//! A plan file holds one row per scenario, with named columns matching the
//! config fields. Decimal columns are parsed exactly (no float round-trip).

use anyhow::{Context, Result};
use csv::Reader;
use rust_decimal::Decimal;
use std::path::Path;

use super::SimulationConfig;

/// Raw CSV row matching the plan-file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "InitialContribution")]
    initial_contribution: Decimal,
    #[serde(rename = "RecurringContribution")]
    recurring_contribution: Decimal,
    #[serde(rename = "ExchangeRateMid")]
    exchange_rate_mid: Decimal,
    #[serde(rename = "BuySpread")]
    buy_spread: Decimal,
    #[serde(rename = "SellSpread")]
    sell_spread: Decimal,
    #[serde(rename = "UnitPriceForeign")]
    unit_price_foreign: Decimal,
    #[serde(rename = "DividendPerUnitForeign")]
    dividend_per_unit_foreign: Decimal,
    #[serde(rename = "WithholdingTaxRate")]
    withholding_tax_rate: Decimal,
    #[serde(rename = "CommissionRate")]
    commission_rate: Decimal,
    #[serde(rename = "VatRate")]
    vat_rate: Decimal,
    #[serde(rename = "FeesEnabled")]
    fees_enabled: bool,
    #[serde(rename = "HorizonMonths")]
    horizon_months: u32,
}

impl CsvRow {
    fn into_config(self) -> (u32, SimulationConfig) {
        let config = SimulationConfig {
            initial_contribution: self.initial_contribution,
            recurring_contribution: self.recurring_contribution,
            exchange_rate_mid: self.exchange_rate_mid,
            buy_spread: self.buy_spread,
            sell_spread: self.sell_spread,
            unit_price_foreign: self.unit_price_foreign,
            dividend_per_unit_foreign: self.dividend_per_unit_foreign,
            withholding_tax_rate: self.withholding_tax_rate,
            commission_rate: self.commission_rate,
            vat_rate: self.vat_rate,
            fees_enabled: self.fees_enabled,
            horizon_months: self.horizon_months,
        };
        (self.plan_id, config)
    }
}

/// Load all plans from a CSV file, validating each row
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<(u32, SimulationConfig)>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("failed to open plan file {}", path.display()))?;
    let plans = read_plans(reader)?;
    log::info!("loaded {} plans from {}", plans.len(), path.display());
    Ok(plans)
}

/// Load plans from any reader (e.g. string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<(u32, SimulationConfig)>> {
    read_plans(Reader::from_reader(reader))
}

fn read_plans<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<(u32, SimulationConfig)>> {
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result.context("malformed plan row")?;
        let (plan_id, config) = row.into_config();
        config
            .validate()
            .with_context(|| format!("invalid plan {plan_id}"))?;
        plans.push((plan_id, config));
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const PLAN_CSV: &str = "\
PlanID,InitialContribution,RecurringContribution,ExchangeRateMid,BuySpread,SellSpread,UnitPriceForeign,DividendPerUnitForeign,WithholdingTaxRate,CommissionRate,VatRate,FeesEnabled,HorizonMonths
1,4500,2000,31.74,0.1,-0.5,56.82,0.44,0.15,0.0015,0.07,true,12
2,4500,2000,31.72,0.1,-0.1,56.54,0.45,0.15,0,0,false,24
";

    #[test]
    fn test_load_plans_from_reader() {
        let plans = load_plans_from_reader(PLAN_CSV.as_bytes()).expect("plan file should parse");
        assert_eq!(plans.len(), 2);

        let (id, config) = &plans[0];
        assert_eq!(*id, 1);
        assert_eq!(config.exchange_rate_mid, dec!(31.74));
        assert_eq!(config.sell_spread, dec!(-0.5));
        assert!(config.fees_enabled);
        assert_eq!(config.horizon_months, 12);

        let (_, config) = &plans[1];
        assert!(!config.fees_enabled);
        assert_eq!(config.dividend_per_unit_foreign, dec!(0.45));
    }

    #[test]
    fn test_invalid_row_reports_plan_id() {
        let bad = "\
PlanID,InitialContribution,RecurringContribution,ExchangeRateMid,BuySpread,SellSpread,UnitPriceForeign,DividendPerUnitForeign,WithholdingTaxRate,CommissionRate,VatRate,FeesEnabled,HorizonMonths
7,4500,2000,31.74,0.1,-0.5,0,0.44,0.15,0.0015,0.07,true,12
";
        let err = load_plans_from_reader(bad.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid plan 7"));
    }
}
