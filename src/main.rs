//! DCA Simulator CLI
//!
//! Runs one simulation from command-line parameters and prints the monthly
//! table plus summary figures. Default parameter values are a
//! presentation-layer concern and live here, never inside the engine.

use anyhow::{Context, Result};
use clap::Parser;
use dca_simulator::{SimulationConfig, SimulationEngine, SimulationResult};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = "dca_simulator", about = "Monthly DCA fund investment simulator")]
struct Args {
    /// Domestic amount invested in month 1
    #[arg(long, default_value = "4500")]
    initial: Decimal,

    /// Domestic amount invested each following month (before reinvestment)
    #[arg(long, default_value = "2000")]
    recurring: Decimal,

    /// Mid exchange rate, domestic per foreign unit
    #[arg(long, default_value = "31.74")]
    mid_rate: Decimal,

    /// Spread added to the mid rate when buying foreign currency
    #[arg(long, default_value = "0.1", allow_hyphen_values = true)]
    buy_spread: Decimal,

    /// Spread added to the mid rate when selling foreign currency
    #[arg(long, default_value = "-0.5", allow_hyphen_values = true)]
    sell_spread: Decimal,

    /// Foreign-currency price per fund unit
    #[arg(long, default_value = "56.82")]
    unit_price: Decimal,

    /// Foreign-currency dividend per held unit per month
    #[arg(long, default_value = "0.44")]
    dividend_per_unit: Decimal,

    /// Withholding tax rate on gross dividends
    #[arg(long, default_value = "0.15")]
    tax_rate: Decimal,

    /// Commission rate on the converted amount
    #[arg(long, default_value = "0.0015")]
    commission_rate: Decimal,

    /// VAT rate on the commission
    #[arg(long, default_value = "0.07")]
    vat_rate: Decimal,

    /// Skip commission and VAT before the unit purchase
    #[arg(long)]
    no_fees: bool,

    /// Number of months to simulate
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Write the full monthly table to a CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Write records and summary as JSON to a file
    #[arg(long)]
    json: Option<String>,
}

impl Args {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            initial_contribution: self.initial,
            recurring_contribution: self.recurring,
            exchange_rate_mid: self.mid_rate,
            buy_spread: self.buy_spread,
            sell_spread: self.sell_spread,
            unit_price_foreign: self.unit_price,
            dividend_per_unit_foreign: self.dividend_per_unit,
            withholding_tax_rate: self.tax_rate,
            commission_rate: self.commission_rate,
            vat_rate: self.vat_rate,
            fees_enabled: !self.no_fees,
            horizon_months: self.months,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.to_config();

    println!("DCA Simulator v0.1.0");
    println!("====================\n");
    println!("Buy rate:  {}", config.buy_rate());
    println!("Sell rate: {}", config.sell_rate());
    println!("Fees:      {}", if config.fees_enabled { "commission + VAT" } else { "disabled" });
    println!();

    let result = SimulationEngine::new(config).run()?;

    println!("{:>5} {:>12} {:>12} {:>10} {:>10} {:>11} {:>9} {:>9} {:>10}",
        "Month", "Invest", "CumInvest", "Converted", "Units", "CumUnits", "GrossDiv", "NetDiv", "NetDivDom");
    println!("{}", "-".repeat(96));
    for row in &result.records {
        println!("{:>5} {:>12} {:>12} {:>10} {:>10} {:>11} {:>9} {:>9} {:>10}",
            row.month_index,
            row.contribution_domestic,
            row.cumulative_contribution_domestic,
            row.converted_foreign_after_fees,
            row.units_purchased,
            row.cumulative_units,
            row.gross_dividend_foreign,
            row.net_dividend_foreign,
            row.net_dividend_domestic,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months:            {}", summary.total_months);
    println!("  Total Contributed:       {}", summary.total_contributed_domestic);
    println!("  Final Units:             {}", summary.final_units);
    println!("  Gross Dividend (fgn/dom): {} / {}",
        summary.total_gross_dividend_foreign, summary.total_gross_dividend_domestic);
    println!("  Net Dividend (fgn/dom):   {} / {}",
        summary.total_net_dividend_foreign, summary.total_net_dividend_domestic);

    if let Some(peak) = summary.total_peak {
        println!("  Peak Total:              {} (month {})", peak.value, peak.month_index);
    }
    if let Some(uplift) = summary.uplift_at_peak_pct {
        println!("  Uplift at Peak:          {uplift}%");
    }

    if let Some(path) = &args.csv {
        write_csv(path, &result).with_context(|| format!("failed to write CSV to {path}"))?;
        println!("\nFull results written to: {path}");
    }

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
        serde_json::to_writer_pretty(file, &serde_json::json!({
            "records": &result.records,
            "summary": &summary,
        }))?;
        println!("JSON results written to: {path}");
    }

    Ok(())
}

fn write_csv(path: &str, result: &SimulationResult) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Contribution,CumContribution,ConvertedAfterFees,UnitsPurchased,CumUnits,GrossDividendFgn,NetDividendFgn,NetDividendDom")?;
    for row in &result.records {
        writeln!(file, "{},{},{},{},{},{},{},{},{}",
            row.month_index,
            row.contribution_domestic,
            row.cumulative_contribution_domestic,
            row.converted_foreign_after_fees,
            row.units_purchased,
            row.cumulative_units,
            row.gross_dividend_foreign,
            row.net_dividend_foreign,
            row.net_dividend_domestic,
        )?;
    }
    Ok(())
}
