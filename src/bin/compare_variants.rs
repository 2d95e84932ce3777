//! Compare the fee-free symmetric-spread variant against the fee-charging
//! asymmetric-spread variant over the same horizon
//!
//! Usage: cargo run --bin compare_variants

use dca_simulator::{SimulationConfig, SimulationEngine};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    env_logger::init();

    let horizon_months = 24;

    // Symmetric ±0.1 spread, no trading fees
    let symmetric = SimulationConfig {
        initial_contribution: dec!(4500),
        recurring_contribution: dec!(2000),
        exchange_rate_mid: dec!(31.72),
        buy_spread: dec!(0.1),
        sell_spread: dec!(-0.1),
        unit_price_foreign: dec!(56.54),
        dividend_per_unit_foreign: dec!(0.45),
        withholding_tax_rate: dec!(0.15),
        commission_rate: Decimal::ZERO,
        vat_rate: Decimal::ZERO,
        fees_enabled: false,
        horizon_months,
    };

    // Asymmetric +0.1/-0.5 spread with commission and VAT
    let asymmetric = SimulationConfig {
        exchange_rate_mid: dec!(31.74),
        sell_spread: dec!(-0.5),
        unit_price_foreign: dec!(56.82),
        dividend_per_unit_foreign: dec!(0.44),
        commission_rate: dec!(0.0015),
        vat_rate: dec!(0.07),
        fees_enabled: true,
        ..symmetric.clone()
    };

    let variants = [("symmetric, no fees", symmetric), ("asymmetric, fees", asymmetric)];

    println!("Variant comparison over {horizon_months} months");
    println!("{}", "=".repeat(60));

    for (label, config) in variants {
        let result = match SimulationEngine::new(config).run() {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{label}: invalid config: {err}");
                continue;
            }
        };
        let summary = result.summary();

        println!("\n{label}");
        println!("  Total Contributed:  {}", summary.total_contributed_domestic);
        println!("  Final Units:        {}", summary.final_units);
        println!("  Net Dividend (dom): {}", summary.total_net_dividend_domestic);
        if let Some(uplift) = summary.uplift_at_peak_pct {
            println!("  Uplift at Peak:     {uplift}%");
        }

        // First and last months for spot comparison
        for row in [result.records.first(), result.records.last()].into_iter().flatten() {
            println!(
                "  month {:>3}: invest={} converted={} units={} net_div_dom={}",
                row.month_index,
                row.contribution_domestic,
                row.converted_foreign_after_fees,
                row.units_purchased,
                row.net_dividend_domestic,
            );
        }
    }
}
