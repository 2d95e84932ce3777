//! Per-month output records and summary aggregation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rounding::round_money;

/// One month of simulation output
///
/// Every field holds the rounded value that actually flowed through the
/// computation (2 dp for currency, 6 dp for units), so records can be
/// compared for exact decimal equality across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// 1-based month number
    pub month_index: u32,

    /// Domestic amount invested this month (includes dividend carryover
    /// after month 1)
    pub contribution_domestic: Decimal,

    /// Running sum of contributions through this month
    pub cumulative_contribution_domestic: Decimal,

    /// Foreign amount available for the unit purchase, net of any fees
    pub converted_foreign_after_fees: Decimal,

    /// Units bought this month
    pub units_purchased: Decimal,

    /// Units held after this month's purchase
    pub cumulative_units: Decimal,

    /// Dividend accrued on post-purchase holdings, before withholding
    pub gross_dividend_foreign: Decimal,

    /// Dividend after withholding tax, in fund currency
    pub net_dividend_foreign: Decimal,

    /// Net dividend converted at the sell rate; next month's carryover
    pub net_dividend_domestic: Decimal,
}

/// A series maximum: the value and the first month it occurs at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPeak {
    /// 1-based month of the first occurrence of the maximum
    pub month_index: u32,
    pub value: Decimal,
}

/// Find the maximum of a month-indexed series, first occurrence on ties
fn peak_of(series: &[Decimal]) -> Option<SeriesPeak> {
    let mut peak: Option<SeriesPeak> = None;
    for (i, &value) in series.iter().enumerate() {
        match peak {
            Some(p) if value <= p.value => {}
            _ => {
                peak = Some(SeriesPeak {
                    month_index: i as u32 + 1,
                    value,
                });
            }
        }
    }
    peak
}

/// Complete output of one engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Monthly records, index-stable, length == horizon_months
    pub records: Vec<MonthRecord>,

    /// Sell rate the run used, kept for domestic-currency summary totals
    sell_rate: Decimal,
}

impl SimulationResult {
    pub(crate) fn new(horizon_months: u32, sell_rate: Decimal) -> Self {
        Self {
            records: Vec::with_capacity(horizon_months as usize),
            sell_rate,
        }
    }

    pub(crate) fn add_record(&mut self, record: MonthRecord) {
        self.records.push(record);
    }

    /// Aggregate the per-month records into summary figures
    ///
    /// Totals sum the per-month ROUNDED values; nothing is recomputed from
    /// final cumulative units. Applied once over the finished record
    /// sequence, not incrementally.
    pub fn summary(&self) -> SimulationSummary {
        let total_contributed_domestic = self
            .records
            .last()
            .map(|r| r.cumulative_contribution_domestic)
            .unwrap_or(Decimal::ZERO);
        let final_units = self
            .records
            .last()
            .map(|r| r.cumulative_units)
            .unwrap_or(Decimal::ZERO);

        let total_gross_dividend_foreign: Decimal =
            self.records.iter().map(|r| r.gross_dividend_foreign).sum();
        let total_net_dividend_foreign: Decimal =
            self.records.iter().map(|r| r.net_dividend_foreign).sum();
        let total_net_dividend_domestic: Decimal =
            self.records.iter().map(|r| r.net_dividend_domestic).sum();

        // Gross total is only tracked per-month in fund currency; the
        // domestic figure converts the summed total at the sell rate
        let total_gross_dividend_domestic =
            round_money(total_gross_dividend_foreign * self.sell_rate);

        let mut cumulative_net_dividend_domestic = Vec::with_capacity(self.records.len());
        let mut cumulative_total_domestic = Vec::with_capacity(self.records.len());
        let mut dividend_running = Decimal::ZERO;
        for record in &self.records {
            dividend_running += record.net_dividend_domestic;
            cumulative_net_dividend_domestic.push(dividend_running);
            cumulative_total_domestic.push(record.cumulative_contribution_domestic + dividend_running);
        }

        let contribution_series: Vec<Decimal> = self
            .records
            .iter()
            .map(|r| r.cumulative_contribution_domestic)
            .collect();

        let contribution_peak = peak_of(&contribution_series);
        let dividend_peak = peak_of(&cumulative_net_dividend_domestic);
        let total_peak = peak_of(&cumulative_total_domestic);

        // Growth of the combined series peak over the contribution peak,
        // as a percentage
        let uplift_at_peak_pct = match (contribution_peak, total_peak) {
            (Some(c), Some(t)) if !c.value.is_zero() => {
                Some(round_money((t.value - c.value) / c.value * Decimal::ONE_HUNDRED))
            }
            _ => None,
        };

        SimulationSummary {
            total_months: self.records.len() as u32,
            total_contributed_domestic,
            final_units,
            total_gross_dividend_foreign,
            total_gross_dividend_domestic,
            total_net_dividend_foreign,
            total_net_dividend_domestic,
            cumulative_net_dividend_domestic,
            cumulative_total_domestic,
            contribution_peak,
            dividend_peak,
            total_peak,
            uplift_at_peak_pct,
        }
    }
}

/// Summary figures derived from a finished record sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_months: u32,
    pub total_contributed_domestic: Decimal,
    pub final_units: Decimal,
    pub total_gross_dividend_foreign: Decimal,
    pub total_gross_dividend_domestic: Decimal,
    pub total_net_dividend_foreign: Decimal,
    pub total_net_dividend_domestic: Decimal,

    /// Running sum of net domestic dividends, indexed by month
    pub cumulative_net_dividend_domestic: Vec<Decimal>,

    /// Cumulative contribution plus cumulative dividend, indexed by month
    pub cumulative_total_domestic: Vec<Decimal>,

    pub contribution_peak: Option<SeriesPeak>,
    pub dividend_peak: Option<SeriesPeak>,
    pub total_peak: Option<SeriesPeak>,

    /// Percentage gain of the total-series peak over the contribution-series
    /// peak; None when nothing was contributed
    pub uplift_at_peak_pct: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_peak_of_picks_first_occurrence_on_ties() {
        let series = [dec!(0), dec!(0), dec!(0)];
        let peak = peak_of(&series).unwrap();
        assert_eq!(peak.month_index, 1);
        assert_eq!(peak.value, dec!(0));

        let series = [dec!(1), dec!(5), dec!(5), dec!(3)];
        let peak = peak_of(&series).unwrap();
        assert_eq!(peak.month_index, 2);
        assert_eq!(peak.value, dec!(5));
    }

    #[test]
    fn test_peak_of_monotone_series_is_last_month() {
        let series = [dec!(1), dec!(2), dec!(3)];
        let peak = peak_of(&series).unwrap();
        assert_eq!(peak.month_index, 3);
        assert_eq!(peak.value, dec!(3));
    }

    #[test]
    fn test_peak_of_empty_series() {
        assert_eq!(peak_of(&[]), None);
    }
}
