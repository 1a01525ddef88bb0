//! Period-indexed net-flow projection for a payment plan.

use rust_decimal::Decimal;

use crate::types::{CashFlowRow, Money};

/// Build the business-side cash-flow series for a plan.
///
/// Row 0 carries the client's entry against the full upfront cost: the
/// business fronts `upfront_cost` at period 0 regardless of how the client's
/// payment is structured. Rows 1..=periods each carry one installment, with
/// the cumulative balance accumulating from the previous row. Always
/// produces `periods + 1` rows; a zero-period plan (pure cash sale) yields a
/// single row.
pub fn build_cash_flow(
    entry: Money,
    installment: Money,
    periods: u32,
    upfront_cost: Money,
) -> Vec<CashFlowRow> {
    let mut rows = Vec::with_capacity(periods as usize + 1);

    let mut cumulative = entry - upfront_cost;
    rows.push(CashFlowRow {
        period: 0,
        net_flow: entry,
        cumulative,
    });

    for period in 1..=periods {
        cumulative += installment;
        rows.push(CashFlowRow {
            period,
            net_flow: installment,
            cumulative,
        });
    }

    rows
}

/// Sum of all net flows in a series.
pub fn total_inflow(rows: &[CashFlowRow]) -> Money {
    rows.iter().map(|r| r.net_flow).sum::<Decimal>()
}
