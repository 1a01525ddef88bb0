//! Payment/financing condition generators.
//!
//! Five independent strategies turn the same base quantities (total cost,
//! base price, gross profit, periodic rate) into fully-specified
//! [`Condition`](crate::types::Condition) records, each with its own
//! cash-flow projection. Every family fronts the full total cost at
//! period 0.

pub mod amortized;
pub mod cash;
pub mod custom;
pub mod leasing;
pub mod staged;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::cash_flow::build_cash_flow;
use crate::rates::RateTable;
use crate::types::{Condition, ConditionFamily, Money, Percent, SimInputs};

const PERCENT: Decimal = dec!(100);

/// Base quantities shared by all generators, derived once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFigures {
    /// operational_cost * quantity.
    pub total_cost: Money,
    /// total_cost / (1 - margin/100).
    pub base_price: Money,
    /// base_price - total_cost.
    pub gross_profit: Money,
    /// Periodic rate in percent, resolved from the injected table.
    pub rate: Percent,
}

impl BaseFigures {
    pub fn derive(inputs: &SimInputs, rates: &RateTable) -> Self {
        let total_cost = inputs.operational_cost * Decimal::from(inputs.quantity);
        let base_price = total_cost / (Decimal::ONE - inputs.profit_margin / PERCENT);
        BaseFigures {
            total_cost,
            base_price,
            gross_profit: base_price - total_cost,
            rate: rates.periodic_rate(inputs.correction_index, inputs.custom_rate),
        }
    }
}

/// Assemble a condition from its plan shape, filling in every derived field.
///
/// Centralizes the invariants: total_client is entry plus the installments,
/// the recovered cost is always the full total cost, immediate profit is the
/// part of the entry above cost (never negative), and the cash flow uses
/// total_cost as the upfront outlay for every family.
pub(crate) fn assemble(
    id: impl Into<String>,
    family: ConditionFamily,
    label: impl Into<String>,
    detail: impl Into<String>,
    entry: Money,
    installment_amount: Money,
    installments: u32,
    base: &BaseFigures,
) -> Condition {
    let total_client = entry + installment_amount * Decimal::from(installments);
    let total_profit = total_client - base.total_cost;
    let immediate_profit = (entry - base.total_cost).max(Decimal::ZERO);

    let effective_margin = if total_client.is_zero() {
        Decimal::ZERO
    } else {
        total_profit / total_client * PERCENT
    };

    Condition {
        id: id.into(),
        family,
        label: label.into(),
        detail: detail.into(),
        entry,
        installment_amount,
        installments,
        total_client,
        cost_recovered: base.total_cost,
        total_profit,
        immediate_profit,
        deferred_profit: total_profit - immediate_profit,
        effective_margin,
        correction_amount: total_client - base.base_price,
        cash_flow: build_cash_flow(entry, installment_amount, installments, base.total_cost),
    }
}

/// Reference scenario shared by the generator unit tests.
#[cfg(test)]
pub(crate) fn reference_inputs() -> SimInputs {
    use crate::rates::CorrectionIndex;

    SimInputs {
        operational_cost: dec!(8500),
        profit_margin: dec!(35),
        quantity: 1,
        correction_index: CorrectionIndex::Cdi,
        custom_rate: Decimal::ZERO,
        at_sight_discount: dec!(5),
        leasing_spread: dec!(0.5),
        custom_entry: dec!(6000),
        custom_installments: 8,
        entry_floor_pct: dec!(50),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_figures_reference_scenario() {
        let base = BaseFigures::derive(&reference_inputs(), &RateTable::default());
        assert_eq!(base.total_cost, dec!(8500));
        assert!((base.base_price - dec!(13076.92)).abs() < dec!(0.01));
        assert!((base.gross_profit - dec!(4576.92)).abs() < dec!(0.01));
        assert_eq!(base.rate, dec!(0.87));
    }

    #[test]
    fn test_quantity_scales_total_cost() {
        let mut inputs = reference_inputs();
        inputs.quantity = 3;
        let base = BaseFigures::derive(&inputs, &RateTable::default());
        assert_eq!(base.total_cost, dec!(25500));
    }

    #[test]
    fn test_assemble_decomposition() {
        let base = BaseFigures::derive(&reference_inputs(), &RateTable::default());
        let cond = assemble(
            "probe",
            ConditionFamily::Custom,
            "Probe",
            "",
            dec!(9000),
            dec!(500),
            6,
            &base,
        );
        assert_eq!(cond.total_client, dec!(12000));
        assert_eq!(cond.total_profit, dec!(3500));
        assert_eq!(cond.immediate_profit, dec!(500));
        assert_eq!(cond.deferred_profit, dec!(3000));
        assert_eq!(cond.cash_flow.len(), 7);
        assert_eq!(cond.cash_flow[0].cumulative, dec!(500));
    }
}
