//! Custom condition: caller-tunable entry and term, subject to the
//! minimum-entry business rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::annuity::pmt;
use crate::types::{Condition, ConditionFamily, Money, SimInputs};

use super::{assemble, BaseFigures};

const PERCENT: Decimal = dec!(100);

/// Entry the custom plan actually uses: the requested entry floored at
/// `entry_floor_pct` of total cost. The business never accepts an entry
/// below that share of cost, regardless of what was requested.
pub fn floored_entry(inputs: &SimInputs, base: &BaseFigures) -> Money {
    let floor = base.total_cost * inputs.entry_floor_pct / PERCENT;
    inputs.custom_entry.max(floor)
}

/// The remainder of the base price after the floored entry is amortized over
/// `custom_installments`. An entry at or above the base price leaves nothing
/// to finance and the installment is zero.
pub fn generate(inputs: &SimInputs, base: &BaseFigures) -> Condition {
    let entry = floored_entry(inputs, base);
    let remainder = base.base_price - entry;
    let periods = inputs.custom_installments;

    let installment = if remainder <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        pmt(base.rate, periods, remainder)
    };

    assemble(
        "custom",
        ConditionFamily::Custom,
        format!("Custom entry + {periods}x"),
        format!(
            "Negotiated entry with the balance over {periods} corrected installments"
        ),
        entry,
        installment,
        periods,
        base,
    )
}
