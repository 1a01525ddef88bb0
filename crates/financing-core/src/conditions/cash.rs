//! Cash condition: the whole price at period 0, with part of the gross
//! profit forgiven as an at-sight discount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Condition, ConditionFamily, SimInputs};

use super::{assemble, BaseFigures};

const PERCENT: Decimal = dec!(100);

/// The only condition with zero installments. The client pays
/// `total_cost + gross_profit * (1 - at_sight_discount/100)` at period 0;
/// the discount comes out of the profit, never out of the recovered cost.
pub fn generate(inputs: &SimInputs, base: &BaseFigures) -> Condition {
    let kept_profit = base.gross_profit * (Decimal::ONE - inputs.at_sight_discount / PERCENT);
    let entry = base.total_cost + kept_profit;

    assemble(
        "cash",
        ConditionFamily::Cash,
        "Cash payment",
        format!(
            "Single payment at closing with a {}% discount on gross profit",
            inputs.at_sight_discount
        ),
        entry,
        Decimal::ZERO,
        0,
        base,
    )
}
