//! Staged conditions: cost recovered through the entry, profit deferred.

use crate::annuity::pmt;
use crate::types::{Condition, ConditionFamily};

use super::{assemble, BaseFigures};

/// Fixed menu of deferral terms offered by the staged family.
pub const STAGED_TERMS: [u32; 4] = [3, 6, 10, 12];

/// One condition per term. The entry equals exactly the total cost, so the
/// business is whole at period 0; the installments amortize the gross profit
/// at the periodic rate, so they *are* the profit, amplified by interest.
pub fn generate(base: &BaseFigures) -> Vec<Condition> {
    STAGED_TERMS
        .iter()
        .map(|&periods| {
            let installment = pmt(base.rate, periods, base.gross_profit);
            assemble(
                format!("staged-{periods}"),
                ConditionFamily::Staged,
                format!("Cost entry + {periods}x profit"),
                format!(
                    "Entry covering the full cost, profit paid over {periods} corrected installments"
                ),
                base.total_cost,
                installment,
                periods,
                base,
            )
        })
        .collect()
}
