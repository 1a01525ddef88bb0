//! Leasing conditions: the price-table shape priced as a recurring-fee
//! product, with a spread over the base periodic rate.

use rust_decimal::Decimal;

use crate::annuity::pmt;
use crate::types::{Condition, ConditionFamily, SimInputs};

use super::{assemble, BaseFigures};

/// Fixed menu of terms offered by the leasing family.
pub const LEASING_TERMS: [u32; 3] = [12, 24, 36];

/// One condition per term, amortizing the full base price at
/// `rate + leasing_spread`.
pub fn generate(inputs: &SimInputs, base: &BaseFigures) -> Vec<Condition> {
    let leasing_rate = base.rate + inputs.leasing_spread;

    LEASING_TERMS
        .iter()
        .map(|&periods| {
            let installment = pmt(leasing_rate, periods, base.base_price);
            assemble(
                format!("leasing-{periods}"),
                ConditionFamily::Leasing,
                format!("{periods}x leasing"),
                format!(
                    "Recurring fee over {periods} periods at the corrected rate plus spread"
                ),
                Decimal::ZERO,
                installment,
                periods,
                base,
            )
        })
        .collect()
}
