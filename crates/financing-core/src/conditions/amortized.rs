//! Fully amortized "price table" conditions: no entry, the whole base price
//! financed as fixed installments.

use rust_decimal::Decimal;

use crate::annuity::pmt;
use crate::types::{Condition, ConditionFamily};

use super::{assemble, BaseFigures};

/// Fixed menu of terms offered by the price-table family.
pub const PRICE_TABLE_TERMS: [u32; 5] = [6, 10, 12, 18, 24];

/// One condition per term. The entire base price is amortized at the
/// periodic rate; profit is whatever the corrected total exceeds the cost.
pub fn generate(base: &BaseFigures) -> Vec<Condition> {
    PRICE_TABLE_TERMS
        .iter()
        .map(|&periods| {
            let installment = pmt(base.rate, periods, base.base_price);
            assemble(
                format!("amortized-{periods}"),
                ConditionFamily::Amortized,
                format!("{periods}x price table"),
                format!("No entry, full price amortized over {periods} fixed installments"),
                Decimal::ZERO,
                installment,
                periods,
                base,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::reference_inputs;
    use crate::rates::RateTable;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_entry_and_all_profit_deferred() {
        let base = BaseFigures::derive(&reference_inputs(), &RateTable::default());
        let conditions = generate(&base);
        assert_eq!(conditions.len(), PRICE_TABLE_TERMS.len());
        for cond in &conditions {
            assert_eq!(cond.entry, Decimal::ZERO);
            assert_eq!(cond.immediate_profit, Decimal::ZERO);
            assert_eq!(cond.deferred_profit, cond.total_profit);
            // Financed total always exceeds the flat base price at CDI > 0
            assert!(cond.correction_amount > Decimal::ZERO);
        }
    }

    #[test]
    fn test_business_is_negative_until_installments_land() {
        let base = BaseFigures::derive(&reference_inputs(), &RateTable::default());
        let conditions = generate(&base);
        let six = &conditions[0];

        assert_eq!(six.cash_flow[0].cumulative, -base.total_cost);
        let last = six.cash_flow.last().unwrap();
        assert!((last.cumulative - six.total_profit).abs() < dec!(0.0001));
    }

    #[test]
    fn test_installment_shrinks_with_term() {
        let base = BaseFigures::derive(&reference_inputs(), &RateTable::default());
        let conditions = generate(&base);
        for pair in conditions.windows(2) {
            assert!(pair[1].installment_amount < pair[0].installment_amount);
        }
    }
}
