//! Simulation orchestrator: runs every condition generator against one set
//! of inputs and derives the recommendation aggregates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::conditions::{self, BaseFigures};
use crate::error::FinancingError;
use crate::rates::RateTable;
use crate::types::{with_metadata, ComputationOutput, Condition, Money, Percent, SimInputs};
use crate::FinancingResult;

/// Margin above which prices explode toward the division limit; flagged as
/// a warning, matching the clamp the consuming UI applies.
const MARGIN_WARNING_THRESHOLD: Decimal = dec!(95);

/// Full simulation result: the ordered condition menu plus the aggregates
/// the consumer uses to highlight recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub conditions: Vec<Condition>,
    /// Cheapest plan for the client.
    pub best_client_total: Money,
    pub best_client_condition: String,
    /// Most profitable plan for the business.
    pub best_internal_margin: Percent,
    pub best_margin_condition: String,
}

/// Run all five generators in the fixed contract order: cash, staged,
/// amortized, leasing, custom. Pure and deterministic: identical inputs
/// always produce identical output, with no validation, clock, or I/O.
/// Consumers may display conditions positionally, so the order is part of
/// the contract.
pub fn generate_conditions(inputs: &SimInputs, rates: &RateTable) -> Vec<Condition> {
    let base = BaseFigures::derive(inputs, rates);

    let mut out = Vec::with_capacity(
        2 + conditions::staged::STAGED_TERMS.len()
            + conditions::amortized::PRICE_TABLE_TERMS.len()
            + conditions::leasing::LEASING_TERMS.len(),
    );
    out.push(conditions::cash::generate(inputs, &base));
    out.extend(conditions::staged::generate(&base));
    out.extend(conditions::amortized::generate(&base));
    out.extend(conditions::leasing::generate(inputs, &base));
    out.push(conditions::custom::generate(inputs, &base));
    out
}

/// O(n) scans over the generated list; the first condition wins ties so the
/// selection stays deterministic. Recomputed on every call.
fn best_aggregates(conditions: &[Condition]) -> (Money, String, Percent, String) {
    let mut best_total = conditions[0].total_client;
    let mut best_total_id = conditions[0].id.clone();
    let mut best_margin = conditions[0].effective_margin;
    let mut best_margin_id = conditions[0].id.clone();

    for cond in &conditions[1..] {
        if cond.total_client < best_total {
            best_total = cond.total_client;
            best_total_id = cond.id.clone();
        }
        if cond.effective_margin > best_margin {
            best_margin = cond.effective_margin;
            best_margin_id = cond.id.clone();
        }
    }

    (best_total, best_total_id, best_margin, best_margin_id)
}

fn validate(inputs: &SimInputs) -> FinancingResult<()> {
    if inputs.operational_cost < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "operational_cost".into(),
            reason: "Unit cost must be non-negative".into(),
        });
    }
    if inputs.quantity == 0 {
        return Err(FinancingError::InvalidInput {
            field: "quantity".into(),
            reason: "Quantity must be at least 1".into(),
        });
    }
    if inputs.profit_margin >= dec!(100) {
        return Err(FinancingError::InvalidInput {
            field: "profit_margin".into(),
            reason: "Margin must stay below 100%".into(),
        });
    }
    if inputs.custom_installments == 0 {
        return Err(FinancingError::InvalidInput {
            field: "custom_installments".into(),
            reason: "Custom plan needs at least 1 installment".into(),
        });
    }
    if inputs.custom_entry < Decimal::ZERO {
        return Err(FinancingError::InvalidInput {
            field: "custom_entry".into(),
            reason: "Custom entry must be non-negative".into(),
        });
    }
    if inputs.entry_floor_pct < Decimal::ZERO || inputs.entry_floor_pct > dec!(100) {
        return Err(FinancingError::InvalidInput {
            field: "entry_floor_pct".into(),
            reason: "Entry floor must be between 0% and 100% of cost".into(),
        });
    }
    Ok(())
}

/// Public boundary: validate the inputs, run the pure engine against the
/// injected rate table, and wrap the result in the standard envelope.
pub fn simulate(
    inputs: &SimInputs,
    rates: &RateTable,
) -> FinancingResult<ComputationOutput<SimulationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(inputs)?;

    if inputs.profit_margin > MARGIN_WARNING_THRESHOLD {
        warnings.push(format!(
            "Margin of {}% is above {}%; prices grow without bound as margin approaches 100%",
            inputs.profit_margin, MARGIN_WARNING_THRESHOLD
        ));
    }

    let base = BaseFigures::derive(inputs, rates);
    let floored = conditions::custom::floored_entry(inputs, &base);
    if floored > inputs.custom_entry {
        warnings.push(format!(
            "Custom entry of {} raised to {} ({}% of total cost)",
            inputs.custom_entry, floored, inputs.entry_floor_pct
        ));
    }

    let conditions = generate_conditions(inputs, rates);
    let (best_client_total, best_client_condition, best_internal_margin, best_margin_condition) =
        best_aggregates(&conditions);

    let output = SimulationOutput {
        conditions,
        best_client_total,
        best_client_condition,
        best_internal_margin,
        best_margin_condition,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Commercial Financing Simulation",
        &serde_json::json!({
            "total_cost": base.total_cost.to_string(),
            "base_price": base.base_price.to_string(),
            "gross_profit": base.gross_profit.to_string(),
            "periodic_rate_pct": base.rate.to_string(),
            "correction_index": inputs.correction_index,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::reference_inputs;
    use crate::types::ConditionFamily;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generator_order_is_fixed() {
        let conditions = generate_conditions(&reference_inputs(), &RateTable::default());
        assert_eq!(conditions.len(), 14);

        let families: Vec<ConditionFamily> = conditions.iter().map(|c| c.family).collect();
        let expected = [ConditionFamily::Cash]
            .into_iter()
            .chain(std::iter::repeat(ConditionFamily::Staged).take(4))
            .chain(std::iter::repeat(ConditionFamily::Amortized).take(5))
            .chain(std::iter::repeat(ConditionFamily::Leasing).take(3))
            .chain(std::iter::once(ConditionFamily::Custom))
            .collect::<Vec<_>>();
        assert_eq!(families, expected);
    }

    #[test]
    fn test_validation_rejects_margin_at_100() {
        let mut inputs = reference_inputs();
        inputs.profit_margin = dec!(100);
        assert!(simulate(&inputs, &RateTable::default()).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_quantity() {
        let mut inputs = reference_inputs();
        inputs.quantity = 0;
        assert!(simulate(&inputs, &RateTable::default()).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_custom_installments() {
        let mut inputs = reference_inputs();
        inputs.custom_installments = 0;
        assert!(simulate(&inputs, &RateTable::default()).is_err());
    }

    #[test]
    fn test_floor_warning_emitted() {
        let mut inputs = reference_inputs();
        inputs.custom_entry = dec!(100);
        let result = simulate(&inputs, &RateTable::default()).unwrap();
        assert!(result.warnings.iter().any(|w| w.contains("raised")));
    }

    #[test]
    fn test_high_margin_warning() {
        let mut inputs = reference_inputs();
        inputs.profit_margin = dec!(97);
        let result = simulate(&inputs, &RateTable::default()).unwrap();
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_best_aggregates_tie_break_takes_first() {
        let conditions = generate_conditions(&reference_inputs(), &RateTable::default());
        let (_, best_id, _, _) = best_aggregates(&conditions);
        // Cash is structurally cheapest with a positive discount, and comes first
        assert_eq!(best_id, "cash");
    }
}
