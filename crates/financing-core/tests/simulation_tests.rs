use financing_core::annuity::pmt;
use financing_core::rates::{CorrectionIndex, RateTable};
use financing_core::simulation::{generate_conditions, simulate};
use financing_core::types::{ConditionFamily, SimInputs};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Reference scenario: 8500 x 1 at 35% margin, CDI 0.87%/period,
// 5% at-sight discount, 0.5% leasing spread
// ===========================================================================

fn reference_inputs() -> SimInputs {
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

#[test]
fn test_reference_scenario_known_answers() {
    let result = simulate(&reference_inputs(), &RateTable::default()).unwrap();
    let output = &result.result;

    let cash = &output.conditions[0];
    assert_eq!(cash.family, ConditionFamily::Cash);
    assert!((cash.total_client - dec!(12848.08)).abs() < dec!(0.01));

    let staged_6 = output
        .conditions
        .iter()
        .find(|c| c.id == "staged-6")
        .unwrap();
    assert_eq!(staged_6.entry, dec!(8500));
    let expected = pmt(dec!(0.87), 6, dec!(8500) / dec!(0.65) - dec!(8500));
    assert_eq!(staged_6.installment_amount, expected);
    assert!((staged_6.installment_amount - dec!(786.22)).abs() < dec!(0.05));
}

#[test]
fn test_cash_is_best_client_total_with_positive_discount() {
    let result = simulate(&reference_inputs(), &RateTable::default()).unwrap();
    let output = &result.result;

    assert_eq!(output.best_client_condition, "cash");
    assert_eq!(output.best_client_total, output.conditions[0].total_client);

    let min_total = output
        .conditions
        .iter()
        .map(|c| c.total_client)
        .min()
        .unwrap();
    assert_eq!(output.best_client_total, min_total);
}

#[test]
fn test_best_margin_is_the_most_corrected_financed_plan() {
    let result = simulate(&reference_inputs(), &RateTable::default()).unwrap();
    let output = &result.result;

    let max_margin = output
        .conditions
        .iter()
        .map(|c| c.effective_margin)
        .max()
        .unwrap();
    assert_eq!(output.best_internal_margin, max_margin);

    let best = output
        .conditions
        .iter()
        .find(|c| c.id == output.best_margin_condition)
        .unwrap();
    assert!(matches!(
        best.family,
        ConditionFamily::Amortized | ConditionFamily::Leasing
    ));

    // The winner carries the largest correction relative to its total
    let best_ratio = best.correction_amount / best.total_client;
    for cond in output
        .conditions
        .iter()
        .filter(|c| matches!(c.family, ConditionFamily::Amortized | ConditionFamily::Leasing))
    {
        assert!(best_ratio >= cond.correction_amount / cond.total_client);
    }
}

#[test]
fn test_determinism() {
    let inputs = reference_inputs();
    let table = RateTable::default();
    let first = generate_conditions(&inputs, &table);
    let second = generate_conditions(&inputs, &table);
    assert_eq!(first, second);
}

#[test]
fn test_custom_entry_floor_enforced() {
    let mut inputs = reference_inputs();
    inputs.custom_entry = dec!(2000); // below 0.5 * 8500

    let result = simulate(&inputs, &RateTable::default()).unwrap();
    let custom = result.result.conditions.last().unwrap();
    assert_eq!(custom.family, ConditionFamily::Custom);
    assert_eq!(custom.entry, dec!(4250));
}

#[test]
fn test_injected_rate_table_changes_financed_plans_only() {
    let inputs = reference_inputs();
    let cheap = RateTable {
        cdi: dec!(0.10),
        ..RateTable::default()
    };
    let default_run = generate_conditions(&inputs, &RateTable::default());
    let cheap_run = generate_conditions(&inputs, &cheap);

    // Cash condition ignores the periodic rate
    assert_eq!(default_run[0], cheap_run[0]);

    // Financed plans get cheaper at a lower rate
    for (d, c) in default_run[1..].iter().zip(&cheap_run[1..]) {
        assert!(c.total_client < d.total_client, "{} did not drop", d.id);
    }
}

#[test]
fn test_fixed_index_uses_custom_rate() {
    let mut inputs = reference_inputs();
    inputs.correction_index = CorrectionIndex::Fixed;
    inputs.custom_rate = dec!(2);

    let conditions = generate_conditions(&inputs, &RateTable::default());
    let staged_3 = conditions.iter().find(|c| c.id == "staged-3").unwrap();
    let gross_profit = dec!(8500) / dec!(0.65) - dec!(8500);
    assert_eq!(staged_3.installment_amount, pmt(dec!(2), 3, gross_profit));
}

#[test]
fn test_envelope_carries_assumptions() {
    let result = simulate(&reference_inputs(), &RateTable::default()).unwrap();
    assert_eq!(result.methodology, "Commercial Financing Simulation");
    assert_eq!(
        result.assumptions.get("total_cost").and_then(|v| v.as_str()),
        Some("8500")
    );
}
