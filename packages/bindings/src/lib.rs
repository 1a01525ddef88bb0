use napi::Result as NapiResult;
use napi_derive::napi;

use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(value: &str, field: &str) -> NapiResult<Decimal> {
    Decimal::from_str(value).map_err(|e| to_napi_error(format!("{field}: {e}")))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Run the full financing simulation. `inputs_json` is a serialized
/// SimInputs; `rates_json` optionally overrides the default rate table.
#[napi]
pub fn simulate_financing(inputs_json: String, rates_json: Option<String>) -> NapiResult<String> {
    let inputs: financing_core::types::SimInputs =
        serde_json::from_str(&inputs_json).map_err(to_napi_error)?;

    let rates: financing_core::rates::RateTable = match rates_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => financing_core::rates::RateTable::default(),
    };

    let output =
        financing_core::simulation::simulate(&inputs, &rates).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Fixed amortizing installment. Decimal arguments travel as strings to
/// avoid f64 rounding at the boundary.
#[napi]
pub fn annuity_payment(rate_pct: String, periods: u32, present_value: String) -> NapiResult<String> {
    let rate = parse_decimal(&rate_pct, "rate_pct")?;
    let pv = parse_decimal(&present_value, "present_value")?;
    Ok(financing_core::annuity::pmt(rate, periods, pv).to_string())
}

/// Period-indexed cash-flow series for an arbitrary plan shape.
#[napi]
pub fn build_cash_flow(
    entry: String,
    installment: String,
    periods: u32,
    upfront_cost: String,
) -> NapiResult<String> {
    let rows = financing_core::cash_flow::build_cash_flow(
        parse_decimal(&entry, "entry")?,
        parse_decimal(&installment, "installment")?,
        periods,
        parse_decimal(&upfront_cost, "upfront_cost")?,
    );
    serde_json::to_string(&rows).map_err(to_napi_error)
}
