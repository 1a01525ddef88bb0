use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::CorrectionIndex;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages in percent units (35 = 35%, 0.87 = 0.87% per period).
pub type Percent = Decimal;

/// One period of a condition's cash-flow projection, from the business's
/// point of view. Period 0 carries the client's entry net of the full
/// upfront cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    pub period: u32,
    pub net_flow: Money,
    pub cumulative: Money,
}

/// Payment-plan family a condition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionFamily {
    Cash,
    Staged,
    Amortized,
    Leasing,
    Custom,
}

/// A fully-specified payment/financing condition.
///
/// `entry`, `installment_amount`, `installments` and `total_client` are the
/// client-facing fields; everything from `cost_recovered` down is for
/// internal eyes only and is stripped by the presentation layer in client
/// view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub family: ConditionFamily,
    pub label: String,
    pub detail: String,
    /// Amount due at period 0.
    pub entry: Money,
    pub installment_amount: Money,
    pub installments: u32,
    /// Everything the client pays: entry + installment_amount * installments.
    pub total_client: Money,
    pub cost_recovered: Money,
    pub total_profit: Money,
    pub immediate_profit: Money,
    pub deferred_profit: Money,
    /// total_profit / total_client, in percent. The denominator is the
    /// client's total payment for every family, including cash, where the
    /// total is already discounted. Kept as-is for compatibility even though
    /// it makes cross-family comparison imperfect.
    pub effective_margin: Percent,
    /// Interest/indexation embedded in the plan versus the flat base price.
    /// Negative for the cash family (the discount lands below base price).
    pub correction_amount: Money,
    pub cash_flow: Vec<CashFlowRow>,
}

/// Input for one simulation run. Constructed by the caller per request and
/// discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimInputs {
    /// Unit cost of the service; must be >= 0.
    pub operational_cost: Money,
    /// Desired margin so that base_price = total_cost / (1 - margin/100).
    /// Must stay below 100.
    pub profit_margin: Percent,
    /// Multiplies operational_cost to obtain total_cost.
    pub quantity: u32,
    /// Which correction index supplies the periodic rate.
    pub correction_index: CorrectionIndex,
    /// Periodic rate used only when correction_index is Fixed.
    #[serde(default)]
    pub custom_rate: Percent,
    /// Fraction of gross profit (not of total price) forgiven for cash payment.
    #[serde(default)]
    pub at_sight_discount: Percent,
    /// Added on top of the base periodic rate for the leasing family.
    #[serde(default)]
    pub leasing_spread: Percent,
    /// Requested entry for the custom plan, before the floor is applied.
    pub custom_entry: Money,
    /// Period count for the custom plan; must be >= 1.
    pub custom_installments: u32,
    /// Minimum custom-plan entry as a percentage of total cost.
    #[serde(default = "default_entry_floor")]
    pub entry_floor_pct: Percent,
}

fn default_entry_floor() -> Percent {
    Decimal::new(50, 0)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
