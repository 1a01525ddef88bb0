pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Columns shared by the table and CSV renderings of a condition menu.
pub(crate) const CONDITION_COLUMNS: [&str; 7] = [
    "id",
    "label",
    "entry",
    "installments",
    "installment_amount",
    "total_client",
    "effective_margin",
];

/// Extract the conditions array when the payload is a simulation envelope.
pub(crate) fn conditions_of(value: &Value) -> Option<&Vec<Value>> {
    value
        .get("result")?
        .get("conditions")?
        .as_array()
}
