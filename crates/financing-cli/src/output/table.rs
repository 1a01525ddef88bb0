use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{conditions_of, CONDITION_COLUMNS};

/// Format output as a table using the tabled crate.
///
/// A simulation payload renders as one row per condition plus the
/// recommendation summary; anything else falls back to a generic
/// field/value table.
pub fn print_table(value: &Value) {
    if let Some(conditions) = conditions_of(value) {
        print_condition_menu(conditions);
        print_summary(value);
        print_warnings(value);
        return;
    }

    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_flat_object(result);
                print_warnings(value);
            } else {
                print_flat_object(value);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_condition_menu(conditions: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(CONDITION_COLUMNS);

    for cond in conditions {
        let row: Vec<String> = CONDITION_COLUMNS
            .iter()
            .map(|col| {
                cond.get(*col)
                    .map(|v| format_cell(v, col))
                    .unwrap_or_default()
            })
            .collect();
        builder.push_record(row);
    }

    println!("{}", Table::from(builder));
}

fn print_summary(value: &Value) {
    let result = match value.get("result") {
        Some(r) => r,
        None => return,
    };

    if let (Some(total), Some(id)) = (
        result.get("best_client_total"),
        result.get("best_client_condition").and_then(|v| v.as_str()),
    ) {
        println!("\nBest for client:   {} ({})", format_cell(total, ""), id);
    }
    if let (Some(margin), Some(id)) = (
        result.get("best_internal_margin"),
        result.get("best_margin_condition").and_then(|v| v.as_str()),
    ) {
        println!(
            "Best for business: {} ({})",
            format_cell(margin, "effective_margin"),
            id
        );
    }
}

fn print_warnings(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_cell(val, key)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn format_cell(value: &Value, column: &str) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    // Decimal fields arrive as strings; trim margins to 2 places for display
    if column == "effective_margin" {
        if let Some(dot) = raw.find('.') {
            let end = (dot + 3).min(raw.len());
            return format!("{}%", &raw[..end]);
        }
        return format!("{}%", raw);
    }

    raw
}
